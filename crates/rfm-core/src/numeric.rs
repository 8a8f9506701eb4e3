//! Numeric trait for values that can be binned
//!
//! Binning and quantile code is written once against [`Numeric`] so that raw
//! integer metrics (days, order counts), float amounts and `u8` scores all go
//! through the same code path without manual casting at call sites.

use num_traits::ToPrimitive;
use std::fmt::Debug;

/// A value that can be placed on the real line
pub trait Numeric: Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// Convert to `f64`, yielding NaN when the value is not representable
    fn to_float(self) -> f64;
}

impl<T> Numeric for T
where
    T: ToPrimitive + Copy + PartialOrd + Debug + Send + Sync + 'static,
{
    fn to_float(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}
