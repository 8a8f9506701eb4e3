//! Order-statistic quantile estimation
//!
//! Uses linear interpolation between closest ranks (the "type 7" definition),
//! the same definition box-plot renderers use for their quartiles.

use ordered_float::OrderedFloat;
use rfm_core::{Error, Numeric, Result};
use serde::Serialize;

/// Estimate the `p`-quantile of already sorted data
///
/// Returns NaN for an empty sample.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::InvalidParameter(format!("Quantile {p} must be in [0, 1]")));
    }
    if sorted.is_empty() {
        return Ok(f64::NAN);
    }

    let h = (sorted.len() - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    let frac = h - lo as f64;
    Ok(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Estimate several quantiles of an unsorted sample
pub fn quantiles<T: Numeric>(sample: &[T], ps: &[f64]) -> Result<Vec<f64>> {
    let sorted = sorted_floats(sample)?;
    ps.iter().map(|&p| quantile_sorted(&sorted, p)).collect()
}

fn sorted_floats<T: Numeric>(sample: &[T]) -> Result<Vec<f64>> {
    let mut values: Vec<OrderedFloat<f64>> =
        sample.iter().map(|v| OrderedFloat(v.to_float())).collect();
    if values.iter().any(|v| !v.0.is_finite()) {
        return Err(Error::non_finite("quantile sample"));
    }
    values.sort_unstable();
    Ok(values.into_iter().map(|v| v.0).collect())
}

/// Minimum, quartiles and maximum of a sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl FiveNumberSummary {
    /// Summary with every entry NaN
    pub fn undefined() -> Self {
        Self {
            min: f64::NAN,
            q1: f64::NAN,
            median: f64::NAN,
            q3: f64::NAN,
            max: f64::NAN,
        }
    }

    /// Summarise a sample; an empty sample gives [`FiveNumberSummary::undefined`]
    pub fn from_sample<T: Numeric>(sample: &[T]) -> Result<Self> {
        let sorted = sorted_floats(sample)?;
        if sorted.is_empty() {
            return Ok(Self::undefined());
        }

        Ok(Self {
            min: sorted[0],
            q1: quantile_sorted(&sorted, 0.25)?,
            median: quantile_sorted(&sorted, 0.5)?,
            q3: quantile_sorted(&sorted, 0.75)?,
            max: sorted[sorted.len() - 1],
        })
    }

    /// Interquartile range
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}
