//! The histogram builder seam

use crate::types::Histogram;
use rfm_core::{Numeric, Result};

/// Builds a [`Histogram`] from a metric sample
pub trait HistogramBuilder<T: Numeric = f64> {
    /// Build from an unsorted sample
    fn build(&self, sample: &[T]) -> Result<Histogram>;

    /// Build from a sample already in ascending order
    ///
    /// Builders that sort internally can skip that step here.
    fn build_sorted(&self, sorted_sample: &[T]) -> Result<Histogram> {
        self.build(sorted_sample)
    }

    /// Bin count the builder aims for, when it has a fixed one
    fn target_bins(&self) -> Option<usize> {
        None
    }
}
