//! Equal-width histogram construction

use crate::traits::HistogramBuilder;
use crate::types::{Histogram, HistogramBin};
use rfm_core::{Error, Numeric, Result};

/// Fixed-width histogram builder
///
/// Creates a histogram with a specified number of equal-width bins spanning
/// `[min, max]` of the sample. Bins are left-closed and right-open; the last
/// bin also includes the maximum. The bin count depends only on the value
/// range, never on how many samples there are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidthBuilder {
    pub(crate) num_bins: usize,
}

impl FixedWidthBuilder {
    /// Create a new fixed-width histogram builder
    pub fn new(num_bins: usize) -> Result<Self> {
        if num_bins == 0 {
            return Err(Error::zero_bins("equal-width binning"));
        }
        Ok(Self { num_bins })
    }

    /// Number of bins produced for a non-degenerate sample
    pub fn num_bins(&self) -> usize {
        self.num_bins
    }
}

impl<T: Numeric> HistogramBuilder<T> for FixedWidthBuilder {
    fn build(&self, sample: &[T]) -> Result<Histogram> {
        let mut sorted: Vec<f64> = sample.iter().map(|v| v.to_float()).collect();
        if sorted.iter().any(|v| !v.is_finite()) {
            return Err(Error::non_finite("histogram sample"));
        }
        sorted.sort_by(f64::total_cmp);
        <Self as HistogramBuilder<f64>>::build_sorted(self, &sorted)
    }

    fn build_sorted(&self, sorted_sample: &[T]) -> Result<Histogram> {
        let (first, last) = match (sorted_sample.first(), sorted_sample.last()) {
            (Some(first), Some(last)) => (first.to_float(), last.to_float()),
            _ => return Ok(Histogram::new(vec![], 0, 0.0, 0.0)),
        };
        if !first.is_finite() || !last.is_finite() {
            return Err(Error::non_finite("histogram sample"));
        }

        // O(1) min/max from sorted data
        let (min, max) = (first, last);
        let total = sorted_sample.len();

        if max <= min {
            // All values are the same
            let bin = HistogramBin::new(min, max, total, total);
            return Ok(Histogram::new(vec![bin], total, min, max));
        }

        let width = (max - min) / self.num_bins as f64;
        let mut bins: Vec<HistogramBin> = (0..self.num_bins)
            .map(|i| {
                let left = min + i as f64 * width;
                let right = if i == self.num_bins - 1 {
                    max // Ensure last bin includes max
                } else {
                    min + (i + 1) as f64 * width
                };
                HistogramBin::new(left, right, 0, total)
            })
            .collect();

        // Count values in each bin - single pass through sorted data
        let mut current_bin = 0;
        for value in sorted_sample {
            let value = value.to_float();
            while current_bin < self.num_bins - 1 && value >= bins[current_bin].right {
                current_bin += 1;
            }
            bins[current_bin].count += 1;
        }

        for bin in &mut bins {
            bin.update_density(total);
        }

        Ok(Histogram::new(bins, total, min, max))
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.num_bins)
    }
}
