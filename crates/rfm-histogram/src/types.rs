//! Equal-width histogram types

use std::fmt;

/// One histogram bin over `[left, right)`
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// Left edge of the bin (inclusive)
    pub left: f64,
    /// Right edge of the bin (exclusive, except for the last bin)
    pub right: f64,
    /// Number of values in this bin
    pub count: usize,
    /// Density (count / (total_count * bin_width))
    pub density: f64,
}

impl HistogramBin {
    /// Create a new histogram bin
    pub fn new(left: f64, right: f64, count: usize, total_count: usize) -> Self {
        let mut bin = Self {
            left,
            right,
            count,
            density: 0.0,
        };
        bin.update_density(total_count);
        bin
    }

    pub(crate) fn update_density(&mut self, total_count: usize) {
        let width = self.width();
        self.density = if width > 0.0 && total_count > 0 {
            self.count as f64 / (total_count as f64 * width)
        } else {
            0.0
        };
    }

    /// Bin width; zero for the single bin of a degenerate sample
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}): count={}, density={:.3}",
            self.left, self.right, self.count, self.density
        )
    }
}

/// Bins of a metric sampled over the whole customer population
///
/// When every sample shares one value the histogram is *degenerate*: it holds
/// a single zero-width bin and [`Histogram::is_degenerate`] returns true.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// The bins that make up the histogram
    bins: Vec<HistogramBin>,
    /// Total number of data points
    total_count: usize,
    /// Minimum value in the data
    min: f64,
    /// Maximum value in the data
    max: f64,
}

impl Histogram {
    /// Create a new histogram
    pub fn new(bins: Vec<HistogramBin>, total_count: usize, min: f64, max: f64) -> Self {
        Self {
            bins,
            total_count,
            min,
            max,
        }
    }

    /// Get the bins
    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Check if the histogram is empty
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Check whether all samples share a single value
    pub fn is_degenerate(&self) -> bool {
        self.total_count > 0 && self.max <= self.min
    }

    /// Get the total count of data points
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Get the minimum value
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Get the maximum value
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Find which bin contains a given value
    ///
    /// Bins are left-closed and right-open, except the last bin which also
    /// includes the maximum. Values outside `[min, max]` (and NaN) have no bin.
    pub fn find_bin(&self, value: f64) -> Option<usize> {
        if self.bins.is_empty() || !(value >= self.min && value <= self.max) {
            return None;
        }

        let idx = self.bins.partition_point(|bin| bin.right <= value);
        Some(idx.min(self.bins.len() - 1))
    }

    /// Customers per bin
    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.count).collect()
    }

    /// Bin edges, `len() + 1` of them
    pub fn edges(&self) -> Vec<f64> {
        let mut edges: Vec<f64> = self.bins.iter().map(|bin| bin.left).collect();
        if let Some(last) = self.bins.last() {
            edges.push(last.right);
        }
        edges
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Histogram({} bins, n={}, range=[{:.3}, {:.3}])",
            self.len(),
            self.total_count,
            self.min,
            self.max
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_bin() {
        let bin = HistogramBin::new(0.0, 1.0, 5, 10);
        assert_eq!(bin.width(), 1.0);
        assert_eq!(bin.density, 0.5); // 5 / (10 * 1.0)
    }

    #[test]
    fn test_histogram() {
        let bins = vec![
            HistogramBin::new(0.0, 1.0, 2, 10),
            HistogramBin::new(1.0, 2.0, 5, 10),
            HistogramBin::new(2.0, 3.0, 3, 10),
        ];
        let hist = Histogram::new(bins, 10, 0.0, 3.0);

        assert_eq!(hist.len(), 3);
        assert_eq!(hist.total_count(), 10);
        assert!(!hist.is_degenerate());
        assert_eq!(hist.find_bin(0.0), Some(0));
        assert_eq!(hist.find_bin(1.0), Some(1)); // Left edge is inclusive
        assert_eq!(hist.find_bin(1.5), Some(1));
        assert_eq!(hist.find_bin(3.0), Some(2)); // Last bin includes right edge
        assert_eq!(hist.find_bin(3.5), None);
        assert_eq!(hist.find_bin(-0.1), None);
        assert_eq!(hist.find_bin(f64::NAN), None);
        assert_eq!(hist.counts(), vec![2, 5, 3]);
        assert_eq!(hist.edges(), vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_degenerate_histogram() {
        let hist = Histogram::new(vec![HistogramBin::new(4.0, 4.0, 3, 3)], 3, 4.0, 4.0);
        assert!(hist.is_degenerate());
        assert_eq!(hist.bins()[0].density, 0.0);
        assert_eq!(hist.find_bin(4.0), Some(0));
    }
}
