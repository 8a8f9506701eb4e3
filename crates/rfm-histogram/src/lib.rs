//! Equal-width histogram construction and ordinal score binning
//!
//! This crate implements the Score Binner stage of the RFM pipeline on top of
//! a small equal-width histogram toolkit.
//!
//! # Key Features
//!
//! - **Equal-width bins**: `n` bins of identical width spanning `[min, max]`,
//!   left-closed and right-open, with the maximum folded into the last bin
//! - **Range-based**: the number of bins never depends on the sample size, so
//!   two customers still produce five bins
//! - **Degenerate metrics**: a sample with a single distinct value yields a
//!   single zero-width bin and every customer receives the midpoint score
//! - **Directional scores**: Recency scores descend, Frequency and Monetary ascend
//!
//! # Examples
//!
//! ## Basic Usage with Fixed-Width Bins
//!
//! ```rust
//! use rfm_histogram::{FixedWidthBuilder, HistogramBuilder};
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let builder = FixedWidthBuilder::new(5).unwrap(); // 5 bins
//! let histogram = builder.build(data.as_slice()).unwrap();
//!
//! println!("Histogram with {} bins", histogram.len());
//! for bin in histogram.bins() {
//!     println!("  [{:.1}, {:.1}): count={}, density={:.3}",
//!              bin.left, bin.right, bin.count, bin.density);
//! }
//! ```
//!
//! ## Scoring Customers
//!
//! ```rust
//! use rfm_core::CustomerMetrics;
//! use rfm_histogram::ScoreBinner;
//!
//! let metrics = vec![
//!     CustomerMetrics { customer_id: "A".into(), recency: 1, frequency: 1, monetary: 100.0 },
//!     CustomerMetrics { customer_id: "B".into(), recency: 30, frequency: 5, monetary: 500.0 },
//!     CustomerMetrics { customer_id: "C".into(), recency: 2, frequency: 10, monetary: 1000.0 },
//! ];
//!
//! let scores = ScoreBinner::default().score_customers(&metrics).unwrap();
//! assert_eq!(scores[2].rfm_score(), 15);
//! ```

pub mod builders;
pub mod scoring;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use builders::FixedWidthBuilder;
pub use scoring::{score_customers, ScoreBinner, ScoreDirection, DEFAULT_SCORE_BINS, MAX_SCORE_BINS};
pub use traits::HistogramBuilder;
pub use types::{Histogram, HistogramBin};

// Convenience functions
/// Create a histogram with a fixed number of equal-width bins
pub fn fixed_histogram(data: &[f64], num_bins: usize) -> crate::Result<Histogram> {
    FixedWidthBuilder::new(num_bins)?.build(data)
}

pub use rfm_core::{Error, Result};
