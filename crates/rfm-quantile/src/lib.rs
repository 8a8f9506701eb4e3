//! Equal-population binning and order-statistic quantiles
//!
//! Two rank-based tools used by the segmentation and reporting stages:
//!
//! - **Equal-population binning**: split a population into groups of equal
//!   count by stable rank (value tiers are tertiles of the composite score)
//! - **Quantiles**: linear-interpolation quantiles and five-number summaries
//!   for describing score distributions
//!
//! # Example
//!
//! ```rust
//! use rfm_quantile::{equal_population_bins, FiveNumberSummary};
//!
//! let rfm_scores = [7u8, 7, 15, 9, 12, 4];
//! let tiers = equal_population_bins(&rfm_scores, 3).unwrap();
//! assert_eq!(tiers, vec![0, 1, 2, 1, 2, 0]);
//!
//! let summary = FiveNumberSummary::from_sample(&rfm_scores).unwrap();
//! assert_eq!(summary.median, 8.0);
//! ```

pub mod binning;
pub mod estimators;

// Re-export main types
pub use binning::{equal_population_bins, EqualPopulationBinner};
pub use estimators::{quantile_sorted, quantiles, FiveNumberSummary};

pub use rfm_core::{Error, Result};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{equal_population_bins, EqualPopulationBinner, FiveNumberSummary, Result};
}
