//! Aggregate reporting over segmented RFM customers
//!
//! Pure, read-only summaries of a labeled population:
//!
//! - customer counts per value segment, per label and per (segment, label) pair
//! - mean Recency/Frequency/Monetary score per label
//! - Pearson correlation of the three scores within a focus segment
//! - five-number summaries of the scores within the focus segment
//!
//! Small populations never fail; statistics that are undefined for them
//! (correlation with fewer than two members, zero variance) come out as NaN.
//!
//! # Example
//!
//! ```rust
//! use rfm_report::pearson;
//!
//! let r = pearson(&[1.0, 2.0, 3.0], &[2.0, 4.0, 7.0]);
//! assert!(r > 0.9);
//! assert!(pearson(&[1.0], &[1.0]).is_nan());
//! ```

pub mod correlation;
pub mod counts;
pub mod report;
pub mod summary;

pub use correlation::{pearson, CorrelationMatrix};
pub use counts::{
    label_counts, segment_pair_counts, value_segment_counts, LabelCount, SegmentCount,
    SegmentPairCount,
};
pub use report::{build_report, ReportBuilder, RfmReport};
pub use summary::{mean_scores_by_label, score_distributions, LabelScoreMeans, ScoreDistribution};

pub use rfm_core::{Error, Result};
