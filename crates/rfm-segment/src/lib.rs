//! Segmentation of composite RFM scores
//!
//! Two independent classifications of every scored customer:
//!
//! - **Value segment** - Low/Mid/High tertile of the composite score, by
//!   stable rank (equal population, see [`value_segments`])
//! - **Segment label** - a named segment from a fixed, priority-ordered table
//!   of composite-score bands (see [`LABEL_TABLE`])
//!
//! | Composite score | Label |
//! |---|---|
//! | 9 and above | Champions |
//! | 6 to 8 | Potential Loyalists |
//! | 5 | At Risk Customers |
//! | 4 | Can't Lose |
//! | 3 | Lost |
//! | anything else | Unclassified |
//!
//! Scores below 3 cannot be produced by the five-bin scorer, so with integer
//! composite scores the table is exhaustive and `Unclassified` is a guard only.
//!
//! # Example
//!
//! ```rust
//! use rfm_core::SegmentLabel;
//! use rfm_segment::label_for_score;
//!
//! assert_eq!(label_for_score(15), SegmentLabel::Champions);
//! assert_eq!(label_for_score(4), SegmentLabel::CantLose);
//! ```

pub mod labels;
pub mod segmenter;
pub mod value;

pub use labels::{label_for_score, LABEL_TABLE};
pub use segmenter::segment_customers;
pub use value::{value_segments, VALUE_TIERS};

pub use rfm_core::{Error, Result};
