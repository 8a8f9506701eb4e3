//! Recency-Frequency-Monetary customer scoring and segmentation
//!
//! A batch pipeline over an immutable snapshot of purchase transactions:
//!
//! 1. **Metric Aggregator** ([`rfm_core`]) - per-customer Recency, Frequency
//!    and MonetaryValue against one reference time
//! 2. **Score Binner** ([`rfm_histogram`]) - equal-width 1-5 scores per metric
//! 3. **Segmenter** ([`rfm_segment`]) - equal-population value tiers and named
//!    segment labels
//! 4. **Aggregate Reporter** ([`rfm_report`]) - counts, mean scores,
//!    correlation and distribution tables
//!
//! # Example
//!
//! ```rust
//! use rfm_stats::prelude::*;
//! use rfm_stats::RfmPipeline;
//!
//! let now = parse_purchase_date("2023-06-30").unwrap();
//! let records = vec![
//!     TransactionRecord::parse("A", "1", "2023-06-29", "100").unwrap(),
//!     TransactionRecord::parse("B", "2", "2023-05-31", "500").unwrap(),
//!     TransactionRecord::parse("C", "3", "2023-06-28", "1000").unwrap(),
//! ];
//!
//! let output = RfmPipeline::default().run(&records, now).unwrap();
//! assert_eq!(output.customers.len(), 3);
//! assert_eq!(output.customers[2].value_segment, ValueSegment::High);
//! ```

pub mod config;
pub mod ingest;
pub mod pipeline;

pub use config::PipelineConfig;
pub use ingest::{read_csv, read_csv_from};
pub use pipeline::{RfmOutput, RfmPipeline};

// Re-export workspace crates
pub use rfm_core;
pub use rfm_histogram;
#[cfg(feature = "polars")]
pub use rfm_polars;
pub use rfm_quantile;
pub use rfm_report;
pub use rfm_segment;

pub use rfm_core::{Error, Result};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{PipelineConfig, RfmOutput, RfmPipeline};
    pub use rfm_core::{
        parse_purchase_date, CustomerId, CustomerMetrics, CustomerScores, Error, Metric, Result,
        SegmentLabel, SegmentedCustomer, TransactionRecord, ValueSegment,
    };
    pub use rfm_report::RfmReport;
}
