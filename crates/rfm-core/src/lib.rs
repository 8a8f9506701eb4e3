//! Core types and metric aggregation for RFM analysis
//!
//! This crate holds everything the other rfm-stats crates share:
//!
//! 1. **Error taxonomy** - [`Error::MalformedRecord`], [`Error::InsufficientPopulation`], ...
//! 2. **Data model** - transaction rows, customer metrics, scores and segments
//! 3. **Metric Aggregator** - the first pipeline stage, turning transaction
//!    rows into one [`CustomerMetrics`] per customer
//!
//! # Example
//!
//! ```rust
//! use rfm_core::{aggregate_metrics, parse_purchase_date, TransactionRecord};
//!
//! let now = parse_purchase_date("2023-06-30").unwrap();
//! let records = vec![
//!     TransactionRecord::parse("8814", "890075", "2023-06-29", "943.31").unwrap(),
//!     TransactionRecord::parse("8814", "176819", "2023-06-01", "463.70").unwrap(),
//!     TransactionRecord::parse("2188", "340062", "2023-05-31", "80.28").unwrap(),
//! ];
//!
//! let metrics = aggregate_metrics(&records, now).unwrap();
//! assert_eq!(metrics.len(), 2);
//! assert_eq!(metrics[1].customer_id.as_str(), "8814");
//! assert_eq!(metrics[1].recency, 1);
//! assert_eq!(metrics[1].frequency, 2);
//! ```

pub mod aggregate;
pub mod error;
pub mod numeric;
pub mod record;
pub mod types;

// Re-export core types
pub use aggregate::{aggregate_metrics, MetricAggregator};
pub use error::{Error, Result};
pub use numeric::Numeric;
pub use record::parse_purchase_date;
pub use types::{
    CustomerId, CustomerMetrics, CustomerScores, Metric, OrderId, SegmentLabel,
    SegmentedCustomer, TransactionRecord, ValueSegment, MAX_SCORE,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CustomerId, CustomerMetrics, CustomerScores, Error, Metric, MetricAggregator, Numeric,
        Result, SegmentLabel, SegmentedCustomer, TransactionRecord, ValueSegment,
    };
}
