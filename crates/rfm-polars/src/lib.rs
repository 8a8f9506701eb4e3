//! Polars integration for RFM customer segmentation
//!
//! Reads transaction rows out of a DataFrame through the [`RfmFrameExt`]
//! extension trait and turns pipeline outputs back into DataFrames.
//!
//! # Example
//!
//! ```rust,ignore
//! use polars::prelude::*;
//! use rfm_polars::RfmFrameExt;
//!
//! let df = df![
//!     "CustomerID" => [8814i64, 2188],
//!     "OrderID" => [890075i64, 176819],
//!     "PurchaseDate" => ["2023-04-11", "2023-06-29"],
//!     "TransactionAmount" => [943.31, 463.70],
//! ]?;
//!
//! let records = df.rfm_transactions()?;
//! assert_eq!(records.len(), 2);
//! ```

mod config;
mod error;
mod frames;
mod traits;
mod transactions;

pub use config::TransactionColumns;
pub use error::{Error, Result};
pub use frames::{
    label_counts_frame, segment_pair_counts_frame, segmented_customers_frame,
    value_segment_counts_frame, COUNT_COLUMN, LABEL_COLUMN, RFM_SCORE_COLUMN,
    VALUE_SEGMENT_COLUMN,
};
pub use traits::RfmFrameExt;
