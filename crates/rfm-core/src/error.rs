//! Error types for RFM analysis
//!
//! Provides the shared failure taxonomy for all rfm-stats crates. Every stage
//! returns these typed failures; none of them is swallowed between stages.

use thiserror::Error;

/// Core error type for RFM pipeline operations
#[derive(Error, Debug)]
pub enum Error {
    /// A transaction row could not be interpreted (bad date, bad amount, ...)
    ///
    /// `row` is the 1-based position of the record in its source, when known.
    #[error("Malformed record{}: {reason}", row_suffix(.row))]
    MalformedRecord { row: Option<usize>, reason: String },

    /// Fewer customers than the bins or groups requested
    #[error("Insufficient population: expected at least {expected} customers, got {actual}")]
    InsufficientPopulation { expected: usize, actual: usize },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

fn row_suffix(row: &Option<usize>) -> String {
    row.map(|r| format!(" at row {r}")).unwrap_or_default()
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create a malformed-record error for a known source row
    pub fn malformed(row: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            row: Some(row),
            reason: reason.into(),
        }
    }

    /// Create a malformed-record error when the source row is unknown
    pub fn malformed_unpositioned(reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            row: None,
            reason: reason.into(),
        }
    }

    /// Attach a source row to a malformed-record error that lacks one
    pub fn at_row(self, row: usize) -> Self {
        match self {
            Self::MalformedRecord { row: None, reason } => Self::MalformedRecord {
                row: Some(row),
                reason,
            },
            other => other,
        }
    }

    /// Create an error for an empty population
    pub fn empty_population() -> Self {
        Self::InsufficientPopulation {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for a zero bin or group count
    pub fn zero_bins(context: &str) -> Self {
        Self::InvalidParameter(format!("{context} requires at least one bin"))
    }
}
