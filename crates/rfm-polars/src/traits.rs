//! Extension trait for reading RFM inputs out of Polars DataFrames

use crate::{Result, TransactionColumns};
use polars::prelude::*;
use rfm_core::TransactionRecord;

/// RFM operations on Polars DataFrames
pub trait RfmFrameExt {
    /// Read transaction rows using the default column names
    ///
    /// See [`RfmFrameExt::rfm_transactions_with`].
    fn rfm_transactions(&self) -> Result<Vec<TransactionRecord>> {
        self.rfm_transactions_with(&TransactionColumns::default())
    }

    /// Read transaction rows from the named columns
    ///
    /// # Column types
    /// * ids - string or any integer type
    /// * purchase date - string, `Date` or `Datetime`
    /// * amount - any integer or float type
    ///
    /// Other columns are ignored. A null or unparseable cell fails the whole
    /// frame with a malformed-record error carrying its 1-based row.
    fn rfm_transactions_with(&self, columns: &TransactionColumns) -> Result<Vec<TransactionRecord>>;
}

impl RfmFrameExt for DataFrame {
    fn rfm_transactions_with(
        &self,
        columns: &TransactionColumns,
    ) -> Result<Vec<TransactionRecord>> {
        crate::transactions::read_transactions(self, columns)
    }
}
