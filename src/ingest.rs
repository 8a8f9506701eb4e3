//! CSV ingestion of transaction rows
//!
//! Expects a header row naming at least `CustomerID`, `OrderID`,
//! `PurchaseDate` and `TransactionAmount`. Other columns (product, location,
//! ...) are ignored.

use rfm_core::{Error, Result, TransactionRecord};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, instrument};

#[derive(Debug, Deserialize)]
struct RawTransaction {
    #[serde(rename = "CustomerID")]
    customer_id: String,
    #[serde(rename = "OrderID")]
    order_id: String,
    #[serde(rename = "PurchaseDate")]
    purchase_date: String,
    #[serde(rename = "TransactionAmount")]
    amount: String,
}

fn csv_error(err: csv::Error, row: usize) -> Error {
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io) => Error::Io(io),
        _ => Error::malformed(row, reason),
    }
}

/// Read transactions from any CSV source
///
/// Rows are numbered from 1 after the header; the first bad row fails the
/// whole read with [`Error::MalformedRecord`].
#[instrument(skip_all)]
pub fn read_csv_from<R: Read>(reader: R) -> Result<Vec<TransactionRecord>> {
    let mut csv = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, raw) in csv.deserialize::<RawTransaction>().enumerate() {
        let row = index + 1;
        let raw = raw.map_err(|e| csv_error(e, row))?;
        let record = TransactionRecord::parse(
            &raw.customer_id,
            &raw.order_id,
            &raw.purchase_date,
            &raw.amount,
        )
        .map_err(|e| e.at_row(row))?;
        records.push(record);
    }

    debug!(rows = records.len(), "read transactions");
    Ok(records)
}

/// Read transactions from a CSV file
pub fn read_csv(path: impl AsRef<Path>) -> Result<Vec<TransactionRecord>> {
    let file = File::open(path.as_ref())?;
    read_csv_from(BufReader::new(file))
}
