//! Common test utilities for rfm-polars tests

use polars::prelude::*;

/// Transaction frame with the default column names and string dates
pub fn transactions_df(customers: &[i64], dates: &[&str], amounts: &[f64]) -> DataFrame {
    let orders: Vec<i64> = (1..=customers.len() as i64).map(|o| 1000 + o).collect();
    df![
        "CustomerID" => customers,
        "OrderID" => orders,
        "PurchaseDate" => dates,
        "TransactionAmount" => amounts,
        "Location" => vec!["Tokyo"; customers.len()],
    ]
    .unwrap()
}

/// Extract a string cell
pub fn str_value(df: &DataFrame, col_name: &str, row: usize) -> String {
    df.column(col_name)
        .unwrap()
        .str()
        .unwrap()
        .get(row)
        .unwrap()
        .to_string()
}

/// Extract an unsigned count cell
pub fn count_value(df: &DataFrame, col_name: &str, row: usize) -> u64 {
    df.column(col_name)
        .unwrap()
        .u64()
        .unwrap()
        .get(row)
        .unwrap()
}
