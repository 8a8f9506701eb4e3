//! Common test utilities for rfm-core tests

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rfm_core::TransactionRecord;

/// Fixed reference time shared by the tests
pub fn reference_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 6, 30)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Build a record purchased `days_ago` whole days before [`reference_now`]
pub fn purchase(customer: &str, order: usize, days_ago: i64, amount: f64) -> TransactionRecord {
    TransactionRecord::new(
        customer,
        order.to_string(),
        reference_now() - Duration::days(days_ago),
        amount,
    )
    .unwrap()
}
