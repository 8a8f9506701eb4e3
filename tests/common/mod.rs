//! Common test utilities for rfm-stats integration tests

#![allow(dead_code)]

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rfm_stats::rfm_core::TransactionRecord;

/// Fixed reference time shared by the tests
pub fn reference_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 6, 30)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// The three-customer scenario: A (1 x $100, 1 day ago), B (5 x $100, 30 days
/// ago), C (10 x $100, 2 days ago)
pub fn three_customers() -> Vec<TransactionRecord> {
    let mut records = Vec::new();
    records.extend(single_day_purchases("A", 1, 1, 100.0));
    records.extend(single_day_purchases("B", 5, 30, 100.0));
    records.extend(single_day_purchases("C", 10, 2, 100.0));
    records
}

/// `count` purchases of `amount` each, all `days_ago` days before [`reference_now`]
pub fn single_day_purchases(
    customer: &str,
    count: usize,
    days_ago: i64,
    amount: f64,
) -> Vec<TransactionRecord> {
    (0..count)
        .map(|i| {
            TransactionRecord::new(
                customer,
                format!("{customer}-{i}"),
                reference_now() - Duration::days(days_ago),
                amount,
            )
            .unwrap()
        })
        .collect()
}

/// Reproducible synthetic transactions for `customers` customers
pub fn synthetic_transactions(customers: usize, seed: u64) -> Vec<TransactionRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut records = Vec::new();
    for c in 0..customers {
        let id = format!("{c:05}");
        let orders = rng.gen_range(1..=12);
        for o in 0..orders {
            let days_ago = rng.gen_range(0..365);
            let amount = (rng.gen_range(5.0..2_000.0_f64) * 100.0).round() / 100.0;
            records.push(
                TransactionRecord::new(
                    id.as_str(),
                    format!("{id}-{o}"),
                    reference_now() - Duration::days(days_ago),
                    amount,
                )
                .unwrap(),
            );
        }
    }
    records.shuffle(&mut rng);
    records
}
