//! Metric aggregation: transaction rows to per-customer R, F and M
//!
//! The reference time ("now") is captured once by the caller and threaded in
//! explicitly, so two runs over the same transactions with the same reference
//! time produce identical metrics.

use crate::error::{Error, Result};
use crate::types::{CustomerId, CustomerMetrics, TransactionRecord};
use chrono::NaiveDateTime;
use std::borrow::Borrow;
use std::collections::BTreeMap;
use tracing::debug;

/// Running totals for one customer
#[derive(Debug, Clone, Copy)]
struct Accumulator {
    last_purchase: NaiveDateTime,
    count: u32,
    total: f64,
}

/// Aggregates transactions into [`CustomerMetrics`] relative to a fixed reference time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricAggregator {
    now: NaiveDateTime,
}

impl MetricAggregator {
    /// Create an aggregator measuring recency against `now`
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }

    /// The reference time used for recency
    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    /// Aggregate a batch of transactions
    ///
    /// Rows may arrive in any order. The output holds one entry per distinct
    /// customer, sorted by customer id. The whole batch is rejected with
    /// [`Error::MalformedRecord`] if any row is invalid; nothing is dropped.
    pub fn aggregate<I>(&self, records: I) -> Result<Vec<CustomerMetrics>>
    where
        I: IntoIterator,
        I::Item: Borrow<TransactionRecord>,
    {
        let mut customers: BTreeMap<CustomerId, Accumulator> = BTreeMap::new();
        let mut rows = 0usize;

        for (index, record) in records.into_iter().enumerate() {
            let record = record.borrow();
            let row = index + 1;
            rows = row;

            if !record.amount.is_finite() || record.amount < 0.0 {
                return Err(Error::malformed(
                    row,
                    format!(
                        "order {}: transaction amount {} must be a non-negative number",
                        record.order_id, record.amount
                    ),
                ));
            }
            if record.purchase_date > self.now {
                return Err(Error::malformed(
                    row,
                    format!(
                        "order {}: purchase date {} is after the reference time {}",
                        record.order_id, record.purchase_date, self.now
                    ),
                ));
            }

            match customers.get_mut(&record.customer_id) {
                Some(acc) => {
                    acc.last_purchase = acc.last_purchase.max(record.purchase_date);
                    acc.count += 1;
                    acc.total += record.amount;
                }
                None => {
                    customers.insert(
                        record.customer_id.clone(),
                        Accumulator {
                            last_purchase: record.purchase_date,
                            count: 1,
                            total: record.amount,
                        },
                    );
                }
            }
        }

        debug!(rows, customers = customers.len(), "aggregated transactions");

        customers
            .into_iter()
            .map(|(customer_id, acc)| {
                let days = (self.now - acc.last_purchase).num_days();
                let recency = u32::try_from(days).map_err(|_| {
                    Error::InvalidInput(format!(
                        "customer {customer_id}: recency of {days} days is out of range"
                    ))
                })?;

                Ok(CustomerMetrics {
                    customer_id,
                    recency,
                    frequency: acc.count,
                    monetary: acc.total,
                })
            })
            .collect()
    }
}

/// Aggregate transactions relative to `now`
///
/// Convenience wrapper around [`MetricAggregator::aggregate`].
pub fn aggregate_metrics<I>(records: I, now: NaiveDateTime) -> Result<Vec<CustomerMetrics>>
where
    I: IntoIterator,
    I::Item: Borrow<TransactionRecord>,
{
    MetricAggregator::new(now).aggregate(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 6, 30)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn record(customer: &str, order: &str, days_ago: i64, amount: f64) -> TransactionRecord {
        TransactionRecord::new(customer, order, now() - Duration::days(days_ago), amount).unwrap()
    }

    #[test]
    fn test_aggregate_unsorted_rows() {
        let records = vec![
            record("b", "1", 30, 100.0),
            record("a", "2", 1, 100.0),
            record("b", "3", 45, 150.0),
            record("b", "4", 31, 250.0),
        ];

        let metrics = aggregate_metrics(&records, now()).unwrap();
        assert_eq!(metrics.len(), 2);

        assert_eq!(metrics[0].customer_id.as_str(), "a");
        assert_eq!(metrics[0].recency, 1);
        assert_eq!(metrics[0].frequency, 1);
        assert_eq!(metrics[0].monetary, 100.0);

        assert_eq!(metrics[1].customer_id.as_str(), "b");
        assert_eq!(metrics[1].recency, 30);
        assert_eq!(metrics[1].frequency, 3);
        assert_eq!(metrics[1].monetary, 500.0);
    }

    #[test]
    fn test_recency_truncates_partial_days() {
        let purchase = now() - Duration::hours(23) - Duration::minutes(59);
        let records = vec![TransactionRecord::new("a", "1", purchase, 1.0).unwrap()];
        let metrics = aggregate_metrics(records, now()).unwrap();
        assert_eq!(metrics[0].recency, 0);

        let purchase = now() - Duration::hours(49);
        let records = vec![TransactionRecord::new("a", "1", purchase, 1.0).unwrap()];
        let metrics = aggregate_metrics(records, now()).unwrap();
        assert_eq!(metrics[0].recency, 2);
    }

    #[test]
    fn test_future_purchase_is_rejected() {
        let records = vec![
            record("a", "1", 3, 10.0),
            TransactionRecord::new("b", "2", now() + Duration::days(1), 10.0).unwrap(),
        ];

        let err = aggregate_metrics(&records, now()).unwrap_err();
        match err {
            Error::MalformedRecord { row, reason } => {
                assert_eq!(row, Some(2));
                assert!(reason.contains("order 2"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_invalid_amount_fails_whole_batch() {
        let mut bad = record("a", "9", 3, 10.0);
        bad.amount = f64::NAN;
        let records = vec![record("a", "1", 3, 10.0), bad];

        assert!(matches!(
            aggregate_metrics(&records, now()),
            Err(Error::MalformedRecord { row: Some(2), .. })
        ));
    }

    #[test]
    fn test_empty_input() {
        let records: Vec<TransactionRecord> = Vec::new();
        assert!(aggregate_metrics(&records, now()).unwrap().is_empty());
    }

    #[test]
    fn test_idempotent_for_fixed_now() {
        let records = vec![
            record("x", "1", 5, 12.0),
            record("y", "2", 9, 7.5),
            record("x", "3", 2, 3.0),
        ];
        let aggregator = MetricAggregator::new(now());
        assert_eq!(
            aggregator.aggregate(&records).unwrap(),
            aggregator.aggregate(&records).unwrap()
        );
    }
}
