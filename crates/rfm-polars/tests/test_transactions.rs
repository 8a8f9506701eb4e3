//! Reading transaction rows out of DataFrames

mod common;

use chrono::{NaiveDate, NaiveDateTime};
use common::transactions_df;
use polars::prelude::*;
use rfm_core::{parse_purchase_date, Error as RfmError};
use rfm_polars::{Error, RfmFrameExt, TransactionColumns};

#[test]
fn test_integer_ids_and_string_dates() {
    let df = transactions_df(
        &[8814, 2188, 8814],
        &["2023-04-11", "2023-04-11 08:26:00", "2023-06-29T10:00:00Z"],
        &[943.31, 463.70, 80.28],
    );
    let records = df.rfm_transactions().unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].customer_id.as_str(), "8814");
    assert_eq!(records[0].order_id.as_str(), "1001");
    assert_eq!(records[1].purchase_date, parse_purchase_date("2023-04-11 08:26:00").unwrap());
    assert_eq!(records[2].amount, 80.28);
}

#[test]
fn test_integer_amounts_are_widened() {
    let df = df![
        "CustomerID" => ["a", "b"],
        "OrderID" => ["o1", "o2"],
        "PurchaseDate" => ["2023-01-01", "2023-01-02"],
        "TransactionAmount" => [10i32, 25],
    ]
    .unwrap();

    let records = df.rfm_transactions().unwrap();
    assert_eq!(records[1].amount, 25.0);
}

#[test]
fn test_custom_column_names() {
    let df = df![
        "customer" => ["a"],
        "invoice" => ["o1"],
        "date" => ["2023-01-01"],
        "total" => [1.5],
    ]
    .unwrap();
    let columns = TransactionColumns {
        customer_id: "customer".into(),
        order_id: "invoice".into(),
        purchase_date: "date".into(),
        amount: "total".into(),
    };

    let records = df.rfm_transactions_with(&columns).unwrap();
    assert_eq!(records[0].customer_id.as_str(), "a");
    assert!(matches!(df.rfm_transactions(), Err(Error::InvalidColumn(_))));
}

/// One customer, one purchase per date cell
fn frame_with_dates(dates: Series) -> DataFrame {
    let n = dates.len();
    DataFrame::new(vec![
        Column::new("CustomerID".into(), vec!["a"; n]),
        Column::new("OrderID".into(), (1..=n as i64).collect::<Vec<_>>()),
        dates.into(),
        Column::new("TransactionAmount".into(), vec![10.0; n]),
    ])
    .unwrap()
}

fn purchase_dates(df: &DataFrame) -> Vec<NaiveDateTime> {
    df.rfm_transactions()
        .unwrap()
        .into_iter()
        .map(|r| r.purchase_date)
        .collect()
}

fn expected_instants() -> Vec<NaiveDateTime> {
    vec![
        parse_purchase_date("2023-04-11 08:26:00").unwrap(),
        parse_purchase_date("1969-12-31 23:59:59").unwrap(),
    ]
}

#[test]
fn test_date_column_is_midnight() {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
    let days: Vec<i32> = [
        NaiveDate::from_ymd_opt(2023, 4, 11).unwrap(),
        NaiveDate::from_ymd_opt(1969, 7, 20).unwrap(),
    ]
    .iter()
    .map(|d| (*d - epoch).num_days() as i32)
    .collect();
    let dates = Series::new("PurchaseDate".into(), days)
        .cast(&DataType::Date)
        .unwrap();

    assert_eq!(
        purchase_dates(&frame_with_dates(dates)),
        vec![
            parse_purchase_date("2023-04-11").unwrap(),
            parse_purchase_date("1969-07-20").unwrap(),
        ]
    );
}

#[test]
fn test_naive_datetime_columns_in_every_unit() {
    let millis: Vec<i64> = expected_instants()
        .iter()
        .map(|dt| dt.and_utc().timestamp_millis())
        .collect();

    for (unit, per_milli) in [
        (TimeUnit::Milliseconds, 1),
        (TimeUnit::Microseconds, 1_000),
        (TimeUnit::Nanoseconds, 1_000_000),
    ] {
        let stamps: Vec<i64> = millis.iter().map(|ms| ms * per_milli).collect();
        let dates = Series::new("PurchaseDate".into(), stamps)
            .cast(&DataType::Datetime(unit, None))
            .unwrap();
        assert_eq!(purchase_dates(&frame_with_dates(dates)), expected_instants(), "{unit:?}");
    }
}

#[test]
fn test_timezone_aware_datetime_reads_utc() {
    let micros: Vec<i64> = expected_instants()
        .iter()
        .map(|dt| dt.and_utc().timestamp_micros())
        .collect();
    let dates = Series::new("PurchaseDate".into(), micros)
        .cast(&DataType::Datetime(TimeUnit::Microseconds, Some(TimeZone::UTC)))
        .unwrap();

    let read = purchase_dates(&frame_with_dates(dates));
    assert_eq!(read, expected_instants());
    // Same instant as the equivalent offset string
    assert_eq!(read[0], parse_purchase_date("2023-04-11T10:26:00+02:00").unwrap());
}

#[test]
fn test_null_date_cell_is_malformed() {
    let dates = Series::new("PurchaseDate".into(), [Some(19_458i32), None])
        .cast(&DataType::Date)
        .unwrap();

    assert!(matches!(
        frame_with_dates(dates).rfm_transactions(),
        Err(Error::Rfm(RfmError::MalformedRecord { row: Some(2), .. }))
    ));
}

#[test]
fn test_malformed_rows_carry_position() {
    let df = transactions_df(
        &[1, 2, 3],
        &["2023-01-01", "2023-02-30", "2023-01-03"],
        &[1.0, 2.0, 3.0],
    );
    assert!(matches!(
        df.rfm_transactions(),
        Err(Error::Rfm(RfmError::MalformedRecord { row: Some(2), .. }))
    ));

    let df = transactions_df(&[1, 2], &["2023-01-01", "2023-01-02"], &[1.0, -2.0]);
    assert!(matches!(
        df.rfm_transactions(),
        Err(Error::Rfm(RfmError::MalformedRecord { row: Some(2), .. }))
    ));
}

#[test]
fn test_null_cell_is_malformed() {
    let df = df![
        "CustomerID" => [Some("a"), None],
        "OrderID" => ["o1", "o2"],
        "PurchaseDate" => ["2023-01-01", "2023-01-02"],
        "TransactionAmount" => [1.0, 2.0],
    ]
    .unwrap();

    assert!(matches!(
        df.rfm_transactions(),
        Err(Error::Rfm(RfmError::MalformedRecord { row: Some(2), .. }))
    ));
}

#[test]
fn test_wrong_amount_type() {
    let df = df![
        "CustomerID" => ["a"],
        "OrderID" => ["o1"],
        "PurchaseDate" => ["2023-01-01"],
        "TransactionAmount" => [true],
    ]
    .unwrap();

    assert!(matches!(df.rfm_transactions(), Err(Error::TypeMismatch { .. })));
}
