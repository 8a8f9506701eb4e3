//! CSV ingestion into a full run

mod common;

use approx::assert_relative_eq;
use common::reference_now;
use rfm_stats::prelude::*;
use rfm_stats::read_csv;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_csv(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "CustomerID,ProductInformation,OrderID,PurchaseDate,TransactionAmount,Location"
    )
    .unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file
}

#[test]
fn test_csv_to_segments() {
    let file = write_csv(&[
        "8814,Product C,890075,2023-06-29,943.31,Tokyo",
        "2188,Product A,176819,2023-05-31,463.70,London",
        "2188,Product B,176820,2023-05-01,12.00,London",
        "4608,Product A,340062,2023-06-28 14:30:00,80.28,New York",
    ]);

    let records = read_csv(file.path()).unwrap();
    assert_eq!(records.len(), 4);

    let output = RfmPipeline::default().run(&records, reference_now()).unwrap();
    let ids: Vec<_> = output.customers.iter().map(|c| c.customer_id().as_str()).collect();
    assert_eq!(ids, vec!["2188", "4608", "8814"]);

    let c2188 = &output.customers[0];
    assert_eq!(c2188.metrics.recency, 30);
    assert_eq!(c2188.metrics.frequency, 2);
    assert_relative_eq!(c2188.metrics.monetary, 475.70, epsilon = 1e-9);

    // Truncated to whole days
    assert_eq!(output.customers[1].metrics.recency, 1);
}

#[test]
fn test_malformed_date_fails_read() {
    let file = write_csv(&[
        "1,Product A,10,2023-06-01,5.00,Paris",
        "2,Product A,11,2023-06-01,5.00,Paris",
        "3,Product A,12,01/06/2023,5.00,Paris",
    ]);

    match read_csv(file.path()).unwrap_err() {
        Error::MalformedRecord { row, reason } => {
            assert_eq!(row, Some(3));
            assert!(reason.contains("01/06/2023"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_negative_amount_fails_read() {
    let file = write_csv(&["1,Product A,10,2023-06-01,-5.00,Paris"]);
    assert!(matches!(
        read_csv(file.path()),
        Err(Error::MalformedRecord { row: Some(1), .. })
    ));
}
