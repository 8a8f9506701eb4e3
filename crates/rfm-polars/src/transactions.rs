//! Column extraction for transaction frames

use crate::{Error, Result, TransactionColumns};
use chrono::{DateTime, NaiveDateTime, Utc};
use polars::prelude::*;
use rfm_core::{parse_purchase_date, TransactionRecord};

fn column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name)
        .map_err(|_| Error::InvalidColumn(name.to_string()))
}

fn type_mismatch(name: &str, expected: &str, got: &DataType) -> Error {
    Error::TypeMismatch {
        column: name.to_string(),
        expected: expected.to_string(),
        got: format!("{got:?}"),
    }
}

fn id_column(df: &DataFrame, name: &str) -> Result<StringChunked> {
    let column = column(df, name)?;
    let strings = match column.dtype() {
        DataType::String => column.clone(),
        dt if dt.is_integer() => column.cast(&DataType::String)?,
        dt => return Err(type_mismatch(name, "string or integer", dt)),
    };
    Ok(strings.str()?.clone())
}

/// Purchase dates, one per row, still unpositioned
///
/// `Date` cells are midnight of their day. `Datetime` cells are read from
/// their physical timestamp, so timezone-aware columns yield the UTC
/// wall-clock time, the same as an RFC 3339 string with an offset.
fn date_column(df: &DataFrame, name: &str) -> Result<Vec<Option<rfm_core::Result<NaiveDateTime>>>> {
    let column = column(df, name)?;
    let dates = match column.dtype() {
        DataType::String => column
            .str()?
            .into_iter()
            .map(|cell| cell.map(parse_purchase_date))
            .collect(),
        DataType::Date => column
            .cast(&DataType::Int32)?
            .i32()?
            .into_iter()
            .map(|days| days.map(from_epoch_days))
            .collect(),
        DataType::Datetime(unit, _) => {
            let unit = *unit;
            column
                .cast(&DataType::Int64)?
                .i64()?
                .into_iter()
                .map(|ts| ts.map(|t| from_epoch_timestamp(t, unit)))
                .collect()
        }
        dt => return Err(type_mismatch(name, "string, date or datetime", dt)),
    };
    Ok(dates)
}

fn from_epoch_days(days: i32) -> rfm_core::Result<NaiveDateTime> {
    let instant = DateTime::from_timestamp(i64::from(days) * 86_400, 0);
    naive_utc(instant, || format!("date {days} days from epoch"))
}

fn from_epoch_timestamp(value: i64, unit: TimeUnit) -> rfm_core::Result<NaiveDateTime> {
    let instant = match unit {
        TimeUnit::Milliseconds => DateTime::from_timestamp_millis(value),
        TimeUnit::Microseconds => DateTime::from_timestamp_micros(value),
        TimeUnit::Nanoseconds => Some(DateTime::from_timestamp_nanos(value)),
    };
    naive_utc(instant, || format!("timestamp {value} ({unit:?})"))
}

fn naive_utc(
    instant: Option<DateTime<Utc>>,
    describe: impl FnOnce() -> String,
) -> rfm_core::Result<NaiveDateTime> {
    instant.map(|dt| dt.naive_utc()).ok_or_else(|| {
        rfm_core::Error::malformed_unpositioned(format!("{} is out of range", describe()))
    })
}

fn amount_column(df: &DataFrame, name: &str) -> Result<Float64Chunked> {
    let column = column(df, name)?;
    let floats = match column.dtype() {
        DataType::Float64 => column.clone(),
        dt if dt.is_float() || dt.is_integer() => column.cast(&DataType::Float64)?,
        dt => return Err(type_mismatch(name, "numeric", dt)),
    };
    Ok(floats.f64()?.clone())
}

pub(crate) fn read_transactions(
    df: &DataFrame,
    columns: &TransactionColumns,
) -> Result<Vec<TransactionRecord>> {
    let customers = id_column(df, &columns.customer_id)?;
    let orders = id_column(df, &columns.order_id)?;
    let dates = date_column(df, &columns.purchase_date)?;
    let amounts = amount_column(df, &columns.amount)?;

    let rows = customers
        .into_iter()
        .zip(orders.into_iter())
        .zip(dates.into_iter())
        .zip(amounts.into_iter());

    let mut records = Vec::with_capacity(df.height());
    for (index, (((customer, order), date), amount)) in rows.enumerate() {
        let row = index + 1;
        let (Some(customer), Some(order), Some(date), Some(amount)) =
            (customer, order, date, amount)
        else {
            return Err(rfm_core::Error::malformed(row, "missing transaction field").into());
        };

        let purchase_date = date.map_err(|e| e.at_row(row))?;
        let record = TransactionRecord::new(customer.trim(), order.trim(), purchase_date, amount)
            .map_err(|e| e.at_row(row))?;
        records.push(record);
    }
    Ok(records)
}
