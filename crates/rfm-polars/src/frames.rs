//! DataFrame views of pipeline outputs

use crate::Result;
use polars::prelude::*;
use rfm_core::{Metric, SegmentedCustomer};
use rfm_report::{LabelCount, SegmentCount, SegmentPairCount};

/// Column holding the value segment name
pub const VALUE_SEGMENT_COLUMN: &str = "Value Segment";
/// Column holding the segment label name
pub const LABEL_COLUMN: &str = "RFM Customer Segments";
/// Column holding the composite score
pub const RFM_SCORE_COLUMN: &str = "RFM_Score";
/// Column holding customer counts
pub const COUNT_COLUMN: &str = "Count";

fn counts_series(counts: impl Iterator<Item = usize>) -> Series {
    let counts: Vec<u64> = counts.map(|c| c as u64).collect();
    Series::new(PlSmallStr::from(COUNT_COLUMN), counts)
}

/// One row per customer: ids, raw metrics, scores, value segment and label
pub fn segmented_customers_frame(customers: &[SegmentedCustomer]) -> Result<DataFrame> {
    let ids: Vec<&str> = customers.iter().map(|c| c.customer_id().as_str()).collect();
    let recency: Vec<u32> = customers.iter().map(|c| c.metrics.recency).collect();
    let frequency: Vec<u32> = customers.iter().map(|c| c.metrics.frequency).collect();
    let monetary: Vec<f64> = customers.iter().map(|c| c.metrics.monetary).collect();
    let score = |metric: Metric| -> Series {
        let values: Vec<u32> = customers
            .iter()
            .map(|c| u32::from(c.scores.score(metric)))
            .collect();
        Series::new(PlSmallStr::from(metric.score_name()), values)
    };
    let rfm: Vec<u32> = customers.iter().map(|c| u32::from(c.scores.rfm_score())).collect();
    let segments: Vec<&str> = customers.iter().map(|c| c.value_segment.name()).collect();
    let labels: Vec<&str> = customers.iter().map(|c| c.label.name()).collect();

    Ok(DataFrame::new(vec![
        Series::new(PlSmallStr::from("CustomerID"), ids).into(),
        Series::new(PlSmallStr::from(Metric::Recency.name()), recency).into(),
        Series::new(PlSmallStr::from(Metric::Frequency.name()), frequency).into(),
        Series::new(PlSmallStr::from(Metric::Monetary.name()), monetary).into(),
        score(Metric::Recency).into(),
        score(Metric::Frequency).into(),
        score(Metric::Monetary).into(),
        Series::new(PlSmallStr::from(RFM_SCORE_COLUMN), rfm).into(),
        Series::new(PlSmallStr::from(VALUE_SEGMENT_COLUMN), segments).into(),
        Series::new(PlSmallStr::from(LABEL_COLUMN), labels).into(),
    ])?)
}

/// Customers per value segment
pub fn value_segment_counts_frame(counts: &[SegmentCount]) -> Result<DataFrame> {
    let segments: Vec<&str> = counts.iter().map(|c| c.segment.name()).collect();
    Ok(DataFrame::new(vec![
        Series::new(PlSmallStr::from(VALUE_SEGMENT_COLUMN), segments).into(),
        counts_series(counts.iter().map(|c| c.count)).into(),
    ])?)
}

/// Customers per segment label
pub fn label_counts_frame(counts: &[LabelCount]) -> Result<DataFrame> {
    let labels: Vec<&str> = counts.iter().map(|c| c.label.name()).collect();
    Ok(DataFrame::new(vec![
        Series::new(PlSmallStr::from(LABEL_COLUMN), labels).into(),
        counts_series(counts.iter().map(|c| c.count)).into(),
    ])?)
}

/// Customers per (value segment, label) pair
pub fn segment_pair_counts_frame(counts: &[SegmentPairCount]) -> Result<DataFrame> {
    let segments: Vec<&str> = counts.iter().map(|c| c.segment.name()).collect();
    let labels: Vec<&str> = counts.iter().map(|c| c.label.name()).collect();
    Ok(DataFrame::new(vec![
        Series::new(PlSmallStr::from(VALUE_SEGMENT_COLUMN), segments).into(),
        Series::new(PlSmallStr::from(LABEL_COLUMN), labels).into(),
        counts_series(counts.iter().map(|c| c.count)).into(),
    ])?)
}
