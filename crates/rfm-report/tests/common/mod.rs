//! Shared fixtures for report tests

use rfm_core::{CustomerMetrics, CustomerScores, SegmentedCustomer, ValueSegment};
use rfm_segment::label_for_score;

/// A segmented customer whose label follows from its scores
pub fn segmented(id: &str, scores: (u8, u8, u8), value_segment: ValueSegment) -> SegmentedCustomer {
    let (r, f, m) = scores;
    let scores = CustomerScores::new(id.into(), r, f, m).unwrap();
    SegmentedCustomer {
        metrics: CustomerMetrics {
            customer_id: id.into(),
            recency: 10,
            frequency: u32::from(f),
            monetary: 100.0 * f64::from(m),
        },
        label: label_for_score(scores.rfm_score()),
        scores,
        value_segment,
    }
}
