//! The segmentation stage: value tiers plus named labels

use crate::labels::label_for_score;
use crate::value::value_segments;
use rfm_core::{CustomerMetrics, CustomerScores, Error, Result, SegmentedCustomer};
use tracing::debug;

/// Attach a value tier and a segment label to every scored customer
///
/// The two classifications are independent passes: tiers come from the
/// population's rank order, labels from each customer's composite score
/// alone. `metrics` and `scores` must be aligned row for row.
pub fn segment_customers(
    metrics: Vec<CustomerMetrics>,
    scores: Vec<CustomerScores>,
) -> Result<Vec<SegmentedCustomer>> {
    if metrics.len() != scores.len() {
        return Err(Error::InvalidInput(format!(
            "Size mismatch in segmentation: {} metric rows, {} score rows",
            metrics.len(),
            scores.len()
        )));
    }
    if let Some((m, s)) = metrics
        .iter()
        .zip(scores.iter())
        .find(|(m, s)| &m.customer_id != s.customer_id())
    {
        return Err(Error::InvalidInput(format!(
            "metrics for customer {} are paired with scores for customer {}",
            m.customer_id,
            s.customer_id()
        )));
    }

    let tiers = value_segments(&scores)?;

    let segmented: Vec<SegmentedCustomer> = metrics
        .into_iter()
        .zip(scores)
        .zip(tiers)
        .map(|((metrics, scores), value_segment)| {
            let label = label_for_score(scores.rfm_score());
            SegmentedCustomer {
                metrics,
                scores,
                value_segment,
                label,
            }
        })
        .collect();

    debug!(customers = segmented.len(), "segmented customers");
    Ok(segmented)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rfm_core::{SegmentLabel, ValueSegment};

    fn row(id: &str, r: u8, f: u8, m: u8) -> (CustomerMetrics, CustomerScores) {
        (
            CustomerMetrics {
                customer_id: id.into(),
                recency: 1,
                frequency: 1,
                monetary: 1.0,
            },
            CustomerScores::new(id.into(), r, f, m).unwrap(),
        )
    }

    #[test]
    fn test_segment_customers() {
        let (metrics, scores): (Vec<_>, Vec<_>) =
            vec![row("A", 5, 1, 1), row("B", 1, 3, 3), row("C", 5, 5, 5)]
                .into_iter()
                .unzip();

        let segmented = segment_customers(metrics, scores).unwrap();
        let summary: Vec<_> = segmented
            .iter()
            .map(|c| (c.customer_id().as_str(), c.value_segment, c.label))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("A", ValueSegment::Low, SegmentLabel::PotentialLoyalists),
                ("B", ValueSegment::Mid, SegmentLabel::PotentialLoyalists),
                ("C", ValueSegment::High, SegmentLabel::Champions),
            ]
        );
    }

    #[test]
    fn test_misaligned_rows_rejected() {
        let (metrics, _): (Vec<_>, Vec<_>) =
            vec![row("A", 1, 1, 1), row("B", 1, 1, 1), row("C", 1, 1, 1)]
                .into_iter()
                .unzip();
        let (_, scores): (Vec<_>, Vec<_>) =
            vec![row("A", 1, 1, 1), row("C", 1, 1, 1), row("B", 1, 1, 1)]
                .into_iter()
                .unzip();

        assert!(matches!(
            segment_customers(metrics.clone(), scores),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            segment_customers(metrics, Vec::new()),
            Err(Error::InvalidInput(_))
        ));
    }
}
