//! Per-label score means and score distributions

use rfm_core::{Metric, Result, SegmentLabel, SegmentedCustomer};
use rfm_quantile::FiveNumberSummary;
use serde::Serialize;
use statrs::statistics::Statistics;

/// Mean of each ordinal score within one segment label
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LabelScoreMeans {
    pub label: SegmentLabel,
    pub count: usize,
    pub recency: f64,
    pub frequency: f64,
    pub monetary: f64,
}

impl LabelScoreMeans {
    /// Mean for one score
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Recency => self.recency,
            Metric::Frequency => self.frequency,
            Metric::Monetary => self.monetary,
        }
    }
}

fn score_column<'a>(
    customers: impl IntoIterator<Item = &'a SegmentedCustomer>,
    metric: Metric,
) -> Vec<f64> {
    customers
        .into_iter()
        .map(|c| f64::from(c.scores.score(metric)))
        .collect()
}

/// Mean Recency, Frequency and Monetary score for every label present
///
/// Rows follow label order.
pub fn mean_scores_by_label(customers: &[SegmentedCustomer]) -> Vec<LabelScoreMeans> {
    SegmentLabel::ALL
        .iter()
        .filter_map(|&label| {
            let members: Vec<&SegmentedCustomer> =
                customers.iter().filter(|c| c.label == label).collect();
            if members.is_empty() {
                return None;
            }
            let mean = |metric| score_column(members.iter().copied(), metric).mean();
            Some(LabelScoreMeans {
                label,
                count: members.len(),
                recency: mean(Metric::Recency),
                frequency: mean(Metric::Frequency),
                monetary: mean(Metric::Monetary),
            })
        })
        .collect()
}

/// Five-number summary of one ordinal score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreDistribution {
    pub metric: Metric,
    pub summary: FiveNumberSummary,
}

/// Distribution of each score over a set of customers
///
/// An empty set gives undefined (NaN) summaries.
pub fn score_distributions<'a, I>(customers: I) -> Result<Vec<ScoreDistribution>>
where
    I: IntoIterator<Item = &'a SegmentedCustomer>,
    I::IntoIter: Clone,
{
    let customers = customers.into_iter();
    Metric::ALL
        .iter()
        .map(|&metric| {
            let column = score_column(customers.clone(), metric);
            Ok(ScoreDistribution {
                metric,
                summary: FiveNumberSummary::from_sample(&column)?,
            })
        })
        .collect()
}
