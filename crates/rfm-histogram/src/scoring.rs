//! Ordinal scoring on top of equal-width histograms
//!
//! Each metric is binned across the whole customer population and the bin
//! index becomes a score in `1..=bins`. Recency is scored in descending
//! direction (most recent purchase gets the highest score).

use crate::builders::FixedWidthBuilder;
use crate::traits::HistogramBuilder;
use crate::types::Histogram;
use rfm_core::{CustomerMetrics, CustomerScores, Error, Metric, Numeric, Result, MAX_SCORE};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Largest bin count for which three summed scores still fit in a `u8`
pub const MAX_SCORE_BINS: usize = MAX_SCORE as usize;

/// Default number of score bins
pub const DEFAULT_SCORE_BINS: usize = 5;

/// How bin order maps onto score order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreDirection {
    /// Lowest bin scores 1
    Ascending,
    /// Lowest bin scores highest
    Descending,
}

impl ScoreDirection {
    /// Scoring direction used for a metric
    pub fn for_metric(metric: Metric) -> Self {
        match metric {
            Metric::Recency => Self::Descending,
            Metric::Frequency | Metric::Monetary => Self::Ascending,
        }
    }
}

/// Converts raw values into ordinal scores by equal-width binning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBinner {
    builder: FixedWidthBuilder,
}

impl Default for ScoreBinner {
    fn default() -> Self {
        Self {
            builder: FixedWidthBuilder { num_bins: DEFAULT_SCORE_BINS },
        }
    }
}

impl ScoreBinner {
    /// Create a binner producing scores in `1..=bins`
    pub fn new(bins: usize) -> Result<Self> {
        if bins > MAX_SCORE_BINS {
            return Err(Error::InvalidParameter(format!(
                "score bins must be at most {MAX_SCORE_BINS}, got {bins}"
            )));
        }
        Ok(Self {
            builder: FixedWidthBuilder::new(bins)?,
        })
    }

    /// Number of score bins
    pub fn bins(&self) -> usize {
        self.builder.num_bins()
    }

    /// Score given to every value of a metric that takes a single value
    pub fn midpoint_score(&self) -> u8 {
        ((self.bins() + 1) / 2) as u8
    }

    /// Build the histogram a metric is scored against
    pub fn histogram<T: Numeric>(&self, values: &[T]) -> Result<Histogram> {
        if values.is_empty() {
            return Err(Error::empty_population());
        }
        self.builder.build(values)
    }

    /// Score every value against the population's equal-width bins
    ///
    /// Returns one score per input value, in input order.
    pub fn score_values<T: Numeric>(
        &self,
        values: &[T],
        direction: ScoreDirection,
    ) -> Result<Vec<u8>> {
        let histogram = self.histogram(values)?;
        self.score_against(&histogram, values, direction)
    }

    /// Score one metric across the customer population
    pub fn score_metric(&self, metrics: &[CustomerMetrics], metric: Metric) -> Result<Vec<u8>> {
        let values: Vec<f64> = metrics.iter().map(|m| m.value(metric)).collect();
        let histogram = self.histogram(&values)?;
        if histogram.is_degenerate() {
            debug!(
                metric = metric.name(),
                value = histogram.min(),
                "degenerate metric, assigning midpoint score"
            );
        }
        self.score_against(&histogram, &values, ScoreDirection::for_metric(metric))
    }

    fn score_against<T: Numeric>(
        &self,
        histogram: &Histogram,
        values: &[T],
        direction: ScoreDirection,
    ) -> Result<Vec<u8>> {
        if histogram.is_degenerate() {
            return Ok(vec![self.midpoint_score(); values.len()]);
        }

        let bins = self.bins();
        let score_of = |value: &T| -> Result<u8> {
            let idx = histogram.find_bin(value.to_float()).ok_or_else(|| {
                Error::InvalidInput(format!("value {value:?} falls outside {histogram}"))
            })?;
            let score = match direction {
                ScoreDirection::Ascending => idx + 1,
                ScoreDirection::Descending => bins - idx,
            };
            Ok(score as u8)
        };

        #[cfg(feature = "parallel")]
        let scores = values.par_iter().map(score_of).collect();
        #[cfg(not(feature = "parallel"))]
        let scores = values.iter().map(score_of).collect();

        scores
    }

    /// Score R, F and M for every customer
    ///
    /// The output is aligned with `metrics`.
    pub fn score_customers(&self, metrics: &[CustomerMetrics]) -> Result<Vec<CustomerScores>> {
        let recency = self.score_metric(metrics, Metric::Recency)?;
        let frequency = self.score_metric(metrics, Metric::Frequency)?;
        let monetary = self.score_metric(metrics, Metric::Monetary)?;

        metrics
            .iter()
            .zip(recency)
            .zip(frequency)
            .zip(monetary)
            .map(|(((m, r), f), mv)| CustomerScores::new(m.customer_id.clone(), r, f, mv))
            .collect()
    }
}

/// Score R, F and M with the default five bins
pub fn score_customers(metrics: &[CustomerMetrics]) -> Result<Vec<CustomerScores>> {
    ScoreBinner::default().score_customers(metrics)
}
