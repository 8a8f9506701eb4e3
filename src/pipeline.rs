//! The batch pipeline: aggregate, score, segment, report

use crate::config::PipelineConfig;
use chrono::NaiveDateTime;
use rfm_core::{MetricAggregator, Result, SegmentedCustomer, TransactionRecord};
use rfm_histogram::ScoreBinner;
use rfm_report::{ReportBuilder, RfmReport};
use rfm_segment::segment_customers;
use serde::Serialize;
use std::borrow::Borrow;
use tracing::{debug, instrument};

/// Everything one run produces
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RfmOutput {
    /// Reference time the run measured recency against
    pub now: NaiveDateTime,
    /// One row per customer, sorted by customer id
    pub customers: Vec<SegmentedCustomer>,
    pub report: RfmReport,
}

/// Runs the four stages over an immutable batch of transactions
#[derive(Debug, Clone)]
pub struct RfmPipeline {
    config: PipelineConfig,
    binner: ScoreBinner,
    reporter: ReportBuilder,
}

impl Default for RfmPipeline {
    fn default() -> Self {
        Self {
            config: PipelineConfig::default(),
            binner: ScoreBinner::default(),
            reporter: ReportBuilder::default(),
        }
    }
}

impl RfmPipeline {
    /// Build a pipeline from a validated configuration
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            binner: ScoreBinner::new(config.score_bins)?,
            reporter: ReportBuilder::new().with_focus(config.focus_segment),
            config,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run every stage against a reference time captured once by the caller
    ///
    /// The same transactions and the same `now` always give the same output.
    /// Any stage failure aborts the run.
    #[instrument(skip_all, fields(now = %now))]
    pub fn run<I>(&self, records: I, now: NaiveDateTime) -> Result<RfmOutput>
    where
        I: IntoIterator,
        I::Item: Borrow<TransactionRecord>,
    {
        let metrics = MetricAggregator::new(now).aggregate(records)?;
        let scores = self.binner.score_customers(&metrics)?;
        debug!(customers = scores.len(), bins = self.binner.bins(), "scored customers");

        let customers = segment_customers(metrics, scores)?;
        let report = self.reporter.build(&customers)?;

        Ok(RfmOutput {
            now,
            customers,
            report,
        })
    }
}
