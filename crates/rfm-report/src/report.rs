//! The aggregate report bundling every summary table

use crate::correlation::CorrelationMatrix;
use crate::counts::{
    label_counts, segment_pair_counts, value_segment_counts, LabelCount, SegmentCount,
    SegmentPairCount,
};
use crate::summary::{
    mean_scores_by_label, score_distributions, LabelScoreMeans, ScoreDistribution,
};
use rfm_core::{Result, SegmentLabel, SegmentedCustomer};
use serde::Serialize;
use std::fmt;
use tracing::{debug, instrument};

/// Read-only summary of a segmented customer population
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RfmReport {
    pub customers: usize,
    pub value_segments: Vec<SegmentCount>,
    pub labels: Vec<LabelCount>,
    pub segment_labels: Vec<SegmentPairCount>,
    pub mean_scores: Vec<LabelScoreMeans>,
    /// Label whose members feed the correlation and distribution tables
    pub focus_segment: SegmentLabel,
    pub focus_correlation: CorrelationMatrix,
    pub focus_distributions: Vec<ScoreDistribution>,
}

/// Builds an [`RfmReport`] around a focus segment (Champions by default)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportBuilder {
    focus: SegmentLabel,
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self {
            focus: SegmentLabel::Champions,
        }
    }
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different label for the correlation and distribution tables
    pub fn with_focus(mut self, focus: SegmentLabel) -> Self {
        self.focus = focus;
        self
    }

    pub fn focus(&self) -> SegmentLabel {
        self.focus
    }

    /// Summarise the population
    ///
    /// Never fails on small or empty populations: undefined statistics are NaN.
    #[instrument(skip_all, fields(customers = customers.len(), focus = %self.focus))]
    pub fn build(&self, customers: &[SegmentedCustomer]) -> Result<RfmReport> {
        let focus_members = customers.iter().filter(|c| c.label == self.focus);
        let focus_correlation = CorrelationMatrix::from_customers(focus_members.clone());
        if focus_correlation.is_undefined() {
            debug!(
                members = focus_correlation.observations,
                "focus segment correlation undefined"
            );
        }

        Ok(RfmReport {
            customers: customers.len(),
            value_segments: value_segment_counts(customers),
            labels: label_counts(customers),
            segment_labels: segment_pair_counts(customers),
            mean_scores: mean_scores_by_label(customers),
            focus_segment: self.focus,
            focus_correlation,
            focus_distributions: score_distributions(focus_members)?,
        })
    }
}

/// Build a report with Champions as the focus segment
pub fn build_report(customers: &[SegmentedCustomer]) -> Result<RfmReport> {
    ReportBuilder::default().build(customers)
}

impl fmt::Display for RfmReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Customers: {}", self.customers)?;

        writeln!(f, "\nValue segments")?;
        for row in &self.value_segments {
            writeln!(f, "  {:<12} {:>8}", row.segment.name(), row.count)?;
        }

        writeln!(f, "\nSegment labels")?;
        for row in &self.labels {
            writeln!(f, "  {:<22} {:>8}", row.label.name(), row.count)?;
        }

        writeln!(f, "\nValue segment x label")?;
        for row in &self.segment_labels {
            writeln!(
                f,
                "  {:<12} {:<22} {:>8}",
                row.segment.name(),
                row.label.name(),
                row.count
            )?;
        }

        writeln!(f, "\nMean scores by label")?;
        writeln!(f, "  {:<22} {:>8} {:>8} {:>8}", "", "R", "F", "M")?;
        for row in &self.mean_scores {
            writeln!(
                f,
                "  {:<22} {:>8.2} {:>8.2} {:>8.2}",
                row.label.name(),
                row.recency,
                row.frequency,
                row.monetary
            )?;
        }

        writeln!(
            f,
            "\n{} score correlation (n = {})",
            self.focus_segment, self.focus_correlation.observations
        )?;
        write!(f, "{}", self.focus_correlation)?;

        writeln!(f, "\n{} score distribution", self.focus_segment)?;
        writeln!(
            f,
            "  {:<16} {:>6} {:>6} {:>6} {:>6} {:>6}",
            "", "min", "q1", "median", "q3", "max"
        )?;
        for d in &self.focus_distributions {
            let s = d.summary;
            writeln!(
                f,
                "  {:<16} {:>6.2} {:>6.2} {:>6.2} {:>6.2} {:>6.2}",
                d.metric.score_name(),
                s.min,
                s.q1,
                s.median,
                s.q3,
                s.max
            )?;
        }
        Ok(())
    }
}
