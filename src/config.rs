//! Pipeline configuration

use rfm_core::{Error, Result, SegmentLabel};
use rfm_histogram::{ScoreBinner, DEFAULT_SCORE_BINS};
use rfm_segment::VALUE_TIERS;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable parameters of a pipeline run
///
/// Every field has a default, so a JSON file only needs the keys it changes:
///
/// ```json
/// { "score_bins": 5, "focus_segment": "Potential Loyalists" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Equal-width bins per metric
    pub score_bins: usize,
    /// Equal-population value tiers; only the three named tiers are supported
    pub value_tiers: usize,
    /// Label whose members feed the correlation and distribution tables
    pub focus_segment: SegmentLabel,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            score_bins: DEFAULT_SCORE_BINS,
            value_tiers: VALUE_TIERS,
            focus_segment: SegmentLabel::Champions,
        }
    }
}

impl PipelineConfig {
    /// Check parameter ranges
    pub fn validate(&self) -> Result<()> {
        ScoreBinner::new(self.score_bins)?;
        if self.value_tiers != VALUE_TIERS {
            return Err(Error::InvalidParameter(format!(
                "value_tiers must be {VALUE_TIERS} (Low, Mid and High), got {}",
                self.value_tiers
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::InvalidParameter(format!("pipeline config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
