//! Equal-population value tiers of the composite score

use rfm_core::{CustomerScores, Error, Result, ValueSegment};
use rfm_quantile::EqualPopulationBinner;

/// Number of value tiers
pub const VALUE_TIERS: usize = ValueSegment::ALL.len();

/// Assign Low/Mid/High value tiers by tertile of the composite score
///
/// Customers are ranked by composite score with a stable sort, so equal
/// scores straddling a tier boundary are split in input order. The result is
/// aligned with `scores`. Fewer than three customers is
/// [`Error::InsufficientPopulation`].
pub fn value_segments(scores: &[CustomerScores]) -> Result<Vec<ValueSegment>> {
    let keys: Vec<u8> = scores.iter().map(|s| s.rfm_score()).collect();
    EqualPopulationBinner::new(VALUE_TIERS)?
        .assign(&keys)?
        .into_iter()
        .map(|group| {
            ValueSegment::from_index(group)
                .ok_or_else(|| Error::InvalidInput(format!("no value tier for group {group}")))
        })
        .collect()
}
