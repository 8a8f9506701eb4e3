//! Fixed-threshold customer segment labels
//!
//! The composite score is integer valued, so each band is a closed range of
//! whole scores. Bands are walked in priority order and the first band that
//! contains the score decides the label.

use rfm_core::SegmentLabel;
use std::ops::RangeInclusive;

/// Priority-ordered `(score band, label)` table
pub const LABEL_TABLE: [(RangeInclusive<u8>, SegmentLabel); 5] = [
    (9..=u8::MAX, SegmentLabel::Champions),
    (6..=8, SegmentLabel::PotentialLoyalists),
    (5..=5, SegmentLabel::AtRiskCustomers),
    (4..=4, SegmentLabel::CantLose),
    (3..=3, SegmentLabel::Lost),
];

/// Label for a composite score; scores outside every band are `Unclassified`
pub fn label_for_score(rfm_score: u8) -> SegmentLabel {
    LABEL_TABLE
        .iter()
        .find(|(band, _)| band.contains(&rfm_score))
        .map(|(_, label)| *label)
        .unwrap_or(SegmentLabel::Unclassified)
}
