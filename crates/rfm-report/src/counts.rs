//! Population counts per value segment and segment label

use rfm_core::{SegmentLabel, SegmentedCustomer, ValueSegment};
use serde::Serialize;
use std::collections::BTreeMap;

/// Customers in one value segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SegmentCount {
    pub segment: ValueSegment,
    pub count: usize,
}

/// Customers in one segment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: SegmentLabel,
    pub count: usize,
}

/// Customers sharing a value segment and a segment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SegmentPairCount {
    pub segment: ValueSegment,
    pub label: SegmentLabel,
    pub count: usize,
}

/// Count customers per value segment
///
/// Every segment appears, in Low, Mid, High order, even with a zero count.
pub fn value_segment_counts(customers: &[SegmentedCustomer]) -> Vec<SegmentCount> {
    ValueSegment::ALL
        .iter()
        .map(|&segment| SegmentCount {
            segment,
            count: customers.iter().filter(|c| c.value_segment == segment).count(),
        })
        .collect()
}

/// Count customers per segment label, largest first
///
/// Only labels with at least one customer appear. Ties keep label order.
pub fn label_counts(customers: &[SegmentedCustomer]) -> Vec<LabelCount> {
    let mut counts: BTreeMap<SegmentLabel, usize> = BTreeMap::new();
    for c in customers {
        *counts.entry(c.label).or_default() += 1;
    }

    let mut rows: Vec<LabelCount> = counts
        .into_iter()
        .map(|(label, count)| LabelCount { label, count })
        .collect();
    // Stable sort keeps the BTreeMap's label order among ties
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

/// Count customers per (value segment, label) pair, largest first
///
/// Ties are broken by segment, then label. Pairs with no customers are omitted.
pub fn segment_pair_counts(customers: &[SegmentedCustomer]) -> Vec<SegmentPairCount> {
    let mut counts: BTreeMap<(ValueSegment, SegmentLabel), usize> = BTreeMap::new();
    for c in customers {
        *counts.entry((c.value_segment, c.label)).or_default() += 1;
    }

    let mut rows: Vec<SegmentPairCount> = counts
        .into_iter()
        .map(|((segment, label), count)| SegmentPairCount { segment, label, count })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}
