//! Equal-population (rank-based) binning
//!
//! Items are stably sorted by key and the sorted sequence is cut into groups
//! of equal count. This is deliberately independent of the equal-width
//! binning in `rfm-histogram`: group membership depends on rank, never on
//! the spread of the values.

use rfm_core::{Error, Result};
use tracing::debug;

/// Assigns items to equal-count groups by rank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EqualPopulationBinner {
    groups: usize,
}

impl EqualPopulationBinner {
    /// Create a binner producing `groups` groups
    pub fn new(groups: usize) -> Result<Self> {
        if groups == 0 {
            return Err(Error::zero_bins("equal-population binning"));
        }
        Ok(Self { groups })
    }

    /// Number of groups
    pub fn groups(&self) -> usize {
        self.groups
    }

    /// Group index (0 = lowest keys) of every item, aligned with `keys`
    ///
    /// The item with stable rank `i` in a population of `n` goes to group
    /// `floor(i * groups / n)`, so group sizes differ by at most one. Equal
    /// keys keep their input order, which decides which side of a group
    /// boundary they fall on.
    pub fn assign<K: Ord>(&self, keys: &[K]) -> Result<Vec<usize>> {
        let n = keys.len();
        if n < self.groups {
            return Err(Error::InsufficientPopulation {
                expected: self.groups,
                actual: n,
            });
        }

        let mut order: Vec<usize> = (0..n).collect();
        // sort_by_key is stable
        order.sort_by_key(|&i| &keys[i]);

        let mut groups = vec![0usize; n];
        for (rank, &item) in order.iter().enumerate() {
            groups[item] = rank * self.groups / n;
        }

        debug!(items = n, groups = self.groups, "assigned equal-population groups");
        Ok(groups)
    }

    /// Number of items that land in each group for a population of `n`
    pub fn group_sizes(&self, n: usize) -> Vec<usize> {
        let mut sizes = vec![0usize; self.groups];
        if n == 0 {
            return sizes;
        }
        for rank in 0..n {
            sizes[rank * self.groups / n] += 1;
        }
        sizes
    }
}

/// Assign items to `groups` equal-count groups by key
pub fn equal_population_bins<K: Ord>(keys: &[K], groups: usize) -> Result<Vec<usize>> {
    EqualPopulationBinner::new(groups)?.assign(keys)
}
