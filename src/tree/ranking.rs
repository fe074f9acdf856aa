//! Owners ranked by roster size
//!
//! Primary key: roster length ascending.
//! Tie-break: folded owner name ascending, matching tree order. Keys are
//! unique inside a tree, so the order is total.

use std::cmp::Ordering;
use std::fmt;

use super::OwnerNode;

/// One line of the ranking
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct OwnerSummary {
    /// Display name
    pub name: String,
    /// Number of roster entries
    pub roster_len: usize,
    #[cfg_attr(feature = "serialize", serde(skip))]
    key: String,
}

impl OwnerSummary {
    /// Snapshot of a node
    pub fn of(node: &OwnerNode) -> Self {
        Self {
            name: node.name().to_string(),
            roster_len: node.roster().len(),
            key: node.key().to_string(),
        }
    }

    fn rank_cmp(&self, other: &Self) -> Ordering {
        self.roster_len
            .cmp(&other.roster_len)
            .then_with(|| self.key.cmp(&other.key))
    }
}

impl fmt::Display for OwnerSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Owner: {} (has {} Pokemon)", self.name, self.roster_len)
    }
}

/// Stable sort of gathered nodes by (roster length, folded name)
pub(crate) fn rank<'a, I>(nodes: I) -> Vec<OwnerSummary>
where
    I: IntoIterator<Item = &'a OwnerNode>,
{
    let mut summaries: Vec<OwnerSummary> = nodes.into_iter().map(OwnerSummary::of).collect();
    summaries.sort_by(OwnerSummary::rank_cmp);
    summaries
}
