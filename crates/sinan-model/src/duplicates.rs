//! Row types for duplicate-column detection and resolution.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::matching::MatchCandidate;

/// A resolved match labeled with its duplicate-detection key.
///
/// Only rows whose `dup_key` occurs at least twice survive duplicate
/// grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateCandidate {
    #[serde(flatten)]
    pub candidate: MatchCandidate,
    /// Lowercase base name with a naive plural fold applied.
    pub canonical_name: String,
    /// `GROUP__canonical_name`, the duplicate-cluster key.
    pub dup_key: String,
    /// Cluster label shared by all rows of one duplicate set.
    pub duplicate_group: String,
}

/// Why a duplicate column was dropped in favor of another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalReason {
    /// The kept column in the same set has a lower missing percentage.
    HigherMissingPct,
}

impl RemovalReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RemovalReason::HigherMissingPct => "higher_missing_pct",
        }
    }
}

impl fmt::Display for RemovalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A duplicate row slated for removal, annotated with the winner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemovedDuplicate {
    #[serde(flatten)]
    pub row: DuplicateCandidate,
    /// Column kept in this duplicate set.
    pub kept_column: String,
    /// Missing percentage of the kept column.
    pub kept_missing_pct: f64,
    pub removal_reason: RemovalReason,
}

/// Outcome of resolving every duplicate set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DuplicateResolution {
    /// One row per duplicate set: the column with the lowest missing
    /// percentage.
    pub kept: Vec<DuplicateCandidate>,
    /// Every other member of each set, with removal annotations.
    pub removed: Vec<RemovedDuplicate>,
}
