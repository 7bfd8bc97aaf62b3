//! Row types flowing through the matching pipeline.

use serde::{Deserialize, Serialize};

use crate::group::ClinicalGroup;

/// One column matched to one clinical group with a similarity score.
///
/// The matcher emits up to one candidate per group per column; conflict
/// resolution collapses them to exactly one per column. The resolved and
/// cleaned tables share this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchCandidate {
    /// Dataset column name as it appears in the schema.
    pub column: String,
    /// Normalized base name (semantic tokens joined by underscore).
    pub normalized_name: String,
    /// Proposed clinical group.
    pub group: ClinicalGroup,
    /// Best vocabulary similarity in [0, 1], rounded to 3 decimals.
    pub similarity_score: f64,
    /// Missing-data percentage in [0, 100], rounded to 2 decimals.
    pub missing_pct: f64,
}
