//! Structural decomposition of a SINAN column name.

use serde::{Deserialize, Serialize};

/// A column name decomposed into structural and semantic components.
///
/// Fully determined by the input name; computing it twice for the same
/// name yields the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedName {
    /// The column name exactly as supplied.
    pub original: String,
    /// Uppercased name with everything but letters and underscores removed.
    pub cleaned: String,
    /// Semantic tokens followed by structural tokens.
    pub raw_tokens: Vec<String>,
    /// Tokens carrying clinical meaning, in original order.
    pub semantic_tokens: Vec<String>,
    /// Administrative prefixes and single-letter suffix markers.
    pub structural_tokens: Vec<String>,
    /// Semantic tokens rejoined with underscores.
    pub base_name: String,
}

impl NormalizedName {
    /// True when no semantic tokens survived normalization.
    pub fn is_empty(&self) -> bool {
        self.semantic_tokens.is_empty()
    }
}
