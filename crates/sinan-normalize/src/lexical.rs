//! Lexical (non-clinical) duplicate-column detection.
//!
//! Flags pairs of columns whose normalized names look alike and where at
//! least one side is mostly missing, which in SINAN extracts usually
//! means a renamed or legacy variant of the same field. Operates purely
//! on the schema; it says nothing about clinical equivalence.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use rapidfuzz::distance::indel;
use serde::{Deserialize, Serialize};

use crate::name::normalize_column_name;

/// Minimum name similarity for a pair to count as suspect.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.75;

/// Missing percentage above which a column suggests partial or temporal
/// usage.
pub const DEFAULT_MISSING_THRESHOLD: f64 = 95.0;

/// A pair of columns suspected to describe the same field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuspectedDuplicate {
    pub column_1: String,
    pub column_2: String,
    /// Normalized-name similarity, rounded to 3 decimals.
    pub similarity: f64,
    pub missing_pct_1: f64,
    pub missing_pct_2: f64,
}

/// Similarity of two column names after normalization, in [0, 1].
pub fn column_name_similarity(a: &str, b: &str) -> f64 {
    let a_base = normalize_column_name(a).base_name.to_lowercase();
    let b_base = normalize_column_name(b).base_name.to_lowercase();
    if a_base.is_empty() || b_base.is_empty() {
        return 0.0;
    }
    indel::normalized_similarity(a_base.chars(), b_base.chars())
}

/// Identifies pairs of columns that are likely duplicates.
///
/// A pair is suspect when its normalized names exceed
/// `similarity_threshold` and at least one side's missing percentage
/// reaches `missing_threshold`. Columns absent from `missing_by_col` are
/// skipped. Output is sorted by similarity, then missing percentages,
/// descending.
pub fn find_suspected_duplicate_columns(
    columns: &[String],
    missing_by_col: &BTreeMap<String, f64>,
    similarity_threshold: f64,
    missing_threshold: f64,
) -> Vec<SuspectedDuplicate> {
    let mut suspects = Vec::new();

    for (idx, col1) in columns.iter().enumerate() {
        let Some(miss1) = missing_by_col.get(col1) else {
            continue;
        };
        for col2 in &columns[idx + 1..] {
            let Some(miss2) = missing_by_col.get(col2) else {
                continue;
            };

            let sim = column_name_similarity(col1, col2);
            if sim < similarity_threshold {
                continue;
            }
            if *miss1 < missing_threshold && *miss2 < missing_threshold {
                continue;
            }

            suspects.push(SuspectedDuplicate {
                column_1: col1.clone(),
                column_2: col2.clone(),
                similarity: (sim * 1000.0).round() / 1000.0,
                missing_pct_1: (miss1 * 100.0).round() / 100.0,
                missing_pct_2: (miss2 * 100.0).round() / 100.0,
            });
        }
    }

    suspects.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                b.missing_pct_1
                    .partial_cmp(&a.missing_pct_1)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| {
                b.missing_pct_2
                    .partial_cmp(&a.missing_pct_2)
                    .unwrap_or(Ordering::Equal)
            })
    });
    suspects
}
