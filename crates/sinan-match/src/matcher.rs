//! Clinical column matcher.
//!
//! Identifies clinical variables by fuzzy-matching normalized column
//! names and semantic tokens against the group vocabularies, after
//! filtering out administrative, laboratory, and identifier columns.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use rapidfuzz::distance::indel;

use sinan_model::{ClinicalGroup, MatchCandidate};
use sinan_normalize::normalize_column_name;
use sinan_vocab::Concept;

/// Minimum vocabulary similarity for a candidate to be emitted.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.6;

/// Columns that are clearly administrative or identifiers.
const FORBIDDEN_PREFIXES: [&str; 2] = ["DT_", "ID_"];

/// Administrative and laboratory-result tokens that disqualify a column.
const FORBIDDEN_TOKENS: [&str; 12] = [
    "ID", "RESUL", "RESULT", "NS1", "PCR", "PRNT", "SORO", "VI", "REGION", "AGRAVO", "BAINF",
    "FHD",
];

/// Sequence-matching ratio between two strings, in [0, 1].
///
/// 2*M/T where M is the number of matched characters and T the combined
/// length. Empty input on either side scores 0.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    indel::normalized_similarity(a.chars(), b.chars())
}

/// Group forced by the SINAN column prefix, if any.
///
/// `GRAV_` columns are severity signs and `ALRM_` columns are alarm
/// signs by form design; the matcher only scans the forced group for
/// these columns.
pub fn infer_group_by_prefix(column_name: &str) -> Option<ClinicalGroup> {
    let col = column_name.to_uppercase();
    if col.starts_with("GRAV_") {
        return Some(ClinicalGroup::Severity);
    }
    if col.starts_with("ALRM_") {
        return Some(ClinicalGroup::Alarm);
    }
    None
}

fn contains_forbidden_token(tokens: &[String]) -> bool {
    tokens
        .iter()
        .any(|t| FORBIDDEN_TOKENS.contains(&t.to_uppercase().as_str()))
}

/// Best-matching concept over every variant, comparison text, and
/// underscore sub-token, with its score.
///
/// Returns `None` when nothing scored above zero.
pub fn best_vocab_match(texts: &[String], vocab: &[Concept]) -> Option<(&'static str, f64)> {
    let mut best_concept = None;
    let mut best_score = 0.0;

    for concept in vocab {
        for variant in concept.variants {
            let v = variant.to_lowercase();
            for text in texts {
                for token in text.split('_') {
                    let score = similarity(token, &v);
                    if score > best_score {
                        best_score = score;
                        best_concept = Some(concept.key);
                    }
                }
            }
        }
    }

    best_concept.map(|key| (key, best_score))
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Matches dataset columns to clinical groups.
///
/// Emits at most one candidate per group per column: the group's best
/// vocabulary score, provided it reaches `similarity_threshold`.
/// Columns whose uppercased name starts with a forbidden prefix, or
/// whose semantic tokens include a forbidden token, are skipped
/// entirely. A column absent from `missing_by_col` defaults to a
/// missing percentage of 0.
///
/// Output is sorted by group name, then column, then score descending.
pub fn match_clinical_columns(
    columns: &[String],
    missing_by_col: &BTreeMap<String, f64>,
    similarity_threshold: f64,
) -> Vec<MatchCandidate> {
    let mut records = Vec::new();

    for col in columns {
        let col_upper = col.to_uppercase();

        // Hard block by prefix
        if FORBIDDEN_PREFIXES.iter().any(|p| col_upper.starts_with(p)) {
            continue;
        }

        let norm = normalize_column_name(col);

        // Block administrative / lab columns by tokens
        if contains_forbidden_token(&norm.semantic_tokens) {
            continue;
        }

        let mut texts_to_compare = vec![norm.base_name.to_lowercase(), col.to_lowercase()];
        texts_to_compare.extend(norm.semantic_tokens.iter().map(|t| t.to_lowercase()));

        let missing_pct = missing_by_col.get(col).copied().unwrap_or(0.0);

        let forced_group = infer_group_by_prefix(col);

        for group in ClinicalGroup::ALL {
            // Respect the SINAN hierarchy encoded in the prefix.
            if let Some(forced) = forced_group
                && group != forced
            {
                continue;
            }

            let Some((concept, score)) = best_vocab_match(&texts_to_compare, sinan_vocab::vocabulary(group))
            else {
                continue;
            };
            if score < similarity_threshold {
                continue;
            }

            tracing::debug!(
                column = %col,
                group = %group,
                concept,
                score,
                "column matched clinical vocabulary"
            );

            records.push(MatchCandidate {
                column: col.clone(),
                normalized_name: norm.base_name.clone(),
                group,
                similarity_score: round3(score),
                missing_pct: round2(missing_pct),
            });
        }
    }

    records.sort_by(|a, b| {
        a.group
            .as_str()
            .cmp(b.group.as_str())
            .then_with(|| a.column.cmp(&b.column))
            .then_with(|| {
                b.similarity_score
                    .partial_cmp(&a.similarity_score)
                    .unwrap_or(Ordering::Equal)
            })
    });
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn similarity_matches_sequence_ratio() {
        assert_eq!(similarity("febre", "febre"), 1.0);
        // 2 * 5 matched chars / 11 total
        let score = similarity("febres", "febre");
        assert!((score - 10.0 / 11.0).abs() < 1e-9);
        assert_eq!(similarity("", "febre"), 0.0);
    }

    #[test]
    fn prefix_forces_clinical_group() {
        assert_eq!(
            infer_group_by_prefix("GRAV_PULSO"),
            Some(ClinicalGroup::Severity)
        );
        assert_eq!(
            infer_group_by_prefix("alrm_hipot"),
            Some(ClinicalGroup::Alarm)
        );
        assert_eq!(infer_group_by_prefix("FEBRE"), None);
    }

    #[test]
    fn best_vocab_match_is_none_when_nothing_scores() {
        let concepts = sinan_vocab::vocabulary(ClinicalGroup::Symptom);
        assert!(best_vocab_match(&[String::new()], concepts).is_none());
    }

    // Length 1-2 tokens can score high against short abbreviations; the
    // metric has no minimum token length. Pinned, not "fixed".
    #[test]
    fn short_token_scores_are_possible() {
        let score = similarity("as", "ast");
        assert!(score > 0.7);
    }
}
