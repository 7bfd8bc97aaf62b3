//! Group conflict resolution.
//!
//! A column that clears the similarity threshold in more than one group
//! must end up in exactly one. Resolution applies an ordered cascade of
//! named rules (prefix evidence, then keyword evidence), falling back to
//! the clinical priority hierarchy tie-broken by score.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use sinan_model::{ClinicalGroup, MatchCandidate};

const COMORBIDITY_KEYWORDS: [&str; 10] = [
    "RENAL", "DIABET", "AUTO", "HEPAT", "HEMATO", "HIPERT", "CARDIO", "PULMON", "NEURO", "IMUNO",
];

const SYMPTOM_KEYWORDS: [&str; 11] = [
    "DOR", "FEBRE", "CEFA", "MIAL", "ARTR", "NAUSE", "VOM", "EXANT", "PETE", "CONJUNT", "LEUCO",
];

/// A single resolution rule: when the predicate holds for the column,
/// keep the candidate of the target group, if one exists.
struct ResolutionRule {
    name: &'static str,
    target: ClinicalGroup,
    applies: fn(column_upper: &str, base_upper: &str) -> bool,
}

fn has_severity_prefix(column_upper: &str, _base_upper: &str) -> bool {
    column_upper.starts_with("GRAV_")
}

fn has_alarm_prefix(column_upper: &str, _base_upper: &str) -> bool {
    column_upper.starts_with("ALRM_")
}

fn has_comorbidity_keyword(column_upper: &str, base_upper: &str) -> bool {
    COMORBIDITY_KEYWORDS
        .iter()
        .any(|k| column_upper.contains(k) || base_upper.contains(k))
}

fn has_symptom_keyword(column_upper: &str, base_upper: &str) -> bool {
    SYMPTOM_KEYWORDS
        .iter()
        .any(|k| column_upper.contains(k) || base_upper.contains(k))
}

/// The cascade, in evaluation order. First rule whose predicate holds
/// and whose target group is among the candidates wins.
const RULES: [ResolutionRule; 4] = [
    ResolutionRule {
        name: "severity_prefix",
        target: ClinicalGroup::Severity,
        applies: has_severity_prefix,
    },
    ResolutionRule {
        name: "alarm_prefix",
        target: ClinicalGroup::Alarm,
        applies: has_alarm_prefix,
    },
    ResolutionRule {
        name: "comorbidity_keyword",
        target: ClinicalGroup::Comorbidity,
        applies: has_comorbidity_keyword,
    },
    ResolutionRule {
        name: "symptom_keyword",
        target: ClinicalGroup::Symptom,
        applies: has_symptom_keyword,
    },
];

/// Collapses multi-group matches to exactly one row per column.
///
/// Columns with a single candidate pass through unchanged. Otherwise the
/// rule cascade is applied; when no rule fires, candidates are ranked by
/// group priority (severity > alarm > symptom > comorbidity) and score.
///
/// The output carries exactly one row per distinct input column, ordered
/// by column name. Running the resolver on its own output is a no-op.
pub fn resolve_group_conflicts(matches: &[MatchCandidate]) -> Vec<MatchCandidate> {
    let mut by_column: BTreeMap<&str, Vec<&MatchCandidate>> = BTreeMap::new();
    for row in matches {
        by_column.entry(row.column.as_str()).or_default().push(row);
    }

    let mut resolved = Vec::with_capacity(by_column.len());

    for (column, rows) in by_column {
        if rows.iter().all(|r| r.group == rows[0].group) {
            resolved.push(rows[0].clone());
            continue;
        }

        let column_upper = column.to_uppercase();
        let base_upper = rows[0].normalized_name.to_uppercase();

        let mut chosen: Option<MatchCandidate> = None;
        for rule in &RULES {
            if (rule.applies)(&column_upper, &base_upper)
                && let Some(row) = rows.iter().find(|r| r.group == rule.target)
            {
                tracing::debug!(column, rule = rule.name, group = %rule.target, "conflict resolved by rule");
                chosen = Some((*row).clone());
                break;
            }
        }

        resolved.push(chosen.unwrap_or_else(|| {
            let mut ranked = rows.clone();
            ranked.sort_by(|a, b| {
                b.group
                    .priority()
                    .cmp(&a.group.priority())
                    .then_with(|| {
                        b.similarity_score
                            .partial_cmp(&a.similarity_score)
                            .unwrap_or(Ordering::Equal)
                    })
            });
            tracing::debug!(column, group = %ranked[0].group, "conflict resolved by priority");
            ranked[0].clone()
        }));
    }

    resolved
}
