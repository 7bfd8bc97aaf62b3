//! Rule-based corrections applied after automatic matching.

use sinan_model::{ClinicalGroup, MatchCandidate};

/// Columns the matcher is known to get wrong: a histopathology result
/// field and the autochthonous-transmission flag.
const FALSE_POSITIVE_COLUMNS: [&str; 2] = ["HISTOPA_N", "TPAUTOCTO"];

/// Known group misclassifications fixed unconditionally.
fn forced_group_override(column: &str) -> Option<ClinicalGroup> {
    match column {
        "ACIDO_PEPT" => Some(ClinicalGroup::Comorbidity),
        _ => None,
    }
}

/// Cleans matcher output using domain knowledge: removes known false
/// positives, then applies forced group corrections.
pub fn clean_clinical_matches(matches: &[MatchCandidate]) -> Vec<MatchCandidate> {
    matches
        .iter()
        .filter(|row| {
            let keep = !FALSE_POSITIVE_COLUMNS.contains(&row.column.as_str());
            if !keep {
                tracing::debug!(column = %row.column, "removed known false positive");
            }
            keep
        })
        .map(|row| {
            let mut row = row.clone();
            if let Some(group) = forced_group_override(&row.column) {
                tracing::debug!(column = %row.column, from = %row.group, to = %group, "forced group override");
                row.group = group;
            }
            row
        })
        .collect()
}
