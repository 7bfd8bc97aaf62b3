//! Duplicate-concept detection and resolution.
//!
//! Two columns are duplicate candidates when they share a clinical group
//! and a canonical base name. The canonical form folds naive plurals
//! (trailing "s" on names longer than four characters); duplicate keys
//! downstream depend on this exact heuristic, so it is preserved as-is
//! even though it mis-folds some non-plural words.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use sinan_model::{
    DuplicateCandidate, DuplicateResolution, MatchCandidate, RemovalReason, RemovedDuplicate,
};

/// Canonical form of a normalized name for duplicate detection.
pub fn canonical_name(name: &str) -> String {
    let lowered = name.to_lowercase();
    if lowered.len() > 4 && lowered.ends_with('s') {
        lowered[..lowered.len() - 1].to_string()
    } else {
        lowered
    }
}

fn to_duplicate_candidate(row: &MatchCandidate) -> DuplicateCandidate {
    let canonical = canonical_name(&row.normalized_name);
    let dup_key = format!("{}__{}", row.group.as_str(), canonical);
    DuplicateCandidate {
        candidate: row.clone(),
        duplicate_group: canonical.clone(),
        canonical_name: canonical,
        dup_key,
    }
}

/// Identifies potentially duplicated clinical columns.
///
/// Only rows whose duplicate key (group + canonical name) occurs at
/// least twice are returned, sorted by group, duplicate group, and
/// missing percentage ascending.
pub fn group_clinical_duplicates(matches: &[MatchCandidate]) -> Vec<DuplicateCandidate> {
    let rows: Vec<DuplicateCandidate> = matches.iter().map(to_duplicate_candidate).collect();

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for row in &rows {
        *counts.entry(row.dup_key.as_str()).or_insert(0) += 1;
    }

    let mut duplicated: Vec<DuplicateCandidate> = rows
        .iter()
        .filter(|row| counts.get(row.dup_key.as_str()).copied().unwrap_or(0) > 1)
        .cloned()
        .collect();

    duplicated.sort_by(|a, b| {
        a.candidate
            .group
            .as_str()
            .cmp(b.candidate.group.as_str())
            .then_with(|| a.duplicate_group.cmp(&b.duplicate_group))
            .then_with(|| {
                a.candidate
                    .missing_pct
                    .partial_cmp(&b.candidate.missing_pct)
                    .unwrap_or(Ordering::Equal)
            })
    });
    duplicated
}

/// Resolves duplicated columns by missing percentage.
///
/// Within each duplicate set the column with the lowest missing
/// percentage is kept (ties keep the earlier row); every other column
/// is emitted as removed, annotated with the winner.
pub fn resolve_duplicate_columns(candidates: &[DuplicateCandidate]) -> DuplicateResolution {
    let mut by_key: BTreeMap<&str, Vec<&DuplicateCandidate>> = BTreeMap::new();
    for row in candidates {
        by_key.entry(row.dup_key.as_str()).or_default().push(row);
    }

    let mut resolution = DuplicateResolution::default();

    for (dup_key, mut rows) in by_key {
        // Stable: ties preserve original row order.
        rows.sort_by(|a, b| {
            a.candidate
                .missing_pct
                .partial_cmp(&b.candidate.missing_pct)
                .unwrap_or(Ordering::Equal)
        });

        let best = rows[0];
        tracing::debug!(
            dup_key,
            kept = %best.candidate.column,
            missing_pct = best.candidate.missing_pct,
            "duplicate set resolved"
        );
        resolution.kept.push(best.clone());

        for row in &rows[1..] {
            resolution.removed.push(RemovedDuplicate {
                row: (*row).clone(),
                kept_column: best.candidate.column.clone(),
                kept_missing_pct: best.candidate.missing_pct,
                removal_reason: RemovalReason::HigherMissingPct,
            });
        }
    }

    resolution
}
