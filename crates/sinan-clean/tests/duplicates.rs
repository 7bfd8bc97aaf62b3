use sinan_clean::{group_clinical_duplicates, resolve_duplicate_columns};
use sinan_model::{ClinicalGroup, MatchCandidate};

fn candidate(column: &str, group: ClinicalGroup, missing_pct: f64) -> MatchCandidate {
    MatchCandidate {
        column: column.to_string(),
        normalized_name: column.to_string(),
        group,
        similarity_score: 0.9,
        missing_pct,
    }
}

#[test]
fn singular_and_plural_share_a_duplicate_set() {
    let matches = vec![
        candidate("FEBRE", ClinicalGroup::Symptom, 1.0),
        candidate("FEBRES", ClinicalGroup::Symptom, 12.5),
        candidate("VOMITO", ClinicalGroup::Symptom, 3.0),
    ];

    let dups = group_clinical_duplicates(&matches);
    assert_eq!(dups.len(), 2);
    assert!(dups.iter().all(|d| d.dup_key == "SYMPTOM__febre"));
    assert!(dups.iter().all(|d| d.duplicate_group == "febre"));
    // Sorted by missing_pct within the set.
    assert_eq!(dups[0].candidate.column, "FEBRE");
    assert_eq!(dups[1].candidate.column, "FEBRES");
}

#[test]
fn same_name_different_group_is_not_a_duplicate() {
    let matches = vec![
        candidate("SANGRAMENTO", ClinicalGroup::Alarm, 1.0),
        candidate("SANGRAMENTO_G", ClinicalGroup::Severity, 2.0),
    ];
    assert!(group_clinical_duplicates(&matches).is_empty());
}

#[test]
fn singleton_keys_never_appear() {
    let matches = vec![
        candidate("FEBRE", ClinicalGroup::Symptom, 1.0),
        candidate("MIALGIA", ClinicalGroup::Symptom, 4.0),
    ];
    assert!(group_clinical_duplicates(&matches).is_empty());
}

#[test]
fn duplicates_sorted_by_group_then_cluster_then_missing() {
    let matches = vec![
        candidate("SANGRAMENTOS", ClinicalGroup::Alarm, 9.0),
        candidate("SANGRAMENTO", ClinicalGroup::Alarm, 2.0),
        candidate("FEBRES", ClinicalGroup::Symptom, 5.0),
        candidate("FEBRE", ClinicalGroup::Symptom, 1.0),
    ];

    let dups = group_clinical_duplicates(&matches);
    let order: Vec<(&str, f64)> = dups
        .iter()
        .map(|d| (d.candidate.column.as_str(), d.candidate.missing_pct))
        .collect();
    assert_eq!(
        order,
        vec![
            ("SANGRAMENTO", 2.0),
            ("SANGRAMENTOS", 9.0),
            ("FEBRE", 1.0),
            ("FEBRES", 5.0),
        ]
    );
}

#[test]
fn resolution_keeps_lowest_missing_pct() {
    let matches = vec![
        candidate("FEBRES", ClinicalGroup::Symptom, 12.5),
        candidate("FEBRE", ClinicalGroup::Symptom, 1.0),
    ];
    let dups = group_clinical_duplicates(&matches);
    let resolution = resolve_duplicate_columns(&dups);

    assert_eq!(resolution.kept.len(), 1);
    assert_eq!(resolution.kept[0].candidate.column, "FEBRE");

    assert_eq!(resolution.removed.len(), 1);
    let removed = &resolution.removed[0];
    assert_eq!(removed.row.candidate.column, "FEBRES");
    assert_eq!(removed.kept_column, "FEBRE");
    assert_eq!(removed.kept_missing_pct, 1.0);
    assert_eq!(removed.removal_reason.as_str(), "higher_missing_pct");
}

#[test]
fn kept_missing_pct_bounds_every_removed_row() {
    let matches = vec![
        candidate("FEBRE", ClinicalGroup::Symptom, 7.0),
        candidate("FEBRES", ClinicalGroup::Symptom, 3.0),
        candidate("SANGRAMENTO", ClinicalGroup::Alarm, 50.0),
        candidate("SANGRAMENTOS", ClinicalGroup::Alarm, 20.0),
    ];
    let resolution = resolve_duplicate_columns(&group_clinical_duplicates(&matches));

    assert_eq!(resolution.kept.len(), 2);
    for removed in &resolution.removed {
        assert!(removed.kept_missing_pct <= removed.row.candidate.missing_pct);
    }
}

#[test]
fn ties_keep_the_earlier_row() {
    let matches = vec![
        candidate("FEBRE", ClinicalGroup::Symptom, 5.0),
        candidate("FEBRES", ClinicalGroup::Symptom, 5.0),
    ];
    let resolution = resolve_duplicate_columns(&group_clinical_duplicates(&matches));
    assert_eq!(resolution.kept[0].candidate.column, "FEBRE");
}

#[test]
fn empty_input_yields_empty_resolution() {
    let resolution = resolve_duplicate_columns(&[]);
    assert!(resolution.kept.is_empty());
    assert!(resolution.removed.is_empty());
    assert!(group_clinical_duplicates(&[]).is_empty());
}
