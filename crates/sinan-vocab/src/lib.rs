//! Static clinical vocabulary for SINAN dengue notification datasets.
//!
//! Maps each [`ClinicalGroup`] to its concepts, and each concept to the
//! term variants under which it appears in real column names. The tables
//! are compile-time constants; nothing here is ever mutated at runtime,
//! so unsynchronized concurrent reads are safe.

mod data;

pub use data::{ALARM_SIGNS, COMORBIDITIES, SEVERITY_SIGNS, SYMPTOMS};

use sinan_model::ClinicalGroup;

/// A clinical concept and the term variants that identify it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Concept {
    /// Stable concept key (e.g. "fever", "weak_pulse").
    pub key: &'static str,
    /// Known spellings, ordered official term first.
    pub variants: &'static [&'static str],
}

/// The vocabulary table for one clinical group.
pub fn vocabulary(group: ClinicalGroup) -> &'static [Concept] {
    match group {
        ClinicalGroup::Symptom => SYMPTOMS,
        ClinicalGroup::Alarm => ALARM_SIGNS,
        ClinicalGroup::Severity => SEVERITY_SIGNS,
        ClinicalGroup::Comorbidity => COMORBIDITIES,
    }
}

/// Looks up a concept by key within one group.
pub fn concept(group: ClinicalGroup, key: &str) -> Option<&'static Concept> {
    vocabulary(group).iter().find(|c| c.key == key)
}
