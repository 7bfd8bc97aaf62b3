//! Clinical group classification for SINAN dengue notification columns.
//!
//! The 2014 WHO/MS dengue case definition organizes clinical findings into
//! symptoms, alarm signs, severity signs, and comorbidities. SINAN encodes
//! this hierarchy in column prefixes (`GRAV_` for severity, `ALRM_` for
//! alarm signs).

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four clinical groups a dataset column can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClinicalGroup {
    /// General dengue symptom (fever, myalgia, rash, ...).
    Symptom,
    /// Alarm sign per the 2014 dengue case definition.
    Alarm,
    /// Severity sign (severe dengue criteria).
    Severity,
    /// Pre-existing comorbidity recorded on the notification form.
    Comorbidity,
}

impl ClinicalGroup {
    /// All groups, in the order the matcher scans them.
    pub const ALL: [ClinicalGroup; 4] = [
        ClinicalGroup::Symptom,
        ClinicalGroup::Alarm,
        ClinicalGroup::Severity,
        ClinicalGroup::Comorbidity,
    ];

    /// Canonical uppercase name, as used in duplicate keys and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClinicalGroup::Symptom => "SYMPTOM",
            ClinicalGroup::Alarm => "ALARM",
            ClinicalGroup::Severity => "SEVERITY",
            ClinicalGroup::Comorbidity => "COMORBIDITY",
        }
    }

    /// Parse a group from its canonical name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "SYMPTOM" => Some(ClinicalGroup::Symptom),
            "ALARM" => Some(ClinicalGroup::Alarm),
            "SEVERITY" => Some(ClinicalGroup::Severity),
            "COMORBIDITY" => Some(ClinicalGroup::Comorbidity),
            _ => None,
        }
    }

    /// Clinical priority used by conflict resolution (higher dominates).
    ///
    /// Severity signs dominate alarm signs, which dominate symptoms, which
    /// dominate comorbidities.
    pub fn priority(&self) -> u8 {
        match self {
            ClinicalGroup::Severity => 3,
            ClinicalGroup::Alarm => 2,
            ClinicalGroup::Symptom => 1,
            ClinicalGroup::Comorbidity => 0,
        }
    }
}

impl fmt::Display for ClinicalGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
