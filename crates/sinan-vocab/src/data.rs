//! Vocabulary tables, one per clinical group.
//!
//! Each concept lists its known term variants: the official SINAN term,
//! the column spelling observed in real datasets, and common
//! abbreviations or truncations.

use crate::Concept;

pub const SYMPTOMS: &[Concept] = &[
    Concept {
        key: "fever",
        variants: &["FEBRE"],
    },
    Concept {
        key: "myalgia",
        variants: &["MIALGIA"],
    },
    Concept {
        key: "headache",
        variants: &["CEFALEIA", "CEFAL"],
    },
    Concept {
        key: "rash",
        variants: &["EXANTEMA"],
    },
    Concept {
        key: "vomiting",
        variants: &["VOMITO"],
    },
    Concept {
        key: "nausea",
        variants: &["NAUSEA"],
    },
    Concept {
        key: "back_pain",
        variants: &["DOR_COSTAS", "LOMBALGIA"],
    },
    Concept {
        key: "conjunctivitis",
        variants: &["CONJUNTIVITE"],
    },
    Concept {
        key: "arthritis",
        variants: &["ARTRITE"],
    },
    Concept {
        key: "severe_arthralgia",
        variants: &["ARTRALGIA", "ARTRALGIA_INTENSA"],
    },
    Concept {
        key: "petechiae",
        variants: &["PETEQUIA", "PETEQUIA_N"],
    },
    Concept {
        key: "leukopenia",
        variants: &["LEUCOPENIA"],
    },
    Concept {
        key: "tourniquet_test",
        variants: &["LACO", "PROVA_LACO", "LACO_N"],
    },
    Concept {
        key: "retroorbital_pain",
        variants: &["DOR_RETRO", "DOR_RETROORBITAL"],
    },
];

pub const COMORBIDITIES: &[Concept] = &[
    Concept {
        key: "diabetes",
        variants: &["DIABETES", "DIABET"],
    },
    Concept {
        key: "hematologic_disease",
        variants: &["HEMATOLOG", "HEMAT"],
    },
    Concept {
        key: "liver_disease",
        variants: &["HEPATOPAT", "HEPAT"],
    },
    Concept {
        key: "chronic_renal_disease",
        variants: &["RENAL"],
    },
    Concept {
        key: "hypertension",
        variants: &["HIPERTENSA", "HIPERT", "HAS"],
    },
    Concept {
        key: "acid_peptic_disease",
        variants: &["ACIDO_PEPT", "ACIDOPEPT"],
    },
    Concept {
        key: "autoimmune_disease",
        variants: &["AUTO_IMUNE", "AUTOIMUNE"],
    },
];

pub const ALARM_SIGNS: &[Concept] = &[
    Concept {
        key: "postural_hypotension_lipotimia",
        variants: &["ALRM_HIPOT", "HIPOTENSAO_POSTURAL", "LIPOTIMIA"],
    },
    Concept {
        key: "platelet_drop",
        variants: &["ALRM_PLAQ", "PLAQUET", "PLAQUETOPENIA"],
    },
    Concept {
        key: "persistent_vomiting",
        variants: &["ALRM_VOM", "VOMITOS_PERSISTENTES"],
    },
    Concept {
        key: "severe_abdominal_pain",
        variants: &["ALRM_ABDOM", "DOR_ABDOMINAL"],
    },
    Concept {
        key: "lethargy_irritability",
        variants: &["ALRM_LETAR", "LETARGIA", "IRRITABILIDADE"],
    },
    Concept {
        key: "mucosal_bleeding",
        variants: &["ALRM_SANG", "SANGRAMENTO", "HEMORRAGIA"],
    },
    Concept {
        key: "hematocrit_increase",
        variants: &["ALRM_HEMAT", "HEMATOCRITO"],
    },
    Concept {
        key: "hepatomegaly",
        variants: &["ALRM_HEPAT", "HEPATOMEGALIA"],
    },
    Concept {
        key: "fluid_accumulation",
        variants: &["ALRM_LIQ", "ACUMULO_LIQUIDOS", "DERRAME"],
    },
];

pub const SEVERITY_SIGNS: &[Concept] = &[
    Concept {
        key: "weak_pulse",
        variants: &["GRAV_PULSO", "PULSO_DEBIL"],
    },
    Concept {
        key: "narrow_pulse_pressure",
        variants: &["GRAV_CONV", "PA_CONVERGENTE"],
    },
    Concept {
        key: "capillary_refill_delay",
        variants: &["GRAV_ENCH", "ENCHIMENTO_CAPILAR"],
    },
    Concept {
        key: "fluid_with_respiratory_failure",
        variants: &["GRAV_INSUF", "INSUF_RESP", "INSUFICIENCIA_RESPIRATORIA"],
    },
    Concept {
        key: "tachycardia",
        variants: &["GRAV_TAQUI", "TAQUICARDIA"],
    },
    Concept {
        key: "cold_extremities",
        variants: &["GRAV_EXTRE", "EXTREMIDADES_FRIAS"],
    },
    Concept {
        key: "late_hypotension",
        variants: &["GRAV_HIPOT", "HIPOTENSAO_TARDIA"],
    },
    Concept {
        key: "hematemesis",
        variants: &["GRAV_HEMAT", "HEMATEMESE"],
    },
    Concept {
        key: "melena",
        variants: &["GRAV_MELEN", "MELENA"],
    },
    Concept {
        key: "severe_metrorrhagia",
        variants: &["GRAV_METRO", "METRORRAGIA"],
    },
    Concept {
        key: "cns_bleeding",
        variants: &["GRAV_SANG", "SANGRAMENTO_SNC"],
    },
    Concept {
        key: "liver_failure",
        variants: &["GRAV_AST", "AST", "ALT"],
    },
    Concept {
        key: "myocarditis",
        variants: &["GRAV_MIOC", "MIOCARDITE"],
    },
    Concept {
        key: "altered_consciousness",
        variants: &["GRAV_CONSC", "ALTERACAO_CONSCIENCIA"],
    },
    Concept {
        key: "other_organ_failure",
        variants: &["GRAV_ORGAO", "OUTROS_ORGAOS"],
    },
];
