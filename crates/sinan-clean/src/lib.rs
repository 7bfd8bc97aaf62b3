//! Clinical post-processing: corrections after automatic matching and
//! resolution of duplicated clinical columns.

pub mod cleaner;
pub mod duplicates;

pub use cleaner::clean_clinical_matches;
pub use duplicates::{canonical_name, group_clinical_duplicates, resolve_duplicate_columns};
