//! Clinical column matching for SINAN dengue datasets.
//!
//! The matcher proposes clinical groups per column from the vocabulary;
//! the resolver enforces exactly one group per column using the SINAN
//! clinical hierarchy.

pub mod matcher;
pub mod resolver;

pub use matcher::{
    DEFAULT_SIMILARITY_THRESHOLD, best_vocab_match, infer_group_by_prefix,
    match_clinical_columns, similarity,
};
pub use resolver::resolve_group_conflicts;
