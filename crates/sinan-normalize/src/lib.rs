//! SINAN column-name normalization.

pub mod lexical;
pub mod name;

pub use lexical::{
    DEFAULT_MISSING_THRESHOLD, DEFAULT_SIMILARITY_THRESHOLD, SuspectedDuplicate,
    column_name_similarity, find_suspected_duplicate_columns,
};
pub use name::normalize_column_name;
