//! Missing-data analysis and schema auditing for epidemiological
//! datasets.
//!
//! The only crate in the workspace that touches polars DataFrames; the
//! clinical matching pipeline consumes its output as plain values.

pub mod columns;
pub mod error;
pub mod missing;

pub use columns::{
    BINARY_EXPECTED, BinaryPatternCheck, ColumnInspection, PatternStatus, check_binary_pattern,
    drop_columns_safe, inspect_column_values,
};
pub use error::{ProfileError, Result};
pub use missing::{
    MissingBand, MissingSummary, add_missing_ranges, calculate_missing_by_col,
    columns_with_missing_at_least, missing_map,
};
