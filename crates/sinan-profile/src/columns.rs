//! Schema inspection helpers for epidemiological DataFrames.
//!
//! Lightweight utilities that tolerate missing or inconsistent column
//! presence across dataset years.

use std::collections::BTreeSet;

use polars::prelude::{AnyValue, DataFrame};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Expected values of the {1, 2} yes/no convention used on SINAN forms.
pub const BINARY_EXPECTED: [&str; 2] = ["1", "2"];

/// Unique-value profile of one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInspection {
    pub column: String,
    pub n_unique: usize,
    /// Sample of unique non-null values, in order of appearance.
    pub unique_values: Vec<String>,
}

/// Conformance of a column to an expected categorical pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternStatus {
    /// Only expected values present.
    Ok,
    /// Expected and unexpected values mixed.
    Mixed,
    /// Only unexpected values.
    NonStandard,
    /// No non-null values at all.
    Empty,
}

impl PatternStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternStatus::Ok => "OK",
            PatternStatus::Mixed => "MIXED",
            PatternStatus::NonStandard => "NON_STANDARD",
            PatternStatus::Empty => "EMPTY",
        }
    }
}

/// Pattern check result for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryPatternCheck {
    pub column: String,
    /// Sorted unique non-null values.
    pub unique_values: Vec<String>,
    pub status: PatternStatus,
}

fn format_numeric(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn any_to_string(value: AnyValue) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(value) => value.to_string(),
        AnyValue::StringOwned(value) => value.to_string(),
        AnyValue::Float64(value) => format_numeric(value),
        AnyValue::Float32(value) => format_numeric(f64::from(value)),
        value => value.to_string(),
    }
}

/// Drops only the listed columns that actually exist in the frame.
pub fn drop_columns_safe(df: &DataFrame, columns: &[String]) -> DataFrame {
    let existing: Vec<&str> = columns
        .iter()
        .map(String::as_str)
        .filter(|name| df.column(name).is_ok())
        .collect();
    tracing::debug!(dropped = existing.len(), "dropped columns");
    df.drop_many(existing)
}

/// Unique non-null values for the selected columns, capped at
/// `max_values` per column, sorted by unique count descending.
///
/// Columns absent from the frame are silently skipped.
pub fn inspect_column_values(
    df: &DataFrame,
    columns: &[String],
    max_values: usize,
) -> Result<Vec<ColumnInspection>> {
    let mut records = Vec::new();

    for name in columns {
        let Ok(column) = df.column(name) else {
            continue;
        };

        let mut seen = BTreeSet::new();
        let mut values = Vec::new();
        for idx in 0..df.height() {
            let value = column.get(idx).unwrap_or(AnyValue::Null);
            if matches!(value, AnyValue::Null) {
                continue;
            }
            let text = any_to_string(value);
            if seen.insert(text.clone()) {
                values.push(text);
            }
        }

        records.push(ColumnInspection {
            column: name.clone(),
            n_unique: values.len(),
            unique_values: values.into_iter().take(max_values).collect(),
        });
    }

    records.sort_by(|a, b| b.n_unique.cmp(&a.n_unique));
    Ok(records)
}

/// Checks whether columns follow a binary/categorical pattern.
///
/// `expected_values` defaults to the {1, 2} convention via
/// [`BINARY_EXPECTED`]. Results are sorted by status name.
pub fn check_binary_pattern(
    df: &DataFrame,
    columns: &[String],
    expected_values: &[&str],
) -> Result<Vec<BinaryPatternCheck>> {
    let expected: BTreeSet<&str> = expected_values.iter().copied().collect();
    let mut records = Vec::new();

    for name in columns {
        let Ok(column) = df.column(name) else {
            continue;
        };

        let mut values = BTreeSet::new();
        for idx in 0..df.height() {
            let value = column.get(idx).unwrap_or(AnyValue::Null);
            if matches!(value, AnyValue::Null) {
                continue;
            }
            values.insert(any_to_string(value));
        }

        let status = if values.is_empty() {
            PatternStatus::Empty
        } else if values.iter().all(|v| expected.contains(v.as_str())) {
            PatternStatus::Ok
        } else if values.iter().any(|v| expected.contains(v.as_str())) {
            PatternStatus::Mixed
        } else {
            PatternStatus::NonStandard
        };

        records.push(BinaryPatternCheck {
            column: name.clone(),
            unique_values: values.into_iter().collect(),
            status,
        });
    }

    records.sort_by(|a, b| a.status.as_str().cmp(b.status.as_str()));
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn drop_ignores_absent_columns() -> anyhow::Result<()> {
        let df = df!(
            "FEBRE" => [1i64, 2],
            "VOMITO" => [1i64, 1],
        )?;
        let out = drop_columns_safe(&df, &names(&["VOMITO", "NAO_EXISTE"]));
        assert_eq!(out.width(), 1);
        assert!(out.column("FEBRE").is_ok());
        Ok(())
    }

    #[test]
    fn inspection_counts_unique_non_null_values() -> anyhow::Result<()> {
        let df = df!(
            "FEBRE" => [Some(1i64), Some(2), Some(2), None],
            "CLASSI_FIN" => [Some(5i64), Some(10), Some(11), Some(12)],
        )?;
        let records = inspect_column_values(&df, &names(&["FEBRE", "CLASSI_FIN"]), 3)?;

        assert_eq!(records[0].column, "CLASSI_FIN");
        assert_eq!(records[0].n_unique, 4);
        assert_eq!(records[0].unique_values.len(), 3);
        assert_eq!(records[1].column, "FEBRE");
        assert_eq!(records[1].n_unique, 2);
        Ok(())
    }

    #[test]
    fn binary_pattern_statuses() -> anyhow::Result<()> {
        let df = df!(
            "OK_COL" => [Some(1i64), Some(2), Some(1)],
            "MIXED_COL" => [Some(1i64), Some(9), None],
            "ODD_COL" => [Some(7i64), Some(8), Some(9)],
            "EMPTY_COL" => [None::<i64>, None, None],
        )?;
        let columns = names(&["OK_COL", "MIXED_COL", "ODD_COL", "EMPTY_COL"]);
        let records = check_binary_pattern(&df, &columns, &BINARY_EXPECTED)?;

        let status_of = |name: &str| {
            records
                .iter()
                .find(|r| r.column == name)
                .map(|r| r.status)
                .expect("column checked")
        };
        assert_eq!(status_of("OK_COL"), PatternStatus::Ok);
        assert_eq!(status_of("MIXED_COL"), PatternStatus::Mixed);
        assert_eq!(status_of("ODD_COL"), PatternStatus::NonStandard);
        assert_eq!(status_of("EMPTY_COL"), PatternStatus::Empty);

        // Sorted by status name: EMPTY < MIXED < NON_STANDARD < OK.
        let order: Vec<&str> = records.iter().map(|r| r.status.as_str()).collect();
        assert_eq!(order, vec!["EMPTY", "MIXED", "NON_STANDARD", "OK"]);
        Ok(())
    }
}
