//! Missing-data quantification per column.
//!
//! Domain-agnostic: works on any DataFrame, and feeds the clinical
//! matching pipeline through [`missing_map`].

use std::cmp::Ordering;
use std::collections::BTreeMap;

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};

use crate::error::{ProfileError, Result};

/// Missing count and percentage for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingSummary {
    pub column: String,
    pub missing_count: usize,
    /// Percentage of null rows, in [0, 100].
    pub missing_pct: f64,
}

/// A missing summary labeled with its configured percentage band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingBand {
    pub column: String,
    pub missing_pct: f64,
    /// Band label, or `None` when the value falls outside every bin.
    pub missing_range: Option<String>,
}

/// Calculates missing count and percentage per column, sorted by
/// percentage descending.
///
/// Fails on a zero-row frame, where percentages are undefined.
pub fn calculate_missing_by_col(df: &DataFrame) -> Result<Vec<MissingSummary>> {
    if df.height() == 0 {
        return Err(ProfileError::EmptyFrame);
    }
    let total = df.height() as f64;

    let mut summaries = Vec::with_capacity(df.width());
    for name in df.get_column_names() {
        let column = df.column(name)?;
        let missing_count = column.null_count();
        summaries.push(MissingSummary {
            column: name.to_string(),
            missing_count,
            missing_pct: missing_count as f64 / total * 100.0,
        });
    }

    summaries.sort_by(|a, b| {
        b.missing_pct
            .partial_cmp(&a.missing_pct)
            .unwrap_or(Ordering::Equal)
    });
    Ok(summaries)
}

/// Column names whose missing percentage is at least `pct`.
pub fn columns_with_missing_at_least(summaries: &[MissingSummary], pct: f64) -> Vec<String> {
    summaries
        .iter()
        .filter(|s| s.missing_pct >= pct)
        .map(|s| s.column.clone())
        .collect()
}

/// Column-to-percentage lookup consumed by the clinical matcher.
pub fn missing_map(summaries: &[MissingSummary]) -> BTreeMap<String, f64> {
    summaries
        .iter()
        .map(|s| (s.column.clone(), s.missing_pct))
        .collect()
}

/// Labels each summary with the band its percentage falls into.
///
/// `bins` are band edges; band `i` covers `(bins[i], bins[i+1]]`, with
/// the lowest edge included in the first band. `labels` must have one
/// entry fewer than `bins`.
pub fn add_missing_ranges(
    summaries: &[MissingSummary],
    bins: &[f64],
    labels: &[&str],
) -> Result<Vec<MissingBand>> {
    let expected = bins.len().saturating_sub(1);
    if labels.len() != expected {
        return Err(ProfileError::LabelCountMismatch {
            bins: bins.len(),
            expected,
            got: labels.len(),
        });
    }

    let banded = summaries
        .iter()
        .map(|s| MissingBand {
            column: s.column.clone(),
            missing_pct: s.missing_pct,
            missing_range: band_label(s.missing_pct, bins, labels),
        })
        .collect();
    Ok(banded)
}

fn band_label(value: f64, bins: &[f64], labels: &[&str]) -> Option<String> {
    for (idx, label) in labels.iter().enumerate() {
        let low = bins[idx];
        let high = bins[idx + 1];
        let in_band = if idx == 0 {
            value >= low && value <= high
        } else {
            value > low && value <= high
        };
        if in_band {
            return Some((*label).to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    #[test]
    fn counts_and_percentages_per_column() -> anyhow::Result<()> {
        let df = df!(
            "FEBRE" => [Some(1i64), None, Some(2), Some(1)],
            "VOMITO" => [None::<i64>, None, None, None],
            "NU_ANO" => [Some(2024i64), Some(2024), Some(2025), Some(2025)],
        )?;

        let summaries = calculate_missing_by_col(&df)?;
        assert_eq!(summaries.len(), 3);
        // Sorted by missing_pct descending.
        assert_eq!(summaries[0].column, "VOMITO");
        assert_eq!(summaries[0].missing_pct, 100.0);
        assert_eq!(summaries[1].column, "FEBRE");
        assert_eq!(summaries[1].missing_count, 1);
        assert_eq!(summaries[1].missing_pct, 25.0);
        assert_eq!(summaries[2].missing_pct, 0.0);
        Ok(())
    }

    #[test]
    fn empty_frame_is_an_error() {
        let df = DataFrame::empty();
        assert!(matches!(
            calculate_missing_by_col(&df),
            Err(ProfileError::EmptyFrame)
        ));
    }

    #[test]
    fn threshold_filter_and_map() {
        let summaries = vec![
            MissingSummary {
                column: "A".to_string(),
                missing_count: 99,
                missing_pct: 99.0,
            },
            MissingSummary {
                column: "B".to_string(),
                missing_count: 10,
                missing_pct: 10.0,
            },
        ];
        assert_eq!(
            columns_with_missing_at_least(&summaries, 95.0),
            vec!["A".to_string()]
        );
        let map = missing_map(&summaries);
        assert_eq!(map.get("B"), Some(&10.0));
    }

    #[test]
    fn banding_validates_label_count() {
        let summaries = vec![];
        let err = add_missing_ranges(&summaries, &[0.0, 50.0, 100.0], &["low"]);
        assert!(matches!(
            err,
            Err(ProfileError::LabelCountMismatch { expected: 2, .. })
        ));
    }

    #[test]
    fn lowest_edge_belongs_to_first_band() {
        let summaries = vec![
            MissingSummary {
                column: "A".to_string(),
                missing_count: 0,
                missing_pct: 0.0,
            },
            MissingSummary {
                column: "B".to_string(),
                missing_count: 0,
                missing_pct: 75.0,
            },
        ];
        let bands =
            add_missing_ranges(&summaries, &[0.0, 50.0, 100.0], &["low", "high"]).expect("bands");
        assert_eq!(bands[0].missing_range.as_deref(), Some("low"));
        assert_eq!(bands[1].missing_range.as_deref(), Some("high"));
    }
}
