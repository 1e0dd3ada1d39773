//! Heuristic quality checks over a finished column profile.
//!
//! Checks run in a fixed order and each one adds at most one issue, so the
//! issue list of a column is stable between runs.

use crate::config::ProfilerConfig;
use crate::types::{ColumnProfile, ColumnStats, NumericColumnProfile, QualityIssue, TextColumnProfile};

pub struct DataQualityAnalyzer;

impl DataQualityAnalyzer {
    /// Heuristic quality notes for one column, in a fixed order:
    /// missing data, low cardinality, identifier, outliers, variability,
    /// dominant value.
    pub fn identify_issues(
        column: &ColumnProfile,
        n_rows: usize,
        config: &ProfilerConfig,
    ) -> Vec<QualityIssue> {
        let mut issues = Vec::new();

        issues.extend(Self::analyze_missing_values(column, config));
        issues.extend(Self::analyze_cardinality(column, n_rows, config));
        issues.extend(Self::analyze_identifier(column, config));

        match &column.stats {
            ColumnStats::Number(stats) => {
                // Distribution checks need at least one parsed value
                if stats.std.is_some() {
                    issues.extend(Self::analyze_outliers(stats, config));
                    issues.extend(Self::analyze_variability(stats, config));
                }
            }
            ColumnStats::Text(stats) => {
                issues.extend(Self::analyze_dominant_value(stats, n_rows, config));
            }
        }

        issues
    }

    fn analyze_missing_values(
        column: &ColumnProfile,
        config: &ProfilerConfig,
    ) -> Option<QualityIssue> {
        let missing_pct = column.counts().missing_pct;
        let message = format!("High missing data: {:.1}% of values are missing", missing_pct);

        if missing_pct > config.high_missing_pct {
            Some(QualityIssue::warning(message))
        } else if missing_pct > config.moderate_missing_pct {
            Some(QualityIssue::info(message))
        } else {
            None
        }
    }

    /// Numeric columns only; a handful of categories in text is expected.
    fn analyze_cardinality(
        column: &ColumnProfile,
        n_rows: usize,
        config: &ProfilerConfig,
    ) -> Option<QualityIssue> {
        let unique = column.counts().unique;
        let is_numeric = matches!(column.stats, ColumnStats::Number(_));

        (is_numeric
            && n_rows > config.low_cardinality_min_rows
            && unique < config.low_cardinality_max_unique)
            .then(|| {
                QualityIssue::info(format!(
                    "Low cardinality: only {} unique values in {} rows",
                    unique, n_rows
                ))
            })
    }

    fn analyze_identifier(column: &ColumnProfile, config: &ProfilerConfig) -> Option<QualityIssue> {
        let counts = column.counts();

        (counts.unique == counts.count && counts.count > config.identifier_min_count).then(|| {
            QualityIssue::info("All values are unique - this may be an identifier column")
        })
    }

    fn analyze_outliers(
        stats: &NumericColumnProfile,
        config: &ProfilerConfig,
    ) -> Option<QualityIssue> {
        let (q1, q3) = (stats.q1?, stats.q3?);
        let (min, max) = (stats.min?, stats.max?);

        let iqr = q3 - q1;
        let lower_bound = q1 - config.iqr_multiplier * iqr;
        let upper_bound = q3 + config.iqr_multiplier * iqr;

        (min < lower_bound || max > upper_bound).then(|| {
            QualityIssue::info(format!(
                "Potential outliers detected (values outside [{:.2}, {:.2}])",
                lower_bound, upper_bound
            ))
        })
    }

    fn analyze_variability(
        stats: &NumericColumnProfile,
        config: &ProfilerConfig,
    ) -> Option<QualityIssue> {
        let (mean, std) = (stats.mean?, stats.std?);

        (mean != 0.0 && std / mean.abs() > config.variability_ratio).then(|| {
            QualityIssue::info(format!(
                "High variability: Standard deviation ({:.2}) is large relative to mean ({:.2})",
                std, mean
            ))
        })
    }

    fn analyze_dominant_value(
        stats: &TextColumnProfile,
        n_rows: usize,
        config: &ProfilerConfig,
    ) -> Option<QualityIssue> {
        let top = stats.top.first()?;
        if n_rows == 0 {
            return None;
        }

        let top_pct = top.count as f64 / n_rows as f64 * 100.0;
        (top_pct > config.dominant_value_pct).then(|| {
            QualityIssue::info(format!(
                "Single dominant value: '{}' appears in {:.1}% of rows",
                top.value, top_pct
            ))
        })
    }
}
