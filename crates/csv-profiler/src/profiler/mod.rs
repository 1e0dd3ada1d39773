//! Data profiling module for dataset analysis.
//!
//! This module turns rows into a [`Report`]:
//! - Column extraction (first-row key order, missing keys padded)
//! - Type inference for columns
//! - Numeric and text statistics
//! - Quality checks via [`DataQualityAnalyzer`]

mod statistics;
mod type_inference;

use crate::config::ProfilerConfig;
use crate::quality::DataQualityAnalyzer;
use crate::types::{ColumnProfile, ColumnStats, ColumnType, Report, Row};
use tracing::debug;

pub(crate) use statistics::{numeric_stats, text_stats};
pub(crate) use type_inference::infer_type;

/// Data profiler for analyzing dataset structure and characteristics.
///
/// Profiling is a pure function of the rows and the configuration: the same
/// input always produces the same report.
#[derive(Debug, Clone, Default)]
pub struct DataProfiler {
    config: ProfilerConfig,
}

impl DataProfiler {
    pub fn new(config: ProfilerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProfilerConfig {
        &self.config
    }

    /// Profile an entire dataset.
    ///
    /// Columns are taken from the first row in order. An empty slice yields
    /// an empty report rather than an error.
    pub fn profile_rows(&self, rows: &[Row]) -> Report {
        let Some(first) = rows.first() else {
            return Report::default();
        };

        let n_rows = rows.len();
        let columns: Vec<ColumnProfile> = first
            .keys()
            .enumerate()
            .map(|(index, name)| {
                let values = column_values(rows, index, name);
                self.profile_column(name, &values, n_rows)
            })
            .collect();

        Report {
            n_rows,
            n_cols: first.len(),
            columns,
            timing_ms: None,
        }
    }

    /// Profile one column given its raw values (one per row).
    pub fn profile_column(
        &self,
        name: &str,
        values: &[Option<&str>],
        n_rows: usize,
    ) -> ColumnProfile {
        let stats = match infer_type(values) {
            ColumnType::Number => ColumnStats::Number(numeric_stats(values)),
            ColumnType::Text => ColumnStats::Text(text_stats(values, self.config.top_k)),
        };

        let mut profile = ColumnProfile {
            name: name.to_string(),
            stats,
            quality_issues: Vec::new(),
        };
        profile.quality_issues = DataQualityAnalyzer::identify_issues(&profile, n_rows, &self.config);

        debug!(
            column = name,
            column_type = %profile.column_type(),
            missing = profile.counts().missing,
            unique = profile.counts().unique,
            issues = profile.quality_issues.len(),
            "Profiled column"
        );

        profile
    }
}

/// Profile rows with the default configuration.
pub fn profile(rows: &[Row]) -> Report {
    DataProfiler::default().profile_rows(rows)
}

/// Raw values of one column across all rows.
///
/// Rows that lack the column contribute an empty string, which is classified
/// as missing.
pub fn extract_column<'a>(rows: &'a [Row], name: &str) -> Vec<Option<&'a str>> {
    let index = rows
        .first()
        .and_then(|first| first.keys().position(|key| key == name))
        .unwrap_or(0);
    column_values(rows, index, name)
}

/// Rows normally share the first row's key order, so each cell is looked up
/// at `index` first.
fn column_values<'a>(rows: &'a [Row], index: usize, name: &str) -> Vec<Option<&'a str>> {
    rows.iter()
        .map(|row| row.get_at(index, name).unwrap_or(Some("")))
        .collect()
}

static_assertions::assert_impl_all!(DataProfiler: Send, Sync);
