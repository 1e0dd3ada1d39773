use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Input Types
// ============================================================================

/// One record of a dataset: column names mapped to raw cell values.
///
/// Keys keep their insertion order, which fixes the column order of the
/// report when this is the first row. A cell value of `None` is the
/// absent-marker (no value was supplied for that cell).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    fields: Vec<(String, Option<String>)>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a cell, replacing any previous value under the same column name.
    pub fn insert(&mut self, column: impl Into<String>, value: Option<String>) {
        let column = column.into();
        match self.fields.iter_mut().find(|(name, _)| *name == column) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((column, value)),
        }
    }

    /// Append a cell without checking for an existing column of the same name.
    pub(crate) fn push(&mut self, column: String, value: Option<String>) {
        self.fields.push((column, value));
    }

    /// Builder-style [`Row::insert`] for a present value.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(column, Some(value.into()));
        self
    }

    /// Builder-style [`Row::insert`] for an absent value.
    pub fn with_absent(mut self, column: impl Into<String>) -> Self {
        self.insert(column, None);
        self
    }

    /// Look up a cell.
    ///
    /// The outer `Option` tells whether the row has the column at all; the
    /// inner one is the cell value itself (`None` = absent-marker).
    pub fn get(&self, column: &str) -> Option<Option<&str>> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_deref())
    }

    /// Look up a cell expected at position `index`, scanning only when the
    /// column is stored elsewhere in this row.
    pub(crate) fn get_at(&self, index: usize, column: &str) -> Option<Option<&str>> {
        match self.fields.get(index) {
            Some((name, value)) if name == column => Some(value.as_deref()),
            _ => self.get(column),
        }
    }

    /// Column names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Number of columns in this row.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (column, value) in iter {
            row.insert(column, Some(value.into()));
        }
        row
    }
}

/// An ordered sequence of rows sharing the first row's columns.
pub type Dataset = Vec<Row>;

// ============================================================================
// Profile Types
// ============================================================================

/// Inferred type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Every present value parses as a float.
    Number,
    /// Anything else, including columns with no present values.
    Text,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presence and cardinality counts shared by every column profile.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ValueCounts {
    /// Number of non-missing values.
    pub count: usize,
    /// Number of missing values.
    pub missing: usize,
    /// `missing` as a percentage of all rows, rounded to one decimal.
    pub missing_pct: f64,
    /// Number of distinct non-missing values.
    ///
    /// For numeric columns this counts distinct parsed numbers, so `"1.0"`
    /// and `"1.00"` are the same value.
    pub unique: usize,
}

/// Statistics of a column whose present values are all numeric.
///
/// Every statistic is `None` when the column has no parsed values, and the
/// quartiles are also `None` below four values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NumericColumnProfile {
    #[serde(flatten)]
    pub counts: ValueCounts,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    /// Only set when a single value has the strictly highest frequency.
    pub mode: Option<f64>,
    /// Population standard deviation.
    pub std: Option<f64>,
    pub q1: Option<f64>,
    pub q3: Option<f64>,
}

impl NumericColumnProfile {
    /// Interquartile range, when both quartiles are defined.
    pub fn iqr(&self) -> Option<f64> {
        Some(self.q3? - self.q1?)
    }
}

/// A frequent value and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopValue {
    pub value: String,
    pub count: usize,
}

/// Statistics of a text column.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextColumnProfile {
    #[serde(flatten)]
    pub counts: ValueCounts,
    /// Most frequent values, by descending count then first appearance.
    pub top: Vec<TopValue>,
}

/// Type-specific part of a column profile, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ColumnStats {
    Number(NumericColumnProfile),
    Text(TextColumnProfile),
}

impl ColumnStats {
    pub fn column_type(&self) -> ColumnType {
        match self {
            Self::Number(_) => ColumnType::Number,
            Self::Text(_) => ColumnType::Text,
        }
    }

    pub fn counts(&self) -> &ValueCounts {
        match self {
            Self::Number(stats) => &stats.counts,
            Self::Text(stats) => &stats.counts,
        }
    }
}

/// Severity of a quality issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueLevel {
    Warning,
    Info,
}

impl IssueLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for IssueLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A heuristic, non-fatal note about a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityIssue {
    pub level: IssueLevel,
    pub message: String,
}

impl QualityIssue {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: IssueLevel::Warning,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: IssueLevel::Info,
            message: message.into(),
        }
    }
}

/// Profile of a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub name: String,
    #[serde(flatten)]
    pub stats: ColumnStats,
    /// Omitted from serialized output when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub quality_issues: Vec<QualityIssue>,
}

impl ColumnProfile {
    pub fn column_type(&self) -> ColumnType {
        self.stats.column_type()
    }

    pub fn counts(&self) -> &ValueCounts {
        self.stats.counts()
    }

    pub fn numeric(&self) -> Option<&NumericColumnProfile> {
        match &self.stats {
            ColumnStats::Number(stats) => Some(stats),
            ColumnStats::Text(_) => None,
        }
    }

    pub fn text(&self) -> Option<&TextColumnProfile> {
        match &self.stats {
            ColumnStats::Text(stats) => Some(stats),
            ColumnStats::Number(_) => None,
        }
    }
}

/// Profile of a whole dataset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Report {
    pub n_rows: usize,
    pub n_cols: usize,
    pub columns: Vec<ColumnProfile>,
    /// Wall-clock time spent loading and profiling, set by the caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing_ms: Option<f64>,
}

impl Report {
    /// Look up a column profile by name.
    pub fn column(&self, name: &str) -> Option<&ColumnProfile> {
        self.columns.iter().find(|col| col.name == name)
    }

    /// Total number of quality issues across all columns.
    pub fn issue_count(&self) -> usize {
        self.columns.iter().map(|col| col.quality_issues.len()).sum()
    }
}

static_assertions::assert_impl_all!(Report: Send, Sync);
static_assertions::assert_impl_all!(Row: Send, Sync);
