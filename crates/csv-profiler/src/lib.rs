//! CSV Profiler Library
//!
//! Profiles tabular data loaded from CSV files and produces a structured
//! report of per-column statistics and data quality notes.
//!
//! # Overview
//!
//! - **Ingestion**: CSV files are read with Polars, every cell kept as text
//! - **Type Inference**: each column is classified as `number` or `text`
//! - **Statistics**: counts, missingness, cardinality, min/max/mean/median,
//!   mode, standard deviation and quartiles for numbers; top values for text
//! - **Quality Checks**: heuristic warnings such as high missingness,
//!   identifier-like columns, outliers and dominant values
//! - **Reporting**: JSON and Markdown output
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use csv_profiler::{load_csv, DataProfiler, ProfilerConfig, ReportGenerator};
//!
//! let rows = load_csv("data/sales.csv")?;
//!
//! // Option 1: default thresholds
//! let report = csv_profiler::profile(&rows);
//!
//! // Option 2: custom thresholds
//! let config = ProfilerConfig::builder()
//!     .top_k(10)
//!     .high_missing_pct(40.0)
//!     .build()?;
//! let report = DataProfiler::new(config).profile_rows(&rows);
//!
//! ReportGenerator::new("outputs", "sales").write_all(&report)?;
//! println!("{} columns, {} issues", report.n_cols, report.issue_count());
//! ```
//!
//! # Missing Values
//!
//! A cell is missing when it is absent, empty after trimming, or one of the
//! tokens `na`, `n/a`, `null`, `none`, `nan` (case-insensitive). See
//! [`utils::is_missing`].

pub mod config;
pub mod error;
pub mod ingest;
pub mod profiler;
pub mod quality;
pub mod reporting;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use config::{ConfigValidationError, ProfilerConfig, ProfilerConfigBuilder};
pub use error::{ProfilerError, Result as ProfilerResult, ResultExt};
pub use ingest::{load_csv, read_csv_frame, rows_from_dataframe};
pub use profiler::{DataProfiler, extract_column, profile};
pub use quality::DataQualityAnalyzer;
pub use reporting::{ReportGenerator, WrittenReports, render_markdown};
pub use types::{
    ColumnProfile, ColumnStats, ColumnType, Dataset, IssueLevel, NumericColumnProfile,
    QualityIssue, Report, Row, TextColumnProfile, TopValue, ValueCounts,
};
pub use utils::{is_missing, try_parse_float};
