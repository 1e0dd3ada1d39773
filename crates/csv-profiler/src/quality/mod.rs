//! Data quality analysis module.
//!
//! This module turns a computed column profile into heuristic notes such as
//! high missingness, likely identifier columns, outliers and dominant values.
//! None of them are fatal.

mod analyzer;

pub use analyzer::DataQualityAnalyzer;
