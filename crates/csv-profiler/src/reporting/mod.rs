//! Report output.
//!
//! A [`Report`](crate::types::Report) is emitted in two forms:
//! - JSON, the serde representation of the report
//! - Markdown, a human-readable summary rendered by [`render_markdown`]
//!
//! # Example
//!
//! ```rust,ignore
//! use csv_profiler::{load_csv, profile, ReportGenerator};
//!
//! let rows = load_csv("data/sales.csv")?;
//! let report = profile(&rows);
//!
//! let generator = ReportGenerator::new("outputs", "sales");
//! let written = generator.write_all(&report)?;
//! println!("{}", written.markdown.display());
//! ```

mod generator;
mod markdown;

pub use generator::{ReportGenerator, WrittenReports};
pub use markdown::render_markdown;
