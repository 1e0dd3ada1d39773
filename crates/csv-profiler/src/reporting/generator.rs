use crate::error::{ProfilerError, Result, ResultExt};
use crate::reporting::render_markdown;
use crate::types::Report;
use chrono::Local;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Paths of the files written by [`ReportGenerator::write_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenReports {
    pub json: PathBuf,
    pub markdown: PathBuf,
}

/// Writes profiling reports to an output directory.
///
/// Files are named `<name>.json` and `<name>.md`. The directory is created on
/// first write.
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    output_dir: PathBuf,
    output_name: String,
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("outputs"),
            output_name: "report".to_string(),
        }
    }
}

impl ReportGenerator {
    pub fn new(output_dir: impl Into<PathBuf>, output_name: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            output_name: output_name.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.json", self.output_name))
    }

    pub fn markdown_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.md", self.output_name))
    }

    /// Write the report as pretty-printed JSON.
    pub fn write_json(&self, report: &Report) -> Result<PathBuf> {
        let json = serde_json::to_string_pretty(report)?;
        let path = self.json_path();
        self.write_file(&path, &json)?;
        info!("JSON report saved: {}", path.display());
        Ok(path)
    }

    /// Write the report as Markdown, stamped with the current local time.
    pub fn write_markdown(&self, report: &Report) -> Result<PathBuf> {
        let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let markdown = render_markdown(report, &generated_at);
        let path = self.markdown_path();
        self.write_file(&path, &markdown)?;
        info!("Markdown report saved: {}", path.display());
        Ok(path)
    }

    /// Write both the JSON and the Markdown report.
    pub fn write_all(&self, report: &Report) -> Result<WrittenReports> {
        Ok(WrittenReports {
            json: self.write_json(report)?,
            markdown: self.write_markdown(report)?,
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        if self.output_name.trim().is_empty() {
            return Err(ProfilerError::ReportGenerationFailed(
                "report name must not be empty".to_string(),
            ));
        }

        fs::create_dir_all(&self.output_dir).context(format!(
            "Failed to create output directory {}",
            self.output_dir.display()
        ))?;

        debug!(path = %path.display(), bytes = content.len(), "Writing report file");
        let mut file =
            File::create(path).context(format!("Failed to create {}", path.display()))?;
        file.write_all(content.as_bytes())
            .context(format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiler::profile;
    use crate::types::Row;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample_report() -> Report {
        let rows = vec![
            Row::new().with("id", "1").with("city", "Oslo"),
            Row::new().with("id", "2").with("city", "Rome"),
            Row::new().with("id", "3").with("city", "Oslo"),
        ];
        let mut report = profile(&rows);
        report.timing_ms = Some(1.25);
        report
    }

    // ==================== path tests ====================

    #[test]
    fn test_default_paths() {
        let generator = ReportGenerator::default();
        assert_eq!(generator.json_path(), PathBuf::from("outputs/report.json"));
        assert_eq!(generator.markdown_path(), PathBuf::from("outputs/report.md"));
    }

    // ==================== write tests ====================

    #[test]
    fn test_write_all_creates_nested_directory() {
        let dir = TempDir::new().unwrap();
        let out_dir = dir.path().join("nested").join("out");
        let generator = ReportGenerator::new(&out_dir, "sales");

        let written = generator.write_all(&sample_report()).unwrap();

        assert_eq!(written.json, out_dir.join("sales.json"));
        assert_eq!(written.markdown, out_dir.join("sales.md"));
        assert!(written.json.exists());
        assert!(written.markdown.exists());
    }

    #[test]
    fn test_json_file_round_trips_report() {
        let dir = TempDir::new().unwrap();
        let generator = ReportGenerator::new(dir.path(), "report");
        let report = sample_report();

        let path = generator.write_json(&report).unwrap();
        let content = fs::read_to_string(path).unwrap();
        let parsed: Report = serde_json::from_str(&content).unwrap();

        assert_eq!(parsed, report);
        assert!(content.contains("\"timing_ms\": 1.25"));
        // pretty-printed
        assert!(content.contains("\n  \"n_rows\": 3"));
    }

    #[test]
    fn test_markdown_file_contents() {
        let dir = TempDir::new().unwrap();
        let generator = ReportGenerator::new(dir.path(), "report");

        let path = generator.write_markdown(&sample_report()).unwrap();
        let content = fs::read_to_string(path).unwrap();

        assert!(content.starts_with("# CSV Profiling Report"));
        assert!(content.contains("| city | text | 0 | 0.0% | 2 |"));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let dir = TempDir::new().unwrap();
        let generator = ReportGenerator::new(dir.path(), "  ");

        let err = generator.write_json(&sample_report()).unwrap_err();
        assert_eq!(err.error_code(), "REPORT_GENERATION_FAILED");
    }
}
