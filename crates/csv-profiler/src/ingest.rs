//! CSV ingestion.
//!
//! Reads a CSV file into a [`Dataset`] of string cells. Schema inference is
//! disabled so every column arrives as text exactly as written; typing is the
//! profiler's job. Empty cells become the absent-marker.
//!
//! Header names must be unique within a row, so Polars renames repeated
//! headers: a header `a,a` loads as columns `a` and `a_duplicated_0`, each
//! profiled on its own.

use crate::error::{ProfilerError, Result};
use crate::types::{Dataset, Row};
use polars::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// Load a CSV file into rows.
///
/// # Errors
///
/// - [`ProfilerError::FileNotFound`] if `path` does not exist
/// - [`ProfilerError::EmptyData`] if the file has no data rows
/// - [`ProfilerError::CsvRead`] if the file cannot be parsed
pub fn load_csv(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    let df = read_csv_frame(path)?;

    if df.height() == 0 {
        return Err(ProfilerError::EmptyData(path.to_path_buf()));
    }

    let rows = rows_from_dataframe(&df)?;
    info!(
        path = %path.display(),
        rows = rows.len(),
        columns = df.width(),
        "Loaded CSV file"
    );
    Ok(rows)
}

/// Read a CSV file into a DataFrame with every column as a string.
pub fn read_csv_frame(path: impl AsRef<Path>) -> Result<DataFrame> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ProfilerError::FileNotFound(path.to_path_buf()));
    }

    // Polars rejects zero-byte input with a generic error; report it as empty.
    if std::fs::metadata(path)?.len() == 0 {
        return Err(ProfilerError::EmptyData(path.to_path_buf()));
    }

    debug!(path = %path.display(), "Reading CSV file");

    CsvReadOptions::default()
        .with_has_header(true)
        // No type inference: every column is read as String
        .with_infer_schema_length(Some(0))
        .with_parse_options(CsvParseOptions::default().with_quote_char(Some(b'"')))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .map_err(|e| ProfilerError::CsvRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

/// Convert a DataFrame into rows, keeping column order.
///
/// Non-string columns are cast to strings; nulls become the absent-marker.
pub fn rows_from_dataframe(df: &DataFrame) -> Result<Dataset> {
    let mut rows: Dataset = vec![Row::new(); df.height()];

    for col in df.get_columns() {
        let name = col.name().to_string();
        let series = col.as_materialized_series().cast(&DataType::String)?;
        let values = series.str()?;

        for (row, value) in rows.iter_mut().zip(values.into_iter()) {
            row.push(name.clone(), value.map(str::to_string));
        }
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(content.as_bytes()).expect("write temp file");
        file.flush().expect("flush temp file");
        file
    }

    // ==================== load_csv tests ====================

    #[test]
    fn test_load_csv_reads_rows_as_strings() {
        let file = csv_file("id,name,score\n1,Ada,9.5\n2,Grace,007\n");
        let rows = load_csv(file.path()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].keys().collect::<Vec<_>>(), vec!["id", "name", "score"]);
        assert_eq!(rows[1].get("name"), Some(Some("Grace")));
        // no numeric coercion: leading zeros survive
        assert_eq!(rows[1].get("score"), Some(Some("007")));
    }

    #[test]
    fn test_load_csv_empty_cells_are_absent() {
        let file = csv_file("a,b\n1,\n,x\n");
        let rows = load_csv(file.path()).unwrap();

        assert!(crate::utils::is_missing(rows[0].get("b").flatten()));
        assert!(crate::utils::is_missing(rows[1].get("a").flatten()));
        assert_eq!(rows[1].get("b"), Some(Some("x")));
    }

    #[test]
    fn test_load_csv_handles_quoted_fields() {
        let file = csv_file("city,note\n\"Paris, FR\",ok\n");
        let rows = load_csv(file.path()).unwrap();
        assert_eq!(rows[0].get("city"), Some(Some("Paris, FR")));
    }

    #[test]
    fn test_load_csv_keeps_missing_tokens_verbatim() {
        let file = csv_file("v\nNA\nnull\n3\n");
        let rows = load_csv(file.path()).unwrap();
        assert_eq!(rows[0].get("v"), Some(Some("NA")));
        assert_eq!(rows[1].get("v"), Some(Some("null")));
    }

    #[test]
    fn test_load_csv_missing_file() {
        let err = load_csv("definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, ProfilerError::FileNotFound(_)));
        assert_eq!(err.error_code(), "FILE_NOT_FOUND");
    }

    #[test]
    fn test_load_csv_zero_byte_file() {
        let file = csv_file("");
        let err = load_csv(file.path()).unwrap_err();
        assert!(matches!(err, ProfilerError::EmptyData(_)));
    }

    #[test]
    fn test_load_csv_header_only() {
        let file = csv_file("a,b,c\n");
        let err = load_csv(file.path()).unwrap_err();
        assert!(matches!(err, ProfilerError::EmptyData(_)));
    }

    #[test]
    fn test_load_csv_renames_duplicate_headers() {
        let file = csv_file("a,a\n1,2\n");
        let rows = load_csv(file.path()).unwrap();

        assert_eq!(rows[0].keys().collect::<Vec<_>>(), vec!["a", "a_duplicated_0"]);
        assert_eq!(rows[0].get("a"), Some(Some("1")));
        assert_eq!(rows[0].get("a_duplicated_0"), Some(Some("2")));
    }

    // ==================== rows_from_dataframe tests ====================

    #[test]
    fn test_rows_from_typed_dataframe() {
        let df = df![
            "n" => [Some(1i64), None, Some(3)],
            "s" => [Some("x"), Some("y"), None],
        ]
        .unwrap();

        let rows = rows_from_dataframe(&df).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].get("n"), Some(Some("1")));
        assert_eq!(rows[1].get("n"), Some(None));
        assert_eq!(rows[2].get("s"), Some(None));
    }
}
