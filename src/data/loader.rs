//! CSV Data Loader Module
//! Handles CSV file loading using Polars.

use crate::data::Dataset;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Not a regular file: {}", .0.display())]
    NotAFile(PathBuf),
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
}

/// Cell contents read as missing in every column, in addition to empty fields.
pub const MISSING_MARKERS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Reads CSV files into a [`Dataset`].
#[derive(Debug, Clone)]
pub struct DataLoader {
    infer_schema_length: Option<usize>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new(Some(crate::settings::DEFAULT_INFER_SCHEMA_LENGTH))
    }
}

impl DataLoader {
    pub fn new(infer_schema_length: Option<usize>) -> Self {
        Self {
            infer_schema_length,
        }
    }

    /// Load a CSV file with a header row.
    ///
    /// Malformed rows are reported as errors rather than skipped.
    pub fn load_csv(&self, file_path: &Path) -> Result<Dataset, LoaderError> {
        if !file_path.exists() {
            return Err(LoaderError::NotFound(file_path.to_path_buf()));
        }
        if !file_path.is_file() {
            return Err(LoaderError::NotAFile(file_path.to_path_buf()));
        }

        let df = LazyCsvReader::new(file_path)
            .with_has_header(true)
            .with_infer_schema_length(self.infer_schema_length)
            .with_null_values(Some(NullValues::AllColumns(
                MISSING_MARKERS.iter().map(|m| (*m).into()).collect(),
            )))
            .finish()?
            .collect()?;

        log::debug!(
            "parsed {} ({} rows x {} columns)",
            file_path.display(),
            df.height(),
            df.width()
        );

        Ok(Dataset::new(df, file_path.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_header_and_rows() {
        let file = write_csv("A,B\n1,5\n2,4\n3,3\n4,2\n5,1\n");
        let dataset = DataLoader::default().load_csv(file.path()).unwrap();

        assert_eq!(dataset.column_names(), vec!["A", "B"]);
        assert_eq!(dataset.row_count(), 5);
        assert_eq!(dataset.source(), file.path());
    }

    #[test]
    fn quoted_fields_keep_embedded_commas() {
        let file = write_csv("name,score\n\"Smith, J\",10\n\"Doe, A\",20\n");
        let dataset = DataLoader::default().load_csv(file.path()).unwrap();

        assert_eq!(dataset.cell_text(0, 0), "Smith, J");
        assert_eq!(dataset.numeric_values("score").unwrap(), vec![10.0, 20.0]);
    }

    #[test]
    fn escaped_quotes_survive_display() {
        let file = write_csv("q\n\"\"\"hi\"\"\"\n");
        let dataset = DataLoader::default().load_csv(file.path()).unwrap();

        assert_eq!(dataset.cell_text(0, 0), "\"hi\"");
    }

    #[test]
    fn missing_markers_read_as_nulls() {
        let file = write_csv("value,tag\n1,a\nNA,b\n3,NULL\nnan,d\n");
        let dataset = DataLoader::default().load_csv(file.path()).unwrap();

        assert!(dataset.is_numeric("value").unwrap());
        assert_eq!(dataset.numeric_values("value").unwrap(), vec![1.0, 3.0]);
        assert_eq!(dataset.cell_text(2, 1), "");
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let file = write_csv("A,B\n1,2,3\n");
        let err = DataLoader::default().load_csv(file.path()).unwrap_err();
        assert!(matches!(err, LoaderError::CsvError(_)));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");

        let err = DataLoader::default().load_csv(&path).unwrap_err();
        assert!(matches!(err, LoaderError::NotFound(p) if p == path));
    }

    #[test]
    fn directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();

        let err = DataLoader::default().load_csv(dir.path()).unwrap_err();
        assert!(matches!(err, LoaderError::NotAFile(_)));
    }
}
