//! Dataset Module
//! Typed access to a loaded table: numeric values, category labels and cell text.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Column not found: {0}")]
    ColumnNotFound(String),
    #[error("Column '{column}' is not numeric (type {dtype})")]
    NonNumericColumn { column: String, dtype: String },
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Whether a column type can be reduced to a numeric statistic.
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float32
            | DataType::Float64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

/// An in-memory table loaded from CSV.
#[derive(Debug, Clone)]
pub struct Dataset {
    df: DataFrame,
    source: PathBuf,
}

impl Dataset {
    pub fn new(df: DataFrame, source: PathBuf) -> Self {
        Self { df, source }
    }

    /// Path the table was read from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn row_count(&self) -> usize {
        self.df.height()
    }

    pub fn column_count(&self) -> usize {
        self.df.width()
    }

    /// Column names in file order.
    pub fn column_names(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    pub fn column(&self, name: &str) -> Result<&Column, DatasetError> {
        self.df
            .column(name)
            .map_err(|_| DatasetError::ColumnNotFound(name.to_string()))
    }

    pub fn is_numeric(&self, name: &str) -> Result<bool, DatasetError> {
        Ok(is_numeric_dtype(self.column(name)?.dtype()))
    }

    /// Row-aligned numeric values. Nulls and NaN become `None`.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<Option<f64>>, DatasetError> {
        let column = self.column(name)?;
        if !is_numeric_dtype(column.dtype()) {
            return Err(DatasetError::NonNumericColumn {
                column: name.to_string(),
                dtype: column.dtype().to_string(),
            });
        }

        let values = column.cast(&DataType::Float64)?;
        Ok(values
            .f64()?
            .into_iter()
            .map(|v| v.filter(|x| !x.is_nan()))
            .collect())
    }

    /// Non-missing numeric values of a column, in row order.
    pub fn numeric_values(&self, name: &str) -> Result<Vec<f64>, DatasetError> {
        Ok(self.numeric_column(name)?.into_iter().flatten().collect())
    }

    /// Row-aligned text labels of any column. Nulls become `None`.
    pub fn category_labels(&self, name: &str) -> Result<Vec<Option<String>>, DatasetError> {
        let labels = self.column(name)?.cast(&DataType::String)?;
        Ok(labels
            .str()?
            .into_iter()
            .map(|v| v.map(str::to_string))
            .collect())
    }

    /// Display text of one cell; missing cells render empty.
    pub fn cell_text(&self, row: usize, column: usize) -> String {
        self.df
            .get_columns()
            .get(column)
            .and_then(|col| col.get(row).ok())
            .map(|val| match val {
                AnyValue::Null => String::new(),
                AnyValue::String(s) => s.to_string(),
                AnyValue::StringOwned(s) => s.to_string(),
                other => other.to_string(),
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        let df = df!(
            "A" => [Some(1.0), None, Some(3.0), Some(f64::NAN)],
            "city" => [Some("Paris"), Some("Lyon"), None, Some("Paris")],
            "n" => [1i64, 2, 3, 4],
        )
        .unwrap();
        Dataset::new(df, PathBuf::from("sample.csv"))
    }

    #[test]
    fn numeric_values_skip_missing_and_nan() {
        let dataset = sample();
        assert_eq!(dataset.numeric_values("A").unwrap(), vec![1.0, 3.0]);
        assert_eq!(
            dataset.numeric_column("A").unwrap(),
            vec![Some(1.0), None, Some(3.0), None]
        );
    }

    #[test]
    fn integer_columns_are_numeric() {
        let dataset = sample();
        assert!(dataset.is_numeric("n").unwrap());
        assert_eq!(dataset.numeric_values("n").unwrap(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn text_column_is_not_numeric() {
        let err = sample().numeric_values("city").unwrap_err();
        assert!(matches!(err, DatasetError::NonNumericColumn { ref column, .. } if column == "city"));
    }

    #[test]
    fn unknown_column_is_reported_by_name() {
        let err = sample().numeric_values("missing").unwrap_err();
        assert!(matches!(err, DatasetError::ColumnNotFound(ref c) if c == "missing"));
    }

    #[test]
    fn labels_and_cells() {
        let dataset = sample();
        assert_eq!(
            dataset.category_labels("city").unwrap(),
            vec![
                Some("Paris".to_string()),
                Some("Lyon".to_string()),
                None,
                Some("Paris".to_string())
            ]
        );
        assert_eq!(dataset.cell_text(1, 1), "Lyon");
        assert_eq!(dataset.cell_text(2, 1), "");
        assert_eq!(dataset.cell_text(0, 2), "1");
        assert_eq!(dataset.cell_text(99, 0), "");
        assert_eq!(dataset.column_names(), vec!["A", "city", "n"]);
        assert_eq!(dataset.column_count(), 3);
    }

    #[test]
    fn quotes_inside_text_cells_are_kept() {
        let df = df!("quote" => ["\"hi\"", "plain"]).unwrap();
        let dataset = Dataset::new(df, PathBuf::from("quotes.csv"));

        assert_eq!(dataset.cell_text(0, 0), "\"hi\"");
        assert_eq!(dataset.cell_text(1, 0), "plain");
    }
}
