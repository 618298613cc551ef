//! Tabular wrapper for sample data

mod display;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

/// An ordered set of named string columns with row labels.
///
/// Uses `IndexMap` to preserve column order (important for predictable
/// rendering and iteration). Every column holds exactly one value per row
/// label; the builders enforce that invariant and lookups past it fail with
/// a [`TableError`].
///
/// Columns created without explicit names get positional names `"0"`,
/// `"1"`, ... and rows get positional labels the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct Table {
    /// Row labels, one per row
    labels: Vec<String>,

    /// Columns in insertion order
    columns: IndexMap<String, Vec<String>>,
}

// Unvalidated mirror of Table used at the deserialization boundary.
// Deserialized input must satisfy the same invariant the builders enforce:
// one value per row label in every column.
#[derive(Deserialize)]
struct RawTable {
    labels: Vec<String>,
    columns: IndexMap<String, Vec<String>>,
}

impl TryFrom<RawTable> for Table {
    type Error = TableError;

    fn try_from(raw: RawTable) -> Result<Self> {
        for (name, values) in &raw.columns {
            if values.len() != raw.labels.len() {
                return Err(TableError::ColumnLengthMismatch {
                    name: name.clone(),
                    expected: raw.labels.len(),
                    got: values.len(),
                });
            }
        }
        Ok(Self {
            labels: raw.labels,
            columns: raw.columns,
        })
    }
}

impl Table {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a single-column table with positional labels.
    ///
    /// The column is named `"0"` and rows are labeled `"0"`, `"1"`, ...
    /// in order, mirroring a dataframe built from a bare sequence.
    pub fn from_values(values: Vec<String>) -> Self {
        let labels = (0..values.len()).map(|i| i.to_string()).collect();
        let mut columns = IndexMap::new();
        columns.insert("0".to_string(), values);
        Self { labels, columns }
    }

    /// Add a column (builder pattern).
    ///
    /// The first column of a fresh table establishes the row count and the
    /// positional row labels. Later columns must match the existing row
    /// count. Inserting under an existing name replaces that column.
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        values: Vec<String>,
    ) -> Result<Self> {
        let name = name.into();
        if self.columns.is_empty() && self.labels.is_empty() {
            self.labels = (0..values.len()).map(|i| i.to_string()).collect();
        } else if values.len() != self.labels.len() {
            return Err(TableError::ColumnLengthMismatch {
                name,
                expected: self.labels.len(),
                got: values.len(),
            });
        }
        self.columns.insert(name, values);
        Ok(self)
    }

    /// Replace the row labels (builder pattern).
    ///
    /// The number of labels must match the row count.
    pub fn with_labels(
        mut self,
        labels: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.len() != self.labels.len() {
            return Err(TableError::LabelCountMismatch {
                expected: self.labels.len(),
                got: labels.len(),
            });
        }
        self.labels = labels;
        Ok(self)
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.labels.len()
    }

    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Check whether the table has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Row labels in order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.keys().map(String::as_str).collect()
    }

    /// Get a column by name.
    pub fn column(&self, name: &str) -> Result<&[String]> {
        self.columns
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| TableError::ColumnNotFound {
                name: name.to_string(),
            })
    }

    /// Get a single cell by row index and column name.
    pub fn cell(&self, row: usize, name: &str) -> Result<&str> {
        let column = self.column(name)?;
        column
            .get(row)
            .map(String::as_str)
            .ok_or_else(|| TableError::RowOutOfBounds {
                index: row,
                rows: self.labels.len(),
            })
    }

    /// Get a row as one value per column, in column order.
    pub fn row(&self, index: usize) -> Result<Vec<&str>> {
        if index >= self.labels.len() {
            return Err(TableError::RowOutOfBounds {
                index,
                rows: self.labels.len(),
            });
        }
        Ok(self
            .columns
            .values()
            .map(|values| values[index].as_str())
            .collect())
    }
}

impl From<Vec<String>> for Table {
    fn from(values: Vec<String>) -> Self {
        Table::from_values(values)
    }
}

impl FromIterator<String> for Table {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Table::from_values(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for Table {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Table::from_values(iter.into_iter().map(String::from).collect())
    }
}
