//! Error types for table construction and lookup

use thiserror::Error;

/// Main error type for table operations.
///
/// The sample data provider itself never fails; errors only arise when a
/// caller builds a malformed table or looks up a column or row that does
/// not exist.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// No column with the requested name
    #[error("No such column: {name}")]
    ColumnNotFound {
        /// The requested column name
        name: String,
    },

    /// A new column's length does not match the existing rows
    #[error("Column {name:?} has {got} values, expected {expected}")]
    ColumnLengthMismatch {
        /// The offending column name
        name: String,
        /// Row count of the table
        expected: usize,
        /// Length of the rejected column
        got: usize,
    },

    /// Replacement row labels do not cover every row
    #[error("Got {got} row labels for {expected} rows")]
    LabelCountMismatch {
        /// Row count of the table
        expected: usize,
        /// Number of labels supplied
        got: usize,
    },

    /// Row index past the end of the table
    #[error("Row {index} out of bounds for table with {rows} rows")]
    RowOutOfBounds {
        /// The requested row index
        index: usize,
        /// Row count of the table
        rows: usize,
    },
}

/// Result type alias for table operations
pub type Result<T> = std::result::Result<T, TableError>;
