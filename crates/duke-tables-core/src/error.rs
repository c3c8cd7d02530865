//! Error types for duke-tables-core

use thiserror::Error;

use crate::datatype::DataType;
use crate::store::RowId;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in duke-tables-core
#[derive(Debug, Error)]
pub enum Error {
    /// Requested column type is not in the registry
    #[error("unsupported data type: {0}")]
    UnsupportedDataType(String),

    /// Table name already exists in the catalog
    #[error("table name already exists: {0}")]
    DuplicateTableName(String),

    /// Table not found by name
    #[error("table not found: {0}")]
    TableNotFound(String),

    /// Column name collision (column names are unique across the catalog)
    #[error("column name already exists: {0}")]
    DuplicateColumn(String),

    /// Referenced column is not in the table
    #[error("column not in table: {0}")]
    ColumnNotInTable(String),

    /// Referenced row is not in the table
    #[error("row {0} not in table")]
    RowNotInTable(RowId),

    /// Row mutation attempted on a table with zero columns
    #[error("table has no columns")]
    TableHasNoColumns,

    /// Row deletion attempted on a table with zero rows
    #[error("table has no rows")]
    TableHasNoRows,

    /// Exact cell lookup miss
    #[error("no cell at column {column}, row {row}")]
    CellNotFound {
        /// Column name the lookup used
        column: String,
        /// Row id the lookup used
        row: RowId,
    },

    /// Value cannot be coerced into the column's declared type
    #[error("cannot parse {value:?} as {data_type}")]
    CantParseValue {
        /// The input's textual form
        value: String,
        /// The column's declared type
        data_type: DataType,
    },

    /// Empty or oversized table/column name
    #[error("invalid name: {0}")]
    InvalidName(String),

    /// Textual row index that does not parse as an integer
    #[error("invalid row index: {0:?}")]
    InvalidRowIndex(String),

    /// Caller-side argument-shape error, raised before any domain check
    #[error("{0}")]
    Usage(String),
}

impl Error {
    /// Create a new usage error with a message
    pub fn usage<S: Into<String>>(msg: S) -> Self {
        Error::Usage(msg.into())
    }
}
