//! Persisted entity records and their identifiers
//!
//! Records are what the storage provider holds: flat structs whose
//! relations are foreign-key fields. Ids are assigned by the store and
//! are monotonically increasing, so ascending id order is creation order.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::datatype::DataType;
use crate::error::Error;

/// Table identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableId(pub u64);

/// Column identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnId(pub u64);

/// Row identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowId(pub u64);

/// Cell identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellId(pub u64);

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RowId {
    type Err = Error;

    /// Parse a textual row index
    fn from_str(s: &str) -> Result<Self, Error> {
        s.trim()
            .parse::<u64>()
            .map(RowId)
            .map_err(|_| Error::InvalidRowIndex(s.to_string()))
    }
}

/// Persisted table: name, description, creation timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableRecord {
    /// Identity
    pub id: TableId,
    /// Unique across the catalog
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Creation timestamp; drives the recency ordering
    pub created_at: DateTime<Utc>,
}

/// Persisted column: named, typed schema slot of one table
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnRecord {
    /// Identity
    pub id: ColumnId,
    /// Owning table
    pub table: TableId,
    /// Unique across the catalog, not just within the table
    pub name: String,
    /// Declared type; immutable after creation
    pub data_type: DataType,
}

/// Persisted row: one horizontal record of one table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowRecord {
    /// Identity
    pub id: RowId,
    /// Owning table
    pub table: TableId,
}

/// Persisted cell: one storage-form value at a (table, column, row) coordinate
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRecord {
    /// Identity
    pub id: CellId,
    /// Owning table
    pub table: TableId,
    /// Owning column; determines the coercion rule
    pub column: ColumnId,
    /// Owning row; absent only between creation and attachment
    pub row: Option<RowId>,
    /// The storage form, always a string
    pub value: String,
}
