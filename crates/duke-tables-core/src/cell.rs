//! Cell snapshots

use std::fmt;

use crate::datatype::DataType;
use crate::store::{CellId, CellRecord, ColumnRecord};
use crate::value::TypedValue;

/// A single typed value at a (table, column, row) coordinate.
///
/// The raw storage form is always a string; [`Cell::value`] decodes it
/// through the owning column's declared type on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    id: CellId,
    column_name: String,
    data_type: DataType,
    raw: String,
}

impl Cell {
    pub(crate) fn from_records(cell: &CellRecord, column: &ColumnRecord) -> Self {
        Self {
            id: cell.id,
            column_name: column.name.clone(),
            data_type: column.data_type,
            raw: cell.value.clone(),
        }
    }

    /// Cell identity
    pub fn id(&self) -> CellId {
        self.id
    }

    /// Name of the owning column
    pub fn column_name(&self) -> &str {
        &self.column_name
    }

    /// Declared type of the owning column
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// The stored string form
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Decode the stored form through the column's type.
    ///
    /// Never fails: an undecodable storage form comes back as
    /// [`TypedValue::Text`] carrying the raw string.
    pub fn value(&self) -> TypedValue {
        self.data_type.decode(&self.raw)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
