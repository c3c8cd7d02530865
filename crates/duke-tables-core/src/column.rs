//! Column snapshots

use std::fmt;

use crate::datatype::DataType;
use crate::store::{ColumnId, ColumnRecord};

/// A named, typed schema slot.
///
/// Column names are unique across the whole catalog, and a column's type
/// never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    id: ColumnId,
    name: String,
    data_type: DataType,
}

impl Column {
    pub(crate) fn from_record(record: &ColumnRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            data_type: record.data_type,
        }
    }

    /// Column identity
    pub fn id(&self) -> ColumnId {
        self.id
    }

    /// Column name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type
    pub fn data_type(&self) -> DataType {
        self.data_type
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.data_type)
    }
}
