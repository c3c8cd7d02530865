//! Row snapshots

use std::collections::HashMap;

use crate::cell::Cell;
use crate::store::RowId;
use crate::value::TypedValue;

/// One horizontal record: a cell per column that existed in the table
/// when the row was created.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    id: RowId,
    cells: Vec<Cell>,
}

impl Row {
    pub(crate) fn new(id: RowId, cells: Vec<Cell>) -> Self {
        Self { id, cells }
    }

    /// Row identity
    pub fn id(&self) -> RowId {
        self.id
    }

    /// The row's cells, in column-creation order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get a cell by column name
    pub fn cell(&self, column_name: &str) -> Option<&Cell> {
        self.cells.iter().find(|c| c.column_name() == column_name)
    }

    /// Number of cells in the row
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Render the row as a column-name → decoded-value mapping
    pub fn to_map(&self) -> HashMap<String, TypedValue> {
        self.cells
            .iter()
            .map(|c| (c.column_name().to_string(), c.value()))
            .collect()
    }
}
