//! Storage provider seam
//!
//! The engine persists entities through [`StorageProvider`]: per entity
//! kind, creation (the store assigns the id), read by id, filtered lookup
//! by foreign key in creation order, unique-name lookup, and a
//! non-cascading removal primitive. Cascading deletes are an engine-level
//! routine built from these primitives, so the consistency guarantees do
//! not depend on any particular backend's referential actions.
//!
//! [`MemoryStore`] is the reference implementation.

mod memory;
mod record;

pub use memory::MemoryStore;
pub use record::{
    CellId, CellRecord, ColumnId, ColumnRecord, RowId, RowRecord, TableId, TableRecord,
};

use chrono::{DateTime, Utc};

use crate::datatype::DataType;

/// The storage collaborator the engine is built on
pub trait StorageProvider {
    // === Tables ===

    /// Persist a new table, returning its id
    fn create_table(
        &mut self,
        name: String,
        description: String,
        created_at: DateTime<Utc>,
    ) -> TableId;

    /// Read a table by id
    fn table(&self, id: TableId) -> Option<&TableRecord>;

    /// Look a table up by its unique name
    fn table_by_name(&self, name: &str) -> Option<TableId>;

    /// All tables, newest first
    fn tables_by_recency(&self) -> Vec<TableId>;

    /// Remove a table. Does not cascade.
    fn remove_table(&mut self, id: TableId) -> Option<TableRecord>;

    // === Columns ===

    /// Persist a new column, returning its id
    fn create_column(&mut self, table: TableId, name: String, data_type: DataType) -> ColumnId;

    /// Read a column by id
    fn column(&self, id: ColumnId) -> Option<&ColumnRecord>;

    /// Look a column up by name in the catalog-wide unique-name index
    fn column_by_name(&self, name: &str) -> Option<ColumnId>;

    /// A table's columns, in creation order
    fn columns_of(&self, table: TableId) -> Vec<ColumnId>;

    /// Remove a column. Does not cascade.
    fn remove_column(&mut self, id: ColumnId) -> Option<ColumnRecord>;

    // === Rows ===

    /// Persist a new row, returning its id
    fn create_row(&mut self, table: TableId) -> RowId;

    /// Read a row by id
    fn row(&self, id: RowId) -> Option<&RowRecord>;

    /// A table's rows, in creation order
    fn rows_of(&self, table: TableId) -> Vec<RowId>;

    /// Remove a row. Does not cascade.
    fn remove_row(&mut self, id: RowId) -> Option<RowRecord>;

    // === Cells ===

    /// Persist a new cell, row-less until attached
    fn create_cell(&mut self, table: TableId, column: ColumnId, value: String) -> CellId;

    /// Read a cell by id
    fn cell(&self, id: CellId) -> Option<&CellRecord>;

    /// Attach a cell to its row; false if the cell is unknown
    fn attach_cell_to_row(&mut self, cell: CellId, row: RowId) -> bool;

    /// Exact coordinate lookup
    fn cell_at(&self, table: TableId, column: ColumnId, row: RowId) -> Option<CellId>;

    /// A column's cells, in creation (row) order
    fn cells_of_column(&self, column: ColumnId) -> Vec<CellId>;

    /// A row's cells, in creation (column) order
    fn cells_of_row(&self, row: RowId) -> Vec<CellId>;

    /// Remove a cell
    fn remove_cell(&mut self, id: CellId) -> Option<CellRecord>;
}
