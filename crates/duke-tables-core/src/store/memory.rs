//! In-memory reference store
//!
//! Arena-style storage: each entity kind lives in its own map keyed by a
//! monotonically assigned id, relations are foreign-key fields on the
//! child record, and column names are kept unique through a dedicated
//! catalog-wide index. Filtered lookups scan and sort by id; with ids
//! assigned from one counter, ascending id order is creation order.

use ahash::AHashMap;
use chrono::{DateTime, Utc};

use super::record::{
    CellId, CellRecord, ColumnId, ColumnRecord, RowId, RowRecord, TableId, TableRecord,
};
use super::StorageProvider;
use crate::datatype::DataType;

/// Memory-backed [`StorageProvider`]
#[derive(Debug, Default)]
pub struct MemoryStore {
    next_id: u64,
    tables: AHashMap<TableId, TableRecord>,
    columns: AHashMap<ColumnId, ColumnRecord>,
    rows: AHashMap<RowId, RowRecord>,
    cells: AHashMap<CellId, CellRecord>,
    /// Unique table names
    tables_by_name: AHashMap<String, TableId>,
    /// Column names are unique across the whole catalog
    columns_by_name: AHashMap<String, ColumnId>,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl StorageProvider for MemoryStore {
    fn create_table(
        &mut self,
        name: String,
        description: String,
        created_at: DateTime<Utc>,
    ) -> TableId {
        let id = TableId(self.next_id());
        self.tables_by_name.insert(name.clone(), id);
        self.tables.insert(
            id,
            TableRecord {
                id,
                name,
                description,
                created_at,
            },
        );
        id
    }

    fn table(&self, id: TableId) -> Option<&TableRecord> {
        self.tables.get(&id)
    }

    fn table_by_name(&self, name: &str) -> Option<TableId> {
        self.tables_by_name.get(name).copied()
    }

    fn tables_by_recency(&self) -> Vec<TableId> {
        let mut ids: Vec<(DateTime<Utc>, TableId)> = self
            .tables
            .values()
            .map(|t| (t.created_at, t.id))
            .collect();
        ids.sort_unstable_by(|a, b| b.cmp(a));
        ids.into_iter().map(|(_, id)| id).collect()
    }

    fn remove_table(&mut self, id: TableId) -> Option<TableRecord> {
        let record = self.tables.remove(&id)?;
        self.tables_by_name.remove(&record.name);
        Some(record)
    }

    fn create_column(&mut self, table: TableId, name: String, data_type: DataType) -> ColumnId {
        let id = ColumnId(self.next_id());
        self.columns_by_name.insert(name.clone(), id);
        self.columns.insert(
            id,
            ColumnRecord {
                id,
                table,
                name,
                data_type,
            },
        );
        id
    }

    fn column(&self, id: ColumnId) -> Option<&ColumnRecord> {
        self.columns.get(&id)
    }

    fn column_by_name(&self, name: &str) -> Option<ColumnId> {
        self.columns_by_name.get(name).copied()
    }

    fn columns_of(&self, table: TableId) -> Vec<ColumnId> {
        let mut ids: Vec<ColumnId> = self
            .columns
            .values()
            .filter(|c| c.table == table)
            .map(|c| c.id)
            .collect();
        ids.sort_unstable();
        ids
    }

    fn remove_column(&mut self, id: ColumnId) -> Option<ColumnRecord> {
        let record = self.columns.remove(&id)?;
        // only drop the index entry if it still points at this column
        if self.columns_by_name.get(&record.name) == Some(&id) {
            self.columns_by_name.remove(&record.name);
        }
        Some(record)
    }

    fn create_row(&mut self, table: TableId) -> RowId {
        let id = RowId(self.next_id());
        self.rows.insert(id, RowRecord { id, table });
        id
    }

    fn row(&self, id: RowId) -> Option<&RowRecord> {
        self.rows.get(&id)
    }

    fn rows_of(&self, table: TableId) -> Vec<RowId> {
        let mut ids: Vec<RowId> = self
            .rows
            .values()
            .filter(|r| r.table == table)
            .map(|r| r.id)
            .collect();
        ids.sort_unstable();
        ids
    }

    fn remove_row(&mut self, id: RowId) -> Option<RowRecord> {
        self.rows.remove(&id)
    }

    fn create_cell(&mut self, table: TableId, column: ColumnId, value: String) -> CellId {
        let id = CellId(self.next_id());
        self.cells.insert(
            id,
            CellRecord {
                id,
                table,
                column,
                row: None,
                value,
            },
        );
        id
    }

    fn cell(&self, id: CellId) -> Option<&CellRecord> {
        self.cells.get(&id)
    }

    fn attach_cell_to_row(&mut self, cell: CellId, row: RowId) -> bool {
        match self.cells.get_mut(&cell) {
            Some(record) => {
                record.row = Some(row);
                true
            }
            None => false,
        }
    }

    fn cell_at(&self, table: TableId, column: ColumnId, row: RowId) -> Option<CellId> {
        self.cells
            .values()
            .find(|c| c.table == table && c.column == column && c.row == Some(row))
            .map(|c| c.id)
    }

    fn cells_of_column(&self, column: ColumnId) -> Vec<CellId> {
        let mut ids: Vec<CellId> = self
            .cells
            .values()
            .filter(|c| c.column == column)
            .map(|c| c.id)
            .collect();
        ids.sort_unstable();
        ids
    }

    fn cells_of_row(&self, row: RowId) -> Vec<CellId> {
        let mut ids: Vec<CellId> = self
            .cells
            .values()
            .filter(|c| c.row == Some(row))
            .map(|c| c.id)
            .collect();
        ids.sort_unstable();
        ids
    }

    fn remove_cell(&mut self, id: CellId) -> Option<CellRecord> {
        self.cells.remove(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_table() -> (MemoryStore, TableId) {
        let mut store = MemoryStore::new();
        let table = store.create_table("t".into(), String::new(), Utc::now());
        (store, table)
    }

    #[test]
    fn test_table_name_index() {
        let (mut store, table) = store_with_table();
        assert_eq!(store.table_by_name("t"), Some(table));

        store.remove_table(table);
        assert_eq!(store.table_by_name("t"), None);
    }

    #[test]
    fn test_columns_in_creation_order() {
        let (mut store, table) = store_with_table();
        let a = store.create_column(table, "a".into(), DataType::Char);
        let b = store.create_column(table, "b".into(), DataType::Int);
        let c = store.create_column(table, "c".into(), DataType::Bool);

        assert_eq!(store.columns_of(table), vec![a, b, c]);
    }

    #[test]
    fn test_column_name_index_is_catalog_wide() {
        let (mut store, table) = store_with_table();
        let other = store.create_table("u".into(), String::new(), Utc::now());
        let col = store.create_column(other, "shared".into(), DataType::Char);

        // visible from any table's perspective
        assert_eq!(store.column_by_name("shared"), Some(col));
        assert!(store.columns_of(table).is_empty());

        store.remove_column(col);
        assert_eq!(store.column_by_name("shared"), None);
    }

    #[test]
    fn test_cell_attach_and_lookup() {
        let (mut store, table) = store_with_table();
        let col = store.create_column(table, "a".into(), DataType::Char);
        let row = store.create_row(table);

        let cell = store.create_cell(table, col, "x".into());
        assert_eq!(store.cell(cell).unwrap().row, None);
        assert_eq!(store.cell_at(table, col, row), None);

        assert!(store.attach_cell_to_row(cell, row));
        assert_eq!(store.cell_at(table, col, row), Some(cell));
        assert_eq!(store.cells_of_row(row), vec![cell]);
        assert_eq!(store.cells_of_column(col), vec![cell]);
    }

    #[test]
    fn test_tables_by_recency_newest_first() {
        let mut store = MemoryStore::new();
        let old = store.create_table("old".into(), String::new(), Utc::now());
        let new = store.create_table("new".into(), String::new(), Utc::now());

        // equal timestamps fall back to id order, newest id first
        assert_eq!(store.tables_by_recency(), vec![new, old]);
    }
}
