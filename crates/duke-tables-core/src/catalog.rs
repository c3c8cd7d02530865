//! Catalog type - the root container of dynamic tables

use chrono::Utc;

use crate::error::{Error, Result};
use crate::store::{MemoryStore, StorageProvider};
use crate::table::{validate_name, Table, TableMut};

/// A catalog of dynamic tables.
///
/// The catalog owns the storage provider and hands out per-table handles:
/// [`table`](Catalog::table) for reads, [`table_mut`](Catalog::table_mut)
/// for structural mutation. Table names are unique; listings come back
/// newest first.
#[derive(Debug)]
pub struct Catalog<S: StorageProvider = MemoryStore> {
    store: S,
}

impl Catalog<MemoryStore> {
    /// Create a new memory-backed catalog
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new(),
        }
    }
}

impl Default for Catalog<MemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StorageProvider> Catalog<S> {
    /// Create a catalog over an existing storage provider
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Consume the catalog, returning its storage provider
    pub fn into_store(self) -> S {
        self.store
    }

    /// Create a table and return its exclusive handle
    pub fn create_table(&mut self, name: &str, description: &str) -> Result<TableMut<'_, S>> {
        validate_name(name)?;
        if self.store.table_by_name(name).is_some() {
            return Err(Error::DuplicateTableName(name.to_string()));
        }

        let id = self
            .store
            .create_table(name.to_string(), description.to_string(), Utc::now());
        log::debug!("created table {name}");
        Ok(TableMut::new(&mut self.store, id))
    }

    /// Get a read-only handle by table name
    pub fn table(&self, name: &str) -> Option<Table<'_, S>> {
        let id = self.store.table_by_name(name)?;
        Some(Table::new(&self.store, id))
    }

    /// Get an exclusive handle by table name
    pub fn table_mut(&mut self, name: &str) -> Option<TableMut<'_, S>> {
        let id = self.store.table_by_name(name)?;
        Some(TableMut::new(&mut self.store, id))
    }

    /// Delete a table, cascading to its columns, rows, and cells
    pub fn delete_table(&mut self, name: &str) -> Result<()> {
        let id = self
            .store
            .table_by_name(name)
            .ok_or_else(|| Error::TableNotFound(name.to_string()))?;

        // explicit cascade: rows and their cells, then columns and any
        // cells still under them, then the table itself
        for row in self.store.rows_of(id) {
            for cell in self.store.cells_of_row(row) {
                self.store.remove_cell(cell);
            }
            self.store.remove_row(row);
        }
        for column in self.store.columns_of(id) {
            for cell in self.store.cells_of_column(column) {
                self.store.remove_cell(cell);
            }
            self.store.remove_column(column);
        }
        self.store.remove_table(id);
        log::debug!("deleted table {name}");
        Ok(())
    }

    /// Table names, newest first
    pub fn table_names(&self) -> Vec<String> {
        self.store
            .tables_by_recency()
            .into_iter()
            .filter_map(|id| self.store.table(id))
            .map(|t| t.name.clone())
            .collect()
    }

    /// Check whether a table of this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.store.table_by_name(name).is_some()
    }

    /// Number of tables
    pub fn len(&self) -> usize {
        self.store.tables_by_recency().len()
    }

    /// Check whether the catalog holds no tables
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::RowValues;
    use crate::value::Value;

    #[test]
    fn test_new_catalog_is_empty() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.table("anything").is_none());
    }

    #[test]
    fn test_create_table() {
        let mut catalog = Catalog::new();
        let table = catalog.create_table("people", "who we know").unwrap();
        assert_eq!(table.name(), "people");
        assert_eq!(table.description(), "who we know");

        assert!(catalog.contains("people"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_duplicate_table_name() {
        let mut catalog = Catalog::new();
        catalog.create_table("people", "").unwrap();

        let err = catalog.create_table("people", "again").unwrap_err();
        assert!(matches!(err, Error::DuplicateTableName(name) if name == "people"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_invalid_table_name() {
        let mut catalog = Catalog::new();
        assert!(matches!(
            catalog.create_table("", ""),
            Err(Error::InvalidName(_))
        ));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_table_names_newest_first() {
        let mut catalog = Catalog::new();
        catalog.create_table("a", "").unwrap();
        catalog.create_table("b", "").unwrap();
        catalog.create_table("c", "").unwrap();

        assert_eq!(catalog.table_names(), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_delete_table_missing() {
        let mut catalog = Catalog::new();
        assert!(matches!(
            catalog.delete_table("ghost"),
            Err(Error::TableNotFound(_))
        ));
    }

    #[test]
    fn test_delete_table_cascades_and_frees_column_names() {
        let mut catalog = Catalog::new();
        {
            let mut table = catalog.create_table("people", "").unwrap();
            table
                .bulk_add_columns(&["first", "age"], &["char", "int"])
                .unwrap();
            let mut values = RowValues::new();
            values.insert("first".into(), Value::from("Sam"));
            values.insert("age".into(), Value::from(34));
            table.add_row(&values).unwrap();
        }

        catalog.delete_table("people").unwrap();
        assert!(!catalog.contains("people"));

        // the cascaded columns release their catalog-wide names
        let mut other = catalog.create_table("staff", "").unwrap();
        other.add_column("first", "char").unwrap();
    }

    #[test]
    fn test_handles_after_create() {
        let mut catalog = Catalog::new();
        catalog
            .create_table("people", "")
            .unwrap()
            .add_column("age", "int")
            .unwrap();

        let view = catalog.table("people").unwrap();
        assert!(view.is_column("age"));
        assert!(catalog.table_mut("people").is_some());
    }
}
