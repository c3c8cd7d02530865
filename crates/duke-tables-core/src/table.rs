//! Table handles: the caller-facing CRUD surface
//!
//! A table is reached through its [`Catalog`](crate::Catalog) as either a
//! read-only [`Table`] or an exclusive [`TableMut`]. Reads may run
//! concurrently with each other; structural mutation takes the exclusive
//! handle, so the borrow checker enforces the one-writer rule and no
//! further locking is carried.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};

use crate::cell::Cell;
use crate::column::Column;
use crate::datatype::DataType;
use crate::error::{Error, Result};
use crate::row::Row;
use crate::store::{CellId, ColumnId, RowId, StorageProvider, TableId, TableRecord};
use crate::MAX_NAME_LEN;

/// Values for one row, keyed by column name.
///
/// Columns missing from the map gap-fill with the empty storage form;
/// keys that name no column are ignored.
pub type RowValues = HashMap<String, crate::value::Value>;

/// Row and column counts for a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableInfo {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub columns: usize,
}

impl TableInfo {
    /// A table is empty when it has no columns or no rows
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns == 0
    }
}

/// Read-only handle to one table
#[derive(Debug)]
pub struct Table<'a, S: StorageProvider> {
    store: &'a S,
    id: TableId,
}

/// Exclusive handle to one table
#[derive(Debug)]
pub struct TableMut<'a, S: StorageProvider> {
    store: &'a mut S,
    id: TableId,
}

impl<'a, S: StorageProvider> Table<'a, S> {
    pub(crate) fn new(store: &'a S, id: TableId) -> Self {
        Self { store, id }
    }

    fn record(&self) -> &'a TableRecord {
        self.store
            .table(self.id)
            .expect("table record exists while its handle is live")
    }

    /// Table identity
    pub fn id(&self) -> TableId {
        self.id
    }

    /// Table name
    pub fn name(&self) -> &'a str {
        &self.record().name
    }

    /// Table description
    pub fn description(&self) -> &'a str {
        &self.record().description
    }

    /// Creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.record().created_at
    }

    /// Row and column counts
    pub fn info(&self) -> TableInfo {
        TableInfo {
            rows: self.store.rows_of(self.id).len(),
            columns: self.store.columns_of(self.id).len(),
        }
    }

    /// True when the table has no columns or no rows
    pub fn is_empty(&self) -> bool {
        self.info().is_empty()
    }

    /// Check whether a column of this name is in the table
    pub fn is_column(&self, name: &str) -> bool {
        find_column(self.store, self.id, name).is_some()
    }

    /// Registry names of every supported column type
    pub fn supported_data_types(&self) -> Vec<&'static str> {
        DataType::names()
    }

    /// Column snapshots, in creation order
    pub fn columns(&self) -> Vec<Column> {
        self.store
            .columns_of(self.id)
            .into_iter()
            .filter_map(|id| self.store.column(id))
            .map(Column::from_record)
            .collect()
    }

    /// Row ids, in creation order
    pub fn row_ids(&self) -> Vec<RowId> {
        self.store.rows_of(self.id)
    }

    /// Get the cell at a column/row coordinate.
    ///
    /// The column is checked first; a missing column is
    /// [`Error::ColumnNotInTable`] even when the row would also miss.
    pub fn get_cell(&self, column_name: &str, row: RowId) -> Result<Cell> {
        let column = find_column(self.store, self.id, column_name)
            .ok_or_else(|| Error::ColumnNotInTable(column_name.to_string()))?;
        let cell = self
            .store
            .cell_at(self.id, column, row)
            .ok_or(Error::CellNotFound {
                column: column_name.to_string(),
                row,
            })?;
        Ok(cell_snapshot(self.store, cell))
    }

    /// All cells under a column, in row-creation order
    pub fn get_column_cells(&self, column_name: &str) -> Result<Vec<Cell>> {
        let column = find_column(self.store, self.id, column_name)
            .ok_or_else(|| Error::ColumnNotInTable(column_name.to_string()))?;
        Ok(self
            .store
            .cells_of_column(column)
            .into_iter()
            .map(|id| cell_snapshot(self.store, id))
            .collect())
    }

    /// All cells of a row, in column-creation order
    pub fn get_row_cells(&self, row: RowId) -> Result<Vec<Cell>> {
        if !row_in_table(self.store, self.id, row) {
            return Err(Error::RowNotInTable(row));
        }
        Ok(self
            .store
            .cells_of_row(row)
            .into_iter()
            .map(|id| cell_snapshot(self.store, id))
            .collect())
    }
}

impl<'a, S: StorageProvider> TableMut<'a, S> {
    pub(crate) fn new(store: &'a mut S, id: TableId) -> Self {
        Self { store, id }
    }

    /// Reborrow as a read-only handle
    pub fn as_view(&self) -> Table<'_, S> {
        Table::new(self.store, self.id)
    }

    // === Column management ===

    /// Add a column with the given registry type name.
    ///
    /// Column names are unique across the whole catalog, not just within
    /// this table.
    pub fn add_column(&mut self, name: &str, data_type: &str) -> Result<Column> {
        let data_type: DataType = data_type.parse()?;
        validate_name(name)?;
        if self.store.column_by_name(name).is_some() {
            return Err(Error::DuplicateColumn(name.to_string()));
        }

        let id = self.store.create_column(self.id, name.to_string(), data_type);
        log::debug!("added column {name} ({data_type}) to table {}", self.name());
        let record = self.store.column(id).expect("column was just created");
        Ok(Column::from_record(record))
    }

    /// Add several columns at once, all-or-nothing.
    ///
    /// Every check runs before any column is created: argument shape,
    /// type support (the error lists every offending entry), duplicates
    /// within the call, duplicates against the catalog.
    pub fn bulk_add_columns(&mut self, names: &[&str], data_types: &[&str]) -> Result<Vec<Column>> {
        if names.len() != data_types.len() {
            return Err(Error::usage(format!(
                "bulk_add_columns needs one data type per column name: got {} names and {} types",
                names.len(),
                data_types.len()
            )));
        }

        let mut parsed = Vec::with_capacity(data_types.len());
        let mut unsupported = Vec::new();
        for raw in data_types {
            match DataType::parse(raw) {
                Some(ty) => parsed.push(ty),
                None => unsupported.push(raw.trim()),
            }
        }
        if !unsupported.is_empty() {
            return Err(Error::UnsupportedDataType(unsupported.join(", ")));
        }

        let mut seen = HashSet::with_capacity(names.len());
        for name in names {
            validate_name(name)?;
            if !seen.insert(*name) || self.store.column_by_name(name).is_some() {
                return Err(Error::DuplicateColumn((*name).to_string()));
            }
        }

        let mut columns = Vec::with_capacity(names.len());
        for (name, ty) in names.iter().zip(parsed) {
            let id = self.store.create_column(self.id, (*name).to_string(), ty);
            let record = self.store.column(id).expect("column was just created");
            columns.push(Column::from_record(record));
        }
        log::debug!("added {} columns to table {}", columns.len(), self.name());
        Ok(columns)
    }

    /// Delete a column and every cell under it, returning its snapshot
    pub fn delete_column(&mut self, name: &str) -> Result<Column> {
        let matches: Vec<ColumnId> = self
            .store
            .columns_of(self.id)
            .into_iter()
            .filter(|id| self.store.column(*id).map_or(false, |c| c.name == name))
            .collect();

        let column = match matches.as_slice() {
            [] => return Err(Error::ColumnNotInTable(name.to_string())),
            [id] => *id,
            _ => {
                // the unique-name index should make this unreachable
                log::warn!(
                    "table {} holds {} columns named {name}",
                    self.name(),
                    matches.len()
                );
                return Err(Error::DuplicateColumn(name.to_string()));
            }
        };

        for cell in self.store.cells_of_column(column) {
            self.store.remove_cell(cell);
        }
        let record = self
            .store
            .remove_column(column)
            .expect("column matched above");
        log::debug!("deleted column {name} from table {}", self.name());
        Ok(Column::from_record(&record))
    }

    // === Row management ===

    /// Add one row.
    ///
    /// Every column existing at call time gets exactly one cell. All
    /// values are coerced before any record is created, so a coercion
    /// failure leaves the table untouched.
    pub fn add_row(&mut self, values: &RowValues) -> Result<Row> {
        let column_ids = self.store.columns_of(self.id);
        if column_ids.is_empty() {
            return Err(Error::TableHasNoColumns);
        }

        let mut coerced = Vec::with_capacity(column_ids.len());
        for id in column_ids {
            let column = self.store.column(id).expect("column listed for this table");
            let stored = match values.get(column.name.as_str()) {
                Some(value) => column.data_type.coerce(value)?,
                // absent keys gap-fill with the empty storage form
                None => String::new(),
            };
            coerced.push((id, stored));
        }

        let row_id = self.store.create_row(self.id);
        let mut cells = Vec::with_capacity(coerced.len());
        for (column, stored) in coerced {
            let cell = self.store.create_cell(self.id, column, stored);
            self.store.attach_cell_to_row(cell, row_id);
            cells.push(cell_snapshot(self.store, cell));
        }
        log::debug!("added row {row_id} to table {}", self.name());
        Ok(Row::new(row_id, cells))
    }

    /// Add several rows, element by element, in order.
    ///
    /// Fails fast when the table has no columns. A mid-sequence coercion
    /// failure aborts the remainder; rows committed before it stay.
    pub fn bulk_add_rows(&mut self, values: &[RowValues]) -> Result<Vec<Row>> {
        if self.store.columns_of(self.id).is_empty() {
            return Err(Error::TableHasNoColumns);
        }

        let mut rows = Vec::with_capacity(values.len());
        for row in values {
            rows.push(self.add_row(row)?);
        }
        Ok(rows)
    }

    /// Delete a row and its cells, returning the deleted snapshot.
    ///
    /// `None` deletes the most recently created row.
    pub fn delete_row(&mut self, row: Option<RowId>) -> Result<Row> {
        let row_id = match row {
            Some(id) => {
                if !row_in_table(self.store, self.id, id) {
                    return Err(Error::RowNotInTable(id));
                }
                id
            }
            None => self
                .store
                .rows_of(self.id)
                .pop()
                .ok_or(Error::TableHasNoRows)?,
        };

        let cell_ids = self.store.cells_of_row(row_id);
        let cells: Vec<Cell> = cell_ids
            .iter()
            .map(|id| cell_snapshot(self.store, *id))
            .collect();
        for id in cell_ids {
            self.store.remove_cell(id);
        }
        self.store.remove_row(row_id);
        log::debug!("deleted row {row_id} from table {}", self.name());
        Ok(Row::new(row_id, cells))
    }

    // === Reads (delegated to the view) ===

    /// Table identity
    pub fn id(&self) -> TableId {
        self.id
    }

    /// Table name
    pub fn name(&self) -> &str {
        self.as_view().name()
    }

    /// Table description
    pub fn description(&self) -> &str {
        self.as_view().description()
    }

    /// Creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.as_view().created_at()
    }

    /// Row and column counts
    pub fn info(&self) -> TableInfo {
        self.as_view().info()
    }

    /// True when the table has no columns or no rows
    pub fn is_empty(&self) -> bool {
        self.as_view().is_empty()
    }

    /// Check whether a column of this name is in the table
    pub fn is_column(&self, name: &str) -> bool {
        self.as_view().is_column(name)
    }

    /// Registry names of every supported column type
    pub fn supported_data_types(&self) -> Vec<&'static str> {
        DataType::names()
    }

    /// Column snapshots, in creation order
    pub fn columns(&self) -> Vec<Column> {
        self.as_view().columns()
    }

    /// Row ids, in creation order
    pub fn row_ids(&self) -> Vec<RowId> {
        self.as_view().row_ids()
    }

    /// Get the cell at a column/row coordinate
    pub fn get_cell(&self, column_name: &str, row: RowId) -> Result<Cell> {
        self.as_view().get_cell(column_name, row)
    }

    /// All cells under a column, in row-creation order
    pub fn get_column_cells(&self, column_name: &str) -> Result<Vec<Cell>> {
        self.as_view().get_column_cells(column_name)
    }

    /// All cells of a row, in column-creation order
    pub fn get_row_cells(&self, row: RowId) -> Result<Vec<Cell>> {
        self.as_view().get_row_cells(row)
    }
}

impl<'a, S: StorageProvider> std::fmt::Display for Table<'a, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl<'a, S: StorageProvider> std::fmt::Display for TableMut<'a, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Validate a table or column name
pub(crate) fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidName("name cannot be empty".into()));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(Error::InvalidName(format!(
            "name too long (max {MAX_NAME_LEN} bytes)"
        )));
    }
    Ok(())
}

fn find_column<S: StorageProvider>(store: &S, table: TableId, name: &str) -> Option<ColumnId> {
    store
        .column_by_name(name)
        .filter(|id| store.column(*id).map_or(false, |c| c.table == table))
}

fn row_in_table<S: StorageProvider>(store: &S, table: TableId, row: RowId) -> bool {
    store.row(row).map_or(false, |r| r.table == table)
}

fn cell_snapshot<S: StorageProvider>(store: &S, id: CellId) -> Cell {
    let cell = store.cell(id).expect("cell id came from a live lookup");
    let column = store
        .column(cell.column)
        .expect("cells never outlive their column");
    Cell::from_records(cell, column)
}
