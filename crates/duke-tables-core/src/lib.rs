//! # duke-tables-core
//!
//! Core engine for the duke-tables dynamic table library.
//!
//! This crate provides the fundamental types used throughout duke-tables:
//! - [`Catalog`] - The root container of runtime-defined tables
//! - [`Table`] and [`TableMut`] - Per-table read and write handles
//! - [`DataType`], [`Value`], [`TypedValue`] - The type registry and coercion
//! - [`StorageProvider`] and [`MemoryStore`] - The storage seam
//!
//! A table's schema is defined at runtime: columns (with declared scalar
//! types) and rows are added, removed, and queried without a
//! compile-time schema. Cell values are coerced into a string storage
//! form on write and decoded back through the column's [`DataType`] on
//! read; the read path never fails, it degrades to the raw stored text.
//!
//! ## Example
//!
//! ```rust
//! use duke_tables_core::{Catalog, RowValues, Value};
//!
//! let mut catalog = Catalog::new();
//! let mut people = catalog.create_table("people", "who we know").unwrap();
//!
//! people.add_column("first", "char").unwrap();
//! people.add_column("age", "int").unwrap();
//!
//! let mut values = RowValues::new();
//! values.insert("first".into(), Value::from("Sam"));
//! values.insert("age".into(), Value::from(34));
//! let row = people.add_row(&values).unwrap();
//!
//! assert_eq!(row.cell("age").unwrap().value().as_int(), Some(34));
//! ```

pub mod catalog;
pub mod cell;
pub mod column;
pub mod datatype;
pub mod error;
pub mod row;
pub mod store;
pub mod table;
pub mod value;

// Re-exports for convenience
pub use catalog::Catalog;
pub use cell::Cell;
pub use column::Column;
pub use datatype::DataType;
pub use error::{Error, Result};
pub use row::Row;
pub use store::{
    CellId, CellRecord, ColumnId, ColumnRecord, MemoryStore, RowId, RowRecord, StorageProvider,
    TableId, TableRecord,
};
pub use table::{RowValues, Table, TableInfo, TableMut};
pub use value::{TypedValue, Value};

/// Maximum length of a table or column name
pub const MAX_NAME_LEN: usize = 255;
