//! # duke-tables
//!
//! A Rust library for runtime-defined ("dynamic") tables.
//!
//! Duke-tables is the entity-attribute-value engine underneath a dynamic
//! table abstraction: a [`Catalog`] holds named tables whose columns
//! (with declared scalar types) and rows are added, removed, and queried
//! at runtime, without a compile-time schema. Values are coerced into a
//! typed storage form on write and decoded back on read.
//!
//! ## Example
//!
//! ```rust
//! use duke_tables::prelude::*;
//!
//! let mut catalog = Catalog::new();
//! let mut people = catalog.create_table("people", "who we know").unwrap();
//!
//! people
//!     .bulk_add_columns(&["first", "age", "vip"], &["char", "int", "bool"])
//!     .unwrap();
//!
//! let mut values = RowValues::new();
//! values.insert("first".into(), Value::from("Sam"));
//! values.insert("age".into(), Value::from(34));
//! values.insert("vip".into(), Value::from(true));
//! let row = people.add_row(&values).unwrap();
//!
//! assert_eq!(row.cell("vip").unwrap().value(), TypedValue::Bool(true));
//! assert_eq!(people.info().rows, 1);
//! ```

pub mod prelude;

// Re-export core types
pub use duke_tables_core::{
    // Main types
    Catalog,
    // Cell types
    Cell,
    CellId,
    CellRecord,
    Column,
    ColumnId,
    ColumnRecord,
    // Type registry and coercion
    DataType,
    // Error types
    Error,
    // Storage seam
    MemoryStore,
    Result,
    Row,
    RowId,
    RowRecord,
    RowValues,
    StorageProvider,
    Table,
    TableId,
    TableInfo,
    TableMut,
    TableRecord,
    TypedValue,
    Value,
    MAX_NAME_LEN,
};
