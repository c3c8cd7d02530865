//! Prelude module - common imports for duke-tables users
//!
//! ```rust
//! use duke_tables::prelude::*;
//! ```

pub use crate::{
    // Main types
    Catalog,
    // Cell types
    Cell,
    Column,
    // Type registry and coercion
    DataType,
    // Error types
    Error,
    Result,
    Row,
    RowId,
    RowValues,
    Table,
    TableInfo,
    TableMut,
    TypedValue,
    Value,
};
