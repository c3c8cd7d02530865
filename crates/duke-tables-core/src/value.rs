//! Caller-supplied values and their decoded forms

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use crate::datatype::{bool_storage_form, format_iso};

/// A raw value supplied by the caller for a cell.
///
/// Coercion into the column's storage form happens in
/// [`DataType::coerce`](crate::DataType::coerce). `Empty` is the explicit
/// absence marker: it stores the empty string under every column type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// No value
    Empty,
    /// Text
    Str(String),
    /// Integer
    Int(i64),
    /// Floating-point number
    Float(f64),
    /// Boolean
    Bool(bool),
    /// Date/time
    DateTime(NaiveDateTime),
}

impl Value {
    /// Check if this is the explicit absence marker
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }

    /// Get the kind name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Empty => "empty",
            Value::Str(_) => "string",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Bool(_) => "boolean",
            Value::DateTime(_) => "datetime",
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Empty
    }
}

impl fmt::Display for Value {
    /// The literal string representation, as stored by the text types
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Empty => Ok(()),
            Value::Str(s) => write!(f, "{}", s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Bool(b) => write!(f, "{}", bool_storage_form(*b)),
            Value::DateTime(dt) => write!(f, "{}", format_iso(dt)),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Value::DateTime(dt)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        // bare dates carry midnight
        Value::DateTime(d.and_hms_opt(0, 0, 0).unwrap_or_default())
    }
}

/// A storage form decoded through a column's declared type.
///
/// Produced by [`DataType::decode`](crate::DataType::decode) and
/// [`Cell::value`](crate::Cell::value). An undecodable storage form comes
/// back as `Text` carrying the raw string; the read path never fails.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypedValue {
    /// Empty storage form under a non-text type
    Empty,
    /// Text, or the raw fallback for an undecodable form
    Text(String),
    /// Integer
    Int(i64),
    /// Floating-point number
    Float(f64),
    /// Boolean
    Bool(bool),
    /// Date/time
    DateTime(NaiveDateTime),
}

impl TypedValue {
    /// Check if the value is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, TypedValue::Empty)
    }

    /// Try to get the value as a string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TypedValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            TypedValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get the value as a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            TypedValue::Float(x) => Some(*x),
            TypedValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get the value as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TypedValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the value as a date/time
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            TypedValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Empty => Ok(()),
            TypedValue::Text(s) => write!(f, "{}", s),
            TypedValue::Int(i) => write!(f, "{}", i),
            TypedValue::Float(x) => write!(f, "{}", x),
            TypedValue::Bool(b) => write!(f, "{}", bool_storage_form(*b)),
            TypedValue::DateTime(dt) => write!(f, "{}", format_iso(dt)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_conversions() {
        assert_eq!(Value::from(42), Value::Int(42));
        assert_eq!(Value::from(2.5), Value::Float(2.5));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from("hello"), Value::Str("hello".into()));

        let d = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(
            Value::from(d),
            Value::DateTime(d.and_hms_opt(0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_value_display_is_text_storage_form() {
        assert_eq!(Value::from("Sam").to_string(), "Sam");
        assert_eq!(Value::from(42).to_string(), "42");
        assert_eq!(Value::from(true).to_string(), "True");
        assert_eq!(Value::Empty.to_string(), "");
    }

    #[test]
    fn test_typed_value_accessors() {
        assert_eq!(TypedValue::Int(7).as_int(), Some(7));
        assert_eq!(TypedValue::Int(7).as_float(), Some(7.0));
        assert_eq!(TypedValue::Bool(true).as_bool(), Some(true));
        assert_eq!(TypedValue::Text("x".into()).as_str(), Some("x"));
        assert_eq!(TypedValue::Text("x".into()).as_int(), None);
        assert!(TypedValue::Empty.is_empty());
    }
}
