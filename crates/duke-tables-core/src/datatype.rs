//! Column data types and their coercion rules
//!
//! The registry of supported types is a closed enum: every column carries
//! one [`DataType`] variant, and each variant owns its [`coerce`] /
//! [`decode`] pair. Coercion turns a caller-supplied [`Value`] into the
//! storage form (always a string); decoding reverses it on read.
//!
//! [`coerce`]: DataType::coerce
//! [`decode`]: DataType::decode

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{Error, Result};
use crate::value::{TypedValue, Value};

/// The declared scalar type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataType {
    /// Short text
    Char,
    /// Integer
    Int,
    /// Floating-point number
    Float,
    /// Boolean, stored as `"True"` / `"False"`
    Bool,
    /// Long text
    TextField,
    /// ISO-8601 date/time
    Date,
}

impl DataType {
    /// Every supported type, in registry order
    pub const ALL: [DataType; 6] = [
        DataType::Char,
        DataType::Int,
        DataType::Float,
        DataType::Bool,
        DataType::TextField,
        DataType::Date,
    ];

    /// Get the registry name for this type
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Char => "char",
            DataType::Int => "int",
            DataType::Float => "float",
            DataType::Bool => "bool",
            DataType::TextField => "textfield",
            DataType::Date => "date",
        }
    }

    /// Parse a registry name, case-insensitive and whitespace-trimmed.
    ///
    /// An unknown name is a normal outcome, not an error.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "char" => Some(DataType::Char),
            "int" => Some(DataType::Int),
            "float" => Some(DataType::Float),
            "bool" => Some(DataType::Bool),
            "textfield" => Some(DataType::TextField),
            "date" => Some(DataType::Date),
            _ => None,
        }
    }

    /// Check whether a type name is in the registry
    pub fn is_supported(name: &str) -> bool {
        Self::parse(name).is_some()
    }

    /// Element-wise [`is_supported`](Self::is_supported), preserving input order
    pub fn is_supported_all<S: AsRef<str>>(names: &[S]) -> Vec<bool> {
        names
            .iter()
            .map(|name| Self::is_supported(name.as_ref()))
            .collect()
    }

    /// Registry names in declaration order
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|ty| ty.as_str()).collect()
    }

    /// Coerce a caller-supplied value into this type's storage form.
    ///
    /// [`Value::Empty`] stores the empty string under every type. A `0`
    /// or `false` input is a value like any other, not an absence.
    pub fn coerce(&self, value: &Value) -> Result<String> {
        match self {
            DataType::Char | DataType::TextField => Ok(value.to_string()),
            DataType::Int => match value {
                Value::Empty => Ok(String::new()),
                Value::Int(i) => Ok(i.to_string()),
                Value::Float(f) => Ok((f.trunc() as i64).to_string()),
                Value::Str(s) => {
                    let s = s.trim();
                    if s.is_empty() {
                        Ok(String::new())
                    } else if let Ok(i) = s.parse::<i64>() {
                        Ok(i.to_string())
                    } else {
                        // permit float-like strings, keeping the integer part
                        s.parse::<f64>()
                            .map(|f| (f.trunc() as i64).to_string())
                            .map_err(|_| self.parse_failure(value))
                    }
                }
                _ => Err(self.parse_failure(value)),
            },
            DataType::Float => match value {
                Value::Empty => Ok(String::new()),
                Value::Int(i) => Ok((*i as f64).to_string()),
                Value::Float(f) => Ok(f.to_string()),
                Value::Str(s) => {
                    let s = s.trim();
                    if s.is_empty() {
                        Ok(String::new())
                    } else {
                        s.parse::<f64>()
                            .map(|f| f.to_string())
                            .map_err(|_| self.parse_failure(value))
                    }
                }
                _ => Err(self.parse_failure(value)),
            },
            DataType::Bool => match value {
                Value::Empty => Ok(String::new()),
                Value::Bool(b) => Ok(bool_storage_form(*b).to_string()),
                Value::Str(s) => {
                    let s = s.trim();
                    if s.is_empty() {
                        Ok(String::new())
                    } else if s.eq_ignore_ascii_case("true") {
                        Ok(bool_storage_form(true).to_string())
                    } else if s.eq_ignore_ascii_case("false") {
                        Ok(bool_storage_form(false).to_string())
                    } else {
                        Err(self.parse_failure(value))
                    }
                }
                _ => Err(self.parse_failure(value)),
            },
            DataType::Date => match value {
                Value::Empty => Ok(String::new()),
                Value::DateTime(dt) => Ok(format_iso(dt)),
                Value::Str(s) => {
                    let s = s.trim();
                    if s.is_empty() {
                        Ok(String::new())
                    } else {
                        parse_iso(s)
                            .map(|dt| format_iso(&dt))
                            .ok_or_else(|| self.parse_failure(value))
                    }
                }
                _ => Err(self.parse_failure(value)),
            },
        }
    }

    /// Decode a storage form back into a typed view.
    ///
    /// Never fails: the empty string under a non-text type decodes to
    /// [`TypedValue::Empty`], and an undecodable storage form degrades to
    /// [`TypedValue::Text`] carrying the raw string.
    pub fn decode(&self, raw: &str) -> TypedValue {
        match self {
            DataType::Char | DataType::TextField => TypedValue::Text(raw.to_string()),
            _ if raw.is_empty() => TypedValue::Empty,
            DataType::Int => match raw.parse::<i64>() {
                Ok(i) => TypedValue::Int(i),
                Err(_) => match raw.parse::<f64>() {
                    Ok(f) => TypedValue::Int(f.trunc() as i64),
                    Err(_) => TypedValue::Text(raw.to_string()),
                },
            },
            DataType::Float => match raw.parse::<f64>() {
                Ok(f) => TypedValue::Float(f),
                Err(_) => TypedValue::Text(raw.to_string()),
            },
            DataType::Bool => {
                if raw.eq_ignore_ascii_case("true") {
                    TypedValue::Bool(true)
                } else if raw.eq_ignore_ascii_case("false") {
                    TypedValue::Bool(false)
                } else {
                    TypedValue::Text(raw.to_string())
                }
            }
            DataType::Date => match parse_iso(raw) {
                Some(dt) => TypedValue::DateTime(dt),
                None => TypedValue::Text(raw.to_string()),
            },
        }
    }

    fn parse_failure(&self, value: &Value) -> Error {
        Error::CantParseValue {
            value: value.to_string(),
            data_type: *self,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DataType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| Error::UnsupportedDataType(s.trim().to_string()))
    }
}

/// Canonical boolean storage form
pub(crate) fn bool_storage_form(b: bool) -> &'static str {
    if b {
        "True"
    } else {
        "False"
    }
}

/// Parse an ISO-8601 date/time, accepting a bare date as midnight
pub(crate) fn parse_iso(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = s.parse::<NaiveDateTime>() {
        return Some(dt);
    }
    s.parse::<NaiveDate>()
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Serialize a date/time to ISO-8601
pub(crate) fn format_iso(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_and_whitespace_insensitive() {
        assert_eq!(DataType::parse(" ChAr "), Some(DataType::Char));
        assert_eq!(DataType::parse("INT"), Some(DataType::Int));
        assert_eq!(DataType::parse("textfield"), Some(DataType::TextField));
        assert_eq!(DataType::parse("varchar"), None);

        assert!(DataType::is_supported(" ChAr "));
        assert_eq!(
            DataType::is_supported(" ChAr "),
            DataType::is_supported("char")
        );
    }

    #[test]
    fn test_is_supported_all_preserves_order() {
        let flags = DataType::is_supported_all(&["char", "blob", " Date "]);
        assert_eq!(flags, vec![true, false, true]);
    }

    #[test]
    fn test_names_in_registry_order() {
        assert_eq!(
            DataType::names(),
            vec!["char", "int", "float", "bool", "textfield", "date"]
        );
    }

    #[test]
    fn test_from_str_unsupported() {
        let err = " blob ".parse::<DataType>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedDataType(name) if name == "blob"));
    }

    #[test]
    fn test_coerce_int() {
        let ty = DataType::Int;
        assert_eq!(ty.coerce(&Value::from(42)).unwrap(), "42");
        assert_eq!(ty.coerce(&Value::from(3.9)).unwrap(), "3");
        assert_eq!(ty.coerce(&Value::from("-17")).unwrap(), "-17");
        assert_eq!(ty.coerce(&Value::from(" 3.7 ")).unwrap(), "3");
        assert_eq!(ty.coerce(&Value::from("")).unwrap(), "");
        assert_eq!(ty.coerce(&Value::Empty).unwrap(), "");

        assert!(matches!(
            ty.coerce(&Value::from("3o")),
            Err(Error::CantParseValue { .. })
        ));
        assert!(ty.coerce(&Value::from(true)).is_err());
    }

    #[test]
    fn test_coerce_int_zero_is_not_absent() {
        assert_eq!(DataType::Int.coerce(&Value::from(0)).unwrap(), "0");
        assert_eq!(DataType::Int.coerce(&Value::from("0")).unwrap(), "0");
    }

    #[test]
    fn test_coerce_float() {
        let ty = DataType::Float;
        assert_eq!(ty.coerce(&Value::from(2.5)).unwrap(), "2.5");
        assert_eq!(ty.coerce(&Value::from(3)).unwrap(), "3");
        assert_eq!(ty.coerce(&Value::from("1.25")).unwrap(), "1.25");
        assert_eq!(ty.coerce(&Value::Empty).unwrap(), "");
        assert!(ty.coerce(&Value::from("abc")).is_err());
    }

    #[test]
    fn test_coerce_bool() {
        let ty = DataType::Bool;
        assert_eq!(ty.coerce(&Value::from(true)).unwrap(), "True");
        assert_eq!(ty.coerce(&Value::from(false)).unwrap(), "False");
        assert_eq!(ty.coerce(&Value::from(" tRuE ")).unwrap(), "True");
        assert_eq!(ty.coerce(&Value::from("FALSE")).unwrap(), "False");
        assert_eq!(ty.coerce(&Value::Empty).unwrap(), "");
        assert!(ty.coerce(&Value::from("yes")).is_err());
        assert!(ty.coerce(&Value::from(1)).is_err());
    }

    #[test]
    fn test_coerce_date() {
        let ty = DataType::Date;
        assert_eq!(
            ty.coerce(&Value::from("2024-05-01T08:30:00")).unwrap(),
            "2024-05-01T08:30:00"
        );
        assert_eq!(
            ty.coerce(&Value::from("2024-05-01")).unwrap(),
            "2024-05-01T00:00:00"
        );
        assert_eq!(ty.coerce(&Value::Empty).unwrap(), "");

        // unparseable dates fail hard, same as the numeric types
        assert!(matches!(
            ty.coerce(&Value::from("next tuesday")),
            Err(Error::CantParseValue { .. })
        ));
        assert!(ty.coerce(&Value::from(7)).is_err());
    }

    #[test]
    fn test_coerce_text_never_fails() {
        assert_eq!(DataType::Char.coerce(&Value::from("Sam")).unwrap(), "Sam");
        assert_eq!(DataType::Char.coerce(&Value::from(12)).unwrap(), "12");
        assert_eq!(DataType::TextField.coerce(&Value::from(true)).unwrap(), "True");
        assert_eq!(DataType::Char.coerce(&Value::Empty).unwrap(), "");
    }

    #[test]
    fn test_decode_round_trips() {
        let stored = DataType::Int.coerce(&Value::from(42)).unwrap();
        assert_eq!(DataType::Int.decode(&stored), TypedValue::Int(42));

        let stored = DataType::Float.coerce(&Value::from(2.5)).unwrap();
        assert_eq!(DataType::Float.decode(&stored), TypedValue::Float(2.5));

        let stored = DataType::Bool.coerce(&Value::from(true)).unwrap();
        assert_eq!(DataType::Bool.decode(&stored), TypedValue::Bool(true));

        let stored = DataType::Char.coerce(&Value::from("Sam")).unwrap();
        assert_eq!(DataType::Char.decode(&stored), TypedValue::Text("Sam".into()));

        let dt = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        let stored = DataType::Date.coerce(&Value::from(dt)).unwrap();
        assert_eq!(DataType::Date.decode(&stored), TypedValue::DateTime(dt));
    }

    #[test]
    fn test_decode_degrades_to_raw_text() {
        assert_eq!(
            DataType::Int.decode("not-a-number"),
            TypedValue::Text("not-a-number".into())
        );
        assert_eq!(
            DataType::Date.decode("garbage"),
            TypedValue::Text("garbage".into())
        );
    }

    #[test]
    fn test_decode_empty_storage_form() {
        assert_eq!(DataType::Int.decode(""), TypedValue::Empty);
        assert_eq!(DataType::Bool.decode(""), TypedValue::Empty);
        // text types keep the empty string as text
        assert_eq!(DataType::Char.decode(""), TypedValue::Text(String::new()));
    }
}
