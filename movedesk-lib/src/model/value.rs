//! Field values of a record

use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::Record;
use super::Timestamp;

/// A dynamic value held by a record field.
///
/// Records coming from the dashboard API are loosely shaped JSON. `Value`
/// keeps just enough structure for the table core: scalars the filter engine
/// can coerce to text, datetimes the sort engine can order chronologically,
/// and nested records for dotted path lookups.
///
/// # From JSON
///
/// | JSON | Rust Variant |
/// |------|--------------|
/// | null | `Null` |
/// | true/false | `Bool` |
/// | integer | `Int` |
/// | other number | `Float` |
/// | RFC 3339 string | `DateTime` (text kept) |
/// | other string | `String` |
/// | object | `Record` |
/// | array | `List` |
///
/// # Example
///
/// ```
/// use movedesk_lib::model::Value;
///
/// let name = Value::from("Ann");
/// let count = Value::from(3i64);
/// assert_eq!(count.as_f64(), Some(3.0));
/// let empty = Value::Null;
/// assert_eq!(name.as_search_text().as_deref(), Some("Ann"));
/// assert_eq!(empty.as_search_text(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// JSON `null`, or a field the API left out.
    Null,
    Bool(bool),
    /// Whole numbers such as request counts.
    Int(i64),
    /// Prices and other fractional numbers.
    Float(f64),
    String(String),
    /// Timestamps parsed from RFC 3339 strings, source text included.
    DateTime(Timestamp),
    /// A nested object, e.g. a quote's embedded customer.
    Record(Box<Record>),
    List(Vec<Value>),
}

impl Value {
    /// Whether the field holds nothing.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Kind name used in type mismatch errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::DateTime(_) => "datetime",
            Value::Record(_) => "record",
            Value::List(_) => "list",
        }
    }

    /// Returns the string slice if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the embedded record if this is a `Record`.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Returns the numeric value for `Int` and `Float`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// String form used by substring search.
    ///
    /// Scalars are coerced to text. `Null`, embedded records and lists never
    /// match a query, so they return `None`.
    pub fn as_search_text(&self) -> Option<String> {
        match self {
            Value::Null | Value::Record(_) | Value::List(_) => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Converts a JSON value into a `Value`.
    ///
    /// Strings that parse as RFC 3339 timestamps become `DateTime`.
    pub fn from_json(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
            },
            serde_json::Value::String(s) => match Timestamp::parse(&s) {
                Ok(ts) => Value::DateTime(ts),
                Err(_) => Value::String(s),
            },
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from_json).collect())
            }
            serde_json::Value::Object(map) => Value::Record(Box::new(Record::from_json_map(map))),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::String(s) => f.write_str(s),
            Value::DateTime(ts) => f.write_str(ts.as_str()),
            Value::Record(r) => match serde_json::to_string(r.as_ref()) {
                Ok(json) => f.write_str(&json),
                Err(_) => Err(fmt::Error),
            },
            Value::List(items) => {
                let parts: Vec<String> = items.iter().map(|v| v.to_string()).collect();
                f.write_str(&parts.join(", "))
            }
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(Timestamp::from(v))
    }
}

impl From<Timestamp> for Value {
    fn from(v: Timestamp) -> Self {
        Value::DateTime(v)
    }
}

impl From<Record> for Value {
    fn from(v: Record) -> Self {
        Value::Record(Box::new(v))
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::from_json(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_search_text_coerces_scalars() {
        assert_eq!(Value::from(42i64).as_search_text().as_deref(), Some("42"));
        assert_eq!(Value::from(1500.5).as_search_text().as_deref(), Some("1500.5"));
        assert_eq!(Value::from(true).as_search_text().as_deref(), Some("true"));
    }

    #[test]
    fn test_search_text_skips_null_and_nested() {
        assert_eq!(Value::Null.as_search_text(), None);
        assert_eq!(Value::from(Record::new()).as_search_text(), None);
        assert_eq!(Value::List(vec![Value::from("a")]).as_search_text(), None);
    }

    #[test]
    fn test_from_json_detects_datetimes() {
        let value = Value::from_json(serde_json::json!("2024-03-01T10:00:00Z"));
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        assert_eq!(value, Value::from(expected));

        let plain = Value::from_json(serde_json::json!("2024-03-01"));
        assert_eq!(plain, Value::from("2024-03-01"));
    }

    #[test]
    fn test_datetime_keeps_source_text() {
        let raw = "2024-03-01T10:00:00.123+02:00";
        let value = Value::from_json(serde_json::json!(raw));
        assert_eq!(value.type_name(), "datetime");
        assert_eq!(value.to_string(), raw);
        assert_eq!(value.as_search_text().as_deref(), Some(raw));
        assert_eq!(serde_json::to_value(&value).unwrap(), serde_json::json!(raw));
    }

    #[test]
    fn test_from_json_numbers() {
        assert_eq!(Value::from_json(serde_json::json!(7)), Value::Int(7));
        assert_eq!(Value::from_json(serde_json::json!(7.25)), Value::Float(7.25));
    }

    #[test]
    fn test_from_option() {
        let none: Option<&str> = None;
        assert_eq!(Value::from(none), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }
}
