//! Dynamic record

use std::collections::HashMap;

use chrono::DateTime;
use chrono::Utc;

use super::FieldPath;
use super::Value;
use crate::error::FieldError;

/// A dynamic dashboard record (customer, quote or moving request).
///
/// Fields are keyed by their API name. The typed getters check the value kind,
/// and [`lookup`](Record::lookup) walks dotted paths into embedded objects
/// such as a quote's `customer`.
///
/// # Example
///
/// ```
/// use movedesk_lib::model::{FieldPath, Record};
///
/// let customer = Record::new()
///     .set("fullName", "Ann Lee")
///     .set("email", "ann@example.com");
/// let quote = Record::with_id("q1").set("customer", customer);
///
/// assert_eq!(quote.get_string("missing").is_err(), true);
/// let name = quote.lookup(&FieldPath::parse("customer.fullName"));
/// assert_eq!(name.and_then(|v| v.as_str()), Some("Ann Lee"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    /// `_id` of the API object, when it had one.
    pub(crate) id: Option<String>,
    pub(crate) fields: HashMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            fields: HashMap::new(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    /// The raw value stored under `field`.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Field names, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.fields.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Resolves a dotted path by successive field lookup.
    ///
    /// Returns `None` when any segment is absent or an intermediate value is
    /// not an embedded record.
    pub fn lookup(&self, path: &FieldPath) -> Option<&Value> {
        let (first, rest) = path.segments().split_first()?;
        let mut current = self.fields.get(first)?;
        for segment in rest {
            current = current.as_record()?.fields.get(segment)?;
        }
        Some(current)
    }

    /// Builder form of [`insert`](Record::insert).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    // -------------------------------------------------------------------------
    // Typed getters. A missing field or a value of another kind is an error;
    // an explicit null is `Ok(None)`.
    // -------------------------------------------------------------------------

    fn typed<'a, T>(
        &'a self,
        field: &str,
        expected: &'static str,
        extract: impl FnOnce(&'a Value) -> Option<T>,
    ) -> Result<Option<T>, FieldError> {
        let value = self
            .fields
            .get(field)
            .ok_or_else(|| FieldError::missing(field))?;
        if value.is_null() {
            return Ok(None);
        }
        extract(value)
            .map(Some)
            .ok_or_else(|| FieldError::type_mismatch(field, expected, value.type_name()))
    }

    pub fn get_string(&self, field: &str) -> Result<Option<&str>, FieldError> {
        self.typed(field, "string", |v| match v {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        })
    }

    pub fn get_bool(&self, field: &str) -> Result<Option<bool>, FieldError> {
        self.typed(field, "bool", |v| match v {
            Value::Bool(b) => Some(*b),
            _ => None,
        })
    }

    pub fn get_int(&self, field: &str) -> Result<Option<i64>, FieldError> {
        self.typed(field, "int", |v| match v {
            Value::Int(n) => Some(*n),
            _ => None,
        })
    }

    /// Reads a number as `f64`; integers widen.
    pub fn get_float(&self, field: &str) -> Result<Option<f64>, FieldError> {
        self.typed(field, "float", Value::as_f64)
    }

    pub fn get_datetime(&self, field: &str) -> Result<Option<DateTime<Utc>>, FieldError> {
        self.typed(field, "datetime", |v| match v {
            Value::DateTime(at) => Some(at.instant()),
            _ => None,
        })
    }

    /// Reads an embedded object, such as a quote's contact.
    pub fn get_record(&self, field: &str) -> Result<Option<&Record>, FieldError> {
        self.typed(field, "record", Value::as_record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote() -> Record {
        let customer = Record::new()
            .set("fullName", "Ann Lee")
            .set("phone", "555-123-4567");
        Record::with_id("q1")
            .set("customer", customer)
            .set("status", "pending")
            .set("notes", Value::Null)
    }

    #[test]
    fn test_lookup_direct_and_nested() {
        let record = quote();
        assert_eq!(
            record.lookup(&FieldPath::parse("status")),
            Some(&Value::from("pending"))
        );
        assert_eq!(
            record.lookup(&FieldPath::parse("customer.phone")),
            Some(&Value::from("555-123-4567"))
        );
    }

    #[test]
    fn test_lookup_missing_segment_is_none() {
        let record = quote();
        assert_eq!(record.lookup(&FieldPath::parse("customer.email")), None);
        assert_eq!(record.lookup(&FieldPath::parse("driver.name")), None);
    }

    #[test]
    fn test_lookup_through_scalar_is_none() {
        let record = quote();
        assert_eq!(record.lookup(&FieldPath::parse("status.label")), None);
    }

    #[test]
    fn test_typed_getters() {
        let record = quote();
        assert_eq!(record.get_string("status"), Ok(Some("pending")));
        assert_eq!(record.get_string("notes"), Ok(None));
        assert_eq!(record.get_string("nope"), Err(FieldError::missing("nope")));
        assert_eq!(
            record.get_int("status"),
            Err(FieldError::type_mismatch("status", "int", "string"))
        );
        assert!(record.get_record("customer").unwrap().is_some());
    }

    #[test]
    fn test_keys_sorted() {
        let record = Record::new().set("b", 1i64).set("a", 2i64);
        assert_eq!(record.keys(), vec!["a", "b"]);
    }
}
