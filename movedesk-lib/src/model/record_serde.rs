//! Serialization for Record to and from the dashboard API's JSON shape.
//!
//! Reading:
//!
//! - Any JSON object becomes a record; nested objects become embedded records.
//! - `_id` (or `id` when `_id` is absent) string keys populate the record ID.
//!   They also stay in the field map so they can be searched and exported.
//! - RFC 3339 strings become `Value::DateTime`, keeping their text.
//!
//! Writing:
//!
//! - Fields serialize as a flat JSON object with nested objects for embedded
//!   records. Null values are skipped.

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::MapAccess;
use serde::de::Visitor;
use serde::ser::SerializeMap;

use super::Record;
use super::Value;

const ID_KEYS: [&str; 2] = ["_id", "id"];

impl Record {
    /// Builds a record from a JSON object map.
    pub fn from_json_map(map: serde_json::Map<String, serde_json::Value>) -> Self {
        let mut record = Record::new();
        for (key, value) in map {
            record.fields.insert(key, Value::from_json(value));
        }
        record.id = ID_KEYS
            .iter()
            .find_map(|key| record.fields.get(*key).and_then(Value::as_str))
            .map(str::to_string);
        record
    }

    /// Converts any serializable domain model into a record.
    ///
    /// The model must serialize to a JSON object.
    pub fn from_serialize<T: Serialize>(model: &T) -> Result<Self, serde_json::Error> {
        match serde_json::to_value(model)? {
            serde_json::Value::Object(map) => Ok(Self::from_json_map(map)),
            other => Err(serde::de::Error::custom(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

// =============================================================================
// Serialization
// =============================================================================

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;

        // Sorted keys keep exports stable
        for key in self.keys() {
            match &self.fields[key] {
                Value::Null => {}
                value => map.serialize_entry(key, value)?,
            }
        }

        map.end()
    }
}

// =============================================================================
// Deserialization
// =============================================================================

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map representing a dashboard record")
    }

    fn visit_map<M>(self, mut map: M) -> Result<Record, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut raw = serde_json::Map::new();
        while let Some(key) = map.next_key::<String>()? {
            let value: serde_json::Value = map.next_value()?;
            raw.insert(key, value);
        }
        Ok(Record::from_json_map(raw))
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::*;

    #[test]
    fn test_deserialize_nested_object() {
        let json = r#"{
            "_id": "q1",
            "customer": {"_id": "c1", "fullName": "Ann", "phone": "555-123-4567"},
            "estimatedPrice": 1200.5,
            "createdAt": "2024-01-02T03:04:05Z"
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.id(), Some("q1"));
        assert_eq!(record.get_float("estimatedPrice"), Ok(Some(1200.5)));
        assert!(record.get_datetime("createdAt").unwrap().is_some());

        let customer = record.get_record("customer").unwrap().unwrap();
        assert_eq!(customer.id(), Some("c1"));
        assert_eq!(customer.get_string("fullName"), Ok(Some("Ann")));
    }

    #[test]
    fn test_deserialize_plain_id_key() {
        let record: Record = serde_json::from_str(r#"{"id": "c7", "name": "Bob"}"#).unwrap();
        assert_eq!(record.id(), Some("c7"));
        assert!(record.contains("id"));
    }

    #[test]
    fn test_serialize_skips_nulls() {
        let record = Record::new().set("name", "Ann").set("notes", Value::Null);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"Ann"}"#);
    }

    #[test]
    fn test_from_serialize_rejects_non_objects() {
        assert!(Record::from_serialize(&42).is_err());
    }

    #[test]
    fn test_from_serialize_struct() {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Customer {
            id: String,
            full_name: String,
        }

        let record = Record::from_serialize(&Customer {
            id: "c1".into(),
            full_name: "Ann".into(),
        })
        .unwrap();
        assert_eq!(record.id(), Some("c1"));
        assert_eq!(record.get_string("fullName"), Ok(Some("Ann")));
    }
}
