//! Free-text search over configured record fields.
//!
//! A record matches when at least one configured field's string form contains
//! the query as a case-insensitive substring. Fields are OR-ed. The match is
//! not tokenized and not fuzzy.

use super::TableRecord;
use crate::model::FieldPath;
use crate::model::Value;
use crate::model::types::CONTACT_SEARCH_KEYS;

/// Default name of the field holding an embedded contact object.
pub const DEFAULT_CONTACT_FIELD: &str = "customer";

/// One field the search engine tests a record against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchField {
    /// A direct key or a dotted path.
    Field(FieldPath),
    /// The embedded contact's display name, email and phone.
    Contact,
}

impl SearchField {
    /// A direct key or dotted path.
    pub fn path(path: impl Into<FieldPath>) -> Self {
        SearchField::Field(path.into())
    }
}

/// Search configuration of one table.
///
/// `fields` is tried first. When it is empty the single `primary` field is
/// used instead. A raw field equal to `contact_field` is read as the
/// nested-contact marker.
///
/// # Example
///
/// ```
/// use movedesk_lib::table::{SearchConfig, SearchField};
///
/// let config = SearchConfig::new().with_fields(["customer", "notes", "fromAddress.city"]);
/// assert_eq!(config.fields()[0], SearchField::Contact);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    fields: Vec<SearchField>,
    primary: Option<SearchField>,
    contact_field: FieldPath,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            primary: None,
            contact_field: FieldPath::parse(DEFAULT_CONTACT_FIELD),
        }
    }
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field holding the embedded contact.
    ///
    /// Call this before adding fields so the marker is recognized.
    pub fn with_contact_field(mut self, field: impl Into<FieldPath>) -> Self {
        self.contact_field = field.into();
        self
    }

    /// Sets the primary search key used when no search fields are configured.
    pub fn with_primary(mut self, raw: &str) -> Self {
        self.primary = Some(self.parse_field(raw));
        self
    }

    /// Appends search fields, parsed from their raw form.
    pub fn with_fields<'a>(mut self, raw: impl IntoIterator<Item = &'a str>) -> Self {
        for raw in raw {
            let field = self.parse_field(raw);
            self.fields.push(field);
        }
        self
    }

    /// Appends one already-parsed search field.
    pub fn with_field(mut self, field: SearchField) -> Self {
        self.fields.push(field);
        self
    }

    /// Reads a raw field name, recognizing the contact marker.
    pub fn parse_field(&self, raw: &str) -> SearchField {
        let path = FieldPath::parse(raw);
        if path == self.contact_field {
            SearchField::Contact
        } else {
            SearchField::Field(path)
        }
    }

    pub fn fields(&self) -> &[SearchField] {
        &self.fields
    }

    pub fn primary(&self) -> Option<&SearchField> {
        self.primary.as_ref()
    }

    pub fn contact_field(&self) -> &FieldPath {
        &self.contact_field
    }

    /// The fields actually searched: `fields`, or the primary key alone.
    pub fn effective_fields(&self) -> &[SearchField] {
        if !self.fields.is_empty() {
            &self.fields
        } else if let Some(primary) = &self.primary {
            std::slice::from_ref(primary)
        } else {
            &[]
        }
    }

    /// Returns `true` when a search box should be shown.
    pub fn is_searchable(&self) -> bool {
        !self.effective_fields().is_empty()
    }
}

/// Lowercased query, prepared once per filter pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Needle(String);

impl Needle {
    pub fn new(query: &str) -> Self {
        Self(query.to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn found_in(&self, value: &Value) -> bool {
        value
            .as_search_text()
            .is_some_and(|text| text.to_lowercase().contains(&self.0))
    }
}

fn field_matches<R: TableRecord>(
    record: &R,
    field: &SearchField,
    needle: &Needle,
    contact_field: &FieldPath,
) -> bool {
    match field {
        SearchField::Field(path) => record.lookup(path).is_some_and(|v| needle.found_in(v)),
        SearchField::Contact => record
            .lookup(contact_field)
            .and_then(Value::as_record)
            .is_some_and(|contact| {
                CONTACT_SEARCH_KEYS
                    .iter()
                    .filter_map(|key| contact.get(key))
                    .any(|v| needle.found_in(v))
            }),
    }
}

/// Returns `true` if the record matches the query.
///
/// An empty query matches every record. With no configured fields a
/// non-empty query matches nothing.
pub fn matches<R: TableRecord>(record: &R, query: &str, config: &SearchConfig) -> bool {
    matches_needle(record, &Needle::new(query), config)
}

/// Same as [`matches`] with a prepared needle.
pub fn matches_needle<R: TableRecord>(record: &R, needle: &Needle, config: &SearchConfig) -> bool {
    if needle.is_empty() {
        return true;
    }
    config
        .effective_fields()
        .iter()
        .any(|field| field_matches(record, field, needle, &config.contact_field))
}

/// Indices of matching records, in input order.
pub fn filter_indices<R: TableRecord>(records: &[R], query: &str, config: &SearchConfig) -> Vec<usize> {
    let needle = Needle::new(query);
    let indices: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_needle(*record, &needle, config))
        .map(|(i, _)| i)
        .collect();
    log::trace!(
        "Search '{}' matched {} of {} records",
        query,
        indices.len(),
        records.len()
    );
    indices
}

/// Matching records, in input order.
pub fn filter<'a, R: TableRecord>(records: &'a [R], query: &str, config: &SearchConfig) -> Vec<&'a R> {
    filter_indices(records, query, config)
        .into_iter()
        .map(|i| &records[i])
        .collect()
}
