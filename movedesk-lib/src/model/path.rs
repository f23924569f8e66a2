//! Dotted field paths

use std::fmt;

/// A field path, either a single key or a dotted chain of keys.
///
/// # Example
///
/// ```
/// use movedesk_lib::model::FieldPath;
///
/// let path = FieldPath::parse("customer.fullName");
/// assert_eq!(path.segments(), ["customer", "fullName"]);
/// assert!(path.is_nested());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Parses a path, splitting on `.`.
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path.split('.').map(str::to_string).collect(),
        }
    }

    /// Returns the path segments in lookup order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns `true` if the path has more than one segment.
    pub fn is_nested(&self) -> bool {
        self.segments.len() > 1
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl From<String> for FieldPath {
    fn from(path: String) -> Self {
        Self::parse(&path)
    }
}
