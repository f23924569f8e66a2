//! Timestamps that keep their source text

use std::cmp::Ordering;
use std::fmt;

use chrono::DateTime;
use chrono::SecondsFormat;
use chrono::Utc;
use serde::Serialize;
use serde::Serializer;

/// An RFC 3339 timestamp together with the text it was read from.
///
/// Sorting uses the instant. Display, search and export use the text, so
/// `2024-03-01T10:00:00.123+02:00` stays exactly that.
///
/// # Example
///
/// ```
/// use movedesk_lib::model::Timestamp;
///
/// let ts = Timestamp::parse("2024-03-01T10:00:00.123+02:00").unwrap();
/// assert_eq!(ts.as_str(), "2024-03-01T10:00:00.123+02:00");
/// assert_eq!(ts.instant().to_rfc3339(), "2024-03-01T08:00:00.123+00:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    instant: DateTime<Utc>,
    text: String,
}

impl Timestamp {
    pub fn parse(text: &str) -> Result<Self, chrono::ParseError> {
        let instant = DateTime::parse_from_rfc3339(text)?.with_timezone(&Utc);
        Ok(Self {
            instant,
            text: text.to_string(),
        })
    }

    /// The point in time, normalized to UTC.
    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    /// The text as it arrived.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Self {
            instant,
            text: instant.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }
}

impl Ord for Timestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant
            .cmp(&other.instant)
            .then_with(|| self.text.cmp(&other.text))
    }
}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}
