//! Postal address

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// A pickup or destination address.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl Address {
    /// City and state only, as shown in location columns.
    pub fn short(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {} {}",
            self.street, self.city, self.state, self.zip_code
        )
    }
}
