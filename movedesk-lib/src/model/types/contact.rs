//! Contact types for embedded customers

use serde::Deserialize;
use serde::Serialize;

/// Key of the contact's display name inside an embedded contact object.
pub const CONTACT_NAME_KEY: &str = "fullName";
/// Key of the contact's email inside an embedded contact object.
pub const CONTACT_EMAIL_KEY: &str = "email";
/// Key of the contact's phone inside an embedded contact object.
pub const CONTACT_PHONE_KEY: &str = "phone";

/// The sub-fields checked by the nested-contact search marker, in order.
pub const CONTACT_SEARCH_KEYS: [&str; 3] = [CONTACT_NAME_KEY, CONTACT_EMAIL_KEY, CONTACT_PHONE_KEY];

/// A customer contact embedded in quotes.
///
/// # Example
///
/// ```
/// use movedesk_lib::model::types::Contact;
///
/// let contact = Contact::new("c1", "Ann Lee", "ann@example.com", "555-123-4567");
/// assert_eq!(contact.full_name, "Ann Lee");
/// assert!(!contact.is_returning);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// The contact's identifier.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Display name.
    pub full_name: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Phone number.
    #[serde(default)]
    pub phone: String,
    /// Whether the contact has booked before.
    #[serde(default)]
    pub is_returning: bool,
}

impl Contact {
    /// Creates a new contact.
    pub fn new(
        id: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            email: email.into(),
            phone: phone.into(),
            is_returning: false,
        }
    }

    /// Marks the contact as a returning customer.
    pub fn returning(mut self) -> Self {
        self.is_returning = true;
        self
    }
}

/// A contact as it arrives from the API: embedded or as a bare id.
///
/// Hosts resolve references before records reach a table, see
/// [`normalize_quote`](crate::model::normalize_quote).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContactRef {
    /// Fully embedded contact object.
    Embedded(Contact),
    /// Reference by contact id.
    Id(String),
}

impl ContactRef {
    /// Returns the embedded contact, if resolved.
    pub fn contact(&self) -> Option<&Contact> {
        match self {
            Self::Embedded(contact) => Some(contact),
            Self::Id(_) => None,
        }
    }

    /// Returns the referenced contact id.
    pub fn id(&self) -> &str {
        match self {
            Self::Embedded(contact) => &contact.id,
            Self::Id(id) => id,
        }
    }
}

impl From<Contact> for ContactRef {
    fn from(contact: Contact) -> Self {
        Self::Embedded(contact)
    }
}
