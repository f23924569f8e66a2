//! The three record kinds shown on the dashboard

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::Address;
use super::Contact;
use super::ContactRef;
use super::Status;

/// A customer row on the customers page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub is_returning: bool,
    #[serde(default)]
    pub request_count: u32,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&Customer> for Contact {
    fn from(customer: &Customer) -> Self {
        Contact {
            id: customer.id.clone(),
            full_name: customer.name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone(),
            is_returning: customer.is_returning,
        }
    }
}

/// A moving quote request.
///
/// `customer` may arrive as a bare id. Resolve it with
/// [`normalize_quote`](crate::model::normalize_quote) before display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub customer: ContactRef,
    #[serde(default)]
    pub from_address: Option<Address>,
    #[serde(default)]
    pub to_address: Option<Address>,
    pub moving_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub delivery_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub move_size: String,
    #[serde(default)]
    pub service_type: String,
    pub status: Status,
    #[serde(default)]
    pub estimated_price: Option<f64>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
}

/// An active moving job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovingRequest {
    #[serde(alias = "_id")]
    pub id: String,
    pub customer_id: String,
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub customer_phone: String,
    #[serde(default)]
    pub pickup_address: String,
    #[serde(default)]
    pub destination_address: String,
    pub requested_date: DateTime<Utc>,
    pub service_type: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_returning_customer: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_from_api_json() {
        let json = r#"{
            "_id": "c1",
            "name": "Ann Lee",
            "email": "ann@example.com",
            "phone": "555-123-4567",
            "isReturning": true,
            "requestCount": 3,
            "createdAt": "2024-01-05T10:00:00Z"
        }"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.request_count, 3);

        let contact = Contact::from(&customer);
        assert_eq!(contact.full_name, "Ann Lee");
        assert!(contact.is_returning);
    }

    #[test]
    fn test_quote_with_bare_customer_id() {
        let json = r#"{
            "_id": "q1",
            "customer": "c1",
            "status": "in-progress",
            "movingDate": null,
            "createdAt": "2024-01-05T10:00:00Z"
        }"#;
        let quote: Quote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.customer.id(), "c1");
        assert_eq!(quote.status, Status::InProgress);
        assert!(quote.estimated_price.is_none());
    }
}
