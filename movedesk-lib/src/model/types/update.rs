//! Local edits applied after an admin saves a record
//!
//! The API call itself happens elsewhere. These types describe the change and
//! apply it to the in-memory model so the table can be refreshed.

use super::Customer;
use super::MovingRequest;
use super::Quote;
use super::Status;

/// Edits from the quote details dialog.
///
/// Unset fields leave the quote unchanged. The price arrives as typed text.
///
/// # Example
///
/// ```
/// use movedesk_lib::model::types::{QuoteUpdate, Status};
///
/// let update = QuoteUpdate::new()
///     .status(Status::Completed)
///     .admin_notes("Paid in full")
///     .price_input("1450.00");
/// assert_eq!(update.price(), Some(1450.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteUpdate {
    pub status: Option<Status>,
    pub admin_notes: Option<String>,
    pub price_input: Option<String>,
}

impl QuoteUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn admin_notes(mut self, notes: impl Into<String>) -> Self {
        self.admin_notes = Some(notes.into());
        self
    }

    pub fn price_input(mut self, input: impl Into<String>) -> Self {
        self.price_input = Some(input.into());
        self
    }

    /// The new price, if the input holds a non-zero number.
    pub fn price(&self) -> Option<f64> {
        self.price_input.as_deref().and_then(parse_price)
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.admin_notes.is_none() && self.price_input.is_none()
    }
}

/// Edits from the moving request dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestUpdate {
    pub status: Option<Status>,
    pub notes: Option<String>,
}

impl RequestUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.notes.is_none()
    }
}

/// Reads the leading number of a price field.
///
/// Trailing text is ignored (`"1200 USD"` reads as 1200). Blank, unreadable
/// and zero input yield `None`, which keeps the previous price.
pub fn parse_price(input: &str) -> Option<f64> {
    let input = input.trim_start();
    let numeric = |i: usize, c: char| {
        c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E') || (i == 0 && matches!(c, '-' | '+'))
    };
    let end = input
        .char_indices()
        .find(|&(i, c)| !numeric(i, c))
        .map_or(input.len(), |(i, _)| i);
    let mut number = &input[..end];
    while !number.is_empty() {
        if let Ok(value) = number.parse::<f64>() {
            return (value != 0.0 && value.is_finite()).then_some(value);
        }
        number = &number[..number.len() - 1];
    }
    None
}

impl Quote {
    /// Applies an admin edit.
    ///
    /// A price input that does not read as a non-zero number keeps the
    /// current price.
    pub fn apply_update(&mut self, update: &QuoteUpdate) {
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(notes) = &update.admin_notes {
            self.admin_notes = Some(notes.clone());
        }
        if let Some(price) = update.price() {
            self.estimated_price = Some(price);
        }
    }
}

impl MovingRequest {
    pub fn apply_update(&mut self, update: &RequestUpdate) {
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(notes) = &update.notes {
            self.notes = Some(notes.clone());
        }
    }
}

impl Customer {
    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = Some(notes.into());
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;

    use super::*;
    use crate::model::types::ContactRef;

    fn quote(price: Option<f64>) -> Quote {
        Quote {
            id: "q1".into(),
            customer: ContactRef::Id("c1".into()),
            from_address: None,
            to_address: None,
            moving_date: None,
            delivery_date: None,
            move_size: "studio".into(),
            service_type: "local".into(),
            status: Status::Pending,
            estimated_price: price,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            admin_notes: None,
        }
    }

    #[test]
    fn test_parse_price_reads_leading_number() {
        assert_eq!(parse_price("1200"), Some(1200.0));
        assert_eq!(parse_price(" 99.5 USD"), Some(99.5));
        assert_eq!(parse_price("12.5.3"), Some(12.5));
        assert_eq!(parse_price("-3"), Some(-3.0));
        assert_eq!(parse_price("1e3"), Some(1000.0));
        assert_eq!(parse_price("0"), None);
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("abc"), None);
        assert_eq!(parse_price("."), None);
    }

    #[test]
    fn test_quote_update_replaces_status_and_notes() {
        let mut q = quote(Some(800.0));
        q.apply_update(
            &QuoteUpdate::new()
                .status(Status::InProgress)
                .admin_notes("Confirmed by phone")
                .price_input("950"),
        );
        assert_eq!(q.status, Status::InProgress);
        assert_eq!(q.admin_notes.as_deref(), Some("Confirmed by phone"));
        assert_eq!(q.estimated_price, Some(950.0));
    }

    #[test]
    fn test_unreadable_price_keeps_previous() {
        let mut q = quote(Some(800.0));
        q.apply_update(&QuoteUpdate::new().price_input("n/a"));
        assert_eq!(q.estimated_price, Some(800.0));
        q.apply_update(&QuoteUpdate::new().price_input("0"));
        assert_eq!(q.estimated_price, Some(800.0));

        let mut unpriced = quote(None);
        unpriced.apply_update(&QuoteUpdate::new().price_input(""));
        assert_eq!(unpriced.estimated_price, None);
        assert_eq!(unpriced.status, Status::Pending);
    }

    #[test]
    fn test_empty_updates() {
        assert!(QuoteUpdate::new().is_empty());
        assert!(!RequestUpdate::new().notes("x").is_empty());
    }
}
