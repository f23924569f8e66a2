//! Column schemas and search configs for the dashboard tables
//!
//! Each page of the dashboard (customers, quotes, moving requests) shows one
//! table over normalized [`Record`]s. This module describes those tables and
//! the small aggregates shown around them.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::error::TableError;
use crate::export::ExportTable;
use crate::model::FieldPath;
use crate::model::Record;
use crate::model::Value;
use crate::model::types::Address;
use crate::model::types::MoveSize;
use crate::model::types::Quote;
use crate::model::types::ServiceType;
use crate::model::types::Status;
use crate::table::Cell;
use crate::table::Column;
use crate::table::SearchConfig;
use crate::table::TableConfig;
use crate::table::TableView;
use crate::table::Tone;
use crate::table::Direction;
use crate::table::column::sort_arrow_header;
use crate::table::sort::sort_by_value;

/// The dashboard tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Customers,
    Quotes,
    Requests,
}

impl TableKind {
    pub const ALL: [TableKind; 3] = [TableKind::Customers, TableKind::Quotes, TableKind::Requests];

    pub fn as_str(&self) -> &'static str {
        match self {
            TableKind::Customers => "customers",
            TableKind::Quotes => "quotes",
            TableKind::Requests => "requests",
        }
    }

    /// Page title.
    pub fn title(&self) -> &'static str {
        match self {
            TableKind::Customers => "Customers",
            TableKind::Quotes => "Quote Requests",
            TableKind::Requests => "Moving Requests",
        }
    }

    pub fn columns(&self) -> Vec<Column<Record>> {
        match self {
            TableKind::Customers => customer_columns(),
            TableKind::Quotes => quote_columns(),
            TableKind::Requests => request_columns(),
        }
    }

    pub fn search(&self) -> SearchConfig {
        match self {
            TableKind::Customers => customer_search(),
            TableKind::Quotes => quote_search(),
            TableKind::Requests => request_search(),
        }
    }

    /// Builds an empty table view for this page.
    ///
    /// A search placeholder left at its default is replaced by the page's own.
    pub fn view(&self, mut config: TableConfig) -> Result<TableView<Record>, TableError> {
        if config.search_placeholder == TableConfig::default().search_placeholder {
            config.search_placeholder = self.search_placeholder().to_string();
        }
        TableView::new(self.columns(), self.search(), config)
    }

    pub fn search_placeholder(&self) -> &'static str {
        match self {
            TableKind::Customers => "Search customers...",
            TableKind::Quotes => "Search by customer name...",
            TableKind::Requests => "Search requests...",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TableKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Unknown table '{}'", s))
    }
}

// =============================================================================
// Formatting helpers
// =============================================================================

/// Formats a date the way the dashboard shows it (`1/5/2024`).
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Formats an amount as US dollars with thousands separators (`$1,234.50`).
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

/// Formats an optional price as `$x.xx`, or `N/A` when unset.
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(price) if price != 0.0 => format!("${:.2}", price),
        _ => "N/A".to_string(),
    }
}

/// Uppercases the first character.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercases the first character of every space-separated word.
pub fn capitalize_words(s: &str) -> String {
    s.split(' ').map(capitalize).collect::<Vec<_>>().join(" ")
}

fn value_at<'a>(record: &'a Record, path: &str) -> Option<&'a Value> {
    record.lookup(&FieldPath::parse(path))
}

fn text_at(record: &Record, path: &str) -> String {
    value_at(record, path)
        .map(|value| value.to_string())
        .unwrap_or_default()
}

fn flag_at(record: &Record, path: &str) -> bool {
    matches!(value_at(record, path), Some(Value::Bool(true)))
}

fn date_cell(record: &Record, path: &str) -> Cell {
    match value_at(record, path) {
        Some(Value::DateTime(date)) => Cell::text(format_date(&date.instant())),
        Some(Value::Null) | None => Cell::Empty,
        Some(other) => Cell::from(other),
    }
}

/// A name with an optional badge stacked under it.
fn name_with_badge(name: String, badge: Option<&str>) -> Cell {
    match badge {
        Some(label) => Cell::Lines(vec![Cell::Text(name), Cell::badge(label, Tone::Accent)]),
        None => Cell::Text(name),
    }
}

/// Badge tone of a status.
pub fn status_tone(status: Status) -> Tone {
    match status {
        Status::Pending => Tone::Warning,
        Status::InProgress => Tone::Info,
        Status::Completed => Tone::Success,
        Status::Cancelled => Tone::Danger,
    }
}

fn status_cell(record: &Record) -> Cell {
    let raw = text_at(record, "status");
    match raw.parse::<Status>() {
        Ok(status) => Cell::badge(status.label(), status_tone(status)),
        Err(_) if raw.is_empty() => Cell::Empty,
        Err(_) => Cell::badge(capitalize(&raw), Tone::Neutral),
    }
}

// =============================================================================
// Customers
// =============================================================================

pub fn customer_columns() -> Vec<Column<Record>> {
    vec![
        Column::field("name", "Name")
            .sortable()
            .header_with(sort_arrow_header("Name"))
            .cell(|record: &Record| {
                let badge = flag_at(record, "isReturning").then_some("Returning Customer");
                name_with_badge(text_at(record, "name"), badge)
            }),
        Column::field("email", "Email"),
        Column::field("phone", "Phone"),
        Column::field("requestCount", "Requests")
            .sortable()
            .header_with(sort_arrow_header("Requests")),
        Column::field("createdAt", "Customer Since")
            .cell(|record: &Record| date_cell(record, "createdAt")),
    ]
}

pub fn customer_search() -> SearchConfig {
    SearchConfig::new().with_primary("name")
}

/// Headline numbers of the customers page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CustomerStats {
    pub total: usize,
    pub new: usize,
    pub returning: usize,
    /// Mean request count, zero for an empty list.
    pub average_requests: f64,
}

pub fn customer_stats(records: &[Record]) -> CustomerStats {
    let total = records.len();
    let returning = records
        .iter()
        .filter(|r| flag_at(r, "isReturning"))
        .count();
    let requests: f64 = records
        .iter()
        .filter_map(|r| value_at(r, "requestCount").and_then(Value::as_f64))
        .sum();
    CustomerStats {
        total,
        new: total - returning,
        returning,
        average_requests: if total == 0 {
            0.0
        } else {
            requests / total as f64
        },
    }
}

// =============================================================================
// Quotes
// =============================================================================

pub fn quote_columns() -> Vec<Column<Record>> {
    vec![
        Column::field("customer.fullName", "Customer")
            .sortable()
            .header_with(sort_arrow_header("Customer"))
            .cell(|record: &Record| {
                let badge = flag_at(record, "customer.isReturning").then_some("Returning");
                name_with_badge(text_at(record, "customer.fullName"), badge)
            }),
        Column::field("serviceType", "Service Type").cell(|record: &Record| {
            let raw = text_at(record, "serviceType");
            if raw.is_empty() {
                Cell::Empty
            } else {
                Cell::badge(ServiceType::label_for(&raw), Tone::Info)
            }
        }),
        Column::field("moveSize", "Move Size")
            .cell(|record: &Record| Cell::text(MoveSize::label_for(&text_at(record, "moveSize")))),
        Column::field("movingDate", "Moving Date")
            .sortable()
            .header_with(sort_arrow_header("Moving Date"))
            .cell(|record: &Record| date_cell(record, "movingDate")),
        Column::field("status", "Status").cell(status_cell),
        Column::field("estimatedPrice", "Price")
            .sortable()
            .header_with(sort_arrow_header("Price"))
            .cell(|record: &Record| {
                match value_at(record, "estimatedPrice").and_then(Value::as_f64) {
                    Some(amount) => Cell::text(format_currency(amount)),
                    None => Cell::text("N/A"),
                }
            }),
    ]
}

pub fn quote_search() -> SearchConfig {
    SearchConfig::new()
        .with_fields(["customer.fullName", "customer.email", "customer.phone"])
        .with_primary("customer.fullName")
}

const QUOTE_EXPORT_HEADERS: [&str; 12] = [
    "ID",
    "Customer",
    "Email",
    "Phone",
    "From Location",
    "To Location",
    "Move Size",
    "Moving Date",
    "Delivery Date",
    "Status",
    "Price",
    "Created At",
];

/// Shortens an id for display (`"abcdefgh..."`).
pub fn short_id(id: &str) -> String {
    let short: String = id.chars().take(8).collect();
    format!("{}...", short)
}

/// One export row for a quote.
///
/// A customer that is still a bare id exports with empty contact columns.
pub fn quote_export_row(quote: &Quote) -> Vec<String> {
    let contact = quote.customer.contact();
    let location = |address: Option<&Address>| address.map(Address::short).unwrap_or_default();
    let date = |date: &Option<DateTime<Utc>>| date.as_ref().map(format_date).unwrap_or_default();

    vec![
        short_id(&quote.id),
        contact.map(|c| c.full_name.clone()).unwrap_or_default(),
        contact.map(|c| c.email.clone()).unwrap_or_default(),
        contact.map(|c| c.phone.clone()).unwrap_or_default(),
        location(quote.from_address.as_ref()),
        location(quote.to_address.as_ref()),
        MoveSize::label_for(&quote.move_size),
        date(&quote.moving_date),
        date(&quote.delivery_date),
        capitalize(quote.status.as_str()),
        format_price(quote.estimated_price),
        format_date(&quote.created_at),
    ]
}

/// Shapes quotes for the CSV export of the quotes page.
pub fn quote_export(quotes: &[Quote]) -> ExportTable {
    let mut table = ExportTable::new(QUOTE_EXPORT_HEADERS.map(String::from).to_vec());
    for quote in quotes {
        table.push_row(quote_export_row(quote));
    }
    table
}

// =============================================================================
// Moving requests
// =============================================================================

pub fn request_columns() -> Vec<Column<Record>> {
    vec![
        Column::field("customerName", "Customer").cell(|record: &Record| {
            let badge = flag_at(record, "isReturningCustomer").then_some("Returning Customer");
            name_with_badge(text_at(record, "customerName"), badge)
        }),
        Column::field("serviceType", "Service Type")
            .sortable()
            .header_with(sort_arrow_header("Service Type"))
            .cell(|record: &Record| {
                Cell::text(capitalize_words(
                    &text_at(record, "serviceType").replacen('-', " ", 1),
                ))
            }),
        Column::field("requestedDate", "Requested Date")
            .cell(|record: &Record| date_cell(record, "requestedDate")),
        Column::field("status", "Status").cell(status_cell),
    ]
}

pub fn request_search() -> SearchConfig {
    SearchConfig::new().with_primary("customerName")
}

/// Number of requests listed on the overview page.
pub const RECENT_REQUESTS: usize = 5;

/// The `limit` most recently created requests, newest first.
///
/// Requests without `createdAt` come last.
pub fn recent_requests(records: &[Record], limit: usize) -> Vec<&Record> {
    let mut rows: Vec<&Record> = records.iter().collect();
    sort_by_value(
        &mut rows,
        |r| value_at(r, "createdAt").cloned().unwrap_or(Value::Null),
        Direction::Desc,
    );
    rows.truncate(limit);
    rows
}

// =============================================================================
// Status tabs and pre-filters
// =============================================================================

/// Per-status tallies for the status tabs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub total: usize,
    counts: BTreeMap<Status, usize>,
}

impl StatusCounts {
    /// Records with `status`.
    pub fn get(&self, status: Status) -> usize {
        self.counts.get(&status).copied().unwrap_or(0)
    }

    /// Counts in tab order, zero counts included.
    pub fn iter(&self) -> impl Iterator<Item = (Status, usize)> + '_ {
        Status::ALL.into_iter().map(|status| (status, self.get(status)))
    }
}

/// Counts records by their `status` field. Unknown statuses only count
/// towards the total.
pub fn status_counts(records: &[Record]) -> StatusCounts {
    let mut counts = StatusCounts {
        total: records.len(),
        counts: BTreeMap::new(),
    };
    for status in records
        .iter()
        .filter_map(|r| text_at(r, "status").parse::<Status>().ok())
    {
        *counts.counts.entry(status).or_insert(0) += 1;
    }
    counts
}

/// Keeps records matching the selected status tab and service type.
///
/// `None` selects all.
pub fn retain_selected(
    records: Vec<Record>,
    status: Option<Status>,
    service_type: Option<&str>,
) -> Vec<Record> {
    records
        .into_iter()
        .filter(|r| status.is_none_or(|s| text_at(r, "status") == s.as_str()))
        .filter(|r| service_type.is_none_or(|t| text_at(r, "serviceType") == t))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::model::types::Contact;
    use crate::model::types::ContactRef;

    fn customer(name: &str, returning: bool, requests: i64) -> Record {
        Record::new()
            .set("name", name)
            .set("isReturning", returning)
            .set("requestCount", requests)
    }

    #[test]
    fn test_format_helpers() {
        let date = Utc.with_ymd_and_hms(2024, 1, 5, 12, 0, 0).unwrap();
        assert_eq!(format_date(&date), "1/5/2024");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(12.0), "$12.00");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_price(Some(899.999)), "$900.00");
        assert_eq!(format_price(None), "N/A");
        assert_eq!(capitalize("in-progress"), "In-progress");
        assert_eq!(short_id("0123456789abcdef"), "01234567...");
    }

    #[test]
    fn test_all_presets_build() {
        for kind in TableKind::ALL {
            let view = kind.view(TableConfig::default()).unwrap();
            assert!(!view.columns().is_empty());
            assert_eq!(kind.as_str().parse::<TableKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_returning_customer_badge() {
        let columns = customer_columns();
        let cell = columns[0].render_cell(&customer("Ann", true, 1));
        assert_eq!(cell.plain_text(), "Ann / Returning Customer");
        let cell = columns[0].render_cell(&customer("Bob", false, 1));
        assert_eq!(cell, Cell::text("Bob"));
    }

    #[test]
    fn test_request_service_type_capitalizes_each_word() {
        let columns = request_columns();
        let record = Record::new().set("serviceType", "long-distance");
        assert_eq!(columns[1].render_cell(&record), Cell::text("Long Distance"));
        let record = Record::new().set("serviceType", "local");
        assert_eq!(columns[1].render_cell(&record), Cell::text("Local"));
        assert_eq!(capitalize_words("office move"), "Office Move");
    }

    #[test]
    fn test_recent_requests_newest_first() {
        let day = |d| Utc.with_ymd_and_hms(2024, 5, d, 9, 0, 0).unwrap();
        let records: Vec<Record> = (1..=7)
            .map(|d| {
                Record::new()
                    .set("customerName", format!("c{}", d))
                    .set("createdAt", day(d))
            })
            .chain([Record::new().set("customerName", "undated")])
            .collect();
        let recent = recent_requests(&records, RECENT_REQUESTS);
        let names: Vec<String> = recent.iter().map(|r| text_at(r, "customerName")).collect();
        assert_eq!(names, ["c7", "c6", "c5", "c4", "c3"]);
        let all = recent_requests(&records, 20);
        assert_eq!(all.len(), 8);
        assert_eq!(text_at(all[7], "customerName"), "undated");
    }

    #[test]
    fn test_customer_stats() {
        let stats = customer_stats(&[customer("Ann", true, 3), customer("Bob", false, 1)]);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.returning, 1);
        assert_eq!(stats.new, 1);
        assert_eq!(stats.average_requests, 2.0);
        assert_eq!(customer_stats(&[]).average_requests, 0.0);
    }

    #[test]
    fn test_status_cell_and_counts() {
        let records = vec![
            Record::new().set("status", "pending"),
            Record::new().set("status", "in-progress"),
            Record::new().set("status", "pending"),
            Record::new().set("status", "archived"),
        ];
        assert_eq!(
            status_cell(&records[1]),
            Cell::badge("In Progress", Tone::Info)
        );
        assert_eq!(
            status_cell(&Record::new().set("status", "cancelled")),
            Cell::badge("Cancelled", Tone::Danger)
        );
        assert_eq!(status_tone(Status::Pending), Tone::Warning);
        let counts = status_counts(&records);
        assert_eq!(counts.total, 4);
        assert_eq!(counts.get(Status::Pending), 2);
        assert_eq!(counts.get(Status::Completed), 0);
        assert_eq!(counts.iter().count(), 4);
    }

    #[test]
    fn test_retain_selected() {
        let records = vec![
            Record::new().set("status", "pending").set("serviceType", "local"),
            Record::new().set("status", "completed").set("serviceType", "local"),
            Record::new().set("status", "pending").set("serviceType", "commercial"),
        ];
        assert_eq!(retain_selected(records.clone(), None, None).len(), 3);
        assert_eq!(
            retain_selected(records.clone(), Some(Status::Pending), None).len(),
            2
        );
        assert_eq!(
            retain_selected(records, Some(Status::Pending), Some("local")).len(),
            1
        );
    }

    #[test]
    fn test_quote_export_row() {
        let created = Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap();
        let quote = Quote {
            id: "65f1c2d3e4a5b6c7d8e9f0a1".into(),
            customer: ContactRef::Embedded(Contact::new(
                "c1",
                "Ann Lee",
                "ann@example.com",
                "555-123-4567",
            )),
            from_address: Some(Address {
                street: "1 Main St".into(),
                city: "Austin".into(),
                state: "TX".into(),
                zip_code: "78701".into(),
            }),
            to_address: None,
            moving_date: Some(created),
            delivery_date: None,
            move_size: "2bedroom".into(),
            service_type: "local".into(),
            status: crate::model::types::Status::InProgress,
            estimated_price: Some(1250.0),
            created_at: created,
            admin_notes: None,
        };
        let row = quote_export_row(&quote);
        assert_eq!(row[0], "65f1c2d3...");
        assert_eq!(row[1], "Ann Lee");
        assert_eq!(row[4], "Austin, TX");
        assert_eq!(row[5], "");
        assert_eq!(row[6], "2 Bedroom");
        assert_eq!(row[7], "3/2/2024");
        assert_eq!(row[9], "In-progress");
        assert_eq!(row[10], "$1250.00");

        let table = quote_export(&[quote]);
        assert_eq!(table.headers.len(), row.len());
    }
}
