//! Shared fixtures for the table integration tests

#![allow(dead_code)]

use chrono::TimeZone;
use chrono::Utc;
use movedesk_lib::Record;
use movedesk_lib::table::Column;
use movedesk_lib::table::SearchConfig;
use movedesk_lib::table::TableConfig;
use movedesk_lib::table::TableView;
use rstest::*;

/// A customer record as it reaches the table.
pub fn customer(name: &str, email: &str, requests: i64) -> Record {
    Record::new()
        .set("name", name)
        .set("email", email)
        .set("requestCount", requests)
}

/// A quote record with an embedded contact.
pub fn quote(id: &str, name: &str, email: &str, phone: &str) -> Record {
    Record::with_id(id)
        .set("_id", id)
        .set(
            "customer",
            Record::new()
                .set("fullName", name)
                .set("email", email)
                .set("phone", phone),
        )
        .set("status", "pending")
}

#[fixture]
pub fn customers() -> Vec<Record> {
    let joined = |day| Utc.with_ymd_and_hms(2024, 1, day, 9, 0, 0).unwrap();
    vec![
        customer("Bob", "bob@example.com", 1).set("createdAt", joined(3)),
        customer("Ann", "ann@example.com", 4).set("createdAt", joined(1)),
        customer("Cy", "cy@example.com", 2).set("createdAt", joined(2)),
    ]
}

#[fixture]
pub fn quotes() -> Vec<Record> {
    vec![
        quote("q1", "Ann Lee", "ann@example.com", "555-123-4567"),
        quote("q2", "Bob Ray", "bob@example.com", "555-987-6543"),
        quote("q3", "Cy Doe", "cy@example.com", "555-123-0000"),
    ]
}

/// A customers table with name and email search.
#[fixture]
pub fn customer_view(customers: Vec<Record>) -> TableView<Record> {
    let columns = vec![
        Column::<Record>::field("name", "Name").sortable(),
        Column::field("email", "Email"),
        Column::field("requestCount", "Requests").sortable(),
        Column::field("createdAt", "Created").sortable(),
    ];
    let search = SearchConfig::new().with_fields(["name", "email"]);
    let mut view = TableView::new(columns, search, TableConfig::default()).unwrap();
    view.set_records(customers);
    view
}
