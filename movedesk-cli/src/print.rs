//! Plain-text rendering of a table for the terminal

use std::fmt::Write;

use movedesk_lib::table::Cell;
use movedesk_lib::table::RenderedBody;
use movedesk_lib::table::RenderedTable;

const SKELETON: &str = "░░░░░░";

/// Formats a rendered table as aligned text.
pub fn format_table(title: &str, table: &RenderedTable) -> String {
    let headers: Vec<String> = table.headers.iter().map(|h| h.label.clone()).collect();
    let rows: Vec<Vec<String>> = match &table.body {
        RenderedBody::Skeleton { rows, columns } => {
            vec![vec![SKELETON.to_string(); *columns]; *rows]
        }
        RenderedBody::Empty { .. } => Vec::new(),
        RenderedBody::Rows(rows) => rows
            .iter()
            .map(|row| row.iter().map(Cell::plain_text).collect())
            .collect(),
    };

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", title);
    if table.controls.search_enabled || !table.query.is_empty() {
        let query = if table.query.is_empty() {
            table.search_placeholder.as_str()
        } else {
            table.query.as_str()
        };
        let _ = writeln!(out, "[{}]", query);
    }
    out.push('\n');

    push_row(&mut out, &headers, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    match &table.body {
        RenderedBody::Empty { message, .. } => {
            let _ = writeln!(out, "{}", message);
        }
        _ => {
            for row in &rows {
                push_row(&mut out, row, &widths);
            }
        }
    }

    out.push('\n');
    if let Some(summary) = &table.summary {
        let _ = writeln!(out, "{}", summary);
    }
    let _ = writeln!(
        out,
        "Page {} of {} ({} per page){}{}",
        table.page_index + 1,
        table.page_count,
        table.page_size,
        if table.controls.previous_enabled { "  < prev" } else { "" },
        if table.controls.next_enabled { "  next >" } else { "" },
    );
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use movedesk_lib::Record;
    use movedesk_lib::presets::TableKind;
    use movedesk_lib::table::TableConfig;

    use super::*;

    #[test]
    fn test_rows_are_aligned() {
        let mut view = TableKind::Customers.view(TableConfig::default()).unwrap();
        view.set_records(vec![
            Record::new().set("name", "Ann").set("email", "ann@example.com"),
            Record::new().set("name", "Bartholomew").set("email", "b@x.com"),
        ]);
        let text = format_table("Customers", &view.render());
        assert!(text.contains("Name ↕       Email"));
        assert!(text.contains("Ann          ann@example.com"));
        assert!(text.contains("Showing 2 of 2 results"));
        assert!(text.contains("Page 1 of 1"));
    }

    #[test]
    fn test_empty_and_loading() {
        let mut view = TableKind::Requests.view(TableConfig::default()).unwrap();
        let text = format_table("Moving Requests", &view.render());
        assert!(text.contains("No results."));

        view.set_loading(true);
        let text = format_table("Moving Requests", &view.render());
        assert_eq!(text.matches(SKELETON).count(), 5 * 4);
        assert!(!text.contains("Showing"));
    }
}
