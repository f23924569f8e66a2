//! Render surface: page rows, loading skeleton, or a no-results row.

use super::Cell;
use super::Column;
use super::Direction;
use super::PageSize;

/// Message shown when the current page has no rows.
pub const NO_RESULTS: &str = "No results.";

/// The body of a rendered table.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedBody {
    /// Placeholder rows while data is loading.
    Skeleton { rows: usize, columns: usize },
    /// A single row spanning all columns.
    Empty {
        colspan: usize,
        message: &'static str,
    },
    /// One row per record, cells in column order.
    Rows(Vec<Vec<Cell>>),
}

impl RenderedBody {
    /// Number of rendered body rows, including skeleton and no-results rows.
    pub fn row_count(&self) -> usize {
        match self {
            RenderedBody::Skeleton { rows, .. } => *rows,
            RenderedBody::Empty { .. } => 1,
            RenderedBody::Rows(rows) => rows.len(),
        }
    }
}

/// A header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub key: String,
    pub label: String,
    pub sortable: bool,
    pub sorted: Option<Direction>,
}

/// Enabled state of the table controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub search_enabled: bool,
    pub page_size_enabled: bool,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl Controls {
    /// Every control disabled, as while loading.
    pub fn disabled() -> Self {
        Self {
            search_enabled: false,
            page_size_enabled: false,
            previous_enabled: false,
            next_enabled: false,
        }
    }
}

/// Everything a host needs to draw one table.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedTable {
    pub headers: Vec<HeaderCell>,
    pub body: RenderedBody,
    pub controls: Controls,
    /// `"Showing N of M results"`, absent while loading.
    pub summary: Option<String>,
    pub search_placeholder: String,
    pub query: String,
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: PageSize,
}

/// Renders the body for one page of records.
///
/// While loading, renders `skeleton_rows` placeholder rows regardless of the
/// data. An empty page renders a single no-results row spanning all columns.
pub fn render_body<R>(
    columns: &[Column<R>],
    page: &[&R],
    is_loading: bool,
    skeleton_rows: usize,
) -> RenderedBody {
    if is_loading {
        return RenderedBody::Skeleton {
            rows: skeleton_rows,
            columns: columns.len(),
        };
    }
    if page.is_empty() {
        return RenderedBody::Empty {
            colspan: columns.len(),
            message: NO_RESULTS,
        };
    }
    RenderedBody::Rows(
        page.iter()
            .map(|record| columns.iter().map(|c| c.render_cell(record)).collect())
            .collect(),
    )
}

/// Summary line under the table.
pub fn summary(filtered: usize, total: usize) -> String {
    format!("Showing {} of {} results", filtered, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    fn columns() -> Vec<Column<Record>> {
        vec![Column::field("name", "Name"), Column::field("email", "Email")]
    }

    #[test]
    fn test_loading_renders_skeleton() {
        let record = Record::new().set("name", "Ann");
        let page: Vec<&Record> = std::iter::repeat_n(&record, 12).collect();
        let body = render_body(&columns(), &page, true, 5);
        assert_eq!(body, RenderedBody::Skeleton { rows: 5, columns: 2 });
        assert_eq!(body.row_count(), 5);
    }

    #[test]
    fn test_empty_page_renders_no_results() {
        let body = render_body::<Record>(&columns(), &[], false, 5);
        assert_eq!(
            body,
            RenderedBody::Empty {
                colspan: 2,
                message: NO_RESULTS
            }
        );
    }

    #[test]
    fn test_rows_follow_column_order() {
        let record = Record::new().set("email", "a@x.com").set("name", "Ann");
        let body = render_body(&columns(), &[&record], false, 5);
        assert_eq!(
            body,
            RenderedBody::Rows(vec![vec![Cell::text("Ann"), Cell::text("a@x.com")]])
        );
    }
}
