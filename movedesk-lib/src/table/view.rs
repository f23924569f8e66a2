//! TableView - owns one table's records and its ephemeral view state.

use std::fmt;

use super::Column;
use super::PageSize;
use super::PageState;
use super::SearchConfig;
use super::SortState;
use super::TableConfig;
use super::TableRecord;
use super::column::validate_columns;
use super::pager;
use super::render::Controls;
use super::render::HeaderCell;
use super::render::RenderedTable;
use super::render::render_body;
use super::render::summary;
use super::search::filter_indices;
use super::sort::sort_by_value;
use crate::error::TableError;

/// A table view over a list of records.
///
/// The view owns the query, the active sort and the page position. All of
/// them reset when a new record list is supplied. Every state change
/// recomputes the filtered and sorted row order; rendering only slices it.
///
/// # Example
///
/// ```
/// use movedesk_lib::model::Record;
/// use movedesk_lib::table::{Column, SearchConfig, TableConfig, TableView};
///
/// let columns = vec![Column::<Record>::field("name", "Name").sortable()];
/// let mut view = TableView::new(columns, SearchConfig::new(), TableConfig::default()).unwrap();
/// view.set_records(vec![
///     Record::new().set("name", "Bob"),
///     Record::new().set("name", "Ann"),
/// ]);
/// view.toggle_sort("name").unwrap();
///
/// let names: Vec<_> = view
///     .visible_rows()
///     .iter()
///     .map(|r| r.get_string("name").unwrap().unwrap().to_string())
///     .collect();
/// assert_eq!(names, ["Ann", "Bob"]);
/// ```
pub struct TableView<R> {
    records: Vec<R>,
    columns: Vec<Column<R>>,
    search: SearchConfig,
    config: TableConfig,
    query: String,
    sort: Option<SortState>,
    page: PageState,
    loading: bool,
    /// Filtered and sorted indices into `records`.
    order: Vec<usize>,
}

impl<R: TableRecord> TableView<R> {
    /// Creates an empty table view.
    ///
    /// Fails if two columns share a key.
    pub fn new(
        columns: Vec<Column<R>>,
        search: SearchConfig,
        config: TableConfig,
    ) -> Result<Self, TableError> {
        validate_columns(&columns)?;
        Ok(Self {
            records: Vec::new(),
            columns,
            search,
            page: PageState::new(config.default_page_size),
            config,
            query: String::new(),
            sort: None,
            loading: false,
            order: Vec::new(),
        })
    }

    // =========================================================================
    // Inputs from the host
    // =========================================================================

    /// Replaces the record list and resets query, sort and page.
    pub fn set_records(&mut self, records: Vec<R>) {
        log::debug!("Table received {} records", records.len());
        self.records = records;
        self.query.clear();
        self.sort = None;
        self.page.index = 0;
        self.refresh();
    }

    /// Sets the loading flag.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    // =========================================================================
    // User interaction
    // =========================================================================

    /// Sets the search query and returns to the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query == self.query {
            return;
        }
        log::debug!("Search query changed to '{}'", query);
        self.query = query;
        self.page.index = 0;
        self.refresh();
    }

    /// Activates a column's sort control and returns to the first page.
    ///
    /// A new column starts ascending and replaces any current sort; the active
    /// column toggles between ascending and descending.
    pub fn toggle_sort(&mut self, key: &str) -> Result<(), TableError> {
        let column = self
            .column(key)
            .ok_or_else(|| TableError::unknown_column(key))?;
        if !column.is_sortable() {
            return Err(TableError::not_sortable(key));
        }
        let next = SortState::toggled(self.sort.as_ref(), key);
        log::debug!("Sort changed to {} {:?}", next.column, next.direction);
        self.sort = Some(next);
        self.page.index = 0;
        self.refresh();
        Ok(())
    }

    /// Sets a sort directly, e.g. when restoring a host-chosen default.
    pub fn set_sort(&mut self, sort: Option<SortState>) -> Result<(), TableError> {
        if let Some(state) = &sort {
            let column = self
                .column(&state.column)
                .ok_or_else(|| TableError::unknown_column(&state.column))?;
            if !column.is_sortable() {
                return Err(TableError::not_sortable(&state.column));
            }
        }
        self.sort = sort;
        self.page.index = 0;
        self.refresh();
        Ok(())
    }

    /// Clears the sort, restoring insertion order.
    pub fn clear_sort(&mut self) {
        if self.sort.take().is_some() {
            self.page.index = 0;
            self.refresh();
        }
    }

    /// Moves to a page; out-of-range indices clamp to the last page.
    pub fn set_page(&mut self, index: usize) {
        let clamped = pager::clamp_index(index, self.order.len(), self.page.size.get());
        if clamped != index {
            log::warn!("Page {} out of range, clamped to {}", index, clamped);
        }
        self.page.index = clamped;
    }

    pub fn next_page(&mut self) {
        if self.page.can_next(self.order.len()) {
            self.page.index += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.page.can_previous() {
            self.page.index -= 1;
        }
    }

    /// Changes the page size and returns to the first page.
    pub fn set_page_size(&mut self, size: usize) -> Result<(), TableError> {
        let size = PageSize::try_from(size)?;
        log::debug!("Page size changed to {}", size);
        self.page = PageState::new(size);
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    pub fn column(&self, key: &str) -> Option<&Column<R>> {
        self.columns.iter().find(|c| c.key() == key)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Number of records passing the current query.
    pub fn filtered_count(&self) -> usize {
        self.order.len()
    }

    pub fn page_count(&self) -> usize {
        self.page.page_count(self.order.len())
    }

    /// All filtered records in sorted order, across pages.
    pub fn sorted_rows(&self) -> Vec<&R> {
        self.order.iter().map(|&i| &self.records[i]).collect()
    }

    /// The records on the current page.
    pub fn visible_rows(&self) -> Vec<&R> {
        pager::page_slice(&self.order, self.page.index, self.page.size.get())
            .iter()
            .map(|&i| &self.records[i])
            .collect()
    }

    /// Renders headers, the current page and control state.
    pub fn render(&self) -> RenderedTable {
        let rows = self.visible_rows();
        let headers = self
            .columns
            .iter()
            .map(|column| {
                let sorted = self
                    .sort
                    .as_ref()
                    .filter(|s| s.column == column.key())
                    .map(|s| s.direction);
                HeaderCell {
                    key: column.key().to_string(),
                    label: column.render_header(sorted),
                    sortable: column.is_sortable(),
                    sorted,
                }
            })
            .collect();

        let controls = if self.loading {
            Controls::disabled()
        } else {
            Controls {
                search_enabled: self.search.is_searchable(),
                page_size_enabled: true,
                previous_enabled: self.page.can_previous(),
                next_enabled: self.page.can_next(self.order.len()),
            }
        };

        RenderedTable {
            headers,
            body: render_body(&self.columns, &rows, self.loading, self.config.skeleton_rows),
            controls,
            summary: (!self.loading).then(|| summary(self.order.len(), self.records.len())),
            search_placeholder: self.config.search_placeholder.clone(),
            query: self.query.clone(),
            page_index: self.page.index,
            page_count: self.page_count(),
            page_size: self.page.size,
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Recomputes the filtered and sorted order, then clamps the page.
    fn refresh(&mut self) {
        let mut order = filter_indices(&self.records, &self.query, &self.search);

        if let Some(state) = &self.sort {
            if let Some(column) = self.columns.iter().find(|c| c.key() == state.column) {
                let records = &self.records;
                sort_by_value(&mut order, |&i| column.value(&records[i]), state.direction);
            }
        }

        self.order = order;
        let clamped = pager::clamp_index(self.page.index, self.order.len(), self.page.size.get());
        if clamped != self.page.index {
            log::warn!(
                "Page {} no longer exists after refresh, clamped to {}",
                self.page.index,
                clamped
            );
            self.page.index = clamped;
        }
    }
}

impl<R> fmt::Debug for TableView<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableView")
            .field("records", &self.records.len())
            .field("columns", &self.columns)
            .field("query", &self.query)
            .field("sort", &self.sort)
            .field("page", &self.page)
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    fn view(n: usize) -> TableView<Record> {
        let columns = vec![
            Column::<Record>::field("name", "Name").sortable(),
            Column::field("email", "Email"),
        ];
        let search = SearchConfig::new().with_fields(["name", "email"]);
        let mut view = TableView::new(columns, search, TableConfig::default()).unwrap();
        let records = (0..n)
            .map(|i| {
                Record::new()
                    .set("name", format!("user{:02}", i))
                    .set("email", format!("u{}@x.com", i))
            })
            .collect();
        view.set_records(records);
        view
    }

    #[test]
    fn test_duplicate_columns_rejected() {
        let columns = vec![
            Column::<Record>::field("name", "Name"),
            Column::field("name", "Name"),
        ];
        let err = TableView::new(columns, SearchConfig::new(), TableConfig::default()).unwrap_err();
        assert_eq!(err, TableError::duplicate_column("name"));
    }

    #[test]
    fn test_query_resets_page() {
        let mut view = view(25);
        view.set_page(2);
        assert_eq!(view.page().index, 2);
        view.set_query("user");
        assert_eq!(view.page().index, 0);
    }

    #[test]
    fn test_sort_resets_page() {
        let mut view = view(25);
        view.set_page(1);
        view.toggle_sort("name").unwrap();
        assert_eq!(view.page().index, 0);
    }

    #[test]
    fn test_page_size_resets_page() {
        let mut view = view(25);
        view.set_page(1);
        view.set_page_size(5).unwrap();
        assert_eq!(view.page().index, 0);
        assert_eq!(view.page_count(), 5);
        assert!(view.set_page_size(7).is_err());
    }

    #[test]
    fn test_unknown_or_unsortable_column() {
        let mut view = view(3);
        assert_eq!(
            view.toggle_sort("phone"),
            Err(TableError::unknown_column("phone"))
        );
        assert_eq!(
            view.toggle_sort("email"),
            Err(TableError::not_sortable("email"))
        );
    }

    #[test]
    fn test_set_page_clamps() {
        let mut view = view(25);
        view.set_page(99);
        assert_eq!(view.page().index, 2);
        assert_eq!(view.visible_rows().len(), 5);
    }

    #[test]
    fn test_next_and_previous_stop_at_bounds() {
        let mut view = view(15);
        view.previous_page();
        assert_eq!(view.page().index, 0);
        view.next_page();
        view.next_page();
        assert_eq!(view.page().index, 1);
    }

    #[test]
    fn test_new_records_reset_state() {
        let mut view = view(25);
        view.set_query("user1");
        view.toggle_sort("name").unwrap();
        view.set_records(vec![Record::new().set("name", "Ann")]);
        assert_eq!(view.query(), "");
        assert!(view.sort().is_none());
        assert_eq!(view.page().index, 0);
        assert_eq!(view.filtered_count(), 1);
    }

    #[test]
    fn test_loading_disables_controls() {
        let mut view = view(25);
        view.set_loading(true);
        let rendered = view.render();
        assert_eq!(rendered.controls, Controls::disabled());
        assert_eq!(rendered.body.row_count(), 5);
        assert!(rendered.summary.is_none());
    }

    #[test]
    fn test_render_summary_and_headers() {
        let mut view = view(25);
        view.set_query("user1");
        view.toggle_sort("name").unwrap();
        let rendered = view.render();
        assert_eq!(rendered.summary.as_deref(), Some("Showing 10 of 25 results"));
        assert_eq!(rendered.headers.len(), 2);
        assert_eq!(rendered.headers[0].sorted, Some(super::super::Direction::Asc));
        assert_eq!(rendered.headers[1].sorted, None);
        assert!(rendered.controls.search_enabled);
    }
}
