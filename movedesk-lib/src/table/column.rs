//! Column schema for table display.

use std::collections::HashSet;
use std::fmt;

use super::Cell;
use super::Direction;
use super::TableRecord;
use crate::error::TableError;
use crate::model::FieldPath;
use crate::model::Value;

/// What a header renderer gets to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderContext<'a> {
    /// The column key.
    pub key: &'a str,
    /// Whether the column is sortable.
    pub sortable: bool,
    /// Current sort direction if this column is the active sort.
    pub sorted: Option<Direction>,
}

/// Column header: a fixed label or a function of the header context.
pub enum Header {
    Label(String),
    Render(Box<dyn Fn(&HeaderContext<'_>) -> String>),
}

impl Header {
    /// Renders the header label.
    pub fn render(&self, cx: &HeaderContext<'_>) -> String {
        match self {
            Header::Label(label) => label.clone(),
            Header::Render(render) => render(cx),
        }
    }
}

impl fmt::Debug for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Header::Label(label) => f.debug_tuple("Label").field(label).finish(),
            Header::Render(_) => f.write_str("Render(..)"),
        }
    }
}

/// Column definition.
///
/// A column names a `key` (unique within one table), a header, a value
/// accessor used for sorting, and a cell function used for display. The cell
/// function defaults to the display form of the value.
///
/// # Examples
///
/// ```
/// use movedesk_lib::model::{Record, Value};
/// use movedesk_lib::table::{Cell, Column, Tone};
///
/// let columns: Vec<Column<Record>> = vec![
///     Column::field("name", "Name").sortable(),
///     Column::field("status", "Status").cell(|record: &Record| {
///         Cell::badge(record.get_string("status").ok().flatten().unwrap_or(""), Tone::Info)
///     }),
///     Column::new("requests", "Requests", |record: &Record| {
///         record.get("requestCount").cloned().unwrap_or(Value::Null)
///     })
///     .sortable(),
/// ];
/// assert!(columns[0].is_sortable());
/// ```
pub struct Column<R> {
    key: String,
    label: String,
    header: Header,
    value: Box<dyn Fn(&R) -> Value>,
    cell: Option<Box<dyn Fn(&R) -> Cell>>,
    sortable: bool,
}

impl<R> Column<R> {
    /// Creates a column with an explicit value accessor.
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        value: impl Fn(&R) -> Value + 'static,
    ) -> Self {
        let label = label.into();
        Self {
            key: key.into(),
            header: Header::Label(label.clone()),
            label,
            value: Box::new(value),
            cell: None,
            sortable: false,
        }
    }

    /// Sets the cell renderer.
    pub fn cell(mut self, cell: impl Fn(&R) -> Cell + 'static) -> Self {
        self.cell = Some(Box::new(cell));
        self
    }

    /// Replaces the fixed label with a header renderer.
    pub fn header_with(mut self, render: impl Fn(&HeaderContext<'_>) -> String + 'static) -> Self {
        self.header = Header::Render(Box::new(render));
        self
    }

    /// Makes the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// The column key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The plain column label, without any header decoration.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// The underlying value used for sorting.
    pub fn value(&self, record: &R) -> Value {
        (self.value)(record)
    }

    /// The rendered cell.
    pub fn render_cell(&self, record: &R) -> Cell {
        match &self.cell {
            Some(cell) => cell(record),
            None => Cell::from(self.value(record)),
        }
    }

    /// Renders the header label for the given sort state.
    pub fn render_header(&self, sorted: Option<Direction>) -> String {
        self.header.render(&HeaderContext {
            key: &self.key,
            sortable: self.sortable,
            sorted,
        })
    }
}

impl<R: TableRecord + 'static> Column<R> {
    /// Creates a column reading `key` (optionally a dotted path) from the record.
    pub fn field(key: impl Into<String>, label: impl Into<String>) -> Self {
        let key = key.into();
        let path = FieldPath::parse(&key);
        Self::new(key, label, move |record: &R| {
            record.lookup(&path).cloned().unwrap_or(Value::Null)
        })
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .finish_non_exhaustive()
    }
}

/// Checks that column keys are unique.
pub fn validate_columns<R>(columns: &[Column<R>]) -> Result<(), TableError> {
    let mut seen = HashSet::with_capacity(columns.len());
    for column in columns {
        if !seen.insert(column.key()) {
            return Err(TableError::duplicate_column(column.key()));
        }
    }
    Ok(())
}

/// Header renderer that appends a sort arrow to a label.
pub fn sort_arrow_header(label: impl Into<String>) -> impl Fn(&HeaderContext<'_>) -> String {
    let label = label.into();
    move |cx: &HeaderContext<'_>| match cx.sorted {
        Some(Direction::Asc) => format!("{} ↑", label),
        Some(Direction::Desc) => format!("{} ↓", label),
        None if cx.sortable => format!("{} ↕", label),
        None => label.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    #[test]
    fn test_field_column_reads_nested_path() {
        let column = Column::<Record>::field("customer.fullName", "Customer");
        let record = Record::new().set("customer", Record::new().set("fullName", "Ann"));
        assert_eq!(column.value(&record), Value::from("Ann"));
        assert_eq!(column.render_cell(&record), Cell::text("Ann"));
    }

    #[test]
    fn test_missing_field_renders_empty() {
        let column = Column::<Record>::field("phone", "Phone");
        assert_eq!(column.render_cell(&Record::new()), Cell::Empty);
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let columns = vec![
            Column::<Record>::field("name", "Name"),
            Column::field("name", "Name again"),
        ];
        assert_eq!(
            validate_columns(&columns),
            Err(TableError::duplicate_column("name"))
        );
    }

    #[test]
    fn test_sort_arrow_header() {
        let column = Column::<Record>::field("name", "Name")
            .sortable()
            .header_with(sort_arrow_header("Name"));
        assert_eq!(column.render_header(None), "Name ↕");
        assert_eq!(column.render_header(Some(Direction::Desc)), "Name ↓");
        assert_eq!(column.label(), "Name");
    }
}
