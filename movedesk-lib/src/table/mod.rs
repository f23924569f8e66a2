//! Generic tabular data view.
//!
//! A table takes an arbitrary list of records and a column schema and
//! provides client-side search, single-column sort and pagination over it:
//!
//! - [`column`] - column schema (`key`, header, value accessor, cell renderer)
//! - [`search`] - case-insensitive substring filter over configured fields
//! - [`sort`] - stable single-column ordering by the column's underlying value
//! - [`pager`] - fixed page sizes and page slicing with clamping
//! - [`render`] - page rows, skeleton rows while loading, or a no-results row
//! - [`view`] - [`TableView`], which owns the ephemeral search/sort/page state
//!
//! # Example
//!
//! ```
//! use movedesk_lib::model::Record;
//! use movedesk_lib::table::{Column, SearchConfig, TableConfig, TableView};
//!
//! let columns = vec![
//!     Column::<Record>::field("name", "Name").sortable(),
//!     Column::field("email", "Email"),
//! ];
//! let search = SearchConfig::new().with_fields(["name", "email"]);
//! let mut view = TableView::new(columns, search, TableConfig::default()).unwrap();
//!
//! view.set_records(vec![
//!     Record::new().set("name", "Bob").set("email", "bob@mail.com"),
//!     Record::new().set("name", "Ann").set("email", "a@x.com"),
//! ]);
//! view.set_query("a");
//! assert_eq!(view.filtered_count(), 2);
//! ```

mod cell;
pub mod column;
mod config;
mod record;
pub mod pager;
pub mod render;
pub mod search;
pub mod sort;
pub mod view;

pub use cell::Cell;
pub use cell::Tone;
pub use column::Column;
pub use column::Header;
pub use column::HeaderContext;
pub use config::TableConfig;
pub use pager::PageSize;
pub use pager::PageState;
pub use record::TableRecord;
pub use render::RenderedBody;
pub use render::RenderedTable;
pub use search::SearchConfig;
pub use search::SearchField;
pub use sort::Direction;
pub use sort::SortState;
pub use view::TableView;
