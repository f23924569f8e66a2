//! movedesk table library
//!
//! Client-side table engine for the moving company admin dashboard:
//! a dynamic record model, search, sort, pagination and render state for
//! tabular views of customers, quotes and moving requests, plus CSV export.

pub mod cache;
pub mod error;
pub mod export;
pub mod model;
pub mod presets;
pub mod table;

pub use model::Record;
pub use model::Value;
pub use table::TableView;
