//! Table configuration

use serde::Deserialize;
use serde::Serialize;

use super::PageSize;

/// Display configuration shared by the tables of one host.
///
/// # Example
///
/// ```
/// use movedesk_lib::table::{PageSize, TableConfig};
///
/// let config = TableConfig::default()
///     .with_default_page_size(PageSize::try_from(20).unwrap())
///     .with_skeleton_rows(3);
/// assert_eq!(config.skeleton_rows, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Page size a table starts with.
    ///
    /// Default: 10
    pub default_page_size: PageSize,

    /// Placeholder rows rendered while loading.
    ///
    /// Default: 5
    pub skeleton_rows: usize,

    /// Placeholder text of the search box.
    ///
    /// Default: "Search..."
    pub search_placeholder: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_page_size: PageSize::default(),
            skeleton_rows: 5,
            search_placeholder: "Search...".to_string(),
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_page_size(mut self, size: PageSize) -> Self {
        self.default_page_size = size;
        self
    }

    pub fn with_skeleton_rows(mut self, rows: usize) -> Self {
        self.skeleton_rows = rows;
        self
    }

    pub fn with_search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }
}
