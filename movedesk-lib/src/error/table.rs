//! Table contract errors

/// Errors raised when a table is configured or driven incorrectly.
///
/// Filtering, sorting and paging never fail on their own. These errors only
/// surface host misconfiguration: a column schema with duplicate keys, or a
/// control call naming a column or page size the table does not know.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// Two columns in the same table share a key.
    #[error("Duplicate column key '{key}'")]
    DuplicateColumnKey { key: String },

    /// A control call referenced a column key that is not in the schema.
    #[error("Unknown column '{key}'")]
    UnknownColumn { key: String },

    /// A sort was requested on a column that is not sortable.
    #[error("Column '{key}' is not sortable")]
    NotSortable { key: String },

    /// The requested page size is not one of the enumerated sizes.
    #[error("Invalid page size {size}, expected one of {allowed:?}")]
    InvalidPageSize {
        size: usize,
        allowed: &'static [usize],
    },
}

impl TableError {
    /// Creates a duplicate column key error.
    pub fn duplicate_column(key: impl Into<String>) -> Self {
        Self::DuplicateColumnKey { key: key.into() }
    }

    /// Creates an unknown column error.
    pub fn unknown_column(key: impl Into<String>) -> Self {
        Self::UnknownColumn { key: key.into() }
    }

    /// Creates a not-sortable error.
    pub fn not_sortable(key: impl Into<String>) -> Self {
        Self::NotSortable { key: key.into() }
    }
}
