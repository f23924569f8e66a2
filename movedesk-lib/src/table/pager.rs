//! Page sizes and page slicing.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::error::TableError;

/// The page sizes a user can pick from.
pub const PAGE_SIZES: [usize; 6] = [5, 10, 20, 30, 40, 50];

/// A page size from the enumerated set [`PAGE_SIZES`].
///
/// # Example
///
/// ```
/// use movedesk_lib::table::PageSize;
///
/// let size = PageSize::try_from(20).unwrap();
/// assert_eq!(size.get(), 20);
/// assert!(PageSize::try_from(7).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(usize);

impl PageSize {
    /// Returns the number of rows per page.
    pub fn get(self) -> usize {
        self.0
    }

    /// All selectable sizes.
    pub fn options() -> impl Iterator<Item = PageSize> {
        PAGE_SIZES.into_iter().map(PageSize)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize(10)
    }
}

impl TryFrom<usize> for PageSize {
    type Error = TableError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        if PAGE_SIZES.contains(&size) {
            Ok(PageSize(size))
        } else {
            Err(TableError::InvalidPageSize {
                size,
                allowed: &PAGE_SIZES,
            })
        }
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.0
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Current page position of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageState {
    /// Zero-based page index.
    pub index: usize,
    pub size: PageSize,
}

impl PageState {
    pub fn new(size: PageSize) -> Self {
        Self { index: 0, size }
    }

    /// Number of pages for `total` rows.
    pub fn page_count(&self, total: usize) -> usize {
        page_count(total, self.size.get())
    }

    pub fn can_previous(&self) -> bool {
        self.index > 0
    }

    pub fn can_next(&self, total: usize) -> bool {
        self.index + 1 < self.page_count(total)
    }
}

/// Number of pages needed for `total` rows. An empty set still has one page.
pub fn page_count(total: usize, size: usize) -> usize {
    if size == 0 {
        return 1;
    }
    total.div_ceil(size).max(1)
}

/// Clamps a page index to the last valid page.
pub fn clamp_index(index: usize, total: usize, size: usize) -> usize {
    index.min(page_count(total, size) - 1)
}

/// The rows of page `index`, after clamping the index.
pub fn page_slice<T>(rows: &[T], index: usize, size: usize) -> &[T] {
    if size == 0 {
        return &[];
    }
    let index = clamp_index(index, rows.len(), size);
    let start = index * size;
    let end = (start + size).min(rows.len());
    &rows[start.min(end)..end]
}
