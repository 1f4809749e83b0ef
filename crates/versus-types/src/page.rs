//! Pagination primitives for the read-only listing operations.

use serde::{Deserialize, Serialize};

use crate::constants;

/// A validated page request. Pages are 1-based; the page size is clamped
/// to `1..=MAX_PAGE_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    #[must_use]
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, constants::MAX_PAGE_SIZE),
        }
    }

    /// First page at the default size.
    #[must_use]
    pub fn first() -> Self {
        Self::new(1, constants::DEFAULT_PAGE_SIZE)
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// One page of results plus the total row count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    /// Total rows matching the query, across all pages.
    pub total: usize,
}

impl<T> Paged<T> {
    /// Slice one page out of an already-filtered, already-sorted row set.
    #[must_use]
    pub fn slice(rows: Vec<T>, req: PageRequest) -> Self {
        let total = rows.len();
        let items: Vec<T> = rows
            .into_iter()
            .skip(req.offset())
            .take(req.page_size())
            .collect();
        Self {
            items,
            page: req.page(),
            page_size: req.page_size(),
            total,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
