//! Pagination over ordered collections.

use std::ops::Range;

use crate::error::PageOutOfRange;
use crate::number::parse_leading_int;

/// Effective page parameters, always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    limit: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    pub const DEFAULT_PAGE: i64 = 1;
    pub const DEFAULT_LIMIT: i64 = 10;

    /// Build a request from raw values.
    ///
    /// Missing or zero values fall back to the defaults, negative values are
    /// clamped to 1.
    #[must_use]
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            page: normalise(page, Self::DEFAULT_PAGE),
            limit: normalise(limit, Self::DEFAULT_LIMIT),
        }
    }

    /// Build a request from raw query-string values, parsed leniently.
    #[must_use]
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Self {
        Self::new(
            page.and_then(parse_leading_int),
            limit.and_then(parse_leading_int),
        )
    }

    #[must_use]
    pub fn page(&self) -> i64 {
        self.page
    }

    #[must_use]
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Index range `[(page-1)*limit, page*limit)` clipped to `total`.
    ///
    /// # Errors
    ///
    /// Returns [`PageOutOfRange`] when the first index is at or past `total`.
    pub fn window(&self, total: usize) -> Result<Range<usize>, PageOutOfRange> {
        let limit = to_index(self.limit);
        let start = to_index(self.page - 1).saturating_mul(limit);
        if start >= total {
            return Err(PageOutOfRange {
                page: self.page,
                limit: self.limit,
                total,
            });
        }
        let end = start.saturating_add(limit).min(total);
        Ok(start..end)
    }

    /// Slice `items` to this page.
    ///
    /// # Errors
    ///
    /// Returns [`PageOutOfRange`] when the page starts past the end.
    pub fn apply<T: Clone>(&self, items: &[T]) -> Result<Page<T>, PageOutOfRange> {
        let window = self.window(items.len())?;
        Ok(Page {
            total: items.len(),
            page: self.page,
            limit: self.limit,
            items: items[window].to_vec(),
        })
    }
}

fn normalise(value: Option<i64>, default: i64) -> i64 {
    match value {
        None | Some(0) => default,
        Some(v) => v.max(1),
    }
}

fn to_index(value: i64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

/// One page of results plus the parameters that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub total: usize,
    pub page: i64,
    pub limit: i64,
    pub items: Vec<T>,
}
