//! Pagination engine.
//!
//! Pure functions deriving page slices and counts from a result list and a
//! page size. Nothing here holds state or performs I/O, and nothing panics on
//! out-of-range input: an impossible page is simply empty.
//!
//! Pages are 1-based throughout.
//!
//! # Example
//!
//! ```rust
//! use ncosearch::app::pagination::{paginate, total_pages};
//!
//! let items: Vec<u32> = (1..=25).collect();
//! assert_eq!(total_pages(items.len(), 10), 3);
//! assert_eq!(paginate(&items, 3, 10), &[21, 22, 23, 24, 25]);
//! ```

/// Returns the rows on `page`, clipped to the available length.
///
/// Empty when `items` is empty, `page` is 0, `page_size` is 0, or `page` lies
/// beyond the last page.
#[must_use]
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }

    let Some(start) = (page - 1).checked_mul(page_size) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }

    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `item_count` rows, `ceil(item_count / page_size)`.
///
/// Zero when there are no rows or the page size is zero.
#[must_use]
pub const fn total_pages(item_count: usize, page_size: usize) -> usize {
    if item_count == 0 || page_size == 0 {
        return 0;
    }
    item_count.div_ceil(page_size)
}

/// Clamps a requested page into `[1, max(total_pages, 1)]`.
#[must_use]
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Inclusive 1-based row range shown on one page, plus the overall count.
///
/// Feeds the "Showing 11 to 20 of 25 results" line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

/// Computes the row range for `page`, or `None` when that page holds no rows.
///
/// # Example
///
/// ```rust
/// use ncosearch::app::pagination::{page_range, PageRange};
///
/// assert_eq!(page_range(25, 2, 10), Some(PageRange { first: 11, last: 20, total: 25 }));
/// assert_eq!(page_range(25, 4, 10), None);
/// ```
#[must_use]
pub fn page_range(item_count: usize, page: usize, page_size: usize) -> Option<PageRange> {
    if page == 0 || page_size == 0 {
        return None;
    }

    let start = (page - 1).checked_mul(page_size)?;
    if start >= item_count {
        return None;
    }

    Some(PageRange {
        first: start + 1,
        last: start.saturating_add(page_size).min(item_count),
        total: item_count,
    })
}
