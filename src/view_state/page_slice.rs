//! Page slice calculation.
//!
//! A hero display reserves `hero_count` extra slots on its first page only;
//! later pages are ordinary grids. Every later page is therefore shifted by
//! the hero region.

use super::types::{Navigation, PageIndex};
use crate::model::LayoutConfig;
use std::ops::Range;

/// Half-open index range `[start, end)` of the items on one page.
///
/// Ranges may extend past the end of the collection; slicing truncates them
/// silently.
///
/// # Invariants
/// - `start <= end`
/// - `end - start <= items_per_page + hero_count`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageSlice {
    /// Index of first item on the page (inclusive).
    pub start: usize,
    /// Index past the last item on the page (exclusive).
    pub end: usize,
}

impl PageSlice {
    /// Compute the slice for `page`.
    ///
    /// `hero_count` is `Some` only for hero-configured displays, regardless of
    /// which layout is currently active.
    pub fn compute(page: PageIndex, items_per_page: usize, hero_count: Option<usize>) -> Self {
        let hero = hero_count.unwrap_or(0);
        let page = page.get();

        let start = page * items_per_page + if page > 0 { hero } else { 0 };
        let end = start + items_per_page + if page == 0 { hero } else { 0 };

        Self { start, end }
    }

    /// Compute the slice for `page` of a display using `config`.
    pub fn for_layout(config: &LayoutConfig, page: PageIndex) -> Self {
        let hero_count = config.is_hero().then_some(config.hero_count as usize);
        Self::compute(page, config.items_per_page(), hero_count)
    }

    /// Nominal number of slots on the page, before truncation.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the page has no slots.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The range truncated to a collection of `item_count` items.
    pub fn clamp(&self, item_count: usize) -> Range<usize> {
        let start = self.start.min(item_count);
        let end = self.end.min(item_count);
        start..end
    }

    /// The items on this page.
    pub fn apply<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.clamp(items.len())]
    }

    /// Navigation available from `page` given this slice.
    ///
    /// Advancing needs items past the end of this slice. A display without
    /// paging (`items_per_page == 0`) never advances.
    pub fn navigation(&self, page: PageIndex, item_count: usize, items_per_page: usize) -> Navigation {
        Navigation {
            can_advance: items_per_page > 0 && self.end < item_count,
            can_retreat: !page.is_first(),
        }
    }
}

/// Number of pages needed to show `item_count` items.
///
/// Displays without paging (`items_per_page == 0`) have a single page when
/// they have any items.
pub fn total_pages(item_count: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return usize::from(item_count > 0);
    }
    item_count.div_ceil(items_per_page)
}
