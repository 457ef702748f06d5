//! Core view-state newtypes

/// Page index within a paginated display. 0-indexed internally, 1-based for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, serde::Serialize)]
#[serde(transparent)]
pub struct PageIndex(usize);

impl PageIndex {
    /// The first page.
    pub const FIRST: Self = Self(0);

    /// Create a new PageIndex from a raw 0-based value.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw 0-based index value.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Get the 1-based index for display purposes.
    pub fn display(&self) -> usize {
        self.0 + 1
    }

    /// Whether this is the first page.
    pub fn is_first(&self) -> bool {
        self.0 == 0
    }

    /// Get the next page index.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Get the previous page index, saturating at 0.
    pub fn prev(&self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl From<usize> for PageIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// Whether the display may move forward or back from its current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct Navigation {
    /// A later page has items.
    pub can_advance: bool,
    /// The current page is not the first.
    pub can_retreat: bool,
}

impl Navigation {
    /// Navigation disabled in both directions.
    pub const NONE: Self = Self {
        can_advance: false,
        can_retreat: false,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_index_display_is_one_based() {
        assert_eq!(PageIndex::new(0).display(), 1);
        assert_eq!(PageIndex::new(4).display(), 5);
    }

    #[test]
    fn page_index_prev_saturates_at_zero() {
        assert_eq!(PageIndex::FIRST.prev(), PageIndex::FIRST);
        assert_eq!(PageIndex::new(3).prev(), PageIndex::new(2));
    }

    #[test]
    fn page_index_next_increments() {
        assert_eq!(PageIndex::new(1).next(), PageIndex::new(2));
    }

    #[test]
    fn only_zero_is_first() {
        assert!(PageIndex::FIRST.is_first());
        assert!(!PageIndex::new(1).is_first());
    }

    #[test]
    fn navigation_default_is_disabled() {
        assert_eq!(Navigation::default(), Navigation::NONE);
    }
}
