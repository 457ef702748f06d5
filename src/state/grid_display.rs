//! One category grid display instance.
//!
//! Owns the item feed, the validated configuration, and the pagination state.
//! The caller drives navigation and asks for a fresh plan after each change.

use super::pagination::PaginationState;
use crate::model::{ContentItem, DisplayConfig, HeroPlacement, LayoutVariant};
use crate::validation::{self, ValidationError};
use crate::view_state::{compute_layout, total_pages, LayoutPlan, Navigation, PageSlice};
use tracing::info;

/// Pagination dots: one per page, the current one active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageIndicator {
    /// Number of pages.
    pub total: usize,
    /// 0-based current page.
    pub current: usize,
    /// Whether the forward control is enabled.
    pub can_advance: bool,
    /// Whether the back control is enabled.
    pub can_retreat: bool,
}

impl PageIndicator {
    /// One flag per page, `true` for the current page.
    pub fn dots(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.total).map(move |page| page == self.current)
    }
}

/// A configured, paginated category grid.
#[derive(Debug, Clone)]
pub struct GridDisplay {
    items: Vec<ContentItem>,
    config: DisplayConfig,
    state: PaginationState,
}

impl GridDisplay {
    /// Create a display over `items`.
    ///
    /// # Errors
    ///
    /// Returns the aggregated [`ValidationError`] when the layout
    /// configuration violates its variant's constraints. No display is built
    /// in that case.
    pub fn new(items: Vec<ContentItem>, config: DisplayConfig) -> Result<Self, ValidationError> {
        validation::validate(&config.layout)?;

        let state = PaginationState::new(config.layout.variant.clone());
        let grid = Self {
            items,
            config,
            state,
        };
        info!(
            layout = %grid.config.layout.variant,
            feed_items = grid.items.len(),
            visible_items = grid.visible_items().len(),
            total_pages = grid.total_pages(),
            "Grid display created"
        );
        Ok(grid)
    }

    /// The display configuration.
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Current pagination state.
    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Items inside the display's window.
    pub fn visible_items(&self) -> &[ContentItem] {
        self.config.window(&self.items)
    }

    /// Whether the configured variant and hero placement can be laid out.
    pub fn is_supported(&self) -> bool {
        let layout = &self.config.layout;
        match layout.variant {
            LayoutVariant::Unsupported(_) => false,
            LayoutVariant::Hero => !matches!(layout.hero_placement, HeroPlacement::Unsupported(_)),
            _ => true,
        }
    }

    /// Slice of the window shown on the current page.
    pub fn page_slice(&self) -> PageSlice {
        PageSlice::for_layout(&self.config.layout, self.state.page())
    }

    /// Navigation available from the current page.
    ///
    /// Displays that render nothing (empty window, unsupported layout) cannot
    /// navigate.
    pub fn navigation(&self) -> Navigation {
        let item_count = self.visible_items().len();
        if item_count == 0 || !self.is_supported() {
            return Navigation::NONE;
        }
        self.page_slice().navigation(
            self.state.page(),
            item_count,
            self.config.layout.items_per_page(),
        )
    }

    /// Number of pages for the window.
    pub fn total_pages(&self) -> usize {
        total_pages(
            self.visible_items().len(),
            self.config.layout.items_per_page(),
        )
    }

    /// Pagination dots and control state.
    pub fn page_indicator(&self) -> PageIndicator {
        let navigation = self.navigation();
        PageIndicator {
            total: self.total_pages(),
            current: self.state.page().get(),
            can_advance: navigation.can_advance,
            can_retreat: navigation.can_retreat,
        }
    }

    /// Layout plan for the current state.
    pub fn plan(&self) -> LayoutPlan<'_> {
        compute_layout(&self.items, &self.config, &self.state)
    }

    /// Go to the next page. Returns `false` when already on the last page.
    pub fn advance(&mut self) -> bool {
        let navigation = self.navigation();
        self.state.advance(navigation)
    }

    /// Go to the previous page. Returns `false` when on the first page.
    pub fn retreat(&mut self) -> bool {
        let navigation = self.navigation();
        self.state.retreat(navigation)
    }

    /// Retreat until the first page. Returns `false` when already there.
    pub fn first_page(&mut self) -> bool {
        let mut moved = false;
        while self.retreat() {
            moved = true;
        }
        moved
    }
}
