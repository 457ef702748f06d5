//! Pagination state machine.
//!
//! State is `(page, active_layout)`, starting at `(0, configured)`. Moving
//! forward always switches to the plain grid layout; a hero display only
//! shows its hero region again after retreating all the way to the first
//! page.

use crate::model::LayoutVariant;
use crate::view_state::types::{Navigation, PageIndex};
use serde::Serialize;
use tracing::debug;

/// Current page and the layout used to draw it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    page: PageIndex,
    active_layout: LayoutVariant,
    #[serde(skip)]
    configured_layout: LayoutVariant,
}

impl PaginationState {
    /// Initial state for a display configured with `configured_layout`.
    pub fn new(configured_layout: LayoutVariant) -> Self {
        Self {
            page: PageIndex::FIRST,
            active_layout: configured_layout.clone(),
            configured_layout,
        }
    }

    /// Current page.
    pub fn page(&self) -> PageIndex {
        self.page
    }

    /// Layout used for the current page.
    pub fn active_layout(&self) -> &LayoutVariant {
        &self.active_layout
    }

    /// Layout the display was configured with.
    pub fn configured_layout(&self) -> &LayoutVariant {
        &self.configured_layout
    }

    /// Move to the next page.
    ///
    /// Rejected (no state change, returns `false`) unless
    /// `navigation.can_advance`.
    pub fn advance(&mut self, navigation: Navigation) -> bool {
        if !navigation.can_advance {
            return false;
        }

        self.page = self.page.next();
        self.active_layout = LayoutVariant::Grid;
        debug!(page = self.page.get(), "Advanced page");
        true
    }

    /// Move to the previous page.
    ///
    /// Rejected (no state change, returns `false`) on the first page or unless
    /// `navigation.can_retreat`.
    pub fn retreat(&mut self, navigation: Navigation) -> bool {
        if !navigation.can_retreat || self.page.is_first() {
            return false;
        }

        self.page = self.page.prev();
        self.active_layout =
            if self.configured_layout == LayoutVariant::Hero && self.page.is_first() {
                LayoutVariant::Hero
            } else {
                LayoutVariant::Grid
            };
        debug!(page = self.page.get(), "Retreated page");
        true
    }
}
