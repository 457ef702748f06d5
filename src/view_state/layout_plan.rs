//! Layout plan: the structured output handed to renderers.
//!
//! A plan is an ordered list of rows, each an ordered list of items paired
//! with the hints a renderer needs to size and style them. Plans borrow the
//! items they place; computing a plan never mutates or clones them.

use super::page_slice::PageSlice;
use super::partition;
use crate::model::{ContentItem, DisplayConfig, LayoutVariant, TitlePlacement};
use crate::state::pagination::PaginationState;
use serde::Serialize;
use tracing::debug;

/// Thumbnail style of a placed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Regular grid cell.
    Grid,
    /// Featured cell on the first page of a hero display.
    Hero,
    /// Cell in a griffin tier.
    Griffin,
}

/// Which of the three griffin tiers a row shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GriffinSlot {
    /// Top tier.
    First,
    /// Middle tier.
    Second,
    /// Bottom tier.
    Third,
}

/// Role of a row within the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "tier")]
pub enum RowKind {
    /// Hero items.
    Hero,
    /// Grid items.
    Grid,
    /// One griffin tier.
    Griffin(GriffinSlot),
}

/// Horizontal share of the container a row occupies, in twelfths.
///
/// `xs` applies below the responsive breakpoint, `md` above it. Rows whose
/// `md` span is less than 12 sit side by side with their neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RowRegion {
    /// Span below the breakpoint.
    pub xs: u8,
    /// Span above the breakpoint.
    pub md: u8,
}

impl RowRegion {
    /// Full width at every size.
    pub const FULL: Self = Self { xs: 12, md: 12 };
    /// Full width on small screens, half width above the breakpoint.
    pub const HALF: Self = Self { xs: 12, md: 6 };

    /// Whether the row shares its line with a neighbour above the breakpoint.
    pub fn is_split(&self) -> bool {
        self.md < 12
    }
}

/// Sizing and style hints for one placed item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplayHints {
    /// Thumbnail style.
    pub kind: ItemKind,
    /// Column count the item is sized against.
    pub columns: u32,
    /// Fraction of the row width taken by the item (`1 / columns`).
    pub width_fraction: f64,
    /// Thumbnail height in pixels.
    pub height_px: f64,
    /// Where the headline is drawn.
    pub title_placement: TitlePlacement,
    /// Draw the publish timestamp.
    pub show_timestamp: bool,
    /// Draw the classification pill.
    pub show_pill: bool,
    /// Padding around the item in pixels.
    pub padding_px: u32,
}

/// An item together with its hints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacedItem<'a> {
    /// The borrowed item.
    pub item: &'a ContentItem,
    /// How to draw it.
    pub hints: DisplayHints,
}

/// One visual row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row<'a> {
    /// Role of the row.
    pub kind: RowKind,
    /// Horizontal region of the row.
    pub region: RowRegion,
    /// Items in display order. May be empty.
    pub cells: Vec<PlacedItem<'a>>,
}

impl<'a> Row<'a> {
    /// Number of items in the row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row has no items.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over the row's items.
    pub fn items(&self) -> impl Iterator<Item = &'a ContentItem> + '_ {
        self.cells.iter().map(|cell| cell.item)
    }
}

/// Ordered rows for one page of a display.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LayoutPlan<'a> {
    /// Rows in display order.
    pub rows: Vec<Row<'a>>,
}

impl<'a> LayoutPlan<'a> {
    /// A plan with no rows.
    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    /// Whether the plan has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of placed items across all rows.
    pub fn item_count(&self) -> usize {
        self.rows.iter().map(Row::len).sum()
    }

    /// Iterate over every placed item in display order.
    pub fn cells(&self) -> impl Iterator<Item = &PlacedItem<'a>> {
        self.rows.iter().flat_map(|row| row.cells.iter())
    }
}

/// Compute the layout plan for the current pagination state.
///
/// Applies the display's item window, selects the page slice, and partitions
/// it according to the active layout. Pure: the same inputs always produce
/// the same plan.
///
/// An empty window yields an empty plan. So does an unsupported variant or
/// hero placement, after a logged warning.
pub fn compute_layout<'a>(
    items: &'a [ContentItem],
    config: &DisplayConfig,
    state: &PaginationState,
) -> LayoutPlan<'a> {
    let visible = config.window(items);
    if visible.is_empty() {
        return LayoutPlan::empty();
    }

    let layout = &config.layout;
    let slice = PageSlice::for_layout(layout, state.page());
    let page_items = slice.apply(visible);

    // Griffin shows one fixed arrangement whatever the pagination state.
    let active = match layout.variant {
        LayoutVariant::Griffin => &layout.variant,
        _ => state.active_layout(),
    };

    debug!(
        page = state.page().get(),
        active_layout = %active,
        start = slice.start,
        end = slice.end,
        page_items = page_items.len(),
        "Computing layout"
    );

    match partition::partition(page_items, visible, layout, active) {
        Some(rows) => LayoutPlan { rows },
        None => LayoutPlan::empty(),
    }
}
