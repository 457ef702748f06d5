//! Partitioning of a page's items into rows.
//!
//! Rules are fixed per variant:
//! - grid: one row of page items
//! - hero/top: hero row above a grid row
//! - hero/left: hero column beside a grid column
//! - griffin: three fixed tiers drawn from the whole (unpaginated) window

use super::layout_plan::{DisplayHints, GriffinSlot, ItemKind, PlacedItem, Row, RowKind, RowRegion};
use crate::model::{
    ContentItem, GriffinTier, HeroPlacement, LayoutConfig, LayoutVariant, TitlePlacement,
};
use tracing::warn;

/// Height of a grid cell in pixels.
pub const GRID_ITEM_HEIGHT: f64 = 140.0;
/// Height of a hero cell (and the first griffin tier) in pixels.
pub const HERO_ITEM_HEIGHT: f64 = 280.0;
/// Height of the third griffin tier: two thirds of a grid cell.
pub const THIRD_TIER_HEIGHT: f64 = GRID_ITEM_HEIGHT * 2.0 / 3.0;

/// Split items into rows for the active layout.
///
/// `page_items` is the current page's slice; `all_items` is the full item
/// window, used only by griffin. Returns `None` for an unsupported variant or
/// hero placement.
pub fn partition<'a>(
    page_items: &'a [ContentItem],
    all_items: &'a [ContentItem],
    config: &LayoutConfig,
    active_layout: &LayoutVariant,
) -> Option<Vec<Row<'a>>> {
    let cells = CellBuilder::new(config);

    match active_layout {
        LayoutVariant::Grid => Some(vec![Row {
            kind: RowKind::Grid,
            region: RowRegion::FULL,
            cells: cells.grid(page_items, config.column_grid_count),
        }]),
        LayoutVariant::Hero => {
            let split = (config.hero_count as usize).min(page_items.len());
            let (hero_items, grid_items) = page_items.split_at(split);
            match &config.hero_placement {
                HeroPlacement::Top => Some(hero_top(&cells, config, hero_items, grid_items)),
                HeroPlacement::Left => Some(hero_left(&cells, config, hero_items, grid_items)),
                HeroPlacement::Unsupported(name) => {
                    warn!(hero_placement = %name, "{} not supported.", name);
                    None
                }
            }
        }
        LayoutVariant::Griffin => Some(griffin(&cells, config, all_items)),
        LayoutVariant::Unsupported(name) => {
            warn!(layout = %name, "{} not supported.", name);
            None
        }
    }
}

fn hero_top<'a>(
    cells: &CellBuilder,
    config: &LayoutConfig,
    hero_items: &'a [ContentItem],
    grid_items: &'a [ContentItem],
) -> Vec<Row<'a>> {
    vec![
        Row {
            kind: RowKind::Hero,
            region: RowRegion::FULL,
            cells: cells.hero(hero_items, config.hero_count, HERO_ITEM_HEIGHT),
        },
        Row {
            kind: RowKind::Grid,
            region: RowRegion::FULL,
            cells: cells.grid(grid_items, config.column_grid_count),
        },
    ]
}

fn hero_left<'a>(
    cells: &CellBuilder,
    config: &LayoutConfig,
    hero_items: &'a [ContentItem],
    grid_items: &'a [ContentItem],
) -> Vec<Row<'a>> {
    let (region, height) = if config.row_grid_count == 0 || config.column_grid_count == 0 {
        (RowRegion::FULL, HERO_ITEM_HEIGHT)
    } else {
        (
            RowRegion::HALF,
            hero_column_height(
                config.row_grid_count,
                config.hero_count,
                config.item_padding(),
            ),
        )
    };

    vec![
        Row {
            kind: RowKind::Hero,
            region,
            cells: cells.hero(hero_items, 1, height),
        },
        Row {
            kind: RowKind::Grid,
            region,
            cells: cells.grid(grid_items, config.column_grid_count),
        },
    ]
}

/// Height of each hero slot when the hero column matches the grid beside it.
///
/// The column spans `rows` grid cells plus the gaps between them; with more
/// than one hero the column is shared evenly after removing the gaps between
/// hero slots.
pub fn hero_column_height(rows: u32, hero_count: u32, padding: u32) -> f64 {
    let rows = f64::from(rows);
    let gap = f64::from(padding) * 2.0;
    let height = rows * GRID_ITEM_HEIGHT + (rows - 1.0) * gap;

    if hero_count > 1 {
        let heroes = f64::from(hero_count);
        height / heroes - ((heroes - 1.0) * gap) / heroes
    } else {
        height
    }
}

fn griffin<'a>(
    cells: &CellBuilder,
    config: &LayoutConfig,
    all_items: &'a [ContentItem],
) -> Vec<Row<'a>> {
    let tiers = &config.griffin;
    let first_end = tiers.first.count as usize;
    let second_end = first_end + tiers.second.count as usize;
    let third_end = second_end + tiers.third.count as usize;

    [
        (GriffinSlot::First, tiers.first, 0..first_end, HERO_ITEM_HEIGHT),
        (GriffinSlot::Second, tiers.second, first_end..second_end, GRID_ITEM_HEIGHT),
        (GriffinSlot::Third, tiers.third, second_end..third_end, THIRD_TIER_HEIGHT),
    ]
    .into_iter()
    .map(|(slot, tier, range, height)| {
        let start = range.start.min(all_items.len());
        let end = range.end.min(all_items.len());
        Row {
            kind: RowKind::Griffin(slot),
            region: RowRegion::FULL,
            cells: cells.griffin(&all_items[start..end], tier, height),
        }
    })
    .collect()
}

/// Builds cells sharing the display-wide options of one configuration.
struct CellBuilder {
    show_timestamp: bool,
    show_pill: bool,
    padding_px: u32,
}

impl CellBuilder {
    fn new(config: &LayoutConfig) -> Self {
        Self {
            show_timestamp: config.item_display.show_timestamp,
            show_pill: config.item_display.show_pill,
            padding_px: config.item_padding(),
        }
    }

    fn grid<'a>(&self, items: &'a [ContentItem], columns: u32) -> Vec<PlacedItem<'a>> {
        self.build(
            items,
            ItemKind::Grid,
            columns,
            GRID_ITEM_HEIGHT,
            TitlePlacement::Inner,
        )
    }

    fn hero<'a>(&self, items: &'a [ContentItem], columns: u32, height: f64) -> Vec<PlacedItem<'a>> {
        self.build(items, ItemKind::Hero, columns, height, TitlePlacement::Inner)
    }

    fn griffin<'a>(
        &self,
        items: &'a [ContentItem],
        tier: GriffinTier,
        height: f64,
    ) -> Vec<PlacedItem<'a>> {
        self.build(
            items,
            ItemKind::Griffin,
            tier.count,
            height,
            tier.title_placement,
        )
    }

    fn build<'a>(
        &self,
        items: &'a [ContentItem],
        kind: ItemKind,
        columns: u32,
        height_px: f64,
        title_placement: TitlePlacement,
    ) -> Vec<PlacedItem<'a>> {
        let hints = DisplayHints {
            kind,
            columns,
            width_fraction: 1.0 / f64::from(columns.max(1)),
            height_px,
            title_placement,
            show_timestamp: self.show_timestamp,
            show_pill: self.show_pill,
            padding_px: self.padding_px,
        };
        items.iter().map(|item| PlacedItem { item, hints }).collect()
    }
}
