//! Per-item presentation.
//!
//! Maps a placed item and its hints to the concrete attributes a renderer
//! draws: responsive column spans, link, image, title slot, pill, timestamp
//! and video marker. Link building and timestamp text are delegated to the
//! collaborators in [`link`] and [`timestamp`].

pub mod link;
pub mod timestamp;

pub use link::{InvalidOrigin, LinkBuilder, OriginLinkBuilder};
pub use timestamp::{ClockTimestampFormatter, TimestampFormatter};

use crate::model::{ItemDisplayOptions, TimestampOptions, TitlePlacement};
use crate::view_state::{ItemKind, LayoutPlan, PlacedItem};
use serde::Serialize;

/// Column count that has no whole twelfth span.
const FIVE_COLUMNS: u32 = 5;

/// Responsive column spans in twelfths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnSpans {
    /// Large screens. Absent for five-column rows.
    pub lg: Option<u32>,
    /// Medium screens.
    pub md: u32,
    /// Small screens.
    pub sm: u32,
    /// Extra small screens.
    pub xs: u32,
    /// Five equal columns on large screens.
    pub five_column: bool,
}

impl ColumnSpans {
    /// Spans for an item sized against `columns` columns.
    pub fn for_columns(columns: u32, hero: bool) -> Self {
        let lg = 12 / columns.max(1);
        let five_column = columns == FIVE_COLUMNS;
        Self {
            lg: (!five_column).then_some(lg),
            md: lg.max(3),
            sm: if hero { lg.max(6) } else { lg.max(4) },
            xs: if hero { 12 } else { lg.max(6) },
            five_column,
        }
    }
}

/// Thumbnail style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Thumbnail {
    /// Large cover photo.
    CoverPhoto,
    /// Regular grid thumbnail.
    GridItem,
}

/// Play icon on video items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoMarker {
    /// Configured icon placement.
    pub icon_placement: String,
}

/// Everything a renderer needs to draw one item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemPresentation {
    /// Item id.
    pub id: String,
    /// Link target.
    pub href: Option<String>,
    /// Thumbnail image.
    pub image_url: Option<String>,
    /// Thumbnail style.
    pub thumbnail: Thumbnail,
    /// Responsive spans.
    pub spans: ColumnSpans,
    /// Thumbnail height in pixels.
    pub height_px: f64,
    /// Padding around the item in pixels.
    pub padding_px: u32,
    /// Headline drawn over the thumbnail.
    pub inner_title: Option<String>,
    /// Headline drawn below the thumbnail.
    pub outer_title: Option<String>,
    /// Classification pill. Empty when the item has no classification.
    pub pill: Option<String>,
    /// Formatted publish time.
    pub timestamp: Option<String>,
    /// Set for video items.
    pub video: Option<VideoMarker>,
}

/// Maps placed items to [`ItemPresentation`]s.
#[derive(Debug, Clone)]
pub struct ItemPresenter<L, T> {
    links: L,
    timestamps: T,
    video_icon_placement: String,
    timestamp_options: TimestampOptions,
}

impl<L: LinkBuilder, T: TimestampFormatter> ItemPresenter<L, T> {
    /// Presenter using the given collaborators and display options.
    pub fn new(links: L, timestamps: T, options: &ItemDisplayOptions) -> Self {
        Self {
            links,
            timestamps,
            video_icon_placement: options.video_icon_placement.clone(),
            timestamp_options: options.timestamp,
        }
    }

    /// Presentation of one placed item.
    pub fn present(&self, cell: &PlacedItem<'_>) -> ItemPresentation {
        let item = cell.item;
        let hints = &cell.hints;
        let hero = hints.kind == ItemKind::Hero;

        let (inner_title, outer_title) = match hints.title_placement {
            TitlePlacement::Inner => (Some(item.headline.clone()), None),
            TitlePlacement::Outer => (None, Some(item.headline.clone())),
        };

        let timestamp = match (hints.show_timestamp, hints.title_placement, item.published_date) {
            (true, TitlePlacement::Inner, Some(published)) => {
                Some(self.timestamps.format(published, self.timestamp_options))
            }
            _ => None,
        };

        let pill = hints
            .show_pill
            .then(|| item.content_classification.clone().unwrap_or_default());

        let video = item.is_video().then(|| VideoMarker {
            icon_placement: self.video_icon_placement.clone(),
        });

        ItemPresentation {
            id: item.id.clone(),
            href: self.links.href(item),
            image_url: item.image().map(str::to_string),
            thumbnail: if hero {
                Thumbnail::CoverPhoto
            } else {
                Thumbnail::GridItem
            },
            spans: ColumnSpans::for_columns(hints.columns, hero),
            height_px: hints.height_px,
            padding_px: hints.padding_px,
            inner_title,
            outer_title,
            pill,
            timestamp,
            video,
        }
    }

    /// Presentations for every row of `plan`, in display order.
    pub fn present_plan(&self, plan: &LayoutPlan<'_>) -> Vec<Vec<ItemPresentation>> {
        plan.rows
            .iter()
            .map(|row| row.cells.iter().map(|cell| self.present(cell)).collect())
            .collect()
    }
}
