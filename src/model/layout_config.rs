//! Declarative layout configuration for one grid display.
//!
//! Configuration is supplied once per display instance and never changes
//! afterwards; only pagination state evolves.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

// ===== Layout variant =====

/// Partitioning algorithm for a display.
///
/// Unknown names are kept in `Unsupported` so that planning can fall back to
/// an empty layout instead of rejecting the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum LayoutVariant {
    /// All page items in a single row.
    #[default]
    Grid,
    /// Featured items on the first page, grid below or beside them.
    Hero,
    /// Three fixed, unpaginated tiers.
    Griffin,
    /// Any name not recognized above.
    Unsupported(String),
}

impl LayoutVariant {
    /// Parse a variant name, wrapping unknown names in `Unsupported`.
    pub fn parse(name: &str) -> Self {
        match name {
            "grid" => Self::Grid,
            "hero" => Self::Hero,
            "griffin" => Self::Griffin,
            other => Self::Unsupported(other.to_string()),
        }
    }

    /// Canonical configuration name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Grid => "grid",
            Self::Hero => "hero",
            Self::Griffin => "griffin",
            Self::Unsupported(name) => name,
        }
    }
}

impl fmt::Display for LayoutVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LayoutVariant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// ===== Hero placement =====

/// Where hero items sit relative to the grid on the first page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum HeroPlacement {
    /// Hero row above the grid row.
    #[default]
    Top,
    /// Hero column beside the grid column.
    Left,
    /// Any name not recognized above.
    Unsupported(String),
}

impl HeroPlacement {
    /// Parse a placement name, wrapping unknown names in `Unsupported`.
    pub fn parse(name: &str) -> Self {
        match name {
            "top" => Self::Top,
            "left" => Self::Left,
            other => Self::Unsupported(other.to_string()),
        }
    }

    /// Canonical configuration name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Top => "top",
            Self::Left => "left",
            Self::Unsupported(name) => name,
        }
    }
}

impl fmt::Display for HeroPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== Title placement =====

/// Where an item's headline is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitlePlacement {
    /// Over the thumbnail, together with the timestamp.
    #[default]
    Inner,
    /// Below the thumbnail; timestamps are not shown.
    Outer,
}

impl TitlePlacement {
    /// Parse a placement name. Returns `None` for unknown names.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "inner" => Some(Self::Inner),
            "outer" => Some(Self::Outer),
            _ => None,
        }
    }
}

// ===== Griffin tiers =====

/// Size and title placement of one griffin tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GriffinTier {
    /// Number of items (and columns) in the tier.
    pub count: u32,
    /// Title placement for every item in the tier.
    pub title_placement: TitlePlacement,
}

impl GriffinTier {
    /// Tier with the given count and inner titles.
    pub fn new(count: u32) -> Self {
        Self {
            count,
            title_placement: TitlePlacement::Inner,
        }
    }

    /// Override the title placement.
    pub fn with_title_placement(mut self, placement: TitlePlacement) -> Self {
        self.title_placement = placement;
        self
    }
}

/// The three griffin tiers, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GriffinTiers {
    /// Top tier, hero height.
    pub first: GriffinTier,
    /// Middle tier, grid height.
    pub second: GriffinTier,
    /// Bottom tier, two thirds of grid height. A count of 0 disables it.
    pub third: GriffinTier,
}

impl Default for GriffinTiers {
    fn default() -> Self {
        Self {
            first: GriffinTier::new(1),
            second: GriffinTier::new(1),
            third: GriffinTier::new(0),
        }
    }
}

impl GriffinTiers {
    /// Tiers with the given counts and inner titles.
    pub fn with_counts(first: u32, second: u32, third: u32) -> Self {
        Self {
            first: GriffinTier::new(first),
            second: GriffinTier::new(second),
            third: GriffinTier::new(third),
        }
    }
}

// ===== Item display options =====

/// Options forwarded to the timestamp formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimestampOptions {
    /// Show "N minutes ago" style text for recent items.
    pub show_elapsed_time: bool,
    /// Use the abbreviated date format.
    pub display_short_date_time: bool,
}

/// Per-item display toggles shared by every cell of a display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDisplayOptions {
    /// Show the publish timestamp under inner titles.
    pub show_timestamp: bool,
    /// Show the classification pill.
    pub show_pill: bool,
    /// Placement hint for the play icon on video items.
    pub video_icon_placement: String,
    /// Timestamp formatting options.
    pub timestamp: TimestampOptions,
}

impl Default for ItemDisplayOptions {
    fn default() -> Self {
        Self {
            show_timestamp: true,
            show_pill: false,
            video_icon_placement: DEFAULT_VIDEO_ICON_PLACEMENT.to_string(),
            timestamp: TimestampOptions::default(),
        }
    }
}

/// Default play-icon placement.
pub const DEFAULT_VIDEO_ICON_PLACEMENT: &str = "center";

// ===== LayoutConfig =====

/// Sizing and partitioning parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Configured layout variant.
    pub variant: LayoutVariant,
    /// Grid rows per page.
    pub row_grid_count: u32,
    /// Grid columns per page.
    pub column_grid_count: u32,
    /// Hero placement (hero variant only).
    pub hero_placement: HeroPlacement,
    /// Number of hero items on the first page (hero variant only).
    pub hero_count: u32,
    /// Griffin tiers (griffin variant only).
    pub griffin: GriffinTiers,
    /// Configured padding in pixels. Items use half of it, see [`Self::item_padding`].
    pub padding: u32,
    /// Per-item display toggles.
    pub item_display: ItemDisplayOptions,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            variant: LayoutVariant::Grid,
            row_grid_count: 1,
            column_grid_count: 1,
            hero_placement: HeroPlacement::Top,
            hero_count: 1,
            griffin: GriffinTiers::default(),
            padding: 2,
            item_display: ItemDisplayOptions::default(),
        }
    }
}

impl LayoutConfig {
    /// Items per page for paginated variants. Griffin ignores paging.
    pub fn items_per_page(&self) -> usize {
        match self.variant {
            LayoutVariant::Griffin => 0,
            _ => self.row_grid_count as usize * self.column_grid_count as usize,
        }
    }

    /// Whether the configured variant reserves a first-page hero region.
    pub fn is_hero(&self) -> bool {
        self.variant == LayoutVariant::Hero
    }

    /// Padding applied around each item: half the configured padding,
    /// rounded half up.
    pub fn item_padding(&self) -> u32 {
        self.padding.div_ceil(2)
    }
}

// ===== DisplayConfig =====

/// Layout configuration plus the options of the surrounding display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Layout parameters.
    pub layout: LayoutConfig,
    /// Index of the first feed item considered.
    pub start_index: usize,
    /// Maximum number of feed items considered.
    pub total_to_show: usize,
    /// Render pagination controls.
    pub show_pagination: bool,
    /// Section title.
    pub title: Option<String>,
    /// Show a "read more" link next to the title.
    pub show_read_more: bool,
    /// Target of the "read more" link.
    pub category_url: Option<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            start_index: 0,
            total_to_show: 7,
            show_pagination: false,
            title: None,
            show_read_more: false,
            category_url: None,
        }
    }
}

impl DisplayConfig {
    /// Items considered by this display: `total_to_show` items starting at
    /// `start_index`, truncated to the feed.
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.start_index.min(items.len());
        let end = self
            .start_index
            .saturating_add(self.total_to_show)
            .min(items.len());
        &items[start..end]
    }

    /// The "read more" target, when the link should be shown.
    pub fn read_more_url(&self) -> Option<&str> {
        if self.show_read_more {
            self.category_url.as_deref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_parse_recognizes_known_names() {
        assert_eq!(LayoutVariant::parse("grid"), LayoutVariant::Grid);
        assert_eq!(LayoutVariant::parse("hero"), LayoutVariant::Hero);
        assert_eq!(LayoutVariant::parse("griffin"), LayoutVariant::Griffin);
    }

    #[test]
    fn variant_parse_keeps_unknown_name() {
        let variant = LayoutVariant::parse("carousel");
        assert_eq!(variant, LayoutVariant::Unsupported("carousel".to_string()));
        assert_eq!(variant.as_str(), "carousel");
    }

    #[test]
    fn variant_parse_is_case_sensitive() {
        assert!(matches!(
            LayoutVariant::parse("Grid"),
            LayoutVariant::Unsupported(_)
        ));
    }

    #[test]
    fn hero_placement_parse_keeps_unknown_name() {
        assert_eq!(HeroPlacement::parse("left"), HeroPlacement::Left);
        assert_eq!(
            HeroPlacement::parse("right").to_string(),
            "right".to_string()
        );
    }

    #[test]
    fn title_placement_parse_rejects_unknown() {
        assert_eq!(TitlePlacement::parse("outer"), Some(TitlePlacement::Outer));
        assert_eq!(TitlePlacement::parse("middle"), None);
    }

    #[test]
    fn default_layout_matches_documented_defaults() {
        let config = LayoutConfig::default();
        assert_eq!(config.variant, LayoutVariant::Grid);
        assert_eq!(config.row_grid_count, 1);
        assert_eq!(config.column_grid_count, 1);
        assert_eq!(config.hero_placement, HeroPlacement::Top);
        assert_eq!(config.hero_count, 1);
        assert_eq!(config.griffin, GriffinTiers::with_counts(1, 1, 0));
        assert_eq!(config.padding, 2);
        assert!(config.item_display.show_timestamp);
        assert!(!config.item_display.show_pill);
        assert_eq!(config.item_display.video_icon_placement, "center");
    }

    #[test]
    fn default_display_matches_documented_defaults() {
        let config = DisplayConfig::default();
        assert_eq!(config.start_index, 0);
        assert_eq!(config.total_to_show, 7);
        assert!(!config.show_pagination);
        assert!(!config.show_read_more);
    }

    #[test]
    fn items_per_page_is_rows_times_columns() {
        let config = LayoutConfig {
            row_grid_count: 2,
            column_grid_count: 3,
            ..Default::default()
        };
        assert_eq!(config.items_per_page(), 6);
    }

    #[test]
    fn items_per_page_is_zero_for_griffin() {
        let config = LayoutConfig {
            variant: LayoutVariant::Griffin,
            row_grid_count: 2,
            column_grid_count: 3,
            ..Default::default()
        };
        assert_eq!(config.items_per_page(), 0);
    }

    #[test]
    fn item_padding_rounds_half_up() {
        let mut config = LayoutConfig::default();
        for (padding, expected) in [(0, 0), (1, 1), (2, 1), (3, 2), (4, 2), (5, 3)] {
            config.padding = padding;
            assert_eq!(config.item_padding(), expected, "padding {}", padding);
        }
    }

    #[test]
    fn window_applies_start_and_total() {
        let items: Vec<u32> = (0..20).collect();
        let config = DisplayConfig {
            start_index: 3,
            total_to_show: 5,
            ..Default::default()
        };
        assert_eq!(config.window(&items), &[3, 4, 5, 6, 7]);
    }

    #[test]
    fn window_truncates_to_feed_length() {
        let items: Vec<u32> = (0..4).collect();
        let config = DisplayConfig {
            start_index: 2,
            total_to_show: 7,
            ..Default::default()
        };
        assert_eq!(config.window(&items), &[2, 3]);
    }

    #[test]
    fn window_past_end_is_empty() {
        let items: Vec<u32> = (0..4).collect();
        let config = DisplayConfig {
            start_index: 10,
            ..Default::default()
        };
        assert!(config.window(&items).is_empty());
    }

    #[test]
    fn read_more_requires_flag_and_url() {
        let mut config = DisplayConfig {
            category_url: Some("/news".to_string()),
            ..Default::default()
        };
        assert_eq!(config.read_more_url(), None);
        config.show_read_more = true;
        assert_eq!(config.read_more_url(), Some("/news"));
        config.category_url = None;
        assert_eq!(config.read_more_url(), None);
    }
}
