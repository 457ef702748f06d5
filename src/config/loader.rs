//! Configuration file loading with precedence handling.

use crate::model::{
    DisplayConfig, GriffinTier, GriffinTiers, HeroPlacement, ItemDisplayOptions, LayoutConfig,
    LayoutVariant, TimestampOptions, TitlePlacement,
};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "CATGRID_CONFIG";
/// Environment variable overriding the layout variant.
pub const LAYOUT_ENV_VAR: &str = "CATGRID_LAYOUT";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional; anything not specified takes its default.
/// Corresponds to `~/.config/catgrid/config.toml`:
///
/// ```toml
/// layout = "hero"
/// hero_placement = "left"
/// row_grid_count = 2
/// column_grid_count = 3
/// show_pagination = true
///
/// [griffin]
/// first_count = 1
/// second_count = 3
/// second_title_placement = "outer"
///
/// [timestamp]
/// show_elapsed_time = true
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Layout variant name (`grid`, `hero`, `griffin`).
    #[serde(default)]
    pub layout: Option<String>,

    /// First feed item shown.
    #[serde(default)]
    pub start_index: Option<usize>,

    /// Maximum number of feed items shown.
    #[serde(default)]
    pub total_to_show: Option<usize>,

    /// Render pagination controls.
    #[serde(default)]
    pub show_pagination: Option<bool>,

    /// Section title.
    #[serde(default)]
    pub title: Option<String>,

    /// Show the "read more" link.
    #[serde(default)]
    pub show_read_more: Option<bool>,

    /// Target of the "read more" link.
    #[serde(default)]
    pub category_url: Option<String>,

    /// Grid rows per page.
    #[serde(default)]
    pub row_grid_count: Option<u32>,

    /// Grid columns per page.
    #[serde(default)]
    pub column_grid_count: Option<u32>,

    /// Hero placement name (`top`, `left`).
    #[serde(default)]
    pub hero_placement: Option<String>,

    /// Hero items on the first page.
    #[serde(default)]
    pub hero_count: Option<u32>,

    /// Padding in pixels.
    #[serde(default)]
    pub padding: Option<u32>,

    /// Show publish timestamps.
    #[serde(default)]
    pub show_timestamp: Option<bool>,

    /// Show classification pills.
    #[serde(default)]
    pub show_pill: Option<bool>,

    /// Play icon placement on video items.
    #[serde(default)]
    pub video_icon_placement: Option<String>,

    /// Origin item links are rooted at.
    #[serde(default)]
    pub origin: Option<String>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Griffin tier section.
    #[serde(default)]
    pub griffin: Option<GriffinSection>,

    /// Timestamp formatting section.
    #[serde(default)]
    pub timestamp: Option<TimestampSection>,
}

/// `[griffin]` section.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GriffinSection {
    /// Items in the first tier.
    #[serde(default)]
    pub first_count: Option<u32>,
    /// Items in the second tier.
    #[serde(default)]
    pub second_count: Option<u32>,
    /// Items in the third tier; 0 disables it.
    #[serde(default)]
    pub third_count: Option<u32>,
    /// Title placement of the first tier.
    #[serde(default)]
    pub first_title_placement: Option<TitlePlacement>,
    /// Title placement of the second tier.
    #[serde(default)]
    pub second_title_placement: Option<TitlePlacement>,
    /// Title placement of the third tier.
    #[serde(default)]
    pub third_title_placement: Option<TitlePlacement>,
}

/// `[timestamp]` section.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TimestampSection {
    /// Show elapsed time for recent items.
    #[serde(default)]
    pub show_elapsed_time: Option<bool>,
    /// Use the abbreviated date format.
    #[serde(default)]
    pub display_short_date_time: Option<bool>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Display and layout configuration, not yet validated.
    pub display: DisplayConfig,
    /// Origin item links are rooted at. No links without one.
    pub origin: Option<String>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            origin: None,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/catgrid/catgrid.log` on Linux, or the platform
/// equivalent. Falls back to the current directory when no state directory
/// exists (macOS, Windows).
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("catgrid").join("catgrid.log")
    } else {
        PathBuf::from("catgrid.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    info!(path = %path.display(), "Loaded config file");
    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/catgrid/config.toml` on Unix, appropriate path on other
/// platforms. Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("catgrid").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `CATGRID_CONFIG` environment variable
/// 3. Default path `~/.config/catgrid/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `CATGRID_LAYOUT`: Override layout variant
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(layout) = std::env::var(LAYOUT_ENV_VAR) {
        config.display.layout.variant = LayoutVariant::parse(&layout);
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let display = defaults.display;
    let layout = display.layout;
    let item_display = layout.item_display;

    let griffin = merge_griffin(config.griffin.unwrap_or_default(), layout.griffin);
    let timestamp = match config.timestamp {
        Some(section) => TimestampOptions {
            show_elapsed_time: section
                .show_elapsed_time
                .unwrap_or(item_display.timestamp.show_elapsed_time),
            display_short_date_time: section
                .display_short_date_time
                .unwrap_or(item_display.timestamp.display_short_date_time),
        },
        None => item_display.timestamp,
    };

    ResolvedConfig {
        display: DisplayConfig {
            layout: LayoutConfig {
                variant: config
                    .layout
                    .as_deref()
                    .map_or(layout.variant, LayoutVariant::parse),
                row_grid_count: config.row_grid_count.unwrap_or(layout.row_grid_count),
                column_grid_count: config
                    .column_grid_count
                    .unwrap_or(layout.column_grid_count),
                hero_placement: config
                    .hero_placement
                    .as_deref()
                    .map_or(layout.hero_placement, HeroPlacement::parse),
                hero_count: config.hero_count.unwrap_or(layout.hero_count),
                griffin,
                padding: config.padding.unwrap_or(layout.padding),
                item_display: ItemDisplayOptions {
                    show_timestamp: config.show_timestamp.unwrap_or(item_display.show_timestamp),
                    show_pill: config.show_pill.unwrap_or(item_display.show_pill),
                    video_icon_placement: config
                        .video_icon_placement
                        .unwrap_or(item_display.video_icon_placement),
                    timestamp,
                },
            },
            start_index: config.start_index.unwrap_or(display.start_index),
            total_to_show: config.total_to_show.unwrap_or(display.total_to_show),
            show_pagination: config.show_pagination.unwrap_or(display.show_pagination),
            title: config.title.or(display.title),
            show_read_more: config.show_read_more.unwrap_or(display.show_read_more),
            category_url: config.category_url.or(display.category_url),
        },
        origin: config.origin.or(defaults.origin),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

fn merge_griffin(section: GriffinSection, defaults: GriffinTiers) -> GriffinTiers {
    let tier = |count: Option<u32>, placement: Option<TitlePlacement>, default: GriffinTier| {
        GriffinTier {
            count: count.unwrap_or(default.count),
            title_placement: placement.unwrap_or(default.title_placement),
        }
    };
    GriffinTiers {
        first: tier(
            section.first_count,
            section.first_title_placement,
            defaults.first,
        ),
        second: tier(
            section.second_count,
            section.second_title_placement,
            defaults.second,
        ),
        third: tier(
            section.third_count,
            section.third_title_placement,
            defaults.third,
        ),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    layout_override: Option<String>,
    pagination_override: Option<bool>,
    origin_override: Option<String>,
) -> ResolvedConfig {
    if let Some(layout) = layout_override {
        config.display.layout.variant = LayoutVariant::parse(&layout);
    }

    if let Some(pagination) = pagination_override {
        config.display.show_pagination = pagination;
    }

    if let Some(origin) = origin_override {
        config.origin = Some(origin);
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

#[cfg(test)]
mod log_path_tests {
    use super::*;

    #[test]
    fn default_log_path_ends_with_catgrid_log() {
        let path = default_log_path();
        assert!(
            path.to_string_lossy().ends_with("catgrid.log"),
            "Default log path should end with 'catgrid.log', got: {:?}",
            path
        );
    }

    #[test]
    fn resolved_config_default_includes_log_path() {
        let config = ResolvedConfig::default();
        assert!(!config.log_file_path.as_os_str().is_empty());
    }

    #[test]
    fn config_file_log_path_overrides_default() {
        let custom_path = PathBuf::from("/custom/path/to/catgrid.log");
        let config_file = ConfigFile {
            log_file_path: Some(custom_path.clone()),
            ..Default::default()
        };

        let resolved = merge_config(Some(config_file));
        assert_eq!(resolved.log_file_path, custom_path);
    }

    #[test]
    fn missing_config_file_log_path_uses_default() {
        let resolved = merge_config(Some(ConfigFile::default()));
        assert_eq!(resolved.log_file_path, default_log_path());
    }
}
