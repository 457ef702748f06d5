//! Preview styling.

use ratatui::style::{Color, Modifier, Style};

/// Muted text (hints, disabled controls).
pub const MUTED_TEXT: Style = Style::new().fg(Color::DarkGray);

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors on or off regardless of environment.
    pub fn fixed(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== GridStyles =====

/// Styles for the parts of a rendered grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridStyles {
    /// Section title.
    pub title: Style,
    /// Item headline.
    pub headline: Style,
    /// Publish timestamp.
    pub timestamp: Style,
    /// Classification pill.
    pub pill: Style,
    /// Play marker on video items.
    pub video: Style,
    /// Border of hero (cover photo) cells.
    pub hero_border: Style,
    /// Border of regular cells.
    pub border: Style,
    /// Current page dot and enabled arrows.
    pub active: Style,
    /// Other dots, disabled arrows, hints.
    pub muted: Style,
}

impl GridStyles {
    /// Styles for the given color configuration.
    ///
    /// Without colors only modifiers (bold, dim) distinguish parts.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let bold = Style::new().add_modifier(Modifier::BOLD);
        let dim = Style::new().add_modifier(Modifier::DIM);
        if config.colors_enabled() {
            Self {
                title: bold.fg(Color::Cyan),
                headline: bold,
                timestamp: MUTED_TEXT,
                pill: Style::new().fg(Color::Black).bg(Color::Yellow),
                video: Style::new().fg(Color::Red),
                hero_border: Style::new().fg(Color::Cyan),
                border: Style::new().fg(Color::Gray),
                active: bold.fg(Color::Cyan),
                muted: MUTED_TEXT,
            }
        } else {
            Self {
                title: bold,
                headline: bold,
                timestamp: dim,
                pill: Style::new().add_modifier(Modifier::REVERSED),
                video: Style::new(),
                hero_border: Style::new(),
                border: Style::new(),
                active: bold,
                muted: dim,
            }
        }
    }
}

impl Default for GridStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial(no_color)]
    fn no_color_flag_disables_colors() {
        assert!(!ColorConfig::from_env_and_args(true).colors_enabled());
    }

    #[test]
    #[serial(no_color)]
    fn no_color_env_disables_colors() {
        std::env::set_var("NO_COLOR", "1");
        let config = ColorConfig::from_env_and_args(false);
        std::env::remove_var("NO_COLOR");
        assert!(!config.colors_enabled());
    }

    #[test]
    #[serial(no_color)]
    fn colors_enabled_without_flag_or_env() {
        std::env::remove_var("NO_COLOR");
        assert!(ColorConfig::from_env_and_args(false).colors_enabled());
    }

    #[test]
    fn colorless_styles_have_no_foreground() {
        let styles = GridStyles::with_color_config(ColorConfig::fixed(false));
        for style in [styles.title, styles.pill, styles.video, styles.border] {
            assert_eq!(style.fg, None);
        }
    }

    #[test]
    fn colored_pill_stands_out() {
        let styles = GridStyles::with_color_config(ColorConfig::fixed(true));
        assert_eq!(styles.pill.bg, Some(Color::Yellow));
    }
}
