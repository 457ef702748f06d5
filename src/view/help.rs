//! Help overlay listing the preview's keyboard shortcuts.
//!
//! Toggled with '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::GridStyles;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Shortcut column and its description.
const SHORTCUTS: &[(&str, &str)] = &[
    ("l/n/→/PgDn", "Next page"),
    ("h/p/←/PgUp", "Previous page"),
    ("g/Home", "First page"),
    ("?", "Toggle this help"),
    ("q/Esc/Ctrl+c", "Quit"),
];

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, styles: &GridStyles) {
    let popup_area = centered_rect(
        HELP_POPUP_WIDTH_PERCENT,
        HELP_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );

    frame.render_widget(Clear, popup_area);

    let help = Paragraph::new(build_help_content(styles))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(styles.active),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help, popup_area);
}

/// Rect of the given percentage of `area`, centered in it.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn build_help_content(styles: &GridStyles) -> Vec<Line<'static>> {
    let key_width = SHORTCUTS
        .iter()
        .map(|(keys, _)| keys.chars().count())
        .max()
        .unwrap_or(0);

    SHORTCUTS
        .iter()
        .map(|(keys, description)| {
            Line::from(vec![
                Span::styled(format!("  {:<width$}  ", keys, width = key_width), styles.active),
                Span::raw(*description),
            ])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_centered() {
        let area = Rect::new(0, 0, 100, 50);
        let rect = centered_rect(60, 60, area);
        assert_eq!(rect, Rect::new(20, 10, 60, 30));
    }

    #[test]
    fn help_lists_every_shortcut() {
        let lines = build_help_content(&GridStyles::default());
        assert_eq!(lines.len(), SHORTCUTS.len());
        let text: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("Next page"));
    }
}
