//! Terminal preview (impure shell).
//!
//! Renders the current page of a [`GridDisplay`] and maps key presses to
//! pagination transitions. All layout decisions come from the pure core; this
//! module only draws what the plan says.

pub mod constants;
mod grid;
mod help;
mod styles;

pub use grid::{cell_lines, pagination_line, present_rows, truncate, PresentedRow};
pub use help::render_help_overlay;
pub use styles::{ColorConfig, GridStyles, MUTED_TEXT};

use crate::config::keybindings::KeyBindings;
use crate::model::KeyAction;
use crate::presentation::{ItemPresenter, LinkBuilder, TimestampFormatter};
use crate::state::GridDisplay;
use constants::{HEADER_HEIGHT, STATUS_BAR_HEIGHT};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout},
    text::{Line, Span},
    widgets::Paragraph,
    Terminal,
};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B, L, T>
where
    B: Backend,
{
    terminal: Terminal<B>,
    display: GridDisplay,
    presenter: ItemPresenter<L, T>,
    /// Fallback section title when the config sets none.
    headline: Option<String>,
    key_bindings: KeyBindings,
    styles: GridStyles,
    help_visible: bool,
}

impl<L, T> TuiApp<CrosstermBackend<Stdout>, L, T>
where
    L: LinkBuilder,
    T: TimestampFormatter,
{
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        display: GridDisplay,
        presenter: ItemPresenter<L, T>,
        headline: Option<String>,
        colors: ColorConfig,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(
            terminal, display, presenter, headline, colors,
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits. Redraws after every event; resizes need no
    /// special handling because each draw lays out from scratch.
    pub fn run(&mut self) -> Result<(), TuiError> {
        loop {
            self.draw()?;
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && self.handle_key(key) {
                    return Ok(());
                }
            }
        }
    }
}

impl<B, L, T> TuiApp<B, L, T>
where
    B: Backend,
    L: LinkBuilder,
    T: TimestampFormatter,
{
    fn with_terminal(
        terminal: Terminal<B>,
        display: GridDisplay,
        presenter: ItemPresenter<L, T>,
        headline: Option<String>,
        colors: ColorConfig,
    ) -> Self {
        Self {
            terminal,
            display,
            presenter,
            headline,
            key_bindings: KeyBindings::default(),
            styles: GridStyles::with_color_config(colors),
            help_visible: false,
        }
    }

    /// Handle a key press. Returns `true` when the user quits.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        // While help is shown only dismissal and quit do anything. Without
        // pagination controls the display stays on its first page.
        let paging_locked = self.help_visible || !self.display.config().show_pagination;
        if action.is_navigation() && paging_locked {
            return false;
        }

        let moved = match action {
            KeyAction::Quit => return true,
            KeyAction::ToggleHelp => {
                self.help_visible = !self.help_visible;
                return false;
            }
            KeyAction::NextPage => self.display.advance(),
            KeyAction::PrevPage => self.display.retreat(),
            KeyAction::FirstPage => self.display.first_page(),
        };

        debug!(
            ?action,
            moved,
            page = self.display.state().page().get(),
            "Navigation key"
        );
        false
    }

    fn draw(&mut self) -> Result<(), TuiError> {
        let plan = self.display.plan();
        let rows = present_rows(&plan, &self.presenter);

        let config = self.display.config();
        let title = config.title.as_deref().or(self.headline.as_deref());
        let read_more = config.read_more_url();
        let indicator = config
            .show_pagination
            .then(|| self.display.page_indicator());
        let status = status_line(&self.display, &self.styles);
        let styles = &self.styles;
        let help_visible = self.help_visible;

        self.terminal.draw(|frame| {
            let [header, body, footer] = Layout::vertical([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .areas(frame.area());

            grid::render_header(frame, header, title, read_more, indicator, styles);
            grid::render_rows(frame, body, &rows, styles);
            frame.render_widget(Paragraph::new(status), footer);

            if help_visible {
                render_help_overlay(frame, styles);
            }
        })?;
        Ok(())
    }
}

fn status_line(display: &GridDisplay, styles: &GridStyles) -> Line<'static> {
    let indicator = display.page_indicator();
    let page = if indicator.total == 0 {
        "no pages".to_string()
    } else {
        format!("page {}/{}", indicator.current + 1, indicator.total)
    };
    Line::from(vec![
        Span::styled(
            format!(" {} · {} ", page, display.state().active_layout()),
            styles.active,
        ),
        Span::styled("· ←/→ page · ? help · q quit", styles.muted),
    ])
}

/// Initialize and run the preview.
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// even when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_preview<L, T>(
    display: GridDisplay,
    presenter: ItemPresenter<L, T>,
    headline: Option<String>,
    colors: ColorConfig,
) -> Result<(), TuiError>
where
    L: LinkBuilder,
    T: TimestampFormatter,
{
    let result = TuiApp::new(display, presenter, headline, colors).and_then(|mut app| app.run());

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
