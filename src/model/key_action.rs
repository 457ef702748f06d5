//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Show the next page. Default: l/→/n/Page Down
    NextPage,
    /// Show the previous page. Default: h/←/p/Page Up
    PrevPage,
    /// Jump back to the first page. Default: g/Home
    FirstPage,
    /// Toggle the help overlay. Default: ?
    ToggleHelp,
    /// Exit the preview. Default: q/Esc/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Whether the action moves between pages.
    pub fn is_navigation(self) -> bool {
        matches!(self, Self::NextPage | Self::PrevPage | Self::FirstPage)
    }
}
