//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Defaults cover vim-style letters, arrows, and paging keys.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    /// Bind `key` to `action`, replacing any previous binding.
    pub fn bind(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(key, action);
    }

    fn insert(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bind(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };

        // Forward
        keys.insert(KeyCode::Char('l'), KeyModifiers::NONE, KeyAction::NextPage);
        keys.insert(KeyCode::Char('n'), KeyModifiers::NONE, KeyAction::NextPage);
        keys.insert(KeyCode::Right, KeyModifiers::NONE, KeyAction::NextPage);
        keys.insert(KeyCode::PageDown, KeyModifiers::NONE, KeyAction::NextPage);

        // Back
        keys.insert(KeyCode::Char('h'), KeyModifiers::NONE, KeyAction::PrevPage);
        keys.insert(KeyCode::Char('p'), KeyModifiers::NONE, KeyAction::PrevPage);
        keys.insert(KeyCode::Left, KeyModifiers::NONE, KeyAction::PrevPage);
        keys.insert(KeyCode::PageUp, KeyModifiers::NONE, KeyAction::PrevPage);

        keys.insert(KeyCode::Char('g'), KeyModifiers::NONE, KeyAction::FirstPage);
        keys.insert(KeyCode::Home, KeyModifiers::NONE, KeyAction::FirstPage);

        // Application controls
        keys.insert(KeyCode::Char('?'), KeyModifiers::NONE, KeyAction::ToggleHelp);
        keys.insert(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        keys.insert(KeyCode::Esc, KeyModifiers::NONE, KeyAction::Quit);
        keys.insert(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}
