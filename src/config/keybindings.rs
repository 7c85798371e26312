//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to table actions.
///
/// Only consulted while the table has focus; the search box and the row
/// editor consume raw keystrokes.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Only code and modifiers take part in the lookup.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }

    /// Bind an uppercase letter with and without SHIFT reported.
    fn bind_upper(&mut self, ch: char, action: KeyAction) {
        self.bind(KeyCode::Char(ch), KeyModifiers::SHIFT, action);
        self.bind(KeyCode::Char(ch), KeyModifiers::NONE, action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let none = KeyModifiers::NONE;
        let mut keys = Self {
            bindings: HashMap::new(),
        };

        // Row cursor
        keys.bind(KeyCode::Char('j'), none, KeyAction::CursorDown);
        keys.bind(KeyCode::Char('k'), none, KeyAction::CursorUp);
        keys.bind(KeyCode::Down, none, KeyAction::CursorDown);
        keys.bind(KeyCode::Up, none, KeyAction::CursorUp);

        // Pagination
        keys.bind(KeyCode::Char('g'), none, KeyAction::FirstPage);
        keys.bind(KeyCode::Home, none, KeyAction::FirstPage);
        keys.bind(KeyCode::Char('h'), none, KeyAction::PreviousPage);
        keys.bind(KeyCode::Left, none, KeyAction::PreviousPage);
        keys.bind(KeyCode::PageUp, none, KeyAction::PreviousPage);
        keys.bind(KeyCode::Char('l'), none, KeyAction::NextPage);
        keys.bind(KeyCode::Right, none, KeyAction::NextPage);
        keys.bind(KeyCode::PageDown, none, KeyAction::NextPage);
        keys.bind_upper('G', KeyAction::LastPage);
        keys.bind(KeyCode::End, none, KeyAction::LastPage);

        // Selection and row actions
        keys.bind(KeyCode::Char(' '), none, KeyAction::ToggleSelect);
        keys.bind_upper('D', KeyAction::DeleteSelected);
        keys.bind(KeyCode::Char('x'), none, KeyAction::DeleteRow);
        keys.bind(KeyCode::Delete, none, KeyAction::DeleteRow);
        keys.bind(KeyCode::Char('e'), none, KeyAction::EditRow);
        keys.bind(KeyCode::Enter, none, KeyAction::EditRow);

        // Search
        keys.bind(KeyCode::Char('/'), none, KeyAction::StartSearch);
        keys.bind(KeyCode::Char('c'), none, KeyAction::ClearSearch);

        // Application controls
        keys.bind(KeyCode::Char('r'), none, KeyAction::Reload);
        keys.bind(KeyCode::Char('?'), none, KeyAction::Help);
        keys.bind(KeyCode::Char('q'), none, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}
