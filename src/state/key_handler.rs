//! Keyboard routing (pure state transitions).
//!
//! Keys go to whichever widget has focus. The table resolves keys through
//! [`KeyBindings`]; the search box and field editor treat them as text.

use crate::config::KeyBindings;
use crate::model::KeyAction;
use crate::state::{Action, AppState, Effect, FocusPane, InputLine, PageNav};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Keep running; run the effect if there is one.
    Continue(Option<Effect>),
    /// Leave the app.
    Quit,
}

/// Route one key event.
pub fn handle_key(state: &mut AppState, bindings: &KeyBindings, key: KeyEvent) -> KeyOutcome {
    if key.kind == KeyEventKind::Release {
        return KeyOutcome::Continue(None);
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyOutcome::Quit;
    }

    if state.help_visible {
        if bindings.get(key) == Some(KeyAction::Quit) {
            return KeyOutcome::Quit;
        }
        state.help_visible = false;
        return KeyOutcome::Continue(None);
    }

    match state.focus {
        FocusPane::Table => handle_table_key(state, bindings, key),
        FocusPane::Search => KeyOutcome::Continue(handle_search_key(state, key)),
        FocusPane::Editor => KeyOutcome::Continue(handle_editor_key(state, key)),
    }
}

fn handle_table_key(state: &mut AppState, bindings: &KeyBindings, key: KeyEvent) -> KeyOutcome {
    let Some(action) = bindings.get(key) else {
        debug!(?key, "Unbound key");
        return KeyOutcome::Continue(None);
    };

    let effect = match action {
        KeyAction::Quit => return KeyOutcome::Quit,
        KeyAction::CursorUp => {
            state.cursor_up();
            None
        }
        KeyAction::CursorDown => {
            state.cursor_down();
            None
        }
        KeyAction::FirstPage => state.dispatch(Action::SetPage(PageNav::First)),
        KeyAction::PreviousPage => state.dispatch(Action::SetPage(PageNav::Previous)),
        KeyAction::NextPage => state.dispatch(Action::SetPage(PageNav::Next)),
        KeyAction::LastPage => state.dispatch(Action::SetPage(PageNav::Last)),
        KeyAction::ToggleSelect => match state.cursor_row() {
            Some(id) => state.dispatch(Action::ToggleSelect(id)),
            None => None,
        },
        KeyAction::DeleteSelected => {
            if state.table.can_delete_selected() {
                let count = state.table.selection().len();
                let effect = state.dispatch(Action::BulkDelete);
                state.set_status(format!("Deleted {count} selected rows"));
                effect
            } else {
                None
            }
        }
        KeyAction::DeleteRow => match state.cursor_row() {
            Some(id) if state.table.editor().is_editing(id) => {
                state.set_status("Save or cancel the edit before deleting this row");
                None
            }
            Some(id) => state.dispatch(Action::DeleteRow(id)),
            None => None,
        },
        KeyAction::EditRow => state.begin_edit_at_cursor(),
        KeyAction::StartSearch => {
            let query = state.table.query().to_string();
            state.search_input.set(query);
            state.focus = FocusPane::Search;
            None
        }
        KeyAction::ClearSearch => {
            state.search_input.clear();
            state.dispatch(Action::ClearSearch)
        }
        KeyAction::Reload => {
            state.set_status("Loading...");
            state.dispatch(Action::Reload)
        }
        KeyAction::Help => {
            state.help_visible = true;
            None
        }
    };
    KeyOutcome::Continue(effect)
}

/// Apply a text-editing key to `line`. Returns whether the text changed, or
/// `None` if the key is not a text-editing key.
fn edit_line(line: &mut InputLine, key: KeyEvent) -> Option<bool> {
    match key.code {
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            line.insert(ch);
            Some(true)
        }
        KeyCode::Backspace => Some(line.backspace()),
        KeyCode::Delete => Some(line.delete()),
        KeyCode::Left => {
            line.left();
            Some(false)
        }
        KeyCode::Right => {
            line.right();
            Some(false)
        }
        KeyCode::Home => {
            line.home();
            Some(false)
        }
        KeyCode::End => {
            line.end();
            Some(false)
        }
        _ => None,
    }
}

fn handle_search_key(state: &mut AppState, key: KeyEvent) -> Option<Effect> {
    match key.code {
        KeyCode::Enter => {
            state.focus = FocusPane::Table;
            state.cursor = 0;
            state.dispatch(Action::ApplySearch)
        }
        KeyCode::Esc => {
            state.focus = FocusPane::Table;
            None
        }
        _ => match edit_line(&mut state.search_input, key) {
            Some(true) => state.sync_search_query(),
            _ => None,
        },
    }
}

fn handle_editor_key(state: &mut AppState, key: KeyEvent) -> Option<Effect> {
    match key.code {
        KeyCode::Enter => {
            let effect = state.dispatch(Action::SaveEdit);
            state.set_status("Row saved");
            effect
        }
        KeyCode::Esc => state.dispatch(Action::CancelEdit),
        KeyCode::Tab => {
            state.cycle_edit_field(true);
            None
        }
        KeyCode::BackTab => {
            state.cycle_edit_field(false);
            None
        }
        _ => match edit_line(&mut state.edit_input, key) {
            Some(true) => state.sync_edit_field(),
            _ => None,
        },
    }
}

#[cfg(test)]
#[path = "key_handler_tests.rs"]
mod tests;
