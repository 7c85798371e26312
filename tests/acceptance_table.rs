//! Acceptance tests for browsing and editing the member table.
//!
//! Each test loads `tests/fixtures/members.json` (46 members, 4 of them
//! admins) through the real file source, then drives the application with
//! key events exactly as the event loop would.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use roster::config::KeyBindings;
use roster::source::{load_records, FileSource, LoadOutcome, RecordSource};
use roster::state::{handle_key, AppState, Effect, FocusPane, KeyOutcome, TableState};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/members.json");

struct Session {
    state: AppState,
    bindings: KeyBindings,
    source: RecordSource,
}

impl Session {
    fn start(refetch_on_page_change: bool) -> Self {
        let source = RecordSource::File(FileSource::new(FIXTURE).expect("fixture exists"));
        let mut session = Self {
            state: AppState::new(TableState::new(refetch_on_page_change)),
            bindings: KeyBindings::default(),
            source,
        };
        let effect = session.state.dispatch(roster::state::Action::Reload);
        session.run(effect);
        session
    }

    /// Run a fetch effect to completion, like the loader thread would.
    fn run(&mut self, effect: Option<Effect>) {
        if let Some(Effect::Fetch(request)) = effect {
            let outcome = LoadOutcome {
                request,
                result: load_records(&self.source),
            };
            let next = self.state.apply_load_outcome(outcome);
            self.run(next);
        }
    }

    fn press(&mut self, code: KeyCode) -> KeyOutcome {
        self.press_with(code, KeyModifiers::NONE)
    }

    fn press_with(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyOutcome {
        let outcome = handle_key(
            &mut self.state,
            &self.bindings,
            KeyEvent::new(code, modifiers),
        );
        if let KeyOutcome::Continue(effect) = outcome {
            self.run(effect);
        }
        outcome
    }

    fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.press(KeyCode::Char(ch));
        }
    }

    fn page_names(&self) -> Vec<String> {
        self.state
            .table
            .page_rows()
            .iter()
            .map(|row| row.record.get("name").unwrap_or_default().to_string())
            .collect()
    }
}

#[test]
fn first_load_shows_page_one_of_five() {
    // GIVEN: the fixture is loaded
    let session = Session::start(true);

    // THEN: ten rows on page 1, five pages total
    assert_eq!(session.state.table.rows().len(), 46);
    assert_eq!(session.state.table.page(), 1);
    assert_eq!(session.state.table.total_pages(), 5);
    assert_eq!(session.page_names().len(), 10);
    assert_eq!(session.page_names()[0], "Aaron Miles");
    assert_eq!(session.state.status.as_deref(), Some("Loaded 46 records"));
    assert_eq!(
        session.state.table.headers(),
        vec!["id", "name", "email", "role"]
    );
}

#[test]
fn last_page_holds_the_remainder() {
    let mut session = Session::start(true);

    // WHEN: jumping to the last page
    session.press_with(KeyCode::Char('G'), KeyModifiers::SHIFT);

    // THEN: six rows remain and forward navigation is disabled
    assert_eq!(session.state.table.page(), 5);
    assert_eq!(session.page_names().len(), 6);
    assert!(!session.state.table.can_go_forward());

    // WHEN: pressing next anyway
    session.press(KeyCode::Char('l'));
    assert_eq!(session.state.table.page(), 5);

    // WHEN: going back to the first page
    session.press(KeyCode::Char('g'));
    assert_eq!(session.state.table.page(), 1);
    assert!(!session.state.table.can_go_back());
}

#[test]
fn search_filters_and_returns_to_page_one() {
    let mut session = Session::start(true);
    session.press(KeyCode::Char('l'));
    session.press(KeyCode::Char('l'));
    assert_eq!(session.state.table.page(), 3);

    // WHEN: searching for admins
    session.press(KeyCode::Char('/'));
    assert_eq!(session.state.focus, FocusPane::Search);
    session.type_text("ADMIN");

    // THEN: typing alone does not filter
    assert!(session.state.table.filter().is_none());
    assert_eq!(session.state.table.visible_len(), 46);

    session.press(KeyCode::Enter);

    // THEN: only admins, on page 1
    assert_eq!(session.state.focus, FocusPane::Table);
    assert_eq!(session.state.table.page(), 1);
    assert_eq!(session.state.table.total_pages(), 1);
    assert_eq!(
        session.page_names(),
        vec!["Aaron Miles", "Eamon Byrne", "Quentin Blanc", "Elena Petrova"]
    );
}

#[test]
fn clearing_search_restores_every_member() {
    let mut session = Session::start(true);
    session.press(KeyCode::Char('/'));
    session.type_text("admin");
    session.press(KeyCode::Enter);
    assert_eq!(session.state.table.visible_len(), 4);

    session.press(KeyCode::Char('c'));

    assert!(session.state.table.filter().is_none());
    assert!(session.state.search_input.is_empty());
    assert_eq!(session.state.table.visible_len(), 46);
    assert_eq!(session.state.table.total_pages(), 5);
}

#[test]
fn bulk_delete_removes_selected_rows() {
    let mut session = Session::start(false);

    // GIVEN: rows 1 and 3 of the first page selected
    session.press(KeyCode::Char(' '));
    session.press(KeyCode::Char('j'));
    session.press(KeyCode::Char('j'));
    session.press(KeyCode::Char(' '));
    assert_eq!(session.state.table.selection().len(), 2);
    assert!(session.state.table.can_delete_selected());

    // WHEN: deleting the selection
    session.press_with(KeyCode::Char('D'), KeyModifiers::SHIFT);

    // THEN: both rows are gone and the selection is empty
    assert_eq!(session.state.table.rows().len(), 44);
    assert!(session.state.table.selection().is_empty());
    assert!(!session.state.table.can_delete_selected());
    assert_eq!(&session.page_names()[..2], ["Aishwarya Naik", "Bianca Rossi"]);
    assert_eq!(
        session.state.status.as_deref(),
        Some("Deleted 2 selected rows")
    );
}

#[test]
fn delete_selected_does_nothing_without_selection() {
    let mut session = Session::start(false);
    session.press_with(KeyCode::Char('D'), KeyModifiers::SHIFT);
    assert_eq!(session.state.table.rows().len(), 46);
}

#[test]
fn edit_then_save_updates_the_row() {
    let mut session = Session::start(false);

    // WHEN: editing the first row's name
    session.press(KeyCode::Char('e'));
    assert_eq!(session.state.focus, FocusPane::Editor);
    session.press(KeyCode::Tab);
    assert_eq!(session.state.edit_field_name(), Some("name"));
    session.press(KeyCode::End);
    session.type_text(" Jr");
    session.press(KeyCode::Enter);

    // THEN: the change is committed and the editor is closed
    assert_eq!(session.state.focus, FocusPane::Table);
    assert_eq!(session.page_names()[0], "Aaron Miles Jr");
    assert!(session.state.table.editor().editing_row().is_none());
}

#[test]
fn edit_then_cancel_keeps_the_row() {
    let mut session = Session::start(false);

    session.press(KeyCode::Char('e'));
    session.press(KeyCode::Tab);
    session.type_text("zzz");
    session.press(KeyCode::Esc);

    assert_eq!(session.state.focus, FocusPane::Table);
    assert_eq!(session.page_names()[0], "Aaron Miles");
}

#[test]
fn page_change_refetches_and_discards_local_changes() {
    let mut session = Session::start(true);
    session.press(KeyCode::Char('x'));
    assert_eq!(session.state.table.rows().len(), 45);

    session.press(KeyCode::Char('l'));

    assert_eq!(session.state.table.rows().len(), 46);
    assert_eq!(session.state.table.page(), 2);
    assert_eq!(session.page_names()[0], "Ilse Berg");
}

#[test]
fn page_change_without_refetch_keeps_local_changes() {
    let mut session = Session::start(false);
    session.press(KeyCode::Char('x'));

    session.press(KeyCode::Char('l'));

    assert_eq!(session.state.table.rows().len(), 45);
    assert_eq!(session.state.table.page(), 2);
    assert_eq!(session.page_names()[0], "Jonas Weber");
}

#[test]
fn reload_replaces_the_dataset() {
    let mut session = Session::start(false);
    session.press(KeyCode::Char(' '));
    session.press(KeyCode::Char('j'));
    session.press(KeyCode::Char('x'));
    assert_eq!(session.state.table.rows().len(), 45);
    assert_eq!(session.state.table.selection().len(), 1);

    session.press(KeyCode::Char('r'));

    assert_eq!(session.state.table.rows().len(), 46);
    assert!(session.state.table.selection().is_empty());
    assert!(!session.state.table.is_loading());
}

#[test]
fn quit_and_help_keys() {
    let mut session = Session::start(false);

    session.press(KeyCode::Char('?'));
    assert!(session.state.help_visible);
    session.press(KeyCode::Char('j'));
    assert!(!session.state.help_visible);

    assert_eq!(session.press(KeyCode::Char('q')), KeyOutcome::Quit);
    assert_eq!(
        session.press_with(KeyCode::Char('c'), KeyModifiers::CONTROL),
        KeyOutcome::Quit
    );
}
