//! Tests for screen layout.

use super::*;
use crate::model::Record;
use crate::state::{Action, TableState};
use crate::view::buffer_to_string;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn app(n: usize) -> AppState {
    let records = (0..n)
        .map(|i| {
            Record::from_pairs([
                ("id", i.to_string()),
                ("name", format!("Member {i}")),
                ("role", "member".to_string()),
            ])
        })
        .collect();
    AppState::new(TableState::with_records(false, records))
}

fn render(state: &AppState) -> String {
    let styles = TableStyles::default();
    let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
    terminal
        .draw(|frame| render_layout(frame, state, &styles, "members.json"))
        .unwrap();
    buffer_to_string(terminal.backend().buffer())
}

#[test]
fn areas_stack_vertically() {
    let areas = calculate_areas(Rect::new(0, 0, 80, 24));
    assert_eq!(areas.header.height, HEADER_HEIGHT);
    assert_eq!(areas.search.y, 1);
    assert_eq!(areas.search.height, SEARCH_BAR_HEIGHT);
    assert_eq!(areas.delete_selected.width, DELETE_SELECTED_WIDTH);
    assert_eq!(areas.table.y, 4);
    assert_eq!(areas.table.height, 24 - 1 - 3 - 1 - 1);
    assert_eq!(areas.status.y, 23);
}

#[test]
fn screen_shows_every_region() {
    let output = render(&app(25));
    assert!(output.contains("roster"));
    assert!(output.contains("members.json"));
    assert!(output.contains("Search"));
    assert!(output.contains("Delete Selected"));
    assert!(output.contains("Page 1 of 3"));
    assert!(output.contains("? help"));
}

#[test]
fn delete_selected_shows_count_when_enabled() {
    let mut state = app(3);
    let id = state.table.rows()[0].id;
    state.dispatch(Action::ToggleSelect(id));
    let output = render(&state);
    assert!(output.contains("Delete Selected (1)"));
}

#[test]
fn empty_table_reads_page_one_of_one() {
    let output = render(&app(0));
    assert!(output.contains("Page 1 of 1"));
    assert!(output.contains("No members"));
}

#[test]
fn status_bar_shows_status_message() {
    let mut state = app(2);
    state.set_status("Loaded 2 records");
    assert!(render(&state).contains("Loaded 2 records"));
}

#[test]
fn status_bar_names_field_while_editing() {
    let mut state = app(2);
    state.begin_edit_at_cursor();
    state.cycle_edit_field(true);
    let output = render(&state);
    assert!(output.contains("Editing name"));
    assert!(output.contains("Enter save"));
}

#[test]
fn help_overlay_drawn_on_top() {
    let mut state = app(2);
    state.help_visible = true;
    assert!(render(&state).contains("Keyboard Shortcuts"));
}
