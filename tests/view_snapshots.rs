//! Rendering tests against a `TestBackend`.
//!
//! Fixed single-line output is pinned with inline snapshots; whole screens
//! are checked for the pieces a user relies on.

use roster::model::Record;
use roster::state::{Action, AppState, FocusPane, PageNav, TableState};
use roster::view::{column_widths, page_label, render_layout, PaginationBar, TableStyles};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
    lines.join("\n")
}

fn members(n: usize) -> Vec<Record> {
    (1..=n)
        .map(|i| {
            Record::from_pairs([
                ("id", i.to_string()),
                ("name", format!("Member {i}")),
                ("email", format!("member{i}@mailinator.com")),
                ("role", if i == 1 { "admin" } else { "member" }.to_string()),
            ])
        })
        .collect()
}

fn render_screen(state: &AppState, width: u16, height: u16) -> String {
    let styles = TableStyles::default();
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| render_layout(frame, state, &styles, "members.json"))
        .unwrap();
    buffer_to_string(terminal.backend().buffer())
}

#[test]
fn page_labels() {
    insta::assert_snapshot!(page_label(1, 5), @"Page 1 of 5");
    insta::assert_snapshot!(page_label(1, 0), @"Page 1 of 1");
}

#[test]
fn pagination_bar_line() {
    let mut table = TableState::with_records(false, members(25));
    table.dispatch(Action::SetPage(PageNav::Next));
    let styles = TableStyles::default();

    let mut terminal = Terminal::new(TestBackend::new(48, 1)).unwrap();
    terminal
        .draw(|frame| frame.render_widget(PaginationBar::new(&table, &styles), frame.area()))
        .unwrap();

    insta::assert_snapshot!(
        buffer_to_string(terminal.backend().buffer()),
        @"« First  ‹ Previous  Page 2 of 3  Next ›  Last »"
    );
}

#[test]
fn column_widths_fit_longest_value() {
    let headers = vec!["id".to_string(), "name".to_string()];
    let rows = vec![vec!["1", "Aaron Miles"], vec!["10", "Ana"]];
    insta::assert_debug_snapshot!(column_widths(&headers, rows), @r###"
    [
        2,
        11,
    ]
    "###);
}

#[test]
fn full_screen_first_page() {
    let state = AppState::new(TableState::with_records(true, members(25)));
    let output = render_screen(&state, 100, 20);

    assert!(output.contains("roster"));
    assert!(output.contains("Members (25)"));
    assert!(output.contains("Member 1"));
    assert!(output.contains("member10@mailinator.com"));
    assert!(!output.contains("Member 11 "));
    assert!(output.contains("Page 1 of 3"));
    assert!(output.contains("Edit Delete"));
}

#[test]
fn full_screen_with_filter_and_selection() {
    let mut state = AppState::new(TableState::with_records(false, members(25)));
    let first = state.table.rows()[0].id;
    state.dispatch(Action::ToggleSelect(first));
    state.dispatch(Action::SetSearchQuery("admin".to_string()));
    state.dispatch(Action::ApplySearch);

    let output = render_screen(&state, 100, 20);

    assert!(output.contains("filter: \"admin\""));
    assert!(output.contains("Members (1 of 25)"));
    assert!(output.contains("[1 selected]"));
    assert!(output.contains("Delete Selected (1)"));
    assert!(output.contains("[x]"));
    assert!(output.contains("Page 1 of 1"));
}

#[test]
fn full_screen_no_matches() {
    let mut state = AppState::new(TableState::with_records(false, members(3)));
    state.dispatch(Action::SetSearchQuery("nobody".to_string()));
    state.dispatch(Action::ApplySearch);

    let output = render_screen(&state, 100, 20);

    assert!(output.contains("No members match \"nobody\""));
    assert!(output.contains("Page 1 of 1"));
}

#[test]
fn full_screen_while_editing() {
    let mut state = AppState::new(TableState::with_records(false, members(3)));
    state.begin_edit_at_cursor();
    assert_eq!(state.focus, FocusPane::Editor);

    let output = render_screen(&state, 100, 20);

    assert!(output.contains("Save Cancel"));
    assert!(output.contains("Editing id"));
    assert!(output.contains("Esc cancel"));
}
