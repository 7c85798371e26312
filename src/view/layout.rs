//! Screen layout rendering.
//!
//! Top to bottom: header, search bar with the "Delete Selected" control,
//! member table, pagination bar, status bar. The help overlay is drawn last.

use crate::state::{AppState, FocusPane};
use crate::view::constants::{
    DELETE_SELECTED_WIDTH, HEADER_HEIGHT, PAGINATION_BAR_HEIGHT, SEARCH_BAR_HEIGHT,
    STATUS_BAR_HEIGHT,
};
use crate::view::{
    help, pagination::PaginationBar, search_input::SearchInput, table::MemberTable, TableStyles,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Title line.
    pub header: Rect,
    /// Search box.
    pub search: Rect,
    /// "Delete Selected" control, right of the search box.
    pub delete_selected: Rect,
    /// Member table.
    pub table: Rect,
    /// Page controls.
    pub pagination: Rect,
    /// Status message and key hints.
    pub status: Rect,
}

/// Split the frame into its fixed regions.
pub fn calculate_areas(area: Rect) -> ScreenAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(SEARCH_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(PAGINATION_BAR_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    let search_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(DELETE_SELECTED_WIDTH)])
        .split(rows[1]);

    ScreenAreas {
        header: rows[0],
        search: search_row[0],
        delete_selected: search_row[1],
        table: rows[2],
        pagination: rows[3],
        status: rows[4],
    }
}

/// Render the whole screen.
///
/// `source` names where records come from and is shown in the header.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &TableStyles, source: &str) {
    let areas = calculate_areas(frame.area());

    render_header(frame, areas.header, state, styles, source);

    let search = SearchInput::new(&state.search_input, styles)
        .focused(state.focus == FocusPane::Search)
        .applied(state.table.filter().map(|f| f.query()));
    frame.render_widget(search, areas.search);

    render_delete_selected(frame, areas.delete_selected, state, styles);

    frame.render_widget(MemberTable::new(state, styles), areas.table);
    frame.render_widget(PaginationBar::new(&state.table, styles), areas.pagination);
    render_status_bar(frame, areas.status, state, styles);

    if state.help_visible {
        help::render_help_overlay(frame, styles);
    }
}

fn render_header(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    styles: &TableStyles,
    source: &str,
) {
    let mut spans = vec![
        Span::styled(" roster ", styles.title),
        Span::styled(source.to_string(), styles.muted),
    ];
    if state.table.is_loading() {
        spans.push(Span::styled("  [loading]", styles.key_hint));
    } else if state.table.last_error().is_some() {
        spans.push(Span::styled("  [last load failed]", styles.error));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_delete_selected(frame: &mut Frame, area: Rect, state: &AppState, styles: &TableStyles) {
    let count = state.table.selection().len();
    let (label, style) = if state.table.can_delete_selected() {
        (format!("Delete Selected ({count})"), styles.error)
    } else {
        ("Delete Selected".to_string(), styles.disabled)
    };
    let control = Paragraph::new(Line::from(Span::styled(label, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(control, area);
}

/// Key hints for the widget with focus.
fn key_hints(focus: FocusPane) -> &'static str {
    match focus {
        FocusPane::Table => "? help  / search  Space select  e edit  q quit ",
        FocusPane::Search => "Enter apply  Esc back ",
        FocusPane::Editor => "Tab next field  Enter save  Esc cancel ",
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &TableStyles) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(48)])
        .split(area);

    let message = match (&state.status, state.focus) {
        (_, FocusPane::Editor) => state
            .edit_field_name()
            .map(|field| format!(" Editing {field}"))
            .unwrap_or_default(),
        (Some(status), _) => format!(" {status}"),
        (None, _) => String::new(),
    };
    let message_style = match state.table.last_error() {
        Some(_) if message.contains("Load failed") => styles.error,
        _ => styles.muted,
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(message, message_style))),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(key_hints(state.focus), styles.key_hint)))
            .alignment(Alignment::Right),
        chunks[1],
    );
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
