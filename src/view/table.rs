//! Member table widget.
//!
//! Columns: Select, one per field of the first record on the page, Actions.
//! The row being edited shows its draft values; the focused field shows the
//! editor text and cursor.

use crate::state::{AppState, FocusPane, InputLine, VisibleRow};
use crate::view::constants::{
    ACTIONS_COLUMN_WIDTH, MAX_FIELD_COLUMN_WIDTH, SELECT_COLUMN_WIDTH,
};
use crate::view::TableStyles;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};
use unicode_width::UnicodeWidthStr;

/// The member table with select and action columns.
pub struct MemberTable<'a> {
    state: &'a AppState,
    styles: &'a TableStyles,
}

impl<'a> MemberTable<'a> {
    /// Table for the current page of `state`.
    pub fn new(state: &'a AppState, styles: &'a TableStyles) -> Self {
        Self { state, styles }
    }

    fn title(&self) -> String {
        let table = &self.state.table;
        let shown = table.visible_len();
        let total = table.rows().len();
        let selected = table.selection().len();
        let mut title = if shown == total {
            format!(" Members ({total}) ")
        } else {
            format!(" Members ({shown} of {total}) ")
        };
        if selected > 0 {
            title.push_str(&format!("[{selected} selected] "));
        }
        title
    }

    fn empty_message(&self) -> String {
        let table = &self.state.table;
        match table.filter() {
            _ if table.rows().is_empty() && table.is_loading() => "Loading members...".to_string(),
            Some(filter) if !table.rows().is_empty() => {
                format!("No members match \"{}\"", filter.query())
            }
            _ => "No members".to_string(),
        }
    }

    /// Value shown in a field cell, taking the edit buffer into account.
    fn field_text(&self, row: &VisibleRow<'_>, field: &str) -> String {
        if row.editing {
            if let Some(buffer) = self.state.table.editor().buffer() {
                return buffer.draft().get(field).unwrap_or_default().to_string();
            }
        }
        row.record.get(field).unwrap_or_default().to_string()
    }

    fn row_style(&self, row: &VisibleRow<'_>, position: usize) -> Style {
        let mut style = Style::default();
        if row.selected {
            style = style.patch(self.styles.selected_row);
        }
        if row.editing {
            style = style.patch(self.styles.editing_row);
        }
        if position == self.state.cursor && self.state.focus == FocusPane::Table {
            style = style.patch(self.styles.cursor_row);
        }
        style
    }

    fn build_row(&self, row: &VisibleRow<'_>, position: usize, headers: &[String]) -> Row<'a> {
        let mut cells = Vec::with_capacity(headers.len() + 2);
        cells.push(Cell::from(if row.selected { "[x]" } else { "[ ]" }));

        let edit_field = row
            .editing
            .then(|| self.state.edit_field_name())
            .flatten();
        for header in headers {
            if edit_field == Some(header.as_str()) && self.state.focus == FocusPane::Editor {
                cells.push(Cell::from(editor_line(&self.state.edit_input, self.styles)));
            } else {
                cells.push(Cell::from(self.field_text(row, header)));
            }
        }

        let actions = if row.editing {
            "Save Cancel"
        } else {
            "Edit Delete"
        };
        cells.push(Cell::from(Span::styled(actions, self.styles.control)));

        Row::new(cells).style(self.row_style(row, position))
    }
}

/// Editor text with the cursor cell highlighted.
fn editor_line(input: &InputLine, styles: &TableStyles) -> Line<'static> {
    let text = input.as_str();
    let before: String = text.chars().take(input.cursor()).collect();
    let mut rest = text.chars().skip(input.cursor());
    let under = rest.next().map_or_else(|| " ".to_string(), String::from);
    let after: String = rest.collect();
    Line::from(vec![
        Span::styled(before, styles.editing_field),
        Span::styled(under, styles.cursor_row),
        Span::styled(after, styles.editing_field),
    ])
}

/// Column widths: the widest of header and values, capped.
pub fn column_widths<'r>(
    headers: &[String],
    rows: impl IntoIterator<Item = Vec<&'r str>>,
) -> Vec<u16> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for values in rows {
        for (width, value) in widths.iter_mut().zip(values) {
            *width = (*width).max(value.width());
        }
    }
    widths
        .into_iter()
        .map(|w| u16::try_from(w).unwrap_or(u16::MAX).clamp(1, MAX_FIELD_COLUMN_WIDTH))
        .collect()
}

impl Widget for MemberTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(self.title());
        let page_rows = self.state.table.page_rows();

        if page_rows.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                self.empty_message(),
                self.styles.muted,
            )))
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
            return;
        }

        let headers = self.state.table.headers();
        let texts: Vec<Vec<String>> = page_rows
            .iter()
            .map(|row| headers.iter().map(|h| self.field_text(row, h)).collect())
            .collect();
        let field_widths = column_widths(
            &headers,
            texts.iter().map(|values| values.iter().map(String::as_str).collect()),
        );

        let mut widths = Vec::with_capacity(headers.len() + 2);
        widths.push(Constraint::Length(SELECT_COLUMN_WIDTH));
        widths.extend(field_widths.into_iter().map(Constraint::Length));
        widths.push(Constraint::Length(ACTIONS_COLUMN_WIDTH));

        let mut header_cells = vec![Cell::from("Select")];
        header_cells.extend(headers.iter().map(|h| Cell::from(h.clone())));
        header_cells.push(Cell::from("Actions"));
        let header = Row::new(header_cells).style(self.styles.column_header);

        let rows: Vec<Row> = page_rows
            .iter()
            .enumerate()
            .map(|(position, row)| self.build_row(row, position, &headers))
            .collect();

        Table::new(rows, widths)
            .header(header)
            .block(block)
            .column_spacing(1)
            .render(area, buf);
    }
}
