//! Search input widget for rendering the search bar.

use crate::state::InputLine;
use crate::view::TableStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const PLACEHOLDER: &str = "Search by name, email or role (press /)";

/// Search box. Shows a cursor while focused and names the applied filter in
/// its title.
pub struct SearchInput<'a> {
    input: &'a InputLine,
    focused: bool,
    applied: Option<&'a str>,
    styles: &'a TableStyles,
}

impl<'a> SearchInput<'a> {
    /// Unfocused search box showing `input`.
    pub fn new(input: &'a InputLine, styles: &'a TableStyles) -> Self {
        Self {
            input,
            focused: false,
            applied: None,
            styles,
        }
    }

    /// Draw the cursor and focus border.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Query of the active filter, if any.
    pub fn applied(mut self, applied: Option<&'a str>) -> Self {
        self.applied = applied;
        self
    }

    fn title(&self) -> String {
        match self.applied {
            Some(query) if query.is_empty() => " Search (all rows) ".to_string(),
            Some(query) => format!(" Search (filter: \"{query}\") "),
            None => " Search ".to_string(),
        }
    }

    fn input_line(&self) -> Line<'static> {
        let text = self.input.as_str();
        if !self.focused {
            if text.is_empty() {
                return Line::from(Span::styled(PLACEHOLDER, self.styles.muted));
            }
            return Line::from(text.to_string());
        }

        let cursor = self.input.cursor();
        let before: String = text.chars().take(cursor).collect();
        let mut rest = text.chars().skip(cursor);
        let under = rest.next().map_or_else(|| " ".to_string(), String::from);
        let after: String = rest.collect();

        Line::from(vec![
            Span::raw(before),
            Span::styled(under, self.styles.cursor_row.add_modifier(Modifier::BOLD)),
            Span::raw(after),
        ])
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default().borders(Borders::ALL).title(self.title());
        if self.focused {
            block = block.border_style(self.styles.focus_border);
        }
        Paragraph::new(self.input_line())
            .block(block)
            .render(area, buf);
    }
}
