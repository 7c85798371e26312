//! Pagination bar.
//!
//! `First  Previous  Page X of Y  Next  Last`, with the controls that would do
//! nothing rendered dimmed.

use crate::state::TableState;
use crate::view::TableStyles;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Page indicator text. An empty table still reads "Page 1 of 1".
pub fn page_label(page: usize, total: usize) -> String {
    format!("Page {} of {}", page, total.max(1))
}

/// First / Previous / page label / Next / Last controls.
pub struct PaginationBar<'a> {
    table: &'a TableState,
    styles: &'a TableStyles,
}

impl<'a> PaginationBar<'a> {
    /// Bar for the current page of `table`.
    pub fn new(table: &'a TableState, styles: &'a TableStyles) -> Self {
        Self { table, styles }
    }

    fn control(&self, label: &'static str, enabled: bool) -> Span<'static> {
        let style = if enabled {
            self.styles.control
        } else {
            self.styles.disabled
        };
        Span::styled(label, style)
    }

    fn line(&self) -> Line<'static> {
        let back = self.table.can_go_back();
        let forward = self.table.can_go_forward();
        Line::from(vec![
            self.control("« First", back),
            Span::raw("  "),
            self.control("‹ Previous", back),
            Span::raw("  "),
            Span::styled(
                page_label(self.table.page(), self.table.total_pages()),
                self.styles.title,
            ),
            Span::raw("  "),
            self.control("Next ›", forward),
            Span::raw("  "),
            self.control("Last »", forward),
        ])
    }
}

impl Widget for PaginationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line())
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use crate::state::{Action, PageNav};

    fn table(n: usize) -> TableState {
        let records = (0..n)
            .map(|i| Record::from_pairs([("id", i.to_string())]))
            .collect();
        TableState::with_records(false, records)
    }

    fn span_style(line: &Line<'_>, text: &str) -> ratatui::style::Style {
        line.spans
            .iter()
            .find(|span| span.content.contains(text))
            .map(|span| span.style)
            .unwrap()
    }

    #[test]
    fn page_label_formats_position() {
        insta::assert_snapshot!(page_label(2, 3), @"Page 2 of 3");
    }

    #[test]
    fn page_label_never_shows_zero_pages() {
        insta::assert_snapshot!(page_label(1, 0), @"Page 1 of 1");
    }

    #[test]
    fn back_controls_dimmed_on_first_page() {
        let styles = TableStyles::default();
        let table = table(25);
        let line = PaginationBar::new(&table, &styles).line();
        assert_eq!(span_style(&line, "First"), styles.disabled);
        assert_eq!(span_style(&line, "Previous"), styles.disabled);
        assert_eq!(span_style(&line, "Next"), styles.control);
        assert_eq!(span_style(&line, "Last"), styles.control);
    }

    #[test]
    fn forward_controls_dimmed_on_last_page() {
        let styles = TableStyles::default();
        let mut table = table(25);
        table.dispatch(Action::SetPage(PageNav::Last));
        let line = PaginationBar::new(&table, &styles).line();
        assert_eq!(span_style(&line, "First"), styles.control);
        assert_eq!(span_style(&line, "Next"), styles.disabled);
        assert_eq!(span_style(&line, "Last"), styles.disabled);
        assert!(line.spans.iter().any(|s| s.content == "Page 3 of 3"));
    }
}
