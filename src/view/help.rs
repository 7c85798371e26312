//! Help overlay widget displaying keyboard shortcuts.
//!
//! Centered modal listing every shortcut by category. Opened with `?`,
//! closed by any key.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use crate::view::TableStyles;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Rows",
        &[
            ("j/↓", "Next row"),
            ("k/↑", "Previous row"),
            ("Space", "Select / unselect row"),
            ("D", "Delete selected rows"),
            ("e/Enter", "Edit row"),
            ("x/Delete", "Delete row"),
        ],
    ),
    (
        "Pages",
        &[
            ("g/Home", "First page"),
            ("h/←/PgUp", "Previous page"),
            ("l/→/PgDn", "Next page"),
            ("G/End", "Last page"),
        ],
    ),
    (
        "Search",
        &[
            ("/", "Focus search box"),
            ("Enter", "Apply search"),
            ("Esc", "Leave search box"),
            ("c", "Clear search"),
        ],
    ),
    (
        "Editing",
        &[
            ("Tab/Shift+Tab", "Next / previous field"),
            ("Enter", "Save"),
            ("Esc", "Cancel"),
        ],
    ),
    (
        "Application",
        &[
            ("r", "Reload members"),
            ("?", "Toggle this help"),
            ("q/Ctrl+C", "Quit"),
        ],
    ),
];

const KEY_COLUMN_WIDTH: usize = 16;

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, styles: &TableStyles) {
    let popup_area = centered_rect(
        HELP_POPUP_WIDTH_PERCENT,
        HELP_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(styles))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(styles.focus_border),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);
    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1.min(popup_area.height),
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        " Press any key to close ",
        styles.disabled,
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}

/// Centered rect taking the given percentages of `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn build_help_content(styles: &TableStyles) -> Vec<Line<'static>> {
    let desc_style = Style::default();
    let mut lines = Vec::new();
    for (index, (category, keys)) in SHORTCUTS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(*category, styles.title)));
        for (key, description) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<KEY_COLUMN_WIDTH$}"), styles.key_hint),
                Span::styled(*description, desc_style),
            ]));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::buffer_to_string;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn centered_rect_is_centered() {
        let rect = centered_rect(50, 50, Rect::new(0, 0, 100, 40));
        assert_eq!(rect, Rect::new(25, 10, 50, 20));
    }

    #[test]
    fn help_lists_every_category() {
        let lines = build_help_content(&TableStyles::default());
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        for (category, _) in SHORTCUTS {
            assert!(text.iter().any(|l| l.as_str() == *category), "missing {category}");
        }
    }

    #[test]
    fn overlay_renders_title_and_hint() {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal
            .draw(|frame| render_help_overlay(frame, &TableStyles::default()))
            .unwrap();
        let output = buffer_to_string(terminal.backend().buffer());
        assert!(output.contains("Keyboard Shortcuts"));
        assert!(output.contains("Delete selected rows"));
        assert!(output.contains("Press any key to close"));
    }
}
