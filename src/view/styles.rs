//! Table styling configuration.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors on.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Colors off.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::enabled()
    }
}

// ===== TableStyles =====

/// Styles for every part of the screen.
///
/// With colors disabled only modifiers (bold, reversed, dim) remain, so the
/// selection, cursor and disabled controls stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableStyles {
    /// Titles and the page label.
    pub title: Style,
    /// Table header row.
    pub column_header: Style,
    /// Row in the selection.
    pub selected_row: Style,
    /// Row under the cursor.
    pub cursor_row: Style,
    /// Row being edited.
    pub editing_row: Style,
    /// Field under the editor cursor.
    pub editing_field: Style,
    /// Enabled button-like control.
    pub control: Style,
    /// Disabled control.
    pub disabled: Style,
    /// Secondary text.
    pub muted: Style,
    /// Failures and destructive controls.
    pub error: Style,
    /// Border of the focused widget.
    pub focus_border: Style,
    /// Key hints in the status bar.
    pub key_hint: Style,
}

impl TableStyles {
    /// Styles for `config`; plain styles when colors are off.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let plain = Style::default();
        let disabled = plain.add_modifier(Modifier::DIM);
        if config.colors_enabled() {
            Self {
                title: plain.fg(Color::Cyan).add_modifier(Modifier::BOLD),
                column_header: plain.fg(Color::Yellow).add_modifier(Modifier::BOLD),
                selected_row: plain.bg(Color::DarkGray).fg(Color::White),
                cursor_row: plain.add_modifier(Modifier::REVERSED),
                editing_row: plain.fg(Color::Green),
                editing_field: plain
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                control: plain.fg(Color::Cyan),
                disabled: disabled.fg(Color::DarkGray),
                muted: plain.fg(Color::Gray),
                error: plain.fg(Color::Red).add_modifier(Modifier::BOLD),
                focus_border: plain.fg(Color::Cyan),
                key_hint: plain.fg(Color::Yellow).add_modifier(Modifier::BOLD),
            }
        } else {
            Self {
                title: plain.add_modifier(Modifier::BOLD),
                column_header: plain.add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                selected_row: plain.add_modifier(Modifier::BOLD),
                cursor_row: plain.add_modifier(Modifier::REVERSED),
                editing_row: plain.add_modifier(Modifier::ITALIC),
                editing_field: plain.add_modifier(Modifier::UNDERLINED | Modifier::BOLD),
                control: plain,
                disabled,
                muted: plain,
                error: plain.add_modifier(Modifier::BOLD),
                focus_border: plain.add_modifier(Modifier::BOLD),
                key_hint: plain.add_modifier(Modifier::BOLD),
            }
        }
    }
}

impl Default for TableStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::default())
    }
}

// ===== Tests =====
