//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod help;
mod layout;
mod pagination;
mod search_input;
mod styles;
mod table;

pub use help::render_help_overlay;
pub use layout::{calculate_areas, render_layout, ScreenAreas};
pub use pagination::{page_label, PaginationBar};
pub use search_input::SearchInput;
pub use styles::{ColorConfig, TableStyles};
pub use table::{column_widths, MemberTable};

use crate::config::KeyBindings;
use crate::model::AppError;
use crate::source::{Loader, RecordSource};
use crate::state::{handle_key, Action, AppState, Effect, KeyOutcome, TableState};
use crossterm::{
    event::{self, Event, KeyEvent},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Interval at which finished loads are picked up.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Input source error
    #[error("Input error: {0}")]
    Input(#[from] crate::model::InputError),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Settings the TUI starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Page changes trigger a fetch.
    pub refetch_on_page_change: bool,
    /// Filter to apply once the first load lands (`--search`).
    pub initial_search: Option<String>,
    /// Whether to style output with colors.
    pub color: ColorConfig,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            refetch_on_page_change: true,
            initial_search: None,
            color: ColorConfig::default(),
        }
    }
}

impl RunOptions {
    fn initial_state(&self) -> AppState {
        let state = AppState::new(TableState::new(self.refetch_on_page_change));
        match &self.initial_search {
            Some(query) => state.with_initial_search(query.clone()),
            None => state,
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    loader: Loader,
    key_bindings: KeyBindings,
    styles: TableStyles,
    source_label: String,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(source: RecordSource, options: &RunOptions) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(
            terminal,
            options.initial_state(),
            Loader::new(source),
            KeyBindings::default(),
            TableStyles::with_color_config(options.color),
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (q or Ctrl+C).
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.start();
        self.draw()?;

        loop {
            let event = if event::poll(TICK_INTERVAL)? {
                Some(event::read()?)
            } else {
                None
            };
            if self.step(event) {
                return Ok(());
            }
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn with_terminal(
        terminal: Terminal<B>,
        app_state: AppState,
        loader: Loader,
        key_bindings: KeyBindings,
        styles: TableStyles,
    ) -> Self {
        let source_label = loader.source().describe();
        Self {
            terminal,
            app_state,
            loader,
            key_bindings,
            styles,
            source_label,
        }
    }

    /// Issue the initial load.
    fn start(&mut self) {
        info!(source = %self.source_label, "Loading members");
        let effect = self.app_state.dispatch(Action::Reload);
        self.app_state.set_status("Loading...");
        self.run_effect(effect);
    }

    fn run_effect(&self, effect: Option<Effect>) {
        if let Some(Effect::Fetch(request)) = effect {
            self.loader.spawn(request);
        }
    }

    /// Handle one event (or a timeout), then apply every finished load.
    ///
    /// Returns true if app should quit
    fn step(&mut self, event: Option<Event>) -> bool {
        match event {
            Some(Event::Key(key)) => {
                if self.handle_key(key) {
                    return true;
                }
            }
            Some(Event::Resize(width, height)) => {
                debug!(width, height, "Terminal resized");
            }
            _ => {}
        }
        self.tick();
        false
    }

    /// Apply every finished load.
    fn tick(&mut self) {
        for outcome in self.loader.poll() {
            let effect = self.app_state.apply_load_outcome(outcome);
            self.run_effect(effect);
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match handle_key(&mut self.app_state, &self.key_bindings, key) {
            KeyOutcome::Quit => true,
            KeyOutcome::Continue(effect) => {
                self.run_effect(effect);
                false
            }
        }
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let styles = &self.styles;
        let source = self.source_label.as_str();
        self.terminal
            .draw(|frame| render_layout(frame, state, styles, source))?;
        Ok(())
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// even when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_source(source: RecordSource, options: RunOptions) -> Result<(), TuiError> {
    let mut app = TuiApp::new(source, &options)?;
    let result = app.run();
    restore_terminal()?;
    result
}

/// Restore terminal to normal state
pub fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Render a buffer as trimmed text lines, skipping blank lines.
#[cfg(test)]
pub(crate) fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
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
