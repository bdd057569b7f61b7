//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod layout;
mod styles;
mod table;

pub use layout::{render_layout, split_frame, status_text, table_area};
pub use styles::{border_type, ColorConfig, TableTheme};
pub use table::render_table;

use crate::config::{ConfigError, KeyBindings};
use crate::logging::LoggingError;
use crate::model::{KeyAction, TableError};
use crate::state::{handle_key_action, handle_mouse_event, AppState};
use crate::view_state::TableLayout;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind, MouseEvent},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while running the application
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// The column set was rejected
    #[error("Table error: {0}")]
    Table(#[from] TableError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B, T>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState<T>,
    key_bindings: KeyBindings,
    theme: TableTheme,
    /// Layout of the last drawn frame (for mouse hit-testing)
    last_layout: Option<TableLayout>,
}

impl<T: Clone + PartialEq> TuiApp<CrosstermBackend<Stdout>, T> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    pub fn new(
        app_state: AppState<T>,
        key_bindings: KeyBindings,
        theme: TableTheme,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self::with_terminal(terminal, app_state, key_bindings, theme))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (q or Ctrl+C). Redraws after every
    /// handled event; blocks while idle.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;
        loop {
            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Resize(width, height) => self.handle_resize(width, height),
                _ => continue,
            }
            self.draw()?;
        }
    }
}

impl<B, T> TuiApp<B, T>
where
    B: ratatui::backend::Backend,
    T: Clone + PartialEq,
{
    /// Wrap an existing terminal.
    ///
    /// Used by [`TuiApp::new`] and by tests with a `TestBackend`.
    pub fn with_terminal(
        terminal: Terminal<B>,
        app_state: AppState<T>,
        key_bindings: KeyBindings,
        theme: TableTheme,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings,
            theme,
            last_layout: None,
        }
    }

    /// Application state.
    pub fn app_state(&self) -> &AppState<T> {
        &self.app_state
    }

    /// Application state, mutably.
    pub fn app_state_mut(&mut self) -> &mut AppState<T> {
        &mut self.app_state
    }

    /// The terminal (for buffer inspection in tests).
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Consume the app and hand back its state.
    pub fn into_state(self) -> AppState<T> {
        self.app_state
    }

    /// Handle a keyboard event.
    ///
    /// Returns true if the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }
        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        debug!(?action, "Key action");
        if action == KeyAction::Quit {
            return true;
        }
        handle_key_action(&mut self.app_state, action);
        false
    }

    /// Handle a mouse event against the last drawn frame.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        handle_mouse_event(&mut self.app_state, self.last_layout.as_ref(), mouse);
    }

    /// Handle a terminal resize.
    ///
    /// Re-measures the table viewport right away so width resolution and
    /// hit-testing see the new size before the next draw.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        debug!(width, height, "Terminal resized");
        let area = table_area(Rect::new(0, 0, width, height));
        self.last_layout = Some(self.app_state.layout(area));
    }

    /// Render a frame.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        // Calculate the layout before rendering (for mouse hit-testing)
        let size = self.terminal.size()?;
        let frame_area = Rect::new(0, 0, size.width, size.height);
        let layout = self.app_state.layout(table_area(frame_area));

        let app_state = &self.app_state;
        let theme = &self.theme;
        self.terminal.draw(|frame| {
            render_layout(frame, app_state, &layout, theme);
        })?;

        self.last_layout = Some(layout);
        Ok(())
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// even when the loop fails. Returns the final state so the caller can
/// persist it.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run<T: Clone + PartialEq>(
    app_state: AppState<T>,
    key_bindings: KeyBindings,
    theme: TableTheme,
) -> Result<AppState<T>, TuiError> {
    let mut app = match TuiApp::new(app_state, key_bindings, theme) {
        Ok(app) => app,
        Err(err) => {
            restore_terminal()?;
            return Err(err);
        }
    };

    // Run the app and ensure cleanup happens even on error
    let result = app.run();
    restore_terminal()?;
    result?;

    info!("Event loop finished");
    Ok(app.into_state())
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
