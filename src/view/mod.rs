//! TUI rendering and terminal management (impure shell)

mod grid;
mod progress;
mod styles;
mod terminal;

pub use grid::{GridView, RIGHT_MARGIN};
pub use progress::{progress_message, TerminalProgress};
pub use styles::{ColorConfig, Palette, COLUMN_COLORS};
pub use terminal::TerminalGuard;

use crate::config::KeyBindings;
use crate::model::{AppError, NavCommand};
use crate::source::RecordSource;
use crate::state::{Navigator, PagerSettings, Transition};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::backend::Backend;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::{debug, info};

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend, and over the
/// record source to support in-memory data.
pub struct TuiApp<B, S>
where
    B: Backend,
    S: RecordSource,
{
    terminal: Terminal<B>,
    navigator: Navigator<S>,
    key_bindings: KeyBindings,
    palette: Palette,
}

impl<B, S> TuiApp<B, S>
where
    B: Backend,
    S: RecordSource,
{
    /// Build the initial window around `start_row` and wrap the terminal.
    ///
    /// Progress of the initial build is drawn on `terminal`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Source` if the initial build fails.
    pub fn new(
        mut terminal: Terminal<B>,
        source: S,
        start_row: usize,
        settings: PagerSettings,
        key_bindings: KeyBindings,
        palette: Palette,
    ) -> Result<Self, AppError> {
        info!(source = %source.describe(), start_row, ?settings, "Opening source");
        let navigator = {
            let mut progress = TerminalProgress::new(&mut terminal, &palette);
            Navigator::new(source, start_row, settings, &mut progress)?
        };

        Ok(Self {
            terminal,
            navigator,
            key_bindings,
            palette,
        })
    }

    /// Run the event loop until the user quits.
    ///
    /// Blocks on terminal events; nothing is redrawn while idle.
    ///
    /// # Errors
    ///
    /// Returns the first terminal or source error.
    pub fn run(&mut self) -> Result<(), AppError> {
        self.draw()?;

        loop {
            if self.handle_event(event::read()?)? {
                return Ok(());
            }
        }
    }

    /// Handle one terminal event, redrawing when needed.
    ///
    /// Returns true if the app should quit.
    ///
    /// # Errors
    ///
    /// Returns the error of a rebuild or of the redraw.
    pub fn handle_event(&mut self, event: Event) -> Result<bool, AppError> {
        let command = match event {
            Event::Key(key) => match self.command_for(key) {
                Some(command) => command,
                None => return Ok(false),
            },
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                NavCommand::Resize
            }
            _ => return Ok(false),
        };

        match self.apply(command)? {
            Transition::Quit => Ok(true),
            transition => {
                if transition.needs_render() {
                    self.draw()?;
                }
                Ok(false)
            }
        }
    }

    /// Render the current window.
    ///
    /// # Errors
    ///
    /// Returns the terminal's I/O error.
    pub fn draw(&mut self) -> Result<(), AppError> {
        let grid = GridView::new(self.navigator.window(), self.navigator.cursor(), &self.palette);
        self.terminal.draw(|frame| frame.render_widget(grid, frame.area()))?;
        Ok(())
    }

    /// The navigation state.
    pub fn navigator(&self) -> &Navigator<S> {
        &self.navigator
    }

    /// The wrapped terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    fn command_for(&self, key: KeyEvent) -> Option<NavCommand> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        self.key_bindings.get(key)
    }

    fn apply(&mut self, command: NavCommand) -> Result<Transition, AppError> {
        let mut progress = TerminalProgress::new(&mut self.terminal, &self.palette);
        Ok(self.navigator.apply(command, &mut progress)?)
    }
}

/// Set up the terminal, page through `source`, and restore the terminal.
///
/// The terminal is restored on every exit path, including errors and panics.
/// Logging must be initialized by the caller.
///
/// # Errors
///
/// Returns the first terminal or source error, after restoring the terminal.
pub fn run_with_source<S: RecordSource>(
    source: S,
    start_row: usize,
    settings: PagerSettings,
    palette: Palette,
) -> Result<(), AppError> {
    let _guard = TerminalGuard::enter()?;
    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = TuiApp::new(
        terminal,
        source,
        start_row,
        settings,
        KeyBindings::default(),
        palette,
    )?;
    app.run()
}
