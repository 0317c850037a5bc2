//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod layout;
mod log_pane;
mod styles;

pub use layout::{calculate_areas, header_text, render_layout, status_text, ScreenAreas};
pub use log_pane::{fit_to_width, render_log_pane, visible_lines};
pub use styles::{ColorConfig, LineStyles};

use crate::config::keybindings::KeyBindings;
use crate::model::KeyAction;
use crate::state::{handle_action, handle_mouse_click, handle_mouse_scroll, AppState};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
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
    key_bindings: KeyBindings,
    styles: LineStyles,
    /// Last rendered log pane area (for line click detection)
    last_pane_area: Option<Rect>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture.
    pub fn new(app_state: AppState, styles: LineStyles) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self::with_terminal(terminal, app_state, styles))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). The log never changes after
    /// load, so the loop blocks on input and redraws after every event.
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

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Wrap an already configured terminal.
    pub fn with_terminal(terminal: Terminal<B>, app_state: AppState, styles: LineStyles) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            styles,
            last_pane_area: None,
        }
    }

    /// Current application state.
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Give back the application state, e.g. to read the final location.
    pub fn into_state(self) -> AppState {
        self.app_state
    }

    /// The terminal, for buffer inspection with a test backend.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        if action == KeyAction::Quit {
            return true;
        }

        handle_action(&mut self.app_state, action);
        false
    }

    /// Handle a single mouse event
    ///
    /// Left clicks on a timestamp highlight, shift-clicks extend; the wheel
    /// scrolls the pane.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => handle_mouse_scroll(&mut self.app_state, true),
            MouseEventKind::ScrollDown => handle_mouse_scroll(&mut self.app_state, false),
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(pane_area) = self.last_pane_area else {
                    return;
                };
                let shift_held = mouse.modifiers.contains(KeyModifiers::SHIFT);
                handle_mouse_click(
                    &mut self.app_state,
                    mouse.column,
                    mouse.row,
                    pane_area,
                    shift_held,
                );
            }
            _ => {}
        }
    }

    /// Handle a terminal resize event
    fn handle_resize(&mut self, width: u16, height: u16) {
        debug!("Handling resize to {}x{}", width, height);
        let areas = calculate_areas(Rect::new(0, 0, width, height), self.app_state.show_header);
        self.app_state
            .pane_mut()
            .set_viewport_height(usize::from(areas.pane.height));
    }

    /// Render the current frame
    ///
    /// Records the pane area for click detection before drawing.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let frame_area = Rect::new(0, 0, size.width, size.height);
        let areas = calculate_areas(frame_area, self.app_state.show_header);
        self.app_state
            .pane_mut()
            .set_viewport_height(usize::from(areas.pane.height));
        self.last_pane_area = Some(areas.pane);

        let state = &self.app_state;
        let styles = &self.styles;
        self.terminal
            .draw(|frame| render_layout(frame, state, styles))?;
        Ok(())
    }
}

/// CLI arguments for TUI initialization
///
/// The subset of command-line arguments that only affect rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliArgs {
    /// Disable colors (`--no-color`).
    pub no_color: bool,
}

/// Initialize and run the TUI on `app_state`.
///
/// Returns the shareable location at exit, fragment included. Logging must
/// be initialized by the caller.
pub fn run_with_state(app_state: AppState, args: CliArgs) -> Result<String, TuiError> {
    let styles = LineStyles::with_color_config(ColorConfig::from_env_and_args(args.no_color));
    let mut app = TuiApp::new(app_state, styles)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    restore_terminal()?;

    result.map(|()| app.into_state().location().href())
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
