//! Keyboard action handler.
//!
//! Applies a [`KeyAction`] to [`AppState`]. Quitting is the caller's business.

use crate::model::KeyAction;
use crate::state::AppState;

/// Apply `action` to `state`.
pub fn handle_action(state: &mut AppState, action: KeyAction) {
    let page = state.pane().viewport_height().max(1) as isize;
    match action {
        KeyAction::CursorUp => state.pane_mut().move_cursor_by(-1),
        KeyAction::CursorDown => state.pane_mut().move_cursor_by(1),
        KeyAction::PageUp => state.pane_mut().move_cursor_by(-page),
        KeyAction::PageDown => state.pane_mut().move_cursor_by(page),
        KeyAction::CursorToTop => state.pane_mut().move_cursor_to(0),
        KeyAction::CursorToBottom => state.pane_mut().move_cursor_to(usize::MAX),
        KeyAction::Highlight => {
            state.click_cursor_line(false);
        }
        KeyAction::ExtendHighlight => {
            state.click_cursor_line(true);
        }
        KeyAction::ClearHighlight => state.clear_highlight(),
        KeyAction::Quit => {}
    }
}
