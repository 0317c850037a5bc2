//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Cursor movement
    /// Move the line cursor up by one line. Default: k/↑
    CursorUp,
    /// Move the line cursor down by one line. Default: j/↓
    CursorDown,
    /// Move the line cursor up by one page. Default: Ctrl+u/Page Up
    PageUp,
    /// Move the line cursor down by one page. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the first line. Default: g/Home
    CursorToTop,
    /// Jump to the last line. Default: G/End
    CursorToBottom,

    // Highlighting
    /// Click the cursor line's timestamp. Default: Space/Enter
    Highlight,
    /// Shift-click the cursor line's timestamp. Default: v
    ExtendHighlight,
    /// Drop the current highlight. Default: Esc
    ClearHighlight,

    // Application
    /// Leave the viewer. Default: q
    Quit,
}
