//! Layout dimension constants for TUI rendering.

/// Height of the header bar in lines.
///
/// Shows the channel path of the current location.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
///
/// Single line for the shareable location and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Gap between the timestamp column and the line body.
pub const COLUMN_GAP: u16 = 1;

/// Keyboard hints shown at the right of the status bar.
pub const STATUS_HINTS: &str = "space:select v:extend esc:clear q:quit";
