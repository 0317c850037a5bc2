//! Application state and the handlers that mutate it (pure core).

pub mod action_handler;
pub mod app_state;
pub mod log_pane;
pub mod mouse_handler;

pub use action_handler::handle_action;
pub use app_state::AppState;
pub use log_pane::LogPane;
pub use mouse_handler::{
    detect_line_click, handle_mouse_click, handle_mouse_scroll, LineClickResult,
    TIMESTAMP_COLUMN_WIDTH,
};
