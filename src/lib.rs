//! logbot-view (lbv)
//!
//! Terminal viewer for chat channel logs. Lines can be highlighted singly or
//! as a range, and the highlight is kept in the fragment of the page location
//! (`#c12` or `#c12-c20`) so it can be shared and restored.
//!
//! The highlight logic in [`highlight`] only talks to a [`highlight::LogView`]
//! and a [`highlight::SelectionPersistence`]; the TUI in [`view`] is one host
//! for it.

pub mod config;
pub mod highlight;
pub mod logging;
pub mod model;
pub mod parser;
pub mod source;
pub mod state;
pub mod view;
