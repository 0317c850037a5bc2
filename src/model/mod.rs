//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod chat_line;
pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod malformed_line;
pub mod selection;

// Re-export for convenience
pub use chat_line::{ChatLine, LineKind};
pub use error::{InputError, ParseError};
pub use identifiers::{InvalidLineId, LineId};
pub use key_action::KeyAction;
pub use malformed_line::MalformedLine;
pub use selection::Selection;
