//! Domain model types (pure).
//!
//! All types in this module are pure data.

pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod record;

// Re-export for convenience
pub use error::{AppError, InputError, ParseError};
pub use identifiers::{RequestId, RowId};
pub use key_action::KeyAction;
pub use record::{Record, Row};
