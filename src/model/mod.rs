//! Domain model types (pure).
//!
//! All types in this module are pure data with no terminal or file dependencies.

pub mod cursor;
pub mod delimiter;
pub mod error;
pub mod nav_command;
pub mod record;

// Re-export for convenience
pub use cursor::Cursor;
pub use delimiter::{Delimiter, InvalidDelimiter};
pub use error::{AppError, SourceError};
pub use nav_command::NavCommand;
pub use record::{Header, Record};
