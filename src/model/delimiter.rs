//! Field delimiter with validated construction.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a delimiter string is not a single ASCII character.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid delimiter {0:?}: expected a single ASCII character, `\\t` or `tab`")]
pub struct InvalidDelimiter(pub String);

/// Single-byte field delimiter.
///
/// The record reader works on bytes, so only ASCII delimiters are accepted.
/// Defaults to comma. Deserializes from the same strings [`FromStr`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Delimiter(u8);

impl Delimiter {
    /// Comma, the default.
    pub const COMMA: Delimiter = Delimiter(b',');
    /// Horizontal tab.
    pub const TAB: Delimiter = Delimiter(b'\t');

    /// Create a delimiter from a byte.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDelimiter` for non-ASCII bytes and for the quote and
    /// line-break characters, which the reader reserves.
    pub fn new(byte: u8) -> Result<Self, InvalidDelimiter> {
        if !byte.is_ascii() || matches!(byte, b'"' | b'\n' | b'\r') {
            return Err(InvalidDelimiter((byte as char).to_string()));
        }
        Ok(Self(byte))
    }

    /// The delimiter byte handed to the record reader.
    pub fn as_byte(self) -> u8 {
        self.0
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self::COMMA
    }
}

impl FromStr for Delimiter {
    type Err = InvalidDelimiter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "\\t" | "tab" => return Ok(Self::TAB),
            _ => {}
        }

        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii() => {
                Self::new(c as u8).map_err(|_| InvalidDelimiter(s.to_string()))
            }
            _ => Err(InvalidDelimiter(s.to_string())),
        }
    }
}

impl TryFrom<String> for Delimiter {
    type Error = InvalidDelimiter;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            b'\t' => write!(f, "\\t"),
            byte => write!(f, "{}", byte as char),
        }
    }
}
