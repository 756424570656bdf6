//! Errors raised while decoding share links.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// The link's version tag has no decoder.
    #[error("unknown data version {0:?}")]
    UnknownVersion(String),

    /// `column` counts chars. A UTF-16 index would differ only after
    /// characters outside the Basic Multilingual Plane.
    #[error("compact encoding character {ch:?} at column {column} is not in the encoding alphabet")]
    InvalidCharacter { ch: char, column: usize },

    /// A `_` opened a full number that was never closed.
    #[error("full number starting at column {column} is not terminated")]
    UnterminatedNumber { column: usize },

    #[error("invalid base-36 integer {0:?}")]
    InvalidInteger(String),

    /// Accumulating a delta left the 64-bit coordinate range.
    #[error("coordinate overflows at column {column}")]
    CoordinateOverflow { column: usize },

    /// A position sequence ended with an x and no y.
    #[error("position sequence ends with a dangling coordinate")]
    DanglingCoordinate,

    #[error("invalid number {value:?} in field {field}")]
    InvalidNumber { field: &'static str, value: String },
}
