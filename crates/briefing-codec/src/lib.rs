//! Share-link codec for briefing scenarios.
//!
//! A scenario travels as one delimiter-separated string, small enough for a
//! URL fragment. Every published version stays decodable; only the current
//! version is written.

pub mod error;
mod fields;
pub mod persister;
pub mod positions;
pub mod text;
pub mod versions;

pub use error::DecodeError;
pub use persister::{load_data, serialize_data, upgrade, CURRENT_VERSION};
pub use positions::{decode_positions, encode_positions};
