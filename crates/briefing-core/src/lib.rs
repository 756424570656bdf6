//! Core types and math for the briefing board.
//!
//! This crate defines the vocabulary shared across all other crates:
//! object types, paths and curves, commands, snapshots and constants.
//! It has no dependency on the board engine or the link format.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod curve;
pub mod enums;
pub mod geometry;
pub mod ids;
pub mod object;
pub mod path;
pub mod scenario;
pub mod simplify;
pub mod state;
pub mod types;

pub use object::BattlefieldObject;
pub use path::Path;
pub use scenario::Scenario;
pub use types::{Camera, ObjectId, Position};

#[cfg(test)]
mod tests;
