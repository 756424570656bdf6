//! Systems that read the board world.
//!
//! Systems are pure functions over `&World`.
//! They do not own state; all state lives in components.

pub mod snapshot;
pub mod timeline;
