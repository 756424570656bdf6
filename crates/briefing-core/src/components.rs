//! ECS components for hecs entities on the board.
//!
//! Components are plain data structs with no methods.
//! Board logic lives in the engine and its systems, not in components.
//! Every object entity also carries its [`BattlefieldObject`](crate::BattlefieldObject).

use serde::{Deserialize, Serialize};

use crate::enums::CreationMode;

/// Stable position of an object in draw and link order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlacementOrder(pub u64);

/// Marks the object whose path is currently being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    pub mode: CreationMode,
    /// Smoothing weight handed to `FlySmooth` (0 = none, 1 = rigid).
    pub smoothness: f64,
}
