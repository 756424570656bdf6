//! Board commands sent from the editor to the board.
//!
//! Commands are queued and processed before the next snapshot is built.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{ObjectId, Position};

/// All possible editor actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BoardCommand {
    // --- Placement ---
    /// Place a unit or label. Movable types start drawing a path from `position`.
    PlaceObject {
        object_type: ObjectType,
        coalition: Coalition,
        position: Position,
        start_time: f64,
    },
    /// Pointer sample while a path is being drawn.
    ExtendPath {
        position: Position,
        mode: CreationMode,
    },
    /// Pointer released: stop drawing.
    FinishPath,
    /// Place a measurement, arrow or line between two points.
    PlaceAnnotation {
        object_type: ObjectType,
        from: Position,
        to: Position,
        name: Option<String>,
    },
    /// Remove an object and its wingmen.
    DeleteObject { id: ObjectId },

    // --- Object properties ---
    SetName { id: ObjectId, name: String },
    SetCoalition { id: ObjectId, coalition: Coalition },
    /// Knots.
    SetSpeed { id: ObjectId, speed: f64 },
    SetStartTime { id: ObjectId, start_time: f64 },
    /// Seconds after start; `None` keeps the object visible forever.
    SetDuration { id: ObjectId, duration: Option<f64> },
    SetWingmanCount { id: ObjectId, count: u32 },
    SetFormation { id: ObjectId, formation: Formation },
    SetEndType { id: ObjectId, end_type: Option<EndType> },

    // --- Scenario ---
    SetScenarioName { name: String },
    SetMap { map: String },
    SetCamera { pan: Position, zoom: f64 },
    /// Remove every object.
    Reset,
}
