//! Board snapshot: the per-frame render state handed to the editor.

use serde::{Deserialize, Serialize};

use crate::enums::EndType;
use crate::types::{ObjectId, Position};

/// Where one object (or wingman) is drawn at an instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderState {
    /// Object id, or `"{leaderId}-{n}"` for wingmen.
    pub id: ObjectId,
    pub position: Position,
    /// Degrees, 0 = up, clockwise.
    pub heading: f64,
    pub is_visible: bool,
    pub has_reached_end: bool,
    /// Terminal sprite, present once the end of the path is reached.
    pub end_sprite: Option<EndType>,
    /// Set for derived wingmen, `None` for placed objects.
    pub leader: Option<ObjectId>,
}

/// Everything the editor draws for one frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Evaluation time in seconds.
    pub time: f64,
    /// Length of the timeline: the latest stop time of any object.
    pub final_stop_time: f64,
    /// Objects in placement order, each lead followed by its wingmen.
    pub objects: Vec<RenderState>,
}

impl BoardSnapshot {
    pub fn get(&self, id: &ObjectId) -> Option<&RenderState> {
        self.objects.iter().find(|s| &s.id == id)
    }
}
