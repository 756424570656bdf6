//! Scenario: everything a share link carries.

use serde::{Deserialize, Serialize};

use crate::object::BattlefieldObject;
use crate::types::{Camera, ObjectId};

/// Name given to a scenario before the user renames it.
pub const DEFAULT_SCENARIO_NAME: &str = "New scenario";

/// A complete briefing: metadata, camera and every placed object.
///
/// Wingmen are derived from their leads and never appear in `objects`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    /// Map background identifier (`""` = none).
    pub map: String,
    pub camera: Camera,
    pub objects: Vec<BattlefieldObject>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            name: DEFAULT_SCENARIO_NAME.to_string(),
            map: String::new(),
            camera: Camera::default(),
            objects: Vec::new(),
        }
    }
}

impl Scenario {
    pub fn object(&self, id: &ObjectId) -> Option<&BattlefieldObject> {
        self.objects.iter().find(|o| &o.id == id)
    }
}
