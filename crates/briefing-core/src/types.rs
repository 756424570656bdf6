//! Fundamental board types.

use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ZOOM;

/// 2D position in board space (pixels, x = right, y = down).
///
/// One pixel is calibrated against real distance through
/// [`PIXELS_PER_KM`](crate::constants::PIXELS_PER_KM).
pub type Position = DVec2;

/// Stable object identity, assigned once at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id of the `n`th (1-indexed) wingman flying with this object.
    pub fn wingman(&self, n: u32) -> ObjectId {
        ObjectId(format!("{}-{}", self.0, n))
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Viewport pan and zoom stored alongside a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub pan: Position,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            pan: Position::ZERO,
            zoom: DEFAULT_ZOOM,
        }
    }
}
