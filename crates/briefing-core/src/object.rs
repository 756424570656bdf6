//! Battlefield objects: the units and annotations placed on a board.
//!
//! Only authoritative fields live here. Where an object is, which way it
//! points and whether it is visible at a given instant are derived by the
//! trajectory evaluator and never stored.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::geometry;
use crate::path::Path;
use crate::types::{ObjectId, Position};

/// A unit or annotation on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattlefieldObject {
    pub id: ObjectId,
    pub name: String,
    pub coalition: Coalition,
    pub object_type: ObjectType,
    /// Sprite shown once the end of the path is reached.
    pub end_type: Option<EndType>,
    /// Resting position, used when the path cannot move the object.
    pub position: Position,
    /// Resting heading in degrees.
    pub heading: f64,
    /// Seconds into the scenario at which the object appears.
    pub start_time: f64,
    /// Knots.
    pub speed: f64,
    pub path: Path,
    /// Seconds after `start_time` the object stays visible; `None` = forever.
    pub duration: Option<f64>,
    pub wingman_count: u32,
    pub formation: Formation,
}

impl BattlefieldObject {
    /// New object with defaults for everything but identity, type and placement.
    pub fn new(id: ObjectId, object_type: ObjectType, position: Position) -> Self {
        Self {
            id,
            name: String::new(),
            coalition: Coalition::default(),
            object_type,
            end_type: object_type.default_end_type(),
            position,
            heading: 0.0,
            start_time: 0.0,
            speed: object_type.default_speed_knots(),
            path: Path::new(),
            duration: None,
            wingman_count: 0,
            formation: Formation::default(),
        }
    }

    /// Time at which the object arrives at the end of its path.
    ///
    /// Objects whose path cannot move them have arrived at `start_time`.
    pub fn stop_time(&self) -> f64 {
        if self.path.has_trajectory() {
            self.path.stop_time(self.start_time, self.speed)
        } else {
            self.start_time
        }
    }

    /// Last instant the object is visible (`+∞` without a duration).
    pub fn visible_until(&self) -> f64 {
        self.start_time + self.duration.unwrap_or(f64::INFINITY)
    }

    pub fn is_visible_at(&self, time: f64) -> bool {
        time >= self.start_time && time <= self.visible_until()
    }

    /// Distance label for measurement annotations, e.g. `"17 NM"`.
    pub fn measurement_label(&self) -> Option<String> {
        if self.object_type != ObjectType::Measurement || self.path.len() < 2 {
            return None;
        }
        Some(format!("{:.0} NM", self.path.measured_distance_nm()))
    }

    /// Point the resting heading along the first segment of the path.
    pub fn align_heading_to_path(&mut self) {
        if let Some(heading) = self.path.heading_along_curve_norm(0.0) {
            self.heading = heading;
        } else if let [a, b, ..] = self.path.points() {
            self.heading = geometry::heading_from_angle(geometry::angle_of(*b - *a));
        }
    }
}
