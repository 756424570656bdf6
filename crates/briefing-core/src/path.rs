//! Flight paths: raw control points plus the smooth curve fitted through them.
//!
//! The curve is a pure function of the control points. Every mutation goes
//! through a method that refits it before returning, so curve queries never
//! see stale state.

use serde::{Deserialize, Serialize};

use crate::config::PathConfig;
use crate::constants::{MIN_TRAJECTORY_POINTS, SECS_PER_HOUR, SMOOTH_MAX_STEP_FACTOR};
use crate::curve::Curve;
use crate::enums::CreationMode;
use crate::geometry;
use crate::simplify::simplify;
use crate::types::Position;

/// Ordered control points and the curve derived from them.
///
/// Serializes as the bare list of control points.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Position>", into = "Vec<Position>")]
pub struct Path {
    points: Vec<Position>,
    curve: Option<Curve>,
    config: PathConfig,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PathConfig) -> Self {
        Self {
            points: Vec::new(),
            curve: None,
            config,
        }
    }

    /// Build a path from existing points with the given config.
    pub fn from_points(points: Vec<Position>, config: PathConfig) -> Self {
        let mut path = Self::with_config(config);
        path.set_points(points);
        path
    }

    pub fn points(&self) -> &[Position] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn config(&self) -> &PathConfig {
        &self.config
    }

    /// The fitted curve, if the path has enough points for one.
    pub fn curve(&self) -> Option<&Curve> {
        self.curve.as_ref()
    }

    /// Whether the path has enough points to move its object along it.
    pub fn has_trajectory(&self) -> bool {
        self.points.len() > MIN_TRAJECTORY_POINTS && self.curve.is_some()
    }

    /// Append a point unconditionally.
    pub fn add_point(&mut self, pos: Position) {
        self.points.push(pos);
        self.refresh_curve();
    }

    /// Replace all points at once.
    pub fn set_points(&mut self, points: Vec<Position>) {
        self.points = points;
        self.refresh_curve();
    }

    /// Offer a raw pointer sample; returns whether a point was appended.
    ///
    /// `smoothness` only matters for [`CreationMode::FlySmooth`]: 0 turns
    /// instantly, 1 keeps the previous heading.
    pub fn consider_adding_point(
        &mut self,
        pos: Position,
        mode: CreationMode,
        smoothness: f64,
    ) -> bool {
        let Some(&last) = self.points.last() else {
            self.add_point(pos);
            return true;
        };

        let candidate = match mode {
            CreationMode::Normal => self.gate_distance(last, pos),
            CreationMode::FlyStraight => self.straight_candidate(last, pos),
            CreationMode::FlySmooth => {
                if self.points.len() < 2 {
                    Some(pos)
                } else {
                    self.smooth_candidate(last, pos, smoothness)
                }
            }
            CreationMode::FlyCardinals => self.cardinal_candidate(last, pos),
        };

        match candidate {
            Some(point) => {
                log::trace!("path: accepted {point} ({mode:?})");
                self.add_point(point);
                true
            }
            None => false,
        }
    }

    fn gate_distance(&self, last: Position, pos: Position) -> Option<Position> {
        (last.distance(pos) > self.config.min_point_distance).then_some(pos)
    }

    /// Direction of the most recent segment, if there is one.
    fn previous_direction(&self) -> Option<Position> {
        let n = self.points.len();
        (n >= 2).then(|| geometry::delta(self.points[n - 2], self.points[n - 1]))
    }

    fn straight_candidate(&self, last: Position, pos: Position) -> Option<Position> {
        let Some(prev_dir) = self.previous_direction() else {
            return self.gate_distance(last, pos);
        };
        let projected = geometry::project_onto(geometry::delta(last, pos), prev_dir);
        let forward = geometry::dot(projected, prev_dir) > 0.0;
        (forward && geometry::length(projected) > self.config.min_point_distance)
            .then(|| geometry::add(last, projected))
    }

    fn smooth_candidate(&self, last: Position, pos: Position, smoothness: f64) -> Option<Position> {
        let prev_dir = self.previous_direction()?;
        let raw = geometry::delta(last, pos);
        let smoothness = smoothness.clamp(0.0, 1.0);

        let prev_angle = geometry::angle_of(prev_dir);
        let new_angle = geometry::angle_of(raw);
        let target_angle = new_angle + smoothness * geometry::wrap_angle(prev_angle - new_angle);
        let target = geometry::from_angle(target_angle);

        let projected = geometry::project_onto(raw, target);
        if geometry::dot(projected, target) <= 0.0
            || geometry::length(projected) <= self.config.min_point_distance
        {
            return None;
        }
        let max_step = self.config.min_point_distance * SMOOTH_MAX_STEP_FACTOR;
        let step = if geometry::length(projected) > max_step {
            geometry::scale_to_length(projected, max_step)
        } else {
            projected
        };
        Some(geometry::add(last, step))
    }

    fn cardinal_candidate(&self, last: Position, pos: Position) -> Option<Position> {
        let d = geometry::delta(last, pos);
        let snapped = if d.x.abs() >= d.y.abs() {
            Position::new(pos.x, last.y)
        } else {
            Position::new(last.x, pos.y)
        };
        self.gate_distance(last, snapped)
    }

    fn refresh_curve(&mut self) {
        let simplified = simplify(
            &self.points,
            self.config.simplify_tolerance,
            self.config.simplify_max_points,
        );
        self.curve = Curve::new(simplified, self.config.tension, self.config.arc_divisions);
    }

    /// Curve length in pixels (0 without a curve).
    pub fn length(&self) -> f64 {
        self.curve.as_ref().map_or(0.0, Curve::length)
    }

    /// Position at a fraction of the curve's arc length.
    pub fn position_along_curve_norm(&self, fraction: f64) -> Option<Position> {
        self.curve.as_ref().map(|c| c.point_at(fraction))
    }

    /// Heading (degrees) at a fraction of the curve's arc length.
    pub fn heading_along_curve_norm(&self, fraction: f64) -> Option<f64> {
        self.curve
            .as_ref()
            .map(|c| geometry::heading_from_angle(geometry::angle_of(c.tangent_at(fraction))))
    }

    /// Time at which an object leaving at `start_time` reaches the end of the curve.
    ///
    /// A non-positive or non-finite speed never moves, so it has arrived at
    /// `start_time`.
    pub fn stop_time(&self, start_time: f64, speed_knots: f64) -> f64 {
        if !(speed_knots.is_finite() && speed_knots > 0.0) {
            return start_time;
        }
        let hours = geometry::px_to_nm(self.length()) / speed_knots;
        start_time + hours * SECS_PER_HOUR
    }

    /// Length of the raw control polygon in pixels.
    pub fn polyline_length(&self) -> f64 {
        self.points.windows(2).map(|w| w[0].distance(w[1])).sum()
    }

    /// Length of the raw control polygon in nautical miles.
    pub fn measured_distance_nm(&self) -> f64 {
        geometry::px_to_nm(self.polyline_length())
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

impl From<Vec<Position>> for Path {
    fn from(points: Vec<Position>) -> Self {
        Path::from_points(points, PathConfig::default())
    }
}

impl From<Path> for Vec<Position> {
    fn from(path: Path) -> Self {
        path.points
    }
}
