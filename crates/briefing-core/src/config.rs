//! Tuning knobs for path drawing and curve fitting.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// How raw pointer samples become control points and how the curve is fitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Minimum spacing (pixels) between accepted control points.
    pub min_point_distance: f64,
    /// RDP tolerance (pixels) applied before fitting.
    pub simplify_tolerance: f64,
    /// Maximum control points handed to the spline.
    pub simplify_max_points: usize,
    /// Spline tension (0 = Catmull-Rom).
    pub tension: f64,
    /// Arc-length lookup table resolution.
    pub arc_divisions: usize,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            min_point_distance: MIN_POINT_DISTANCE,
            simplify_tolerance: SIMPLIFY_TOLERANCE,
            simplify_max_points: SIMPLIFY_MAX_POINTS,
            tension: CURVE_TENSION,
            arc_divisions: CURVE_ARC_DIVISIONS,
        }
    }
}
