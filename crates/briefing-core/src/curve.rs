//! Open cardinal (Catmull-Rom) spline with arc-length parameterisation.
//!
//! The curve passes through every control point. Queries take a fraction of
//! the total arc length, so equal fraction steps cover equal distances.

use serde::Serialize;

use crate::types::Position;

/// Smooth interpolating curve through at least two control points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Curve {
    points: Vec<Position>,
    tension: f64,
    /// Cumulative arc length at `k / divisions` of the spline parameter.
    arc_lengths: Vec<f64>,
}

impl Curve {
    /// Fit a curve through `points`. Returns `None` for fewer than two points.
    pub fn new(points: Vec<Position>, tension: f64, divisions: usize) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }
        let mut curve = Self {
            points,
            tension: tension.clamp(0.0, 1.0),
            arc_lengths: Vec::new(),
        };
        curve.arc_lengths = curve.build_arc_lengths(divisions.max(1));
        Some(curve)
    }

    /// Control points the spline interpolates.
    pub fn control_points(&self) -> &[Position] {
        &self.points
    }

    /// Total arc length in pixels.
    pub fn length(&self) -> f64 {
        self.arc_lengths.last().copied().unwrap_or(0.0)
    }

    /// Position at `fraction` (clamped to [0, 1]) of the arc length.
    pub fn point_at(&self, fraction: f64) -> Position {
        self.eval(self.param_at(fraction))
    }

    /// Unit direction of travel at `fraction` of the arc length.
    ///
    /// Falls back to the chord direction where the spline has no derivative,
    /// and to zero for a curve whose points all coincide.
    pub fn tangent_at(&self, fraction: f64) -> Position {
        let d = self.derivative(self.param_at(fraction));
        if d.length_squared() > f64::EPSILON {
            return d.normalize();
        }
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        (last - first).normalize_or_zero()
    }

    fn segment_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Control point `i`, with phantom points reflected past both ends.
    fn control(&self, i: isize) -> Position {
        let n = self.points.len() as isize;
        if i < 0 {
            self.points[0] * 2.0 - self.points[1]
        } else if i >= n {
            self.points[(n - 1) as usize] * 2.0 - self.points[(n - 2) as usize]
        } else {
            self.points[i as usize]
        }
    }

    /// Segment index and local parameter for a global parameter in [0, 1].
    fn locate(&self, u: f64) -> (usize, f64) {
        let segments = self.segment_count();
        let s = u.clamp(0.0, 1.0) * segments as f64;
        let seg = (s.floor() as usize).min(segments - 1);
        (seg, s - seg as f64)
    }

    /// Hermite endpoints and tangents of segment `seg`.
    fn segment(&self, seg: usize) -> (Position, Position, Position, Position) {
        let i = seg as isize;
        let scale = (1.0 - self.tension) * 0.5;
        let p1 = self.control(i);
        let p2 = self.control(i + 1);
        let m1 = (p2 - self.control(i - 1)) * scale;
        let m2 = (self.control(i + 2) - p1) * scale;
        (p1, p2, m1, m2)
    }

    fn eval(&self, u: f64) -> Position {
        let (seg, t) = self.locate(u);
        let (p1, p2, m1, m2) = self.segment(seg);
        let t2 = t * t;
        let t3 = t2 * t;
        p1 * (2.0 * t3 - 3.0 * t2 + 1.0)
            + m1 * (t3 - 2.0 * t2 + t)
            + p2 * (-2.0 * t3 + 3.0 * t2)
            + m2 * (t3 - t2)
    }

    fn derivative(&self, u: f64) -> Position {
        let (seg, t) = self.locate(u);
        let (p1, p2, m1, m2) = self.segment(seg);
        let t2 = t * t;
        p1 * (6.0 * t2 - 6.0 * t)
            + m1 * (3.0 * t2 - 4.0 * t + 1.0)
            + p2 * (-6.0 * t2 + 6.0 * t)
            + m2 * (3.0 * t2 - 2.0 * t)
    }

    fn build_arc_lengths(&self, divisions: usize) -> Vec<f64> {
        let mut lengths = Vec::with_capacity(divisions + 1);
        let mut total = 0.0;
        let mut prev = self.eval(0.0);
        lengths.push(0.0);
        for k in 1..=divisions {
            let p = self.eval(k as f64 / divisions as f64);
            total += p.distance(prev);
            lengths.push(total);
            prev = p;
        }
        lengths
    }

    /// Spline parameter reached after `fraction` of the arc length.
    fn param_at(&self, fraction: f64) -> f64 {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        let total = self.length();
        if total <= f64::EPSILON {
            return fraction;
        }

        let divisions = (self.arc_lengths.len() - 1) as f64;
        let target = fraction * total;
        let idx = self.arc_lengths.partition_point(|&l| l < target);
        if idx == 0 {
            return 0.0;
        }
        if idx >= self.arc_lengths.len() {
            return 1.0;
        }
        let lo = self.arc_lengths[idx - 1];
        let hi = self.arc_lengths[idx];
        let span = hi - lo;
        let local = if span > 0.0 { (target - lo) / span } else { 0.0 };
        ((idx - 1) as f64 + local) / divisions
    }
}
