//! Ramer–Douglas–Peucker polyline simplification with a point budget.

use crate::constants::SIMPLIFY_TOLERANCE_GROWTH;
use crate::types::Position;

/// Simplify `points` to within `tolerance` pixels, keeping at most
/// `max_points` points.
///
/// While the result is over budget the tolerance grows by
/// `SIMPLIFY_TOLERANCE_GROWTH`. Endpoints are always kept, so the loop ends
/// at two points at the latest.
pub fn simplify(points: &[Position], tolerance: f64, max_points: usize) -> Vec<Position> {
    if points.len() <= 2 {
        return points.to_vec();
    }
    let max_points = max_points.max(2);
    let mut tolerance = tolerance.max(f64::EPSILON);

    loop {
        let simplified = douglas_peucker(points, tolerance);
        if simplified.len() <= max_points {
            return simplified;
        }
        tolerance *= SIMPLIFY_TOLERANCE_GROWTH;
    }
}

/// Single RDP pass. Iterative to keep long freehand strokes off the stack.
pub fn douglas_peucker(points: &[Position], tolerance: f64) -> Vec<Position> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[points.len() - 1] = true;

    let mut stack = vec![(0, points.len() - 1)];
    while let Some((first, last)) = stack.pop() {
        if last <= first + 1 {
            continue;
        }
        let mut max_dist = 0.0;
        let mut max_index = first;
        for i in (first + 1)..last {
            let d = segment_distance(points[i], points[first], points[last]);
            if d > max_dist {
                max_dist = d;
                max_index = i;
            }
        }
        if max_dist > tolerance {
            keep[max_index] = true;
            stack.push((first, max_index));
            stack.push((max_index, last));
        }
    }

    points
        .iter()
        .zip(keep)
        .filter_map(|(p, k)| k.then_some(*p))
        .collect()
}

/// Distance from `p` to the segment `a`..`b`.
fn segment_distance(p: Position, a: Position, b: Position) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f64::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
