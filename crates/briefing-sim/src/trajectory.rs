//! Trajectory evaluation: where an object is at a given instant.
//!
//! Evaluation is a pure function of the object's authoritative fields and
//! the requested time. Nothing is cached on the object.

use briefing_core::object::BattlefieldObject;
use briefing_core::state::RenderState;

/// Time at which `object` arrives at the end of its path.
pub fn stop_time(object: &BattlefieldObject) -> f64 {
    object.stop_time()
}

/// Fraction of the path covered at `time`, clamped to [0, 1].
///
/// A zero-length or zero-speed trajectory counts as already arrived.
pub fn normalized_time(object: &BattlefieldObject, time: f64) -> f64 {
    let span = stop_time(object) - object.start_time;
    if !(span.is_finite() && span > 0.0) {
        return 1.0;
    }
    let t = (time - object.start_time) / span;
    if t.is_nan() {
        return 1.0;
    }
    t.clamp(0.0, 1.0)
}

/// Render state of `object` at `time`.
///
/// Objects whose path is too short to move them stay at their stored
/// position and heading.
pub fn evaluate(object: &BattlefieldObject, time: f64) -> RenderState {
    let has_reached_end = time >= stop_time(object);

    let (position, heading) = if object.path.has_trajectory() {
        let t = normalized_time(object, time);
        (
            object
                .path
                .position_along_curve_norm(t)
                .unwrap_or(object.position),
            object
                .path
                .heading_along_curve_norm(t)
                .unwrap_or(object.heading),
        )
    } else {
        (object.position, object.heading)
    };

    RenderState {
        id: object.id.clone(),
        position,
        heading,
        is_visible: object.is_visible_at(time),
        has_reached_end,
        end_sprite: if has_reached_end { object.end_type } else { None },
        leader: None,
    }
}
