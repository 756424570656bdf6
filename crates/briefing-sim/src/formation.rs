//! Formation resolver: derives wingmen from their lead every frame.
//!
//! Wingmen are never stored. Each one is a [`RenderState`] computed from
//! the lead's object and its already evaluated state.

use briefing_core::constants::{
    MAX_WINGMEN, SECS_PER_HOUR, WINGMAN_STD_ANGLE, WINGMAN_STD_DISTANCE,
};
use briefing_core::enums::Formation;
use briefing_core::geometry;
use briefing_core::object::BattlefieldObject;
use briefing_core::state::RenderState;

use crate::trajectory;

/// Render states for every wingman of `lead` at `time`.
///
/// Empty when the lead's type cannot fly in formation. At most
/// [`MAX_WINGMEN`] are produced whatever the stored count.
pub fn wingmen(lead: &BattlefieldObject, lead_state: &RenderState, time: f64) -> Vec<RenderState> {
    if !lead.object_type.supports_formation() {
        return Vec::new();
    }
    (1..=lead.wingman_count.min(MAX_WINGMEN))
        .map(|n| wingman(lead, lead_state, n, time))
        .collect()
}

/// Render state of wingman `n` (1-indexed).
pub fn wingman(
    lead: &BattlefieldObject,
    lead_state: &RenderState,
    n: u32,
    time: f64,
) -> RenderState {
    let id = lead.id.wingman(n);

    if lead.formation == Formation::Trail {
        let delayed = trajectory::evaluate(lead, time - trail_delay(lead, n));
        return RenderState {
            id,
            is_visible: lead_state.is_visible,
            leader: Some(lead.id.clone()),
            ..delayed
        };
    }

    let (offset_angle, distance) = static_offset(lead.formation, n);
    let angle = geometry::angle_from_heading(lead_state.heading) + offset_angle;
    let position = geometry::add(
        lead_state.position,
        geometry::from_angle(angle) * distance,
    );

    RenderState {
        id,
        position,
        heading: lead_state.heading,
        is_visible: lead_state.is_visible,
        has_reached_end: lead_state.has_reached_end,
        end_sprite: lead_state.end_sprite,
        leader: Some(lead.id.clone()),
    }
}

/// Seconds wingman `n` flies behind the lead in trail.
///
/// The time the lead needs to cover `n` standard spacings; zero when the
/// lead does not move.
pub fn trail_delay(lead: &BattlefieldObject, n: u32) -> f64 {
    if !(lead.speed.is_finite() && lead.speed > 0.0) {
        return 0.0;
    }
    let spacing_nm = geometry::px_to_nm(n as f64 * WINGMAN_STD_DISTANCE);
    spacing_nm / lead.speed * SECS_PER_HOUR
}

/// Angle offset from the lead's direction (radians) and distance (pixels)
/// for wingman `n` in a fixed-shape formation.
fn static_offset(formation: Formation, n: u32) -> (f64, f64) {
    let unit = WINGMAN_STD_DISTANCE;
    let finger_distance = if n <= 2 { unit } else { (n - 1) as f64 * unit };
    match formation {
        Formation::EchelonRight => (WINGMAN_STD_ANGLE, n as f64 * unit),
        Formation::EchelonLeft => (-WINGMAN_STD_ANGLE, n as f64 * unit),
        Formation::FingerFourRight => {
            let angle = if n == 1 { -WINGMAN_STD_ANGLE } else { WINGMAN_STD_ANGLE };
            (angle, finger_distance)
        }
        Formation::FingerFourLeft => {
            let angle = if n == 1 { WINGMAN_STD_ANGLE } else { -WINGMAN_STD_ANGLE };
            (angle, finger_distance)
        }
        Formation::CombatSpread => {
            let side = if n % 2 == 0 { -1.0 } else { 1.0 };
            (side * std::f64::consts::FRAC_PI_2, unit * n.div_ceil(2) as f64)
        }
        // No offset: the wingman sits on the lead.
        Formation::None | Formation::Trail => (0.0, 0.0),
    }
}
