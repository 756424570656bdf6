//! Snapshot system: queries the ECS world and builds a complete BoardSnapshot.
//!
//! This system is read-only and never modifies the world.

use hecs::World;

use briefing_core::components::PlacementOrder;
use briefing_core::object::BattlefieldObject;
use briefing_core::state::{BoardSnapshot, RenderState};

use crate::formation;
use crate::systems::timeline;
use crate::trajectory;

/// Build the snapshot for `time` from the current world state.
pub fn build_snapshot(world: &World, time: f64) -> BoardSnapshot {
    let mut query = world.query::<(&PlacementOrder, &BattlefieldObject)>();
    let mut objects: Vec<(PlacementOrder, &BattlefieldObject)> =
        query.iter().map(|(_, (order, obj))| (*order, obj)).collect();
    objects.sort_by_key(|(order, _)| *order);

    BoardSnapshot {
        time,
        final_stop_time: timeline::final_stop_time(objects.iter().map(|(_, obj)| *obj)),
        objects: build_render_states(objects.iter().map(|(_, obj)| *obj), time),
    }
}

/// Evaluate each object, following every lead with its wingmen.
fn build_render_states<'a>(
    objects: impl Iterator<Item = &'a BattlefieldObject>,
    time: f64,
) -> Vec<RenderState> {
    let mut states = Vec::new();
    for obj in objects {
        let lead = trajectory::evaluate(obj, time);
        let wingmen = formation::wingmen(obj, &lead, time);
        states.push(lead);
        states.extend(wingmen);
    }
    states
}
