//! Entity spawn factories for the board world.
//!
//! Builds battlefield objects with their type defaults and spawns them with
//! the component bundle the engine expects.

use hecs::World;

use briefing_core::components::{Drawing, PlacementOrder};
use briefing_core::config::PathConfig;
use briefing_core::enums::{Coalition, ObjectType};
use briefing_core::object::BattlefieldObject;
use briefing_core::path::Path;
use briefing_core::types::{ObjectId, Position};

/// Spawn a placed object.
pub fn spawn_object(world: &mut World, object: BattlefieldObject, order: PlacementOrder) -> hecs::Entity {
    world.spawn((object, order))
}

/// Spawn an object that starts in drawing mode.
pub fn spawn_drawing_object(
    world: &mut World,
    object: BattlefieldObject,
    order: PlacementOrder,
) -> hecs::Entity {
    let drawing = Drawing {
        mode: object.object_type.default_creation_mode(),
        smoothness: object.object_type.default_path_smoothness(),
    };
    world.spawn((object, order, drawing))
}

/// Spawn every object of a scenario in order, refitting paths with `path_config`.
///
/// Returns the next free placement order.
pub fn populate(world: &mut World, objects: Vec<BattlefieldObject>, path_config: PathConfig) -> u64 {
    let mut next = 0;
    for mut object in objects {
        object.path = Path::from_points(object.path.points().to_vec(), path_config);
        spawn_object(world, object, PlacementOrder(next));
        next += 1;
    }
    next
}

/// A unit or label placed with the pointer.
///
/// Movable types get their first path point at `position`.
pub fn new_placed_object(
    id: ObjectId,
    object_type: ObjectType,
    coalition: Coalition,
    position: Position,
    start_time: f64,
    path_config: PathConfig,
) -> BattlefieldObject {
    let mut object = BattlefieldObject::new(id, object_type, position);
    object.coalition = coalition;
    object.start_time = start_time;
    object.path = Path::with_config(path_config);
    if object_type.is_movable() {
        object.path.add_point(position);
    }
    object
}

/// A two-point line annotation. Measurements are named after their length
/// unless a name is given.
pub fn new_line_annotation(
    id: ObjectId,
    object_type: ObjectType,
    from: Position,
    to: Position,
    name: Option<String>,
    path_config: PathConfig,
) -> BattlefieldObject {
    let mut object = BattlefieldObject::new(id, object_type, from);
    object.path = Path::from_points(vec![from, to], path_config);
    object.name = name
        .or_else(|| object.measurement_label())
        .unwrap_or_default();
    object
}
