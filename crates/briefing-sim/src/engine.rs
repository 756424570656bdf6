//! Briefing board engine.
//!
//! `BriefingBoard` owns the hecs ECS world, processes editor commands and
//! produces `BoardSnapshot`s for any point on the timeline. Completely
//! headless, so boards can be driven and checked deterministically in tests.

use std::collections::VecDeque;

use hecs::World;
use serde::{Deserialize, Serialize};

use briefing_core::commands::BoardCommand;
use briefing_core::components::{Drawing, PlacementOrder};
use briefing_core::config::PathConfig;
use briefing_core::constants::MAX_WINGMEN;
use briefing_core::ids::{IdGenerator, RandomIds};
use briefing_core::object::BattlefieldObject;
use briefing_core::scenario::{Scenario, DEFAULT_SCENARIO_NAME};
use briefing_core::state::BoardSnapshot;
use briefing_core::types::{Camera, ObjectId};

use crate::systems;
use crate::world_setup;

/// Configuration for a new board.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Seed for object id generation. Same seed = same ids.
    pub seed: u64,
    pub path: PathConfig,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            path: PathConfig::default(),
        }
    }
}

/// The board engine. Owns the ECS world and all scenario state.
pub struct BriefingBoard {
    world: World,
    name: String,
    map: String,
    camera: Camera,
    path_config: PathConfig,
    ids: Box<dyn IdGenerator>,
    next_order: u64,
    command_queue: VecDeque<BoardCommand>,
}

impl BriefingBoard {
    /// Create an empty board with the given config.
    pub fn new(config: BoardConfig) -> Self {
        Self::with_id_generator(config, Box::new(RandomIds::from_seed(config.seed)))
    }

    /// Create an empty board drawing ids from `ids`.
    pub fn with_id_generator(config: BoardConfig, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            world: World::new(),
            name: DEFAULT_SCENARIO_NAME.to_string(),
            map: String::new(),
            camera: Camera::default(),
            path_config: config.path,
            ids,
            next_order: 0,
            command_queue: VecDeque::new(),
        }
    }

    /// Load a decoded scenario onto a fresh board.
    pub fn from_scenario(scenario: Scenario, config: BoardConfig) -> Self {
        let mut board = Self::new(config);
        board.name = scenario.name;
        board.map = scenario.map;
        board.camera = scenario.camera;
        board.next_order = world_setup::populate(&mut board.world, scenario.objects, config.path);
        log::debug!("board: loaded {} objects", board.next_order);
        board
    }

    /// Current scenario, objects in placement order.
    ///
    /// Commands still queued are not applied.
    pub fn to_scenario(&self) -> Scenario {
        Scenario {
            name: self.name.clone(),
            map: self.map.clone(),
            camera: self.camera,
            objects: self.objects(),
        }
    }

    /// Queue an editor command for processing before the next snapshot.
    pub fn queue_command(&mut self, command: BoardCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = BoardCommand>) {
        self.command_queue.extend(commands);
    }

    /// Apply queued commands and return the board as it looks at `time`.
    pub fn snapshot(&mut self, time: f64) -> BoardSnapshot {
        self.process_commands();
        systems::snapshot::build_snapshot(&self.world, time)
    }

    /// Apply all queued commands.
    pub fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn map(&self) -> &str {
        &self.map
    }

    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn object_count(&self) -> usize {
        self.world.query::<&BattlefieldObject>().iter().count()
    }

    /// Copy of the object with `id`, if it exists.
    pub fn object(&self, id: &ObjectId) -> Option<BattlefieldObject> {
        self.world
            .query::<&BattlefieldObject>()
            .iter()
            .find(|(_, obj)| &obj.id == id)
            .map(|(_, obj)| obj.clone())
    }

    /// Id of the object whose path is being drawn.
    pub fn drawing(&self) -> Option<ObjectId> {
        self.world
            .query::<(&BattlefieldObject, &Drawing)>()
            .iter()
            .next()
            .map(|(_, (obj, _))| obj.id.clone())
    }

    /// All objects in placement order.
    fn objects(&self) -> Vec<BattlefieldObject> {
        let mut objects: Vec<(PlacementOrder, BattlefieldObject)> = self
            .world
            .query::<(&PlacementOrder, &BattlefieldObject)>()
            .iter()
            .map(|(_, (order, obj))| (*order, obj.clone()))
            .collect();
        objects.sort_by_key(|(order, _)| *order);
        objects.into_iter().map(|(_, obj)| obj).collect()
    }

    fn find_entity(&self, id: &ObjectId) -> Option<hecs::Entity> {
        self.world
            .query::<&BattlefieldObject>()
            .iter()
            .find(|(_, obj)| &obj.id == id)
            .map(|(entity, _)| entity)
    }

    fn drawing_entity(&self) -> Option<hecs::Entity> {
        self.world
            .query::<&Drawing>()
            .iter()
            .next()
            .map(|(entity, _)| entity)
    }

    /// Apply `edit` to the object with `id`, logging unknown ids.
    fn edit_object(&mut self, id: &ObjectId, edit: impl FnOnce(&mut BattlefieldObject)) {
        let Some(entity) = self.find_entity(id) else {
            log::warn!("board: no object {id}");
            return;
        };
        if let Ok(mut obj) = self.world.get::<&mut BattlefieldObject>(entity) {
            edit(&mut *obj);
        }
    }

    fn next_order(&mut self) -> PlacementOrder {
        let order = PlacementOrder(self.next_order);
        self.next_order += 1;
        order
    }

    /// Stop drawing whatever path is in progress.
    fn finish_drawing(&mut self) {
        if let Some(entity) = self.drawing_entity() {
            let _ = self.world.remove_one::<Drawing>(entity);
        }
    }

    /// Handle a single editor command.
    fn handle_command(&mut self, command: BoardCommand) {
        match command {
            BoardCommand::PlaceObject {
                object_type,
                coalition,
                position,
                start_time,
            } => {
                if !position.is_finite() || finite("start time", start_time).is_none() {
                    log::warn!("board: ignoring placement at {position}");
                    return;
                }
                self.finish_drawing();
                let id = self.ids.next_id();
                log::debug!("board: place {object_type} {id} at {position}");
                let object = world_setup::new_placed_object(
                    id,
                    object_type,
                    coalition,
                    position,
                    start_time,
                    self.path_config,
                );
                let order = self.next_order();
                if object_type.is_movable() {
                    world_setup::spawn_drawing_object(&mut self.world, object, order);
                } else {
                    world_setup::spawn_object(&mut self.world, object, order);
                }
            }
            BoardCommand::ExtendPath { position, mode } => {
                if !position.is_finite() {
                    log::warn!("board: ignoring path point {position}");
                    return;
                }
                let Some(entity) = self.drawing_entity() else {
                    log::warn!("board: ExtendPath with nothing being drawn");
                    return;
                };
                if let Ok((obj, drawing)) = self
                    .world
                    .query_one_mut::<(&mut BattlefieldObject, &mut Drawing)>(entity)
                {
                    drawing.mode = mode;
                    if obj.path.consider_adding_point(position, mode, drawing.smoothness) {
                        obj.align_heading_to_path();
                    }
                }
            }
            BoardCommand::FinishPath => self.finish_drawing(),
            BoardCommand::PlaceAnnotation {
                object_type,
                from,
                to,
                name,
            } => {
                if !object_type.is_line_annotation() {
                    log::warn!("board: {object_type} is not a line annotation");
                    return;
                }
                if !from.is_finite() || !to.is_finite() {
                    log::warn!("board: ignoring {object_type} from {from} to {to}");
                    return;
                }
                let id = self.ids.next_id();
                let object = world_setup::new_line_annotation(
                    id,
                    object_type,
                    from,
                    to,
                    name,
                    self.path_config,
                );
                let order = self.next_order();
                world_setup::spawn_object(&mut self.world, object, order);
            }
            BoardCommand::DeleteObject { id } => match self.find_entity(&id) {
                Some(entity) => {
                    let _ = self.world.despawn(entity);
                }
                None => log::warn!("board: no object {id} to delete"),
            },
            BoardCommand::SetName { id, name } => self.edit_object(&id, |o| o.name = name),
            BoardCommand::SetCoalition { id, coalition } => {
                self.edit_object(&id, |o| o.coalition = coalition)
            }
            BoardCommand::SetSpeed { id, speed } => {
                if let Some(speed) = finite("speed", speed) {
                    self.edit_object(&id, |o| o.speed = speed.max(0.0))
                }
            }
            BoardCommand::SetStartTime { id, start_time } => {
                if let Some(start_time) = finite("start time", start_time) {
                    self.edit_object(&id, |o| o.start_time = start_time)
                }
            }
            BoardCommand::SetDuration { id, duration } => {
                let duration = match duration {
                    Some(d) => match finite("duration", d) {
                        Some(d) => Some(d.max(0.0)),
                        None => return,
                    },
                    None => None,
                };
                self.edit_object(&id, |o| o.duration = duration)
            }
            BoardCommand::SetWingmanCount { id, count } => {
                self.edit_object(&id, |o| o.wingman_count = count.min(MAX_WINGMEN))
            }
            BoardCommand::SetFormation { id, formation } => {
                self.edit_object(&id, |o| o.formation = formation)
            }
            BoardCommand::SetEndType { id, end_type } => {
                self.edit_object(&id, |o| o.end_type = end_type)
            }
            BoardCommand::SetScenarioName { name } => self.name = name,
            BoardCommand::SetMap { map } => self.map = map,
            BoardCommand::SetCamera { pan, zoom } => {
                if pan.is_finite() && finite("zoom", zoom).is_some() {
                    self.camera = Camera { pan, zoom };
                } else {
                    log::warn!("board: ignoring camera at {pan}");
                }
            }
            BoardCommand::Reset => {
                self.world.clear();
                self.next_order = 0;
            }
        }
    }
}

/// `value` if it is finite; otherwise logs and yields `None`.
fn finite(what: &str, value: f64) -> Option<f64> {
    if value.is_finite() {
        Some(value)
    } else {
        log::warn!("board: ignoring non-finite {what} {value}");
        None
    }
}

impl Default for BriefingBoard {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}
