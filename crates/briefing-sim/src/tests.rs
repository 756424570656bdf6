//! Tests for the board engine, trajectory evaluation and formations.

use proptest::prelude::*;

use briefing_core::commands::BoardCommand;
use briefing_core::enums::*;
use briefing_core::geometry;
use briefing_core::object::BattlefieldObject;
use briefing_core::scenario::Scenario;
use briefing_core::constants::MAX_WINGMEN;
use briefing_core::types::{Camera, ObjectId, Position};

use crate::engine::{BoardConfig, BriefingBoard};
use crate::{formation, trajectory};

fn viper_with_path(points: &[(f64, f64)]) -> BattlefieldObject {
    let mut obj = BattlefieldObject::new(
        ObjectId::from("viper1"),
        ObjectType::Airplane(Airplane::Viper),
        Position::ZERO,
    );
    obj.path
        .set_points(points.iter().map(|&(x, y)| Position::new(x, y)).collect());
    obj
}

fn place_viper(board: &mut BriefingBoard, at: Position) {
    board.queue_command(BoardCommand::PlaceObject {
        object_type: ObjectType::Airplane(Airplane::Viper),
        coalition: Coalition::Blue,
        position: at,
        start_time: 0.0,
    });
}

fn draw(board: &mut BriefingBoard, points: &[(f64, f64)]) {
    for &(x, y) in points {
        board.queue_command(BoardCommand::ExtendPath {
            position: Position::new(x, y),
            mode: CreationMode::Normal,
        });
    }
    board.queue_command(BoardCommand::FinishPath);
}

// ---- Trajectory ----

#[test]
fn test_viper_halfway_along_curve() {
    let obj = viper_with_path(&[(0.0, 0.0), (100.0, 0.0), (200.0, 50.0)]);
    assert_eq!(obj.speed, 400.0);
    let stop = trajectory::stop_time(&obj);
    assert!(stop > 0.0);

    let state = trajectory::evaluate(&obj, stop / 2.0);
    assert!(state.is_visible);
    assert!(!state.has_reached_end);

    let on_curve = obj.path.position_along_curve_norm(0.5).unwrap();
    assert!((state.position - on_curve).length() < 1e-9);
    // Half the arc length lands just past the middle control point.
    assert!(
        (state.position - Position::new(105.0, 2.0)).length() < 15.0,
        "midpoint = {}",
        state.position
    );
}

#[test]
fn test_arrival_at_stop_time() {
    let obj = viper_with_path(&[(0.0, 0.0), (100.0, 0.0), (200.0, 50.0)]);
    let stop = trajectory::stop_time(&obj);
    assert!(!trajectory::evaluate(&obj, stop - 0.01).has_reached_end);
    let end = trajectory::evaluate(&obj, stop);
    assert!(end.has_reached_end);
    assert!((end.position - Position::new(200.0, 50.0)).length() < 1e-6);
}

#[test]
fn test_duration_hides_object() {
    let mut obj = viper_with_path(&[(0.0, 0.0), (100.0, 0.0), (200.0, 50.0)]);
    obj.start_time = 5.0;
    obj.duration = Some(10.0);
    assert!(!trajectory::evaluate(&obj, 4.0).is_visible);
    assert!(trajectory::evaluate(&obj, 10.0).is_visible);
    assert!(!trajectory::evaluate(&obj, 15.5).is_visible);
}

// ---- Formations ----

#[test]
fn test_echelon_right_two_wingmen() {
    let mut lead = BattlefieldObject::new(
        ObjectId::from("lead"),
        ObjectType::Airplane(Airplane::Viper),
        Position::ZERO,
    );
    lead.formation = Formation::EchelonRight;
    lead.wingman_count = 2;
    lead.heading = 0.0;

    let state = trajectory::evaluate(&lead, 0.0);
    let wingmen = formation::wingmen(&lead, &state, 0.0);
    assert_eq!(wingmen.len(), 2);

    let expected_angle = geometry::angle_from_heading(0.0) + 3.0 * std::f64::consts::FRAC_PI_4;
    for (w, distance) in wingmen.iter().zip([32.0, 64.0]) {
        let offset = w.position - state.position;
        assert!((offset.length() - distance).abs() < 1e-9);
        assert!((geometry::angle_of(offset) - expected_angle).abs() < 1e-9);
        assert_eq!(w.heading, 0.0);
        assert_eq!(w.leader.as_ref(), Some(&lead.id));
    }
    assert_eq!(wingmen[0].id.as_str(), "lead-1");
}

#[test]
fn test_trail_zero_speed_sits_on_lead() {
    let mut lead = viper_with_path(&[(0.0, 0.0), (100.0, 0.0), (200.0, 50.0)]);
    lead.formation = Formation::Trail;
    lead.wingman_count = 3;
    lead.speed = 0.0;
    let state = trajectory::evaluate(&lead, 1.0);
    for w in formation::wingmen(&lead, &state, 1.0) {
        assert!((w.position - state.position).length() < 1e-9);
        assert!(w.position.x.is_finite());
    }
}

// ---- Board engine ----

#[test]
fn test_place_and_draw_path() {
    let mut board = BriefingBoard::default();
    place_viper(&mut board, Position::new(0.0, 0.0));
    draw(&mut board, &[(10.0, 0.0), (50.0, 0.0), (100.0, 0.0), (150.0, 0.0)]);
    let snapshot = board.snapshot(0.0);

    assert_eq!(board.object_count(), 1);
    assert!(board.drawing().is_none());
    let scenario = board.to_scenario();
    let viper = &scenario.objects[0];
    // The 10 px sample is under the spacing threshold.
    assert_eq!(viper.path.len(), 4);
    assert!((viper.heading - 90.0).abs() < 1e-6);
    assert_eq!(viper.coalition, Coalition::Blue);

    assert_eq!(snapshot.objects.len(), 1);
    assert!(snapshot.final_stop_time > 0.0);
    assert!((snapshot.final_stop_time - trajectory::stop_time(viper)).abs() < 1e-9);
}

#[test]
fn test_drawing_smooth_types_by_default() {
    let mut board = BriefingBoard::default();
    board.queue_command(BoardCommand::PlaceObject {
        object_type: ObjectType::Helicopter(Helicopter::Apache),
        coalition: Coalition::Red,
        position: Position::ZERO,
        start_time: 0.0,
    });
    board.process_commands();
    assert!(board.drawing().is_some());

    // Placing the next object ends the previous drawing.
    place_viper(&mut board, Position::new(300.0, 300.0));
    board.process_commands();
    let drawing = board.drawing().unwrap();
    let viper = board.object(&drawing).unwrap();
    assert_eq!(viper.object_type, ObjectType::Airplane(Airplane::Viper));
}

#[test]
fn test_static_objects_do_not_draw() {
    let mut board = BriefingBoard::default();
    board.queue_command(BoardCommand::PlaceObject {
        object_type: ObjectType::Static(StaticSite::SamSite),
        coalition: Coalition::Red,
        position: Position::new(5.0, 5.0),
        start_time: 0.0,
    });
    board.queue_command(BoardCommand::ExtendPath {
        position: Position::new(100.0, 100.0),
        mode: CreationMode::Normal,
    });
    let snapshot = board.snapshot(0.0);
    assert!(board.drawing().is_none());
    assert_eq!(snapshot.objects[0].position, Position::new(5.0, 5.0));
    assert!(board.to_scenario().objects[0].path.is_empty());
}

#[test]
fn test_place_measurement() {
    let mut board = BriefingBoard::default();
    let nm = geometry::nm_to_px(1.0);
    board.queue_command(BoardCommand::PlaceAnnotation {
        object_type: ObjectType::Measurement,
        from: Position::ZERO,
        to: Position::new(30.0 * nm, 0.0),
        name: None,
    });
    // Labels are not line annotations.
    board.queue_command(BoardCommand::PlaceAnnotation {
        object_type: ObjectType::Label,
        from: Position::ZERO,
        to: Position::new(1.0, 0.0),
        name: None,
    });
    board.process_commands();
    let scenario = board.to_scenario();
    assert_eq!(scenario.objects.len(), 1);
    assert_eq!(scenario.objects[0].name, "30 NM");
    assert_eq!(scenario.objects[0].path.len(), 2);
}

#[test]
fn test_property_commands() {
    let mut board = BriefingBoard::default();
    place_viper(&mut board, Position::ZERO);
    board.process_commands();
    let id = board.to_scenario().objects[0].id.clone();

    board.queue_commands([
        BoardCommand::SetName {
            id: id.clone(),
            name: "Colt 1".into(),
        },
        BoardCommand::SetCoalition {
            id: id.clone(),
            coalition: Coalition::Red,
        },
        BoardCommand::SetSpeed {
            id: id.clone(),
            speed: -5.0,
        },
        BoardCommand::SetStartTime {
            id: id.clone(),
            start_time: 30.0,
        },
        BoardCommand::SetDuration {
            id: id.clone(),
            duration: Some(60.0),
        },
        BoardCommand::SetWingmanCount {
            id: id.clone(),
            count: 3,
        },
        BoardCommand::SetFormation {
            id: id.clone(),
            formation: Formation::CombatSpread,
        },
        BoardCommand::SetEndType {
            id: id.clone(),
            end_type: Some(EndType::ExplosionMedium),
        },
        BoardCommand::SetName {
            id: ObjectId::from("missing"),
            name: "ignored".into(),
        },
    ]);
    let snapshot = board.snapshot(45.0);
    let obj = board.object(&id).unwrap();
    assert_eq!(obj.name, "Colt 1");
    assert_eq!(obj.coalition, Coalition::Red);
    assert_eq!(obj.speed, 0.0);
    assert_eq!(obj.start_time, 30.0);
    assert_eq!(obj.duration, Some(60.0));
    assert_eq!(obj.formation, Formation::CombatSpread);
    assert_eq!(obj.end_type, Some(EndType::ExplosionMedium));

    // Lead followed by its wingmen.
    let ids: Vec<&str> = snapshot.objects.iter().map(|s| s.id.as_str()).collect();
    let expected: Vec<String> = std::iter::once(id.to_string())
        .chain((1..=3).map(|n| id.wingman(n).to_string()))
        .collect();
    assert_eq!(ids, expected);
    assert!(snapshot.objects.iter().all(|s| s.is_visible));
}

#[test]
fn test_wingman_count_is_capped() {
    let mut board = BriefingBoard::default();
    place_viper(&mut board, Position::ZERO);
    board.process_commands();
    let id = board.to_scenario().objects[0].id.clone();

    board.queue_command(BoardCommand::SetWingmanCount {
        id: id.clone(),
        count: 4_000_000_000,
    });
    let snapshot = board.snapshot(0.0);
    assert_eq!(board.object(&id).unwrap().wingman_count, MAX_WINGMEN);
    assert_eq!(snapshot.objects.len(), 1 + MAX_WINGMEN as usize);
}

#[test]
fn test_non_finite_inputs_are_ignored() {
    let mut board = BriefingBoard::default();
    place_viper(&mut board, Position::ZERO);
    draw(&mut board, &[(50.0, 0.0), (f64::NAN, 10.0), (100.0, 0.0)]);
    board.process_commands();
    let id = board.to_scenario().objects[0].id.clone();

    board.queue_commands([
        BoardCommand::SetStartTime {
            id: id.clone(),
            start_time: f64::NAN,
        },
        BoardCommand::SetSpeed {
            id: id.clone(),
            speed: f64::INFINITY,
        },
        BoardCommand::SetDuration {
            id: id.clone(),
            duration: Some(f64::NEG_INFINITY),
        },
        BoardCommand::SetCamera {
            pan: Position::new(5.0, 5.0),
            zoom: f64::INFINITY,
        },
        BoardCommand::PlaceObject {
            object_type: ObjectType::Airplane(Airplane::Hornet),
            coalition: Coalition::Red,
            position: Position::new(f64::NAN, 0.0),
            start_time: 0.0,
        },
        BoardCommand::PlaceAnnotation {
            object_type: ObjectType::Arrow,
            from: Position::ZERO,
            to: Position::new(f64::INFINITY, 0.0),
            name: None,
        },
    ]);
    board.process_commands();

    let viper = board.object(&id).unwrap();
    assert_eq!(board.object_count(), 1);
    assert_eq!(viper.start_time, 0.0);
    assert_eq!(viper.speed, ObjectType::Airplane(Airplane::Viper).default_speed_knots());
    assert_eq!(viper.duration, None);
    assert!(viper.path.points().iter().all(|p| p.is_finite()));
    assert_eq!(viper.path.len(), 3);
    assert_eq!(board.camera(), Camera::default());
}

#[test]
fn test_delete_and_reset() {
    let mut board = BriefingBoard::default();
    place_viper(&mut board, Position::ZERO);
    place_viper(&mut board, Position::new(100.0, 0.0));
    board.process_commands();
    let first = board.to_scenario().objects[0].id.clone();

    board.queue_command(BoardCommand::DeleteObject { id: first.clone() });
    board.process_commands();
    assert_eq!(board.object_count(), 1);
    assert!(board.object(&first).is_none());

    board.queue_command(BoardCommand::Reset);
    let snapshot = board.snapshot(0.0);
    assert!(snapshot.objects.is_empty());
    assert_eq!(snapshot.final_stop_time, 0.0);
}

#[test]
fn test_scenario_metadata_commands() {
    let mut board = BriefingBoard::default();
    assert_eq!(board.name(), "New scenario");
    board.queue_commands([
        BoardCommand::SetScenarioName {
            name: "Strike package".into(),
        },
        BoardCommand::SetMap { map: "ca".into() },
        BoardCommand::SetCamera {
            pan: Position::new(-120.0, 40.0),
            zoom: 1.5,
        },
    ]);
    board.process_commands();
    let scenario = board.to_scenario();
    assert_eq!(scenario.name, "Strike package");
    assert_eq!(scenario.map, "ca");
    assert_eq!(scenario.camera.pan, Position::new(-120.0, 40.0));
    assert_eq!(scenario.camera.zoom, 1.5);
}

#[test]
fn test_scenario_round_trip_keeps_order() {
    let mut board = BriefingBoard::default();
    for x in [0.0, 100.0, 200.0] {
        place_viper(&mut board, Position::new(x, 0.0));
    }
    board.process_commands();
    let scenario = board.to_scenario();

    let reloaded = BriefingBoard::from_scenario(scenario.clone(), BoardConfig::default());
    assert_eq!(reloaded.to_scenario(), scenario);

    let xs: Vec<f64> = scenario.objects.iter().map(|o| o.position.x).collect();
    assert_eq!(xs, [0.0, 100.0, 200.0]);
}

#[test]
fn test_loaded_boards_keep_placing_after_existing_objects() {
    let scenario = Scenario {
        objects: vec![viper_with_path(&[(0.0, 0.0), (50.0, 0.0)])],
        ..Scenario::default()
    };
    let mut board = BriefingBoard::from_scenario(scenario, BoardConfig::default());
    place_viper(&mut board, Position::new(400.0, 0.0));
    board.process_commands();
    let objects = board.to_scenario().objects;
    assert_eq!(objects[0].id.as_str(), "viper1");
    assert_eq!(objects[1].position, Position::new(400.0, 0.0));
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let run = |seed| {
        let mut board = BriefingBoard::new(BoardConfig {
            seed,
            ..Default::default()
        });
        place_viper(&mut board, Position::ZERO);
        draw(&mut board, &[(50.0, 0.0), (100.0, 30.0), (150.0, 80.0)]);
        serde_json::to_string(&board.snapshot(5.0)).unwrap()
    };
    assert_eq!(run(12345), run(12345));
    assert_ne!(run(111), run(222));
}

// ---- Properties ----

proptest! {
    /// Visibility holds on exactly [start, start + duration].
    #[test]
    fn visibility_is_one_interval(
        start in 0.0f64..1000.0,
        duration in prop::option::of(0.0f64..1000.0),
        time in -100.0f64..3000.0,
    ) {
        let mut obj = viper_with_path(&[(0.0, 0.0), (100.0, 0.0), (200.0, 50.0)]);
        obj.start_time = start;
        obj.duration = duration;
        let end = start + duration.unwrap_or(f64::INFINITY);
        let state = trajectory::evaluate(&obj, time);
        prop_assert_eq!(state.is_visible, time >= start && time <= end);
    }

    /// Moving objects always take time to cover a non-empty curve.
    #[test]
    fn stop_time_after_start(
        raw in prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0), 3..10),
        start in 0.0f64..100.0,
        speed in 1.0f64..2000.0,
    ) {
        let points: Vec<(f64, f64)> = raw;
        let mut obj = viper_with_path(&points);
        obj.start_time = start;
        obj.speed = speed;
        let stop = trajectory::stop_time(&obj);
        prop_assert!(stop.is_finite());
        if obj.path.length() > 0.0 {
            prop_assert!(stop > start);
        }
        let state = trajectory::evaluate(&obj, (start + stop) / 2.0);
        prop_assert!(state.position.x.is_finite() && state.heading.is_finite());
    }
}
