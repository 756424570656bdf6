#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::commands::BoardCommand;
    use crate::enums::*;
    use crate::object::BattlefieldObject;
    use crate::scenario::Scenario;
    use crate::state::{BoardSnapshot, RenderState};
    use crate::types::{ObjectId, Position};

    /// Verify all wire enums round-trip through serde_json.
    #[test]
    fn test_coalition_serde() {
        for &v in Coalition::ALL {
            let json = serde_json::to_string(&v).unwrap();
            assert_eq!(json, format!("\"{}\"", v.as_str()));
            let back: Coalition = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_formation_serde() {
        for &v in Formation::ALL {
            let json = serde_json::to_string(&v).unwrap();
            let back: Formation = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
        assert_eq!(Formation::from_any_tag("abreast"), Some(Formation::CombatSpread));
    }

    #[test]
    fn test_object_type_tags_round_trip() {
        let mut all: Vec<ObjectType> = vec![
            ObjectType::Label,
            ObjectType::Measurement,
            ObjectType::Arrow,
            ObjectType::Line,
        ];
        all.extend(Airplane::ALL.iter().map(|&t| ObjectType::Airplane(t)));
        all.extend(Helicopter::ALL.iter().map(|&t| ObjectType::Helicopter(t)));
        all.extend(Ship::ALL.iter().map(|&t| ObjectType::Ship(t)));
        all.extend(GroundUnit::ALL.iter().map(|&t| ObjectType::Ground(t)));
        all.extend(StaticSite::ALL.iter().map(|&t| ObjectType::Static(t)));
        all.extend(Weapon::ALL.iter().map(|&t| ObjectType::Weapon(t)));

        for t in all {
            assert_eq!(ObjectType::from_tag(t.as_str()), Some(t), "tag {t}");
            let json = serde_json::to_string(&t).unwrap();
            let back: ObjectType = serde_json::from_str(&json).unwrap();
            assert_eq!(t, back);
        }
    }

    #[test]
    fn test_unknown_object_type_rejected() {
        assert_eq!(ObjectType::from_tag("zeppelin"), None);
        assert!(serde_json::from_str::<ObjectType>("\"zeppelin\"").is_err());
    }

    #[test]
    fn test_annotations_are_not_units() {
        assert!(ObjectType::Label.is_annotation());
        assert!(!ObjectType::Label.is_movable());
        assert!(ObjectType::Airplane(Airplane::Viper).is_unit());
        assert!(ObjectType::Airplane(Airplane::Viper).supports_formation());
        assert!(!ObjectType::Weapon(Weapon::Mk82).supports_formation());
        assert!(ObjectType::Weapon(Weapon::Mk82).is_movable());
        assert!(!ObjectType::Static(StaticSite::Airfield).is_movable());
    }

    /// Verify every command variant can be serialized to JSON.
    #[test]
    fn test_command_serde() {
        let commands = vec![
            BoardCommand::PlaceObject {
                object_type: ObjectType::Airplane(Airplane::Viper),
                coalition: Coalition::Blue,
                position: Position::new(10.0, 20.0),
                start_time: 0.0,
            },
            BoardCommand::ExtendPath {
                position: Position::new(50.0, 20.0),
                mode: CreationMode::FlySmooth,
            },
            BoardCommand::FinishPath,
            BoardCommand::PlaceAnnotation {
                object_type: ObjectType::Measurement,
                from: Position::ZERO,
                to: Position::new(100.0, 0.0),
                name: None,
            },
            BoardCommand::SetDuration {
                id: ObjectId::from("abc"),
                duration: Some(30.0),
            },
            BoardCommand::SetEndType {
                id: ObjectId::from("abc"),
                end_type: Some(EndType::ExplosionMedium),
            },
            BoardCommand::SetCamera {
                pan: Position::new(-5.0, 7.0),
                zoom: 1.5,
            },
            BoardCommand::Reset,
        ];
        for cmd in commands {
            let json = serde_json::to_string(&cmd).unwrap();
            assert!(json.contains("\"type\""), "untagged command: {json}");
            let _back: BoardCommand = serde_json::from_str(&json).unwrap();
        }
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = BoardSnapshot {
            time: 12.0,
            final_stop_time: 40.0,
            objects: vec![RenderState {
                id: ObjectId::from("abc"),
                position: Position::new(1.0, 2.0),
                heading: 90.0,
                is_visible: true,
                has_reached_end: false,
                end_sprite: None,
                leader: None,
            }],
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: BoardSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.objects, snapshot.objects);
        assert_eq!(back.get(&ObjectId::from("abc")).map(|s| s.heading), Some(90.0));
        assert!(back.get(&ObjectId::from("nope")).is_none());
    }

    #[test]
    fn test_scenario_serde_refits_paths() {
        let mut obj = BattlefieldObject::new(
            ObjectId::from("v1"),
            ObjectType::Airplane(Airplane::Viper),
            Position::ZERO,
        );
        obj.path.set_points(vec![
            Position::new(0.0, 0.0),
            Position::new(100.0, 0.0),
            Position::new(200.0, 50.0),
        ]);
        let scenario = Scenario {
            objects: vec![obj],
            ..Scenario::default()
        };
        let json = serde_json::to_string(&scenario).unwrap();
        let back: Scenario = serde_json::from_str(&json).unwrap();
        assert_eq!(back, scenario);
        let path = &back.objects[0].path;
        assert!(path.has_trajectory());
        assert!((path.length() - scenario.objects[0].path.length()).abs() < 1e-9);
    }

    proptest! {
        /// Curve samples stay finite and the curve starts and ends on the
        /// first and last control points.
        #[test]
        fn curve_endpoints_match_control_points(
            raw in prop::collection::vec((-1000.0f64..1000.0, -1000.0f64..1000.0), 3..12),
            t in 0.0f64..=1.0,
        ) {
            let points: Vec<Position> = raw.iter().map(|&(x, y)| Position::new(x, y)).collect();
            let path = crate::path::Path::from(points);
            if let Some(curve) = path.curve() {
                let first = curve.control_points()[0];
                let last = *curve.control_points().last().unwrap();
                prop_assert!((curve.point_at(0.0) - first).length() < 1e-6);
                prop_assert!((curve.point_at(1.0) - last).length() < 1e-6);
                let mid = curve.point_at(t);
                prop_assert!(mid.x.is_finite() && mid.y.is_finite());
                prop_assert!(curve.length() >= 0.0);
            }
        }

        /// Simplification never exceeds its budget and keeps the endpoints.
        #[test]
        fn simplify_respects_budget(
            raw in prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0), 2..80),
        ) {
            let points: Vec<Position> = raw.iter().map(|&(x, y)| Position::new(x, y)).collect();
            let out = crate::simplify::simplify(&points, 10.0, 20);
            prop_assert!(out.len() <= 20);
            prop_assert_eq!(out[0], points[0]);
            prop_assert_eq!(*out.last().unwrap(), *points.last().unwrap());
        }
    }
}
