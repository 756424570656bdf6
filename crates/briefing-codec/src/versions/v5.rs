//! v5: adds object durations. The current version, and the only one written.
//!
//! `v5;name;map;panX;panY;zoom;reserved;record;record...`
//! record: `id~name~coalition~type~endType~x~y~heading~startTime~speed~wingmanCount~formation~duration~path`

use briefing_core::object::BattlefieldObject;
use briefing_core::scenario::Scenario;
use briefing_core::types::{Camera, ObjectId, Position};

use super::{records, slot};
use crate::error::DecodeError;
use crate::fields::{self, Tokens};
use crate::positions::{decode_positions, encode_positions, OBJECT_DELIMITER, PROPERTY_DELIMITER};
use crate::text::{decode_text, encode_string_safely};

pub const VERSION: &str = "v5";

const RECORDS_START: usize = 7;

pub fn decode(slots: &[&str]) -> Result<Scenario, DecodeError> {
    let objects = records(slots, RECORDS_START)
        .into_iter()
        .map(decode_record)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Scenario {
        name: decode_text(slot(slots, 1)),
        map: slot(slots, 2).to_string(),
        camera: fields::camera(slot(slots, 3), slot(slots, 4), slot(slots, 5))?,
        objects,
    })
}

fn decode_record(record: &str) -> Result<BattlefieldObject, DecodeError> {
    let mut t = Tokens::split(record, PROPERTY_DELIMITER);
    let id = ObjectId::new(t.field());
    let name = decode_text(t.field());
    let coalition = fields::coalition(t.field());
    let object_type = fields::object_type(t.field());
    let end_type = fields::end_type(t.field());
    let x = fields::number("x", t.field())?;
    let y = fields::number("y", t.field())?;
    let heading = fields::number("heading", t.field())?;
    let start_time = fields::number("startTime", t.field())?;
    let speed = fields::number("speed", t.field())?;
    let wingman_count = fields::wingman_count(t.field())?;
    let formation = fields::formation(t.field());
    let duration = fields::optional_number("duration", t.field())?;
    let points = decode_positions(t.field())?;

    Ok(BattlefieldObject {
        id,
        name,
        coalition,
        object_type,
        end_type,
        position: Position::new(x, y),
        heading,
        start_time,
        speed,
        path: points.into(),
        duration,
        wingman_count,
        formation,
    })
}

pub fn encode(scenario: &Scenario) -> String {
    let mut slots = vec![
        VERSION.to_string(),
        encode_string_safely(&scenario.name),
        scenario.map.clone(),
        fields::rounded(scenario.camera.pan.x),
        fields::rounded(scenario.camera.pan.y),
        fields::fixed(zoom(scenario.camera), 2),
        String::new(),
    ];
    slots.extend(scenario.objects.iter().map(encode_record));
    slots.join(&OBJECT_DELIMITER.to_string())
}

/// Zoom to write; a non-finite zoom falls back to the default.
fn zoom(camera: Camera) -> f64 {
    if camera.zoom.is_finite() {
        camera.zoom
    } else {
        Camera::default().zoom
    }
}

fn encode_record(object: &BattlefieldObject) -> String {
    [
        object.id.to_string(),
        encode_string_safely(&object.name),
        object.coalition.as_str().to_string(),
        object.object_type.as_str().to_string(),
        object.end_type.map_or("", |e| e.as_str()).to_string(),
        fields::rounded(object.position.x),
        fields::rounded(object.position.y),
        fields::rounded(object.heading),
        fields::fixed(object.start_time, 3),
        fields::rounded(object.speed),
        object.wingman_count.to_string(),
        object.formation.as_str().to_string(),
        object
            .duration
            .filter(|d| d.is_finite())
            .map(|d| fields::fixed(d, 3))
            .unwrap_or_default(),
        encode_positions(object.path.points()),
    ]
    .join(&PROPERTY_DELIMITER.to_string())
}
