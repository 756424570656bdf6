//! v1: comma-separated records, path as absolute base-36 coordinate pairs.
//!
//! `v1;name;record;record...`
//! record: `id,name,type,endType,x,y,heading,startTime,speed,x1,y1,x2,y2...`
//!
//! Names were written without escaping, so a comma in a name shifts every
//! later field of that record. Such records still load, with degraded
//! fields.

use briefing_core::enums::{Coalition, Formation};
use briefing_core::object::BattlefieldObject;
use briefing_core::scenario::Scenario;
use briefing_core::types::{Camera, ObjectId, Position};

use super::{records, slot};
use crate::error::DecodeError;
use crate::fields::{self, Tokens};
use crate::positions::decode_int;
use crate::text::decode_text;

const RECORDS_START: usize = 2;

pub fn decode(slots: &[&str]) -> Result<Scenario, DecodeError> {
    let objects = records(slots, RECORDS_START)
        .into_iter()
        .map(decode_record)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Scenario {
        name: decode_text(slot(slots, 1)),
        map: String::new(),
        camera: Camera::default(),
        objects,
    })
}

fn decode_record(record: &str) -> Result<BattlefieldObject, DecodeError> {
    let mut t = Tokens::split(record, ',');
    let id = ObjectId::new(t.field());
    let name = decode_text(t.field());
    let object_type = fields::object_type(t.field());
    let end_type = fields::end_type(t.field());
    let x = fields::number("x", t.field())?;
    let y = fields::number("y", t.field())?;
    let heading = fields::number("heading", t.field())?;
    let start_time = fields::number("startTime", t.field())?;
    let speed = fields::number("speed", t.field())?;
    let points = decode_path(t.rest())?;

    Ok(BattlefieldObject {
        id,
        name,
        coalition: Coalition::Neutral,
        object_type,
        end_type,
        position: Position::new(x, y),
        heading,
        start_time,
        speed,
        path: points.into(),
        duration: None,
        wingman_count: 0,
        formation: Formation::None,
    })
}

/// Absolute coordinate pairs. A pair with an empty token ends the path.
fn decode_path(tokens: &[&str]) -> Result<Vec<Position>, DecodeError> {
    let mut points = Vec::new();
    for pair in tokens.chunks(2) {
        let [x, y] = pair else { break };
        if x.is_empty() || y.is_empty() {
            break;
        }
        points.push(Position::new(decode_int(x)? as f64, decode_int(y)? as f64));
    }
    Ok(points)
}
