//! v3: adds the map background and formations.
//!
//! `v3;name;map;record;record...`
//! record: `id~name~type~endType~x~y~heading~startTime~speed~wingmanCount~formation~path`

use briefing_core::enums::Coalition;
use briefing_core::object::BattlefieldObject;
use briefing_core::scenario::Scenario;
use briefing_core::types::{Camera, ObjectId, Position};

use super::{records, slot};
use crate::error::DecodeError;
use crate::fields::{self, Tokens};
use crate::positions::{decode_positions, PROPERTY_DELIMITER};
use crate::text::decode_text;

const RECORDS_START: usize = 3;

pub fn decode(slots: &[&str]) -> Result<Scenario, DecodeError> {
    let objects = records(slots, RECORDS_START)
        .into_iter()
        .map(decode_record)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Scenario {
        name: decode_text(slot(slots, 1)),
        map: slot(slots, 2).to_string(),
        camera: Camera::default(),
        objects,
    })
}

fn decode_record(record: &str) -> Result<BattlefieldObject, DecodeError> {
    let mut t = Tokens::split(record, PROPERTY_DELIMITER);
    let id = ObjectId::new(t.field());
    let name = decode_text(t.field());
    let object_type = fields::object_type(t.field());
    let end_type = fields::end_type(t.field());
    let x = fields::number("x", t.field())?;
    let y = fields::number("y", t.field())?;
    let heading = fields::number("heading", t.field())?;
    let start_time = fields::number("startTime", t.field())?;
    let speed = fields::number("speed", t.field())?;
    let wingman_count = fields::wingman_count(t.field())?;
    let formation = fields::formation(t.field());
    let points = decode_positions(t.field())?;

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
        wingman_count,
        formation,
    })
}
