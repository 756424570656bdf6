//! Timeline system: the length of the scenario's scrub bar.

use briefing_core::object::BattlefieldObject;

use crate::trajectory;

/// Latest stop time over `objects`, never below zero.
///
/// Non-finite stop times are ignored so one bad object cannot break the
/// timeline.
pub fn final_stop_time<'a>(objects: impl IntoIterator<Item = &'a BattlefieldObject>) -> f64 {
    objects
        .into_iter()
        .map(trajectory::stop_time)
        .filter(|t| t.is_finite())
        .fold(0.0, f64::max)
}
