//! Loading and saving whole scenarios as share-link data.
//!
//! `load_data` routes on the version tag to the matching frozen decoder.
//! `serialize_data` always writes the current version.

use briefing_core::scenario::Scenario;

use crate::error::DecodeError;
use crate::positions::OBJECT_DELIMITER;
use crate::versions::{v1, v2, v3, v4, v5};

/// Version written by [`serialize_data`].
pub const CURRENT_VERSION: &str = v5::VERSION;

type Decoder = fn(&[&str]) -> Result<Scenario, DecodeError>;

/// Every version ever published, oldest first.
const DECODERS: &[(&str, Decoder)] = &[
    ("v1", v1::decode),
    ("v2", v2::decode),
    ("v3", v3::decode),
    ("v4", v4::decode),
    ("v5", v5::decode),
];

/// Version tag of `data`, with or without the leading `#`.
pub fn data_version(data: &str) -> &str {
    let data = data.strip_prefix('#').unwrap_or(data);
    data.split(OBJECT_DELIMITER).next().unwrap_or("")
}

/// Decode link data of any published version.
pub fn load_data(data: &str) -> Result<Scenario, DecodeError> {
    let data = data.strip_prefix('#').unwrap_or(data);
    let slots: Vec<&str> = data.split(OBJECT_DELIMITER).collect();
    let version = slots.first().copied().unwrap_or("");

    let Some((_, decode)) = DECODERS.iter().find(|(tag, _)| *tag == version) else {
        return Err(DecodeError::UnknownVersion(version.to_string()));
    };
    let scenario = decode(slots.as_slice())?;
    log::info!(
        "link: loaded {version} scenario {:?} with {} objects",
        scenario.name,
        scenario.objects.len()
    );
    Ok(scenario)
}

/// Encode `scenario` as current-version link data, without a leading `#`.
pub fn serialize_data(scenario: &Scenario) -> String {
    v5::encode(scenario)
}

/// Re-encode link data of any version as the current version.
pub fn upgrade(data: &str) -> Result<String, DecodeError> {
    load_data(data).map(|scenario| serialize_data(&scenario))
}
