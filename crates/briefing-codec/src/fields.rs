//! Field-level primitives shared by the versioned decoders.
//!
//! Record layouts live in each version's module. This file only knows how
//! to read one field, so changing it must never change how an old link
//! decodes.

use briefing_core::constants::MAX_WINGMEN;
use briefing_core::enums::{Coalition, EndType, Formation, ObjectType};
use briefing_core::types::{Camera, Position};

use crate::error::DecodeError;
use crate::positions::js_round;

/// Cursor over a delimited record. Missing trailing fields read as empty.
pub(crate) struct Tokens<'a> {
    tokens: Vec<&'a str>,
    next: usize,
}

impl<'a> Tokens<'a> {
    pub(crate) fn split(record: &'a str, delimiter: char) -> Self {
        Self {
            tokens: record.split(delimiter).collect(),
            next: 0,
        }
    }

    pub(crate) fn field(&mut self) -> &'a str {
        let token = self.tokens.get(self.next).copied().unwrap_or("");
        self.next += 1;
        token
    }

    /// Unread tokens.
    pub(crate) fn rest(&self) -> &[&'a str] {
        self.tokens.get(self.next..).unwrap_or(&[])
    }
}

/// Decimal number; an empty field reads as 0.
pub(crate) fn number(field: &'static str, value: &str) -> Result<f64, DecodeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| DecodeError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

/// Decimal number, or `None` for an empty field.
pub(crate) fn optional_number(field: &'static str, value: &str) -> Result<Option<f64>, DecodeError> {
    if value.trim().is_empty() {
        Ok(None)
    } else {
        number(field, value).map(Some)
    }
}

pub(crate) fn count(field: &'static str, value: &str) -> Result<u32, DecodeError> {
    let n = number(field, value)?;
    Ok(js_round(n).clamp(0.0, u32::MAX as f64) as u32)
}

/// Wingman count, capped at [`MAX_WINGMEN`].
pub(crate) fn wingman_count(value: &str) -> Result<u32, DecodeError> {
    let n = count("wingmanCount", value)?;
    if n > MAX_WINGMEN {
        log::warn!("link: {n} wingmen requested, capping at {MAX_WINGMEN}");
    }
    Ok(n.min(MAX_WINGMEN))
}

/// Camera slot; empty keeps the default.
pub(crate) fn camera_slot(field: &'static str, value: &str, default: f64) -> Result<f64, DecodeError> {
    Ok(optional_number(field, value)?.unwrap_or(default))
}

pub(crate) fn camera(pan_x: &str, pan_y: &str, zoom: &str) -> Result<Camera, DecodeError> {
    let default = Camera::default();
    Ok(Camera {
        pan: Position::new(
            camera_slot("panX", pan_x, default.pan.x)?,
            camera_slot("panY", pan_y, default.pan.y)?,
        ),
        zoom: camera_slot("zoom", zoom, default.zoom)?,
    })
}

pub(crate) fn object_type(tag: &str) -> ObjectType {
    ObjectType::from_tag(tag).unwrap_or_else(|| {
        log::warn!("link: unknown object type {tag:?}, loading as label");
        ObjectType::Label
    })
}

pub(crate) fn end_type(tag: &str) -> Option<EndType> {
    if tag.is_empty() {
        return None;
    }
    let end_type = EndType::from_tag(tag);
    if end_type.is_none() {
        log::warn!("link: unknown end type {tag:?}, ignoring");
    }
    end_type
}

pub(crate) fn coalition(tag: &str) -> Coalition {
    Coalition::from_tag(tag).unwrap_or_else(|| {
        log::warn!("link: unknown coalition {tag:?}, loading as neutral");
        Coalition::Neutral
    })
}

pub(crate) fn formation(tag: &str) -> Formation {
    Formation::from_any_tag(tag).unwrap_or_else(|| {
        log::warn!("link: unknown formation {tag:?}, loading without formation");
        Formation::None
    })
}

/// Format `x` rounded half up as an integer. Non-finite writes 0.
pub(crate) fn rounded(x: f64) -> String {
    if !x.is_finite() {
        return "0".to_string();
    }
    (js_round(x) as i64).to_string()
}

/// Format `x` with `decimals` places. Non-finite writes 0.
pub(crate) fn fixed(x: f64, decimals: usize) -> String {
    let x = if x.is_finite() { x } else { 0.0 };
    format!("{x:.decimals$}")
}
