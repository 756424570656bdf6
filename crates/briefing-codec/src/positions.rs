//! Compact position-sequence encoding.
//!
//! The first point is written as two full numbers. Every later point is a
//! pair of rounded deltas from the previous point; a delta that fits the
//! alphabet is one character, anything else is a full number. Full numbers
//! are base-36 integers wrapped in `_`.
//!
//! The alphabet and delimiters are part of the link format and never change.

use briefing_core::types::Position;

use crate::error::DecodeError;

/// Separates top-level slots and records.
pub const OBJECT_DELIMITER: char = ';';
/// Separates fields inside a record.
pub const PROPERTY_DELIMITER: char = '~';
/// Opens and closes a full number.
pub const FULL_NUMBER_DELIMITER: char = '_';

/// Unreserved URI characters, minus the three delimiters.
pub const ENCODING_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789?/:@-.!$&'()*+,=";

const ALPHABET_LEN: i64 = ENCODING_ALPHABET.len() as i64;
/// Alphabet index of a zero delta.
pub const ZERO_INDEX: i64 = ALPHABET_LEN / 2;
/// Deltas strictly between these bounds are written as one character.
const MAX_COMPACT_VALUE: i64 = ALPHABET_LEN - ZERO_INDEX;
const MIN_COMPACT_VALUE: i64 = -ZERO_INDEX - 1;

const BASE36_DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Round half up, matching the rounding old links were written with.
pub fn js_round(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Lowercase base-36 of `n` rounded half up, `-` prefixed when negative.
pub fn encode_int(n: f64) -> String {
    let value = js_round(n) as i64;
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    let mut rest = value.unsigned_abs();
    while rest > 0 {
        digits.push(BASE36_DIGITS[(rest % 36) as usize]);
        rest /= 36;
    }
    if value < 0 {
        digits.push(b'-');
    }
    digits.iter().rev().map(|&d| d as char).collect()
}

pub fn decode_int(s: &str) -> Result<i64, DecodeError> {
    i64::from_str_radix(s, 36).map_err(|_| DecodeError::InvalidInteger(s.to_string()))
}

fn encode_full_number(out: &mut String, n: f64) {
    out.push(FULL_NUMBER_DELIMITER);
    out.push_str(&encode_int(n));
    out.push(FULL_NUMBER_DELIMITER);
}

fn encode_delta(out: &mut String, delta: f64) {
    let d = delta as i64;
    if d < MAX_COMPACT_VALUE && d > MIN_COMPACT_VALUE {
        out.push(ENCODING_ALPHABET.as_bytes()[(ZERO_INDEX + d) as usize] as char);
    } else {
        encode_full_number(out, delta);
    }
}

/// Non-finite points are skipped.
pub fn encode_positions(points: &[Position]) -> String {
    let mut out = String::new();
    let points: Vec<Position> = points.iter().copied().filter(|p| p.is_finite()).collect();
    let Some((&first, rest)) = points.split_first() else {
        return out;
    };
    encode_full_number(&mut out, first.x);
    encode_full_number(&mut out, first.y);

    let mut prev = first;
    for &p in rest {
        encode_delta(&mut out, js_round(p.x - prev.x));
        encode_delta(&mut out, js_round(p.y - prev.y));
        prev = p;
    }
    out
}

pub fn decode_positions(data: &str) -> Result<Vec<Position>, DecodeError> {
    let mut points = Vec::new();
    let mut full_number: Option<(usize, String)> = None;
    let mut pending: Option<i64> = None;
    let mut prev = (0_i64, 0_i64);

    for (column, ch) in data.chars().enumerate() {
        let delta = match full_number.take() {
            Some((start, digits)) => {
                if ch == FULL_NUMBER_DELIMITER {
                    decode_int(&digits)?
                } else {
                    let mut digits = digits;
                    digits.push(ch);
                    full_number = Some((start, digits));
                    continue;
                }
            }
            None if ch == FULL_NUMBER_DELIMITER => {
                full_number = Some((column, String::new()));
                continue;
            }
            None => match ENCODING_ALPHABET.find(ch) {
                Some(index) => index as i64 - ZERO_INDEX,
                None => return Err(DecodeError::InvalidCharacter { ch, column }),
            },
        };

        match pending.take() {
            None => pending = Some(delta),
            Some(dx) => {
                let (Some(x), Some(y)) = (prev.0.checked_add(dx), prev.1.checked_add(delta)) else {
                    return Err(DecodeError::CoordinateOverflow { column });
                };
                prev = (x, y);
                points.push(Position::new(x as f64, y as f64));
            }
        }
    }

    if let Some((column, _)) = full_number {
        return Err(DecodeError::UnterminatedNumber { column });
    }
    if pending.is_some() {
        return Err(DecodeError::DanglingCoordinate);
    }
    Ok(points)
}
