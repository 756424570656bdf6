//! Geometry kernel: stateless 2-vector helpers and distance conversions.
//!
//! Headings are degrees with 0 pointing up the screen and increasing
//! clockwise. Angles are radians in screen space (x right, y down), as
//! returned by `atan2(dy, dx)`.

use crate::constants::{KM_PER_NM, PIXELS_PER_KM};
use crate::types::Position;

pub fn add(a: Position, b: Position) -> Position {
    a + b
}

/// Vector from `p0` to `p1`.
pub fn delta(p0: Position, p1: Position) -> Position {
    p1 - p0
}

pub fn length(v: Position) -> f64 {
    v.length()
}

/// Unit vector along `v`, or zero for a zero-length input.
pub fn normalize(v: Position) -> Position {
    v.normalize_or_zero()
}

/// `v` rescaled to `len`, or zero for a zero-length input.
pub fn scale_to_length(v: Position, len: f64) -> Position {
    normalize(v) * len
}

pub fn dot(a: Position, b: Position) -> f64 {
    a.dot(b)
}

/// Projection of `v` onto the direction of `onto`. Zero when `onto` is zero.
pub fn project_onto(v: Position, onto: Position) -> Position {
    let len_sq = onto.length_squared();
    if len_sq <= f64::EPSILON {
        return Position::ZERO;
    }
    onto * (v.dot(onto) / len_sq)
}

/// Screen-space angle of `v` in radians.
pub fn angle_of(v: Position) -> f64 {
    v.y.atan2(v.x)
}

/// Unit vector pointing along `angle`.
pub fn from_angle(angle: f64) -> Position {
    Position::new(angle.cos(), angle.sin())
}

/// Heading in degrees for a screen-space angle.
pub fn heading_from_angle(angle: f64) -> f64 {
    90.0 + angle.to_degrees()
}

/// Screen-space angle for a heading in degrees.
pub fn angle_from_heading(heading: f64) -> f64 {
    (heading - 90.0).to_radians()
}

/// Wrap an angle difference into (-π, π].
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = (angle + std::f64::consts::PI).rem_euclid(std::f64::consts::TAU)
        - std::f64::consts::PI;
    if wrapped <= -std::f64::consts::PI {
        wrapped + std::f64::consts::TAU
    } else {
        wrapped
    }
}

pub fn px_to_km(px: f64) -> f64 {
    px / PIXELS_PER_KM
}

pub fn km_to_nm(km: f64) -> f64 {
    km / KM_PER_NM
}

pub fn px_to_nm(px: f64) -> f64 {
    km_to_nm(px_to_km(px))
}

pub fn nm_to_px(nm: f64) -> f64 {
    nm * KM_PER_NM * PIXELS_PER_KM
}
