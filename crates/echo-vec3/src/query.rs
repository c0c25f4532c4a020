// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::scalar::{clamp, ANGLE_EPSILON, PROJECT_EPSILON, RAD_TO_DEG};
use crate::vec3::Vec3;

/// Euclidean distance between two points.
pub fn distance(a: Vec3, b: Vec3) -> f64 {
    a.sub(&b).magnitude()
}

/// Unsigned angle between two directions, in degrees within `[0, 180]`.
///
/// Returns `0.0` when either input is (near) zero-length, i.e. when
/// `sqrt(|from|² · |to|²)` is below [`ANGLE_EPSILON`].
///
/// # Examples
/// ```
/// use echo_vec3::{angle, Vec3};
/// let a = angle(Vec3::UP, Vec3::RIGHT);
/// assert!((a - 90.0).abs() < 1e-3);
/// assert_eq!(angle(Vec3::ZERO, Vec3::UP), 0.0);
/// ```
pub fn angle(from: Vec3, to: Vec3) -> f64 {
    let den = (from.sqr_magnitude() * to.sqr_magnitude()).sqrt();
    if den < ANGLE_EPSILON {
        return 0.0;
    }
    libm::acos(clamp(from.dot(&to) / den, -1.0, 1.0)) * RAD_TO_DEG
}

/// Projects `vector` onto the line spanned by `on_normal`.
///
/// `on_normal` need not be unit length. Returns [`Vec3::ZERO`] when
/// `|on_normal|²` is below [`PROJECT_EPSILON`].
pub fn project(vector: Vec3, on_normal: Vec3) -> Vec3 {
    let sqr = on_normal.dot(&on_normal);
    if sqr < PROJECT_EPSILON {
        return Vec3::ZERO;
    }
    let d = vector.dot(&on_normal);
    Vec3::new(
        on_normal.x() * d / sqr,
        on_normal.y() * d / sqr,
        on_normal.z() * d / sqr,
    )
}

/// Mirrors `v` across the plane whose normal is `in_normal`.
///
/// `in_normal` is assumed to be unit length and is not renormalized; a
/// non-unit normal scales the reflected component accordingly.
pub fn reflect(v: Vec3, in_normal: Vec3) -> Vec3 {
    let k = -2.0 * in_normal.dot(&v);
    Vec3::new(
        k * in_normal.x() + v.x(),
        k * in_normal.y() + v.y(),
        k * in_normal.z() + v.z(),
    )
}

/// Returns `v` unchanged when `|v| <= max_length`; otherwise `v` rescaled to
/// exactly `max_length`.
pub fn clamp_magnitude(v: Vec3, max_length: f64) -> Vec3 {
    let sqr = v.sqr_magnitude();
    if sqr <= max_length * max_length {
        return v;
    }
    let len = sqr.sqrt();
    Vec3::new(
        v.x() / len * max_length,
        v.y() / len * max_length,
        v.z() / len * max_length,
    )
}

/// Per-component minimum. A NaN in either input yields NaN in that component,
/// and `-0.0` orders below `0.0`.
pub fn min(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(
        min_component(a.x(), b.x()),
        min_component(a.y(), b.y()),
        min_component(a.z(), b.z()),
    )
}

/// Per-component maximum. A NaN in either input yields NaN in that component,
/// and `0.0` orders above `-0.0`.
pub fn max(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(
        max_component(a.x(), b.x()),
        max_component(a.y(), b.y()),
        max_component(a.z(), b.z()),
    )
}

// `f64::min`/`max` ignore NaN and leave the sign of equal zeros unspecified.
fn min_component(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        return f64::NAN;
    }
    if a < b || (a == b && a.is_sign_negative()) {
        a
    } else {
        b
    }
}

fn max_component(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        return f64::NAN;
    }
    if a > b || (a == b && a.is_sign_positive()) {
        a
    } else {
        b
    }
}
