// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar helpers shared by the vector routines.
//!
//! Most named thresholds are single-precision literals widened to `f64`. They
//! are kept in that exact form (rather than the "round" decimal they
//! approximate) so degenerate-input guards trip at the same inputs as the
//! engines these routines are ported against.

/// Magnitude at or below which [`crate::Vec3::normalized`] returns zero
/// (`1e-5` rounded through `f32`).
pub const NORMALIZE_EPSILON: f64 = 9.999999747378752e-06;

/// Lower bound on `sqrt(|from|² · |to|²)` before [`crate::angle`] reports 0.
pub const ANGLE_EPSILON: f64 = 1.0000000036274937e-15;

/// Roughly the smallest positive normal `f32`; [`crate::project`] returns zero
/// when the squared length of the normal falls below it.
pub const PROJECT_EPSILON: f64 = 1.1754944e-38;

/// Degrees per radian, truncated the way game engines ship it.
///
/// Differs from `180 / π` (57.29577951...) past the fifth decimal place.
pub const RAD_TO_DEG: f64 = 57.29578;

/// Floor applied to `smooth_time` by [`crate::smooth_damp`].
pub const MIN_SMOOTH_TIME: f64 = 0.0001;

/// Clamps `value` to the inclusive `[min, max]` range.
///
/// The lower bound is checked first, so an inverted range (`min > max`)
/// returns `min` for values below it and `max` otherwise. NaN passes through
/// unchanged.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        return min;
    }
    if value > max {
        return max;
    }
    value
}

/// Clamps `value` to `[0, 1]`.
pub fn clamp01(value: f64) -> f64 {
    clamp(value, 0.0, 1.0)
}
