// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! echo-vec3: deterministic 3D vector math for gameplay, animation, and physics.
//!
//! This crate provides:
//! - The [`Vec3`] value type with named direction constants and arithmetic.
//! - Geometric queries ([`angle`], [`distance`], [`project`], [`reflect`],
//!   [`clamp_magnitude`]).
//! - Interpolation and motion ([`lerp`], [`slerp`], [`move_towards`],
//!   [`smooth_damp`]).
//! - Waypoint sampling along straight segments ([`move_path`],
//!   [`move_path_into`], [`path_points`]).
//!
//! Design notes:
//! - Every function is total. Degenerate inputs are handled by numeric
//!   threshold guards; NaN/Inf propagate per IEEE-754 and are never sanitized.
//! - Thresholds and polynomial coefficients are the exact `f64` widenings of
//!   the single-precision values game engines ship with, so results match
//!   bit-for-bit.
//! - Transcendentals go through `libm` so results do not depend on the host
//!   platform's math library.
//! - The only mutable state is caller-owned: [`SmoothDampState`] and the
//!   output buffer handed to [`move_path_into`].
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]

mod error;
/// Interpolation and motion steps (lerp, slerp, move-towards, smooth-damp).
pub mod motion;
/// Waypoint sampling along a straight segment.
pub mod path;
/// Geometric queries over vectors.
pub mod query;
/// Scalar helpers and named numeric thresholds.
pub mod scalar;
mod vec3;

pub use error::Vec3Error;
pub use motion::{
    lerp, lerp_unclamped, move_towards, slerp, smooth_damp, SmoothDampParams, SmoothDampState,
};
pub use path::{move_path, move_path_into, path_points, PathPoints};
pub use query::{angle, clamp_magnitude, distance, max, min, project, reflect};
pub use scalar::{clamp, clamp01};
pub use vec3::{component_scale, cross, dot, sqr_magnitude, Vec3};
