// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use tracing::trace;

use crate::scalar::{clamp, clamp01, MIN_SMOOTH_TIME};
use crate::vec3::Vec3;

// Rational approximation of exp(-x) from Game Programming Gems 4, "Critically
// Damped Ease-In/Ease-Out Smoothing". Single-precision values widened to f64.
const DAMP_K2: f64 = 0.47999998927116394;
const DAMP_K3: f64 = 0.23499999940395355;

/// Linear interpolation from `a` to `b`; `t` is clamped to `[0, 1]`.
///
/// # Examples
/// ```
/// use echo_vec3::{lerp, Vec3};
/// let a = Vec3::ZERO;
/// let b = Vec3::new(10.0, 0.0, 0.0);
/// assert_eq!(lerp(a, b, 0.5).to_array(), [5.0, 0.0, 0.0]);
/// assert_eq!(lerp(a, b, 2.0), b);
/// ```
pub fn lerp(a: Vec3, b: Vec3, t: f64) -> Vec3 {
    lerp_unclamped(a, b, clamp01(t))
}

/// Linear interpolation without clamping `t`; extrapolates outside `[0, 1]`.
pub fn lerp_unclamped(a: Vec3, b: Vec3, t: f64) -> Vec3 {
    Vec3::new(
        a.x() + (b.x() - a.x()) * t,
        a.y() + (b.y() - a.y()) * t,
        a.z() + (b.z() - a.z()) * t,
    )
}

/// Spherical interpolation between the *directions* of `a` and `b`.
///
/// Both inputs are normalized first, so magnitudes are discarded and the
/// result is unit length (or zero). `t` is not clamped.
///
/// Degenerate inputs follow [`Vec3::normalized`]'s zero fallback:
/// - `slerp(ZERO, b, t)` sweeps from nothing toward `b`:
///   `normalized(b) * sin(t·π/2)`.
/// - `slerp(a, ZERO, t)` shrinks `a`: `normalized(a) * cos(t·π/2)`.
/// - `slerp(ZERO, ZERO, t)` is `ZERO`.
///
/// Antiparallel inputs have no defined arc; the orthogonal component
/// normalizes to zero and the result stays on the `a`/`-a` axis.
pub fn slerp(a: Vec3, b: Vec3, t: f64) -> Vec3 {
    let a_norm = a.normalized();
    let b_norm = b.normalized();

    let dot = clamp(a_norm.dot(&b_norm), -1.0, 1.0);
    let theta = libm::acos(dot) * t;

    let relative = b_norm.sub(&a_norm.scale(dot)).normalized();
    a_norm
        .scale(libm::cos(theta))
        .add(&relative.scale(libm::sin(theta)))
}

/// Moves `current` toward `target` by at most `max_delta`, never overshooting.
///
/// Policies, checked in order:
/// 1. `max_delta == 0` returns [`Vec3::ZERO`], *not* `current`. This matches
///    the behaviour existing callers rely on; wrap the call if "no movement"
///    should keep the position.
/// 2. When already at `target`, or `max_delta >= 0` reaches it, returns
///    `target` exactly.
/// 3. Otherwise advances `max_delta` along the direction to `target`. A
///    negative `max_delta` moves away from it.
pub fn move_towards(current: Vec3, target: Vec3, max_delta: f64) -> Vec3 {
    if max_delta == 0.0 {
        return Vec3::ZERO;
    }

    let dx = target.x() - current.x();
    let dy = target.y() - current.y();
    let dz = target.z() - current.z();
    let sqr = dx * dx + dy * dy + dz * dz;
    if sqr == 0.0 || (max_delta >= 0.0 && sqr <= max_delta * max_delta) {
        return target;
    }
    let dist = sqr.sqrt();
    Vec3::new(
        current.x() + dx / dist * max_delta,
        current.y() + dy / dist * max_delta,
        current.z() + dz / dist * max_delta,
    )
}

/// Velocity carried between [`smooth_damp`] steps.
///
/// Owned by the simulated entity and threaded through every step; the library
/// keeps no state of its own.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmoothDampState {
    /// Current velocity in units per second.
    pub velocity: Vec3,
}

impl SmoothDampState {
    /// State at rest.
    pub const fn new() -> Self {
        Self {
            velocity: Vec3::ZERO,
        }
    }

    /// State already moving with `velocity`.
    pub const fn with_velocity(velocity: Vec3) -> Self {
        Self { velocity }
    }

    /// Brings the state back to rest.
    pub fn reset(&mut self) {
        self.velocity = Vec3::ZERO;
    }
}

/// Tuning for a smooth-damp follower.
///
/// Defaults: `smooth_time = 0.3`, `max_speed = f64::INFINITY` (uncapped).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmoothDampParams {
    /// Approximate time to reach the target, in seconds.
    pub smooth_time: f64,
    /// Upper bound on approach speed, in units per second.
    pub max_speed: f64,
}

impl Default for SmoothDampParams {
    fn default() -> Self {
        Self {
            smooth_time: 0.3,
            max_speed: f64::INFINITY,
        }
    }
}

impl SmoothDampParams {
    /// Sets `smooth_time`.
    pub fn with_smooth_time(mut self, smooth_time: f64) -> Self {
        self.smooth_time = smooth_time;
        self
    }

    /// Sets `max_speed`.
    pub fn with_max_speed(mut self, max_speed: f64) -> Self {
        self.max_speed = max_speed;
        self
    }

    /// Advances one step with these parameters; see [`smooth_damp`].
    pub fn step(
        &self,
        current: Vec3,
        target: Vec3,
        state: &mut SmoothDampState,
        delta_time: f64,
    ) -> Vec3 {
        smooth_damp(
            current,
            target,
            state,
            self.smooth_time,
            delta_time,
            self.max_speed,
        )
    }
}

/// One step of a critically damped spring driving `current` toward `target`.
///
/// Reads and overwrites `state.velocity`, returning the new position.
///
/// * `smooth_time` is floored at [`MIN_SMOOTH_TIME`]; NaN is not floored
///   and propagates into the result.
/// * The offset to the target is capped at `max_speed * smooth_time`, which
///   bounds the approach speed.
/// * If the step would pass the target, the result snaps to `target` and the
///   velocity becomes `(target - target) / delta_time`: zero, or NaN when
///   `delta_time == 0`.
///
/// # Examples
/// ```
/// use echo_vec3::{smooth_damp, SmoothDampState, Vec3};
/// let mut state = SmoothDampState::new();
/// let target = Vec3::new(10.0, 0.0, 0.0);
/// let mut pos = Vec3::ZERO;
/// for _ in 0..600 {
///     pos = smooth_damp(pos, target, &mut state, 0.3, 1.0 / 60.0, f64::INFINITY);
/// }
/// assert!((pos.x() - 10.0).abs() < 1e-6);
/// ```
pub fn smooth_damp(
    current: Vec3,
    target: Vec3,
    state: &mut SmoothDampState,
    smooth_time: f64,
    delta_time: f64,
    max_speed: f64,
) -> Vec3 {
    // `f64::max` would swallow a NaN smooth_time.
    let smooth_time = if smooth_time < MIN_SMOOTH_TIME {
        MIN_SMOOTH_TIME
    } else {
        smooth_time
    };
    let omega = 2.0 / smooth_time;
    let x = omega * delta_time;
    let exp = 1.0 / (1.0 + x + DAMP_K2 * x * x + DAMP_K3 * x * x * x);

    let mut cx = current.x() - target.x();
    let mut cy = current.y() - target.y();
    let mut cz = current.z() - target.z();

    let max_change = max_speed * smooth_time;
    let max_change_sqr = max_change * max_change;
    let sqr = cx * cx + cy * cy + cz * cz;
    if sqr > max_change_sqr {
        let len = sqr.sqrt();
        cx = cx / len * max_change;
        cy = cy / len * max_change;
        cz = cz / len * max_change;
    }

    let tx = current.x() - cx;
    let ty = current.y() - cy;
    let tz = current.z() - cz;

    let v = state.velocity;
    let temp_x = (v.x() + omega * cx) * delta_time;
    let temp_y = (v.y() + omega * cy) * delta_time;
    let temp_z = (v.z() + omega * cz) * delta_time;
    state.velocity = Vec3::new(
        (v.x() - omega * temp_x) * exp,
        (v.y() - omega * temp_y) * exp,
        (v.z() - omega * temp_z) * exp,
    );

    let mut out = Vec3::new(
        tx + (cx + temp_x) * exp,
        ty + (cy + temp_y) * exp,
        tz + (cz + temp_z) * exp,
    );

    // Overshoot: the target now lies behind us relative to where we started.
    let to_target = target.sub(&current);
    let past_target = out.sub(&target);
    if to_target.dot(&past_target) > 0.0 {
        out = target;
        state.velocity = out.sub(&target) / delta_time;
        trace!(goal = %target, delta_time, "smooth_damp snapped to target");
    }
    out
}
