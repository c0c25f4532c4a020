// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Sampling a straight segment into evenly spaced waypoints.
//!
//! All three entry points produce the same sequence:
//! - [`path_points`] is the lazy iterator and the single implementation.
//! - [`move_path`] collects it into a fresh `Vec`.
//! - [`move_path_into`] appends to a caller-owned buffer for allocation-free
//!   reuse across frames. It never clears the buffer.
//!
//! Sequence rules for a segment of length `D` and spacing `step`:
//! - `[current, target]` when `D == 0`, `step == 0`, `step < 0`,
//!   `0 < D <= step`, or `D` is not finite.
//! - Otherwise `current`, then the point at each `step, 2·step, ...` strictly
//!   less than `D`, then `target`. The offsets are accumulated by repeated
//!   addition, so for `D` not a multiple of `step` the count is
//!   `2 + floor(D / step)`.

use core::iter::FusedIterator;

use tracing::trace;

use crate::vec3::Vec3;

// Upper bound on up-front reservation; longer paths grow the buffer as usual.
const PRESIZE_LIMIT: usize = 1 << 16;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Stage {
    Start,
    Sampling,
    End,
    Done,
}

/// Lazy iterator over the waypoints from `current` to `target`.
///
/// Created by [`path_points`].
#[derive(Debug, Clone)]
pub struct PathPoints {
    current: Vec3,
    target: Vec3,
    // Unit direction, componentwise `diff / distance`.
    dir: [f64; 3],
    step: f64,
    distance: f64,
    delta: f64,
    stage: Stage,
}

impl PathPoints {
    fn new(current: Vec3, target: Vec3, step: f64) -> Self {
        let dx = target.x() - current.x();
        let dy = target.y() - current.y();
        let dz = target.z() - current.z();
        let sqr = dx * dx + dy * dy + dz * dz;
        let distance = sqr.sqrt();

        let degenerate = sqr == 0.0
            || step == 0.0
            || (step > 0.0 && sqr <= step * step)
            || step < 0.0
            || !distance.is_finite();
        if degenerate {
            trace!(step, distance, "path has no intermediate waypoints");
        }

        Self {
            current,
            target,
            dir: [dx / distance, dy / distance, dz / distance],
            step,
            // Negative infinity makes `delta < distance` fail, leaving only
            // the endpoints.
            distance: if degenerate {
                f64::NEG_INFINITY
            } else {
                distance
            },
            delta: step,
            stage: Stage::Start,
        }
    }

    /// Estimated number of waypoints still to be yielded.
    ///
    /// Exact except when accumulated rounding in the offsets crosses a
    /// multiple of `step`; meant for pre-sizing buffers. Saturates at
    /// `usize::MAX` for paths too finely sampled to count.
    pub fn capacity_hint(&self) -> usize {
        let sampled = || {
            if self.delta < self.distance {
                // `as` saturates; the additions must too.
                (((self.distance - self.delta) / self.step) as usize).saturating_add(1)
            } else {
                0
            }
        };
        match self.stage {
            Stage::Start => sampled().saturating_add(2),
            Stage::Sampling => sampled().saturating_add(1),
            Stage::End => 1,
            Stage::Done => 0,
        }
    }

    fn point_at(&self, offset: f64) -> Vec3 {
        Vec3::new(
            self.current.x() + self.dir[0] * offset,
            self.current.y() + self.dir[1] * offset,
            self.current.z() + self.dir[2] * offset,
        )
    }
}

impl Iterator for PathPoints {
    type Item = Vec3;

    fn next(&mut self) -> Option<Vec3> {
        match self.stage {
            Stage::Start => {
                self.stage = Stage::Sampling;
                Some(self.current)
            }
            Stage::Sampling => {
                if self.delta < self.distance {
                    let point = self.point_at(self.delta);
                    let next = self.delta + self.step;
                    if next == self.delta {
                        // Offset no longer advances at this magnitude.
                        trace!(delta = self.delta, step = self.step, "path sampling stalled");
                        self.stage = Stage::End;
                    } else {
                        self.delta = next;
                    }
                    return Some(point);
                }
                self.stage = Stage::Done;
                Some(self.target)
            }
            Stage::End => {
                self.stage = Stage::Done;
                Some(self.target)
            }
            Stage::Done => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower = match self.stage {
            Stage::Start => 2,
            Stage::Sampling | Stage::End => 1,
            Stage::Done => 0,
        };
        (lower, None)
    }
}

impl FusedIterator for PathPoints {}

/// Lazily samples waypoints from `current` to `target`, `step` apart.
///
/// See the [module docs](self) for the exact sequence rules.
pub fn path_points(current: Vec3, target: Vec3, step: f64) -> PathPoints {
    PathPoints::new(current, target, step)
}

/// Samples waypoints from `current` to `target`, `step` apart, into a new
/// `Vec`. Both endpoints are included.
///
/// # Examples
/// ```
/// use echo_vec3::{move_path, Vec3};
/// let path = move_path(Vec3::ZERO, Vec3::new(0.0, 100.0, 0.0), 1.0);
/// assert_eq!(path.len(), 101);
/// assert_eq!(path[0], Vec3::ZERO);
/// assert_eq!(path[100], Vec3::new(0.0, 100.0, 0.0));
/// ```
pub fn move_path(current: Vec3, target: Vec3, step: f64) -> Vec<Vec3> {
    let points = path_points(current, target, step);
    let mut out = Vec::with_capacity(points.capacity_hint().min(PRESIZE_LIMIT));
    out.extend(points);
    out
}

/// Appends the waypoints from `current` to `target` onto `out`.
///
/// Existing contents of `out` are kept; truncate it first when reusing one
/// buffer for independent paths.
pub fn move_path_into(current: Vec3, target: Vec3, step: f64, out: &mut Vec<Vec3>) {
    let points = path_points(current, target, step);
    out.reserve(points.capacity_hint().min(PRESIZE_LIMIT));
    out.extend(points);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_hint_matches_len_for_simple_segments() {
        let pts = path_points(Vec3::ZERO, Vec3::new(10.5, 0.0, 0.0), 1.0);
        let hint = pts.capacity_hint();
        assert_eq!(hint, pts.count());
    }

    #[test]
    fn capacity_hint_degenerate_is_two() {
        assert_eq!(path_points(Vec3::ZERO, Vec3::ZERO, 1.0).capacity_hint(), 2);
        assert_eq!(path_points(Vec3::ZERO, Vec3::ONE, -1.0).capacity_hint(), 2);
    }

    #[test]
    fn capacity_hint_saturates_on_huge_ratios() {
        let fine = path_points(Vec3::ZERO, Vec3::ONE, 1e-300);
        assert_eq!(fine.capacity_hint(), usize::MAX);

        let long = path_points(Vec3::ZERO, Vec3::new(1e20, 0.0, 0.0), 1.0);
        assert_eq!(long.capacity_hint(), usize::MAX);

        let mut started = path_points(Vec3::ZERO, Vec3::ONE, 1e-300);
        assert_eq!(started.next(), Some(Vec3::ZERO));
        assert_eq!(started.capacity_hint(), usize::MAX);
    }

    #[test]
    fn stalled_accumulator_terminates() {
        // At 2^60 a step of 1 is lost to rounding.
        let far = Vec3::new((1_u64 << 61) as f64, 0.0, 0.0);
        let mut pts = path_points(Vec3::ZERO, far, 1.0);
        pts.delta = far.x() / 2.0;
        let rest: Vec<_> = pts.skip(1).collect();
        assert_eq!(rest.len(), 2);
        assert_eq!(rest[1], far);
    }

    #[test]
    fn fused_after_exhaustion() {
        let mut pts = path_points(Vec3::ZERO, Vec3::ONE, 10.0);
        assert_eq!(pts.by_ref().count(), 2);
        assert_eq!(pts.next(), None);
        assert_eq!(pts.next(), None);
    }
}
