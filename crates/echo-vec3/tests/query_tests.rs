// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use echo_vec3::scalar::{PROJECT_EPSILON, RAD_TO_DEG};
use echo_vec3::{angle, clamp_magnitude, distance, max, min, project, reflect, Vec3};

fn approx_eq(a: f64, b: f64, tol: f64) {
    let diff = (a - b).abs();
    assert!(diff <= tol, "expected {b}, got {a} (diff {diff})");
}

fn approx_eq3(a: Vec3, b: Vec3, tol: f64) {
    for (x, y) in a.to_array().into_iter().zip(b.to_array()) {
        approx_eq(x, y, tol);
    }
}

#[test]
fn distance_is_magnitude_of_difference() {
    assert_eq!(distance(Vec3::ZERO, Vec3::new(2.0, 3.0, 6.0)), 7.0);
    assert_eq!(distance(Vec3::ONE, Vec3::ONE), 0.0);
    let a = Vec3::new(1.0, -4.0, 2.0);
    let b = Vec3::new(-2.0, 0.0, 2.0);
    assert_eq!(distance(a, b), distance(b, a));
}

#[test]
fn angle_in_degrees_uses_engine_constant() {
    // acos(0) * 57.29578, not exactly 90.
    assert_eq!(angle(Vec3::UP, Vec3::RIGHT), core::f64::consts::FRAC_PI_2 * RAD_TO_DEG);
    approx_eq(angle(Vec3::UP, Vec3::RIGHT), 90.0, 1e-5);
    approx_eq(angle(Vec3::UP, Vec3::DOWN), 180.0, 1e-4);
    assert_eq!(angle(Vec3::FORWARD, Vec3::FORWARD * 5.0), 0.0);
    approx_eq(angle(Vec3::new(1.0, 1.0, 0.0), Vec3::RIGHT), 45.0, 1e-4);
}

#[test]
fn angle_of_degenerate_input_is_zero() {
    assert_eq!(angle(Vec3::ZERO, Vec3::UP), 0.0);
    assert_eq!(angle(Vec3::UP, Vec3::ZERO), 0.0);
    // sqrt(1e-16 * 1e-16) = 1e-16 is below the 1e-15 guard.
    assert_eq!(angle(Vec3::new(1e-8, 0.0, 0.0), Vec3::new(0.0, 1e-8, 0.0)), 0.0);
}

#[test]
fn angle_clamps_rounding_past_unit_cosine() {
    let v = Vec3::new(0.1, 0.2, 0.3);
    let a = angle(v, v * 3.0);
    assert!(!a.is_nan());
    approx_eq(a, 0.0, 1e-5);
}

#[test]
fn project_onto_axis_and_arbitrary_normal() {
    let v = Vec3::new(3.0, 4.0, 5.0);
    assert_eq!(project(v, Vec3::UP).to_array(), [0.0, 4.0, 0.0]);
    assert_eq!(project(v, Vec3::UP * 10.0).to_array(), [0.0, 4.0, 0.0]);
    let n = Vec3::new(1.0, 1.0, 0.0);
    assert_eq!(project(v, n).to_array(), [3.5, 3.5, 0.0]);
}

#[test]
fn project_onto_degenerate_normal_is_zero() {
    assert_eq!(project(Vec3::ONE, Vec3::ZERO), Vec3::ZERO);
    let tiny = Vec3::new(1e-20, 0.0, 0.0);
    assert!(tiny.sqr_magnitude() < PROJECT_EPSILON);
    assert_eq!(project(Vec3::ONE, tiny), Vec3::ZERO);
}

#[test]
fn reflect_mirrors_across_plane() {
    let v = Vec3::new(1.0, -1.0, 0.0);
    assert_eq!(reflect(v, Vec3::UP).to_array(), [1.0, 1.0, 0.0]);
    assert_eq!(reflect(Vec3::RIGHT, Vec3::UP), Vec3::RIGHT);
    assert_eq!(reflect(Vec3::RIGHT, Vec3::RIGHT), Vec3::LEFT);
}

#[test]
fn reflect_twice_is_identity() {
    let n = Vec3::new(1.0, 2.0, -2.0).normalized();
    let v = Vec3::new(0.3, -7.0, 2.5);
    approx_eq3(reflect(reflect(v, n), n), v, 1e-12);
}

#[test]
fn reflect_does_not_renormalize() {
    // With |n| = 2 the normal component is scaled by 4 rather than mirrored.
    let r = reflect(Vec3::new(0.0, -1.0, 0.0), Vec3::UP * 2.0);
    assert_eq!(r.to_array(), [0.0, 7.0, 0.0]);
}

#[test]
fn clamp_magnitude_limits_length() {
    let v = Vec3::new(3.0, 0.0, 4.0);
    assert_eq!(clamp_magnitude(v, 10.0), v);
    assert_eq!(clamp_magnitude(v, 5.0), v);
    let c = clamp_magnitude(v, 2.5);
    assert_eq!(c.to_array(), [1.5, 0.0, 2.0]);
    approx_eq(c.magnitude(), 2.5, 1e-12);
}

#[test]
fn min_max_are_per_component() {
    let a = Vec3::new(1.0, 5.0, -3.0);
    let b = Vec3::new(2.0, -5.0, -4.0);
    assert_eq!(min(a, b).to_array(), [1.0, -5.0, -4.0]);
    assert_eq!(max(a, b).to_array(), [2.0, 5.0, -3.0]);
}
