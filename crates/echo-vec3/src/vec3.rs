// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};

use crate::error::Vec3Error;
use crate::scalar::NORMALIZE_EPSILON;

/// Deterministic 3D vector used by gameplay, animation, and physics code.
///
/// * Components are `f64` and may represent either points or directions
///   depending on the calling context.
/// * Axis convention is Y-up, Z-forward, X-right (see the named constants).
/// * Value semantics: every operation returns a new vector. Equality is exact
///   per-component comparison; callers needing tolerance must compare
///   components themselves.
/// * `#[repr(C)]` and [`Pod`], so a `&[Vec3]` can be viewed as `&[f64]` via
///   [`Vec3::slice_as_scalars`] for uploads without copying.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[f64; 3]", into = "[f64; 3]")
)]
pub struct Vec3 {
    data: [f64; 3],
}

impl Vec3 {
    /// `(0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// `(1, 1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// `(0, 1, 0)`.
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);

    /// `(0, -1, 0)`.
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);

    /// `(-1, 0, 0)`.
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);

    /// `(1, 0, 0)`.
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);

    /// `(0, 0, 1)`.
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);

    /// `(0, 0, -1)`.
    pub const BACK: Self = Self::new(0.0, 0.0, -1.0);

    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { data: [x, y, z] }
    }

    /// Returns the zero vector.
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Returns `(1, 1, 1)`.
    pub const fn one() -> Self {
        Self::ONE
    }

    /// X component.
    pub fn x(&self) -> f64 {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> f64 {
        self.data[1]
    }

    /// Z component.
    pub fn z(&self) -> f64 {
        self.data[2]
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f64; 3] {
        self.data
    }

    // Applies `f` to each component.
    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            data: self.data.map(f),
        }
    }

    // Combines matching components of `self` and `other` with `f`.
    fn zip_with(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(f(ax, bx), f(ay, by), f(az, bz))
    }

    /// Views a slice of vectors as a flat `[x0, y0, z0, x1, ...]` scalar slice.
    pub fn slice_as_scalars(points: &[Self]) -> &[f64] {
        bytemuck::cast_slice(points)
    }

    /// `self + other`, component by component.
    pub fn add(&self, other: &Self) -> Self {
        self.zip_with(*other, |a, b| a + b)
    }

    /// `self - other`; for two points, the offset leading from `other` to `self`.
    pub fn sub(&self, other: &Self) -> Self {
        self.zip_with(*other, |a, b| a - b)
    }

    /// Every component multiplied by `scalar`.
    pub fn scale(&self, scalar: f64) -> Self {
        self.map(|c| c * scalar)
    }

    /// Hadamard product: `(ax·bx, ay·by, az·bz)`.
    pub fn component_scale(&self, other: &Self) -> Self {
        self.zip_with(*other, |a, b| a * b)
    }

    /// `ax·bx + ay·by + az·bz`, summed left to right.
    pub fn dot(&self, other: &Self) -> f64 {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        ax * bx + ay * by + az * bz
    }

    /// Right-handed cross product `self × other`; `RIGHT × UP == FORWARD`.
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Euclidean length.
    pub fn magnitude(&self) -> f64 {
        self.sqr_magnitude().sqrt()
    }

    /// Length squared; skips the square root when only comparing lengths.
    pub fn sqr_magnitude(&self) -> f64 {
        self.dot(self)
    }

    /// Returns the unit vector in the same direction, or [`Vec3::ZERO`] when
    /// the magnitude is at or below [`NORMALIZE_EPSILON`].
    ///
    /// The threshold is a degeneracy guard, not a precision bound: vectors
    /// that short are treated as having no direction so downstream callers
    /// can detect them deterministically.
    pub fn normalized(&self) -> Self {
        let len = self.magnitude();
        if len > NORMALIZE_EPSILON {
            // Divide rather than multiply by the reciprocal; the two round
            // differently.
            return self.map(|c| c / len);
        }
        Self::ZERO
    }
}

/// Dot product of two vectors.
pub fn dot(a: Vec3, b: Vec3) -> f64 {
    a.dot(&b)
}

/// Cross product `a × b`.
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(&b)
}

/// Element-wise product of two vectors.
pub fn component_scale(a: Vec3, b: Vec3) -> Vec3 {
    a.component_scale(&b)
}

/// Squared length of `v`.
pub fn sqr_magnitude(v: Vec3) -> f64 {
    v.sqr_magnitude()
}

impl From<[f64; 3]> for Vec3 {
    fn from(value: [f64; 3]) -> Self {
        Self { data: value }
    }
}

impl From<(f64, f64, f64)> for Vec3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(value: Vec3) -> Self {
        value.data
    }
}

/// Builds a vector from a slice that must hold exactly three components.
///
/// # Examples
/// ```
/// use echo_vec3::{Vec3, Vec3Error};
/// let v = Vec3::try_from(&[1.0, 2.0, 3.0][..]);
/// assert_eq!(v, Ok(Vec3::new(1.0, 2.0, 3.0)));
/// assert_eq!(Vec3::try_from(&[1.0][..]), Err(Vec3Error::Length { len: 1 }));
/// ```
impl TryFrom<&[f64]> for Vec3 {
    type Error = Vec3Error;

    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        let data: [f64; 3] = value
            .try_into()
            .map_err(|_| Vec3Error::Length { len: value.len() })?;
        Ok(Self { data })
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3::add(&self, &rhs)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3::sub(&self, &rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs.scale(self)
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        self.map(|c| c / rhs)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f64> for Vec3 {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}
