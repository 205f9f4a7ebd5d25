//! Checked vector types.
//!
//! `Point3` and `Vector` are permissive aliases. Directions that must never be
//! zero (normals, ray directions, camera axes) go through [`NonZeroVector`] or
//! [`NormalizedVector`], whose constructors fail with
//! [`DegenerateVectorError`] instead of producing NaNs.

use crate::compare;
use glam::DVec3;
use std::ops::{Deref, Neg};
use thiserror::Error;

/// A position in 3D space.
pub type Point3 = DVec3;

/// A displacement in 3D space. May be zero.
pub type Vector = DVec3;

/// Raised when an operation would produce a zero-length vector where one is
/// not allowed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("degenerate vector: result has zero length")]
pub struct DegenerateVectorError;

/// True when every component is within tolerance of zero.
pub fn is_zero_vector(v: DVec3) -> bool {
    compare::is_zero(v.x) && compare::is_zero(v.y) && compare::is_zero(v.z)
}

/// Component-wise tolerance equality.
pub fn approx_eq(a: DVec3, b: DVec3) -> bool {
    is_zero_vector(a - b)
}

/// A vector guaranteed to have non-zero length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonZeroVector(DVec3);

impl NonZeroVector {
    pub fn new(v: DVec3) -> Result<Self, DegenerateVectorError> {
        if is_zero_vector(v) {
            Err(DegenerateVectorError)
        } else {
            Ok(Self(v))
        }
    }

    /// The vector pointing from `from` to `to`.
    pub fn between(from: Point3, to: Point3) -> Result<Self, DegenerateVectorError> {
        Self::new(to - from)
    }

    #[inline]
    pub fn get(self) -> DVec3 {
        self.0
    }

    pub fn scale(self, factor: f64) -> Result<Self, DegenerateVectorError> {
        Self::new(self.0 * factor)
    }

    pub fn cross(self, other: impl Into<DVec3>) -> Result<Self, DegenerateVectorError> {
        Self::new(self.0.cross(other.into()))
    }

    /// Angle to `other` in radians, in `[0, π]`.
    pub fn angle(self, other: NonZeroVector) -> f64 {
        self.normalized().angle(other.normalized())
    }

    pub fn normalized(self) -> NormalizedVector {
        NormalizedVector(self.0 / self.0.length())
    }

    pub fn reversed(self) -> Self {
        Self(-self.0)
    }
}

impl Deref for NonZeroVector {
    type Target = DVec3;

    fn deref(&self) -> &DVec3 {
        &self.0
    }
}

impl From<NonZeroVector> for DVec3 {
    fn from(v: NonZeroVector) -> DVec3 {
        v.0
    }
}

impl From<NormalizedVector> for NonZeroVector {
    fn from(v: NormalizedVector) -> Self {
        Self(v.0)
    }
}

/// A unit-length direction.
///
/// The only way to obtain one is by normalizing a [`NonZeroVector`] (or one
/// of the axis constants), so the length is always 1 up to rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedVector(DVec3);

impl NormalizedVector {
    pub const X: Self = Self(DVec3::X);
    pub const Y: Self = Self(DVec3::Y);
    pub const Z: Self = Self(DVec3::Z);

    /// Normalize `v`, failing when it has zero length.
    pub fn new(v: DVec3) -> Result<Self, DegenerateVectorError> {
        NonZeroVector::new(v).map(NonZeroVector::normalized)
    }

    /// Unit direction from `from` to `to`.
    pub fn between(from: Point3, to: Point3) -> Result<Self, DegenerateVectorError> {
        NonZeroVector::between(from, to).map(NonZeroVector::normalized)
    }

    #[inline]
    pub fn get(self) -> DVec3 {
        self.0
    }

    pub fn reversed(self) -> Self {
        Self(-self.0)
    }

    /// Angle to `other` in radians, in `[0, π]`.
    pub fn angle(self, other: NormalizedVector) -> f64 {
        self.0.dot(other.0).clamp(-1.0, 1.0).acos()
    }

    pub fn cross(self, other: impl Into<DVec3>) -> Result<NonZeroVector, DegenerateVectorError> {
        NonZeroVector::new(self.0.cross(other.into()))
    }

    /// Mirror this direction about the plane with the given normal:
    /// `d - 2 (d · n) n`.
    pub fn reflect(self, normal: NormalizedVector) -> Result<Self, DegenerateVectorError> {
        Self::new(self.0 - normal.0 * (2.0 * self.0.dot(normal.0)))
    }
}

impl Deref for NormalizedVector {
    type Target = DVec3;

    fn deref(&self) -> &DVec3 {
        &self.0
    }
}

impl Neg for NormalizedVector {
    type Output = Self;

    fn neg(self) -> Self {
        self.reversed()
    }
}

impl From<NormalizedVector> for DVec3 {
    fn from(v: NormalizedVector) -> DVec3 {
        v.0
    }
}

impl TryFrom<DVec3> for NormalizedVector {
    type Error = DegenerateVectorError;

    fn try_from(v: DVec3) -> Result<Self, Self::Error> {
        Self::new(v)
    }
}
