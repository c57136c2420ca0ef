//! Conversions between center-relative offsets and spherical angles.
//!
//! Convention: the polar angle `theta` is measured from +Z, the azimuth `phi`
//! from +X towards +Y. Every offset in a layout pass (start, end and samples)
//! goes through the same pair of functions so the convention stays consistent.

use crate::constants::GEOMETRY_EPSILON;
use crate::error::{Degeneracy, LayoutError};
use glam::Vec3;
use std::ops::{Add, Div, Mul, Sub};

/// A direction on the sphere: polar angle in `[0, PI]`, azimuth in `(-PI, PI]`.
///
/// Arithmetic is component-wise so angle pairs can be subdivided directly.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SphericalAngles {
    pub theta: f32,
    pub phi: f32,
}

impl SphericalAngles {
    pub const fn new(theta: f32, phi: f32) -> Self {
        Self { theta, phi }
    }
}

impl Add for SphericalAngles {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.theta + rhs.theta, self.phi + rhs.phi)
    }
}

impl Sub for SphericalAngles {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.theta - rhs.theta, self.phi - rhs.phi)
    }
}

impl Mul<f32> for SphericalAngles {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.theta * rhs, self.phi * rhs)
    }
}

impl Div<f32> for SphericalAngles {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.theta / rhs, self.phi / rhs)
    }
}

/// Angles of `offset` around the origin.
///
/// A zero-length offset has no direction and is reported as
/// [`Degeneracy::ZeroRadius`]; callers that convert the end marker remap it.
pub fn to_spherical(offset: Vec3) -> Result<SphericalAngles, LayoutError> {
    let len = offset.length();
    if len <= GEOMETRY_EPSILON {
        return Err(Degeneracy::ZeroRadius.into());
    }
    let theta = (offset.z / len).clamp(-1.0, 1.0).acos();
    let phi = offset.y.atan2(offset.x);
    Ok(SphericalAngles::new(theta, phi))
}

#[inline]
pub fn from_spherical(angles: SphericalAngles, radius: f32) -> Vec3 {
    let (sin_t, cos_t) = angles.theta.sin_cos();
    let (sin_p, cos_p) = angles.phi.sin_cos();
    Vec3::new(sin_t * cos_p, sin_t * sin_p, cos_t) * radius
}
