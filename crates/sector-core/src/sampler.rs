use crate::error::{Degeneracy, LayoutError};
use crate::spherical::{from_spherical, to_spherical, SphericalAngles};
use glam::Vec3;

/// The three positions that define a sector, in the container's local space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReferenceFrame {
    pub center: Vec3,
    pub start: Vec3,
    pub end: Vec3,
}

/// Arc derived from a [`ReferenceFrame`] for a single layout pass.
///
/// Only the direction of the end marker matters: its offset is rescaled to the
/// start radius before its angles are taken.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSpec {
    pub center: Vec3,
    pub radius: f32,
    pub start: SphericalAngles,
    pub end: SphericalAngles,
    /// Unnormalized `start_offset x end_offset`; zero when start and end are collinear.
    pub normal: Vec3,
}

impl ArcSpec {
    pub fn from_frame(frame: &ReferenceFrame) -> Result<Self, LayoutError> {
        let start_offset = frame.start - frame.center;
        let radius = start_offset.length();
        let start = to_spherical(start_offset)?;

        let end_offset = (frame.end - frame.center).normalize_or_zero() * radius;
        let end = to_spherical(end_offset).map_err(|_| Degeneracy::ZeroEndDirection)?;

        Ok(Self {
            center: frame.center,
            radius,
            start,
            end,
            normal: start_offset.cross(end_offset),
        })
    }

    /// `count` positions on the arc, one per equal angular bucket.
    pub fn sample(&self, count: usize) -> Vec<Vec3> {
        sample_angles(self.start, self.end, count)
            .into_iter()
            .map(|a| self.center + from_spherical(a, self.radius))
            .collect()
    }
}

/// Bucket-center subdivision of `start..end` into `count` samples.
///
/// Sample `i` sits at `start + delta/2 + i*delta`, so no sample ever lands on
/// either marker and the sequence is mirror-symmetric about the arc midpoint.
/// Angles are interpolated component-wise without azimuth wrap-around.
pub fn sample_angles(
    start: SphericalAngles,
    end: SphericalAngles,
    count: usize,
) -> Vec<SphericalAngles> {
    if count == 0 {
        return Vec::new();
    }
    let delta = (end - start) / count as f32;
    let first = start + delta * 0.5;
    (0..count).map(|i| first + delta * i as f32).collect()
}
