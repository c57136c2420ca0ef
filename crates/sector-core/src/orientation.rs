use crate::constants::GEOMETRY_EPSILON;
use crate::error::{Degeneracy, LayoutError};
use crate::sampler::ArcSpec;
use glam::{EulerRot, Mat3, Quat, Vec3};

/// One of the six principal axis directions.
///
/// Used as the up hint for look-at and as the fixed forward axis of
/// [`OrientationPolicy::LookAtFixedAxis`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HeadDirection {
    PosX,
    #[default]
    PosY,
    PosZ,
    NegX,
    NegY,
    NegZ,
}

impl HeadDirection {
    pub const ALL: [HeadDirection; 6] = [
        HeadDirection::PosX,
        HeadDirection::PosY,
        HeadDirection::PosZ,
        HeadDirection::NegX,
        HeadDirection::NegY,
        HeadDirection::NegZ,
    ];

    pub fn axis(self) -> Vec3 {
        match self {
            HeadDirection::PosX => Vec3::X,
            HeadDirection::PosY => Vec3::Y,
            HeadDirection::PosZ => Vec3::Z,
            HeadDirection::NegX => Vec3::NEG_X,
            HeadDirection::NegY => Vec3::NEG_Y,
            HeadDirection::NegZ => Vec3::NEG_Z,
        }
    }
}

/// Where each child's forward (+Z) axis points.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum OrientationPolicy {
    /// Face the arc center.
    #[default]
    LookAtCenter,
    /// Face along the arc-plane normal (`start_offset x end_offset`).
    LookAtCrossProduct,
    /// Face along a fixed axis regardless of position.
    LookAtFixedAxis(HeadDirection),
}

impl OrientationPolicy {
    /// Point the child at `position` should look at.
    pub fn look_target(&self, position: Vec3, arc: &ArcSpec) -> Result<Vec3, LayoutError> {
        match self {
            OrientationPolicy::LookAtCenter => Ok(arc.center),
            OrientationPolicy::LookAtCrossProduct => {
                if arc.normal.length() <= GEOMETRY_EPSILON {
                    return Err(Degeneracy::CollinearArc.into());
                }
                Ok(position + arc.normal.normalize())
            }
            OrientationPolicy::LookAtFixedAxis(dir) => Ok(position + dir.axis()),
        }
    }
}

/// Rotation taking local +Z to `forward` with local +Y as close to `up` as possible.
///
/// When `up` is parallel to `forward` an arbitrary perpendicular up is used.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    let f = forward.normalize();
    let mut right = up.cross(f);
    if right.length() <= GEOMETRY_EPSILON {
        right = f.any_orthonormal_vector().cross(f);
    }
    let right = right.normalize();
    let up = f.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, f)).normalize()
}

/// Euler offset in degrees (x = pitch, y = yaw, z = roll), yaw applied first.
#[inline]
pub fn offset_rotation(offset_deg: Vec3) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        offset_deg.y.to_radians(),
        offset_deg.x.to_radians(),
        offset_deg.z.to_radians(),
    )
}

/// Orientation of a child at `position` looking at `target`.
///
/// The offset is post-multiplied, so it is expressed in the look-at frame
/// rather than in container space.
pub fn resolve(
    position: Vec3,
    target: Vec3,
    up_hint: HeadDirection,
    offset_deg: Vec3,
) -> Result<Quat, LayoutError> {
    let forward = target - position;
    if forward.length() <= GEOMETRY_EPSILON {
        return Err(Degeneracy::LookAtCoincident.into());
    }
    Ok(look_rotation(forward, up_hint.axis()) * offset_rotation(offset_deg))
}
