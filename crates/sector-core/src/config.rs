use crate::constants::{default_rotation_offset, DEFAULT_FRAME_COUNT, DEFAULT_FRAME_INTERVAL};
use crate::orientation::{HeadDirection, OrientationPolicy};
use glam::Vec3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interpolation {
    #[default]
    Linear,
    Spherical,
}

/// Whether the host is running live or being edited.
///
/// While editing, poses are applied at once instead of animated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HostMode {
    #[default]
    Live,
    Editing,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSettings {
    pub enabled: bool,
    /// Interpolation steps per transition.
    pub frame_count: u32,
    /// Ticks between two steps.
    pub frame_interval: u32,
    pub interpolation: Interpolation,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            frame_count: DEFAULT_FRAME_COUNT,
            frame_interval: DEFAULT_FRAME_INTERVAL,
            interpolation: Interpolation::Linear,
        }
    }
}

impl AnimationSettings {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn is_valid(&self) -> bool {
        self.frame_count > 0 && self.frame_interval > 0
    }

    /// Enabled and usable. Zero counts or intervals degrade to instant application.
    pub fn is_effective(&self) -> bool {
        self.enabled && self.is_valid()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    pub animation: AnimationSettings,
    /// Euler offset in degrees applied on top of the look-at rotation.
    pub rotation_offset: Vec3,
    /// Up hint for look-at.
    pub head_direction: HeadDirection,
    pub policy: OrientationPolicy,
    /// Skip layout and only reset rotations to identity.
    pub freeze: bool,
    /// Log the arc and every target of each pass.
    pub debug: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            animation: AnimationSettings::default(),
            rotation_offset: default_rotation_offset(),
            head_direction: HeadDirection::default(),
            policy: OrientationPolicy::default(),
            freeze: false,
            debug: false,
        }
    }
}
