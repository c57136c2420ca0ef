use glam::Vec3;

// Shared layout/animation tuning constants used by the engine and host drivers.

// Geometry
pub const GEOMETRY_EPSILON: f32 = 1e-6; // offsets shorter than this have no direction

// Animation defaults
pub const DEFAULT_FRAME_COUNT: u32 = 10; // interpolation steps per transition
pub const DEFAULT_FRAME_INTERVAL: u32 = 1; // ticks between two interpolation steps

// Orientation defaults
pub const DEFAULT_ROTATION_OFFSET_DEG: [f32; 3] = [0.0, 0.0, 0.0]; // yaw/pitch/roll after look-at

#[inline]
pub fn default_rotation_offset() -> Vec3 {
    Vec3::new(
        DEFAULT_ROTATION_OFFSET_DEG[0],
        DEFAULT_ROTATION_OFFSET_DEG[1],
        DEFAULT_ROTATION_OFFSET_DEG[2],
    )
}
