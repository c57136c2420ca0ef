use glam::Vec3;
use sector_core::*;
use std::f32::consts::{FRAC_PI_2, PI};

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn principal_axes_map_to_expected_angles() {
    let x = to_spherical(Vec3::X).unwrap();
    assert!(close(x.theta, FRAC_PI_2) && close(x.phi, 0.0));

    let y = to_spherical(Vec3::Y * 3.0).unwrap();
    assert!(close(y.theta, FRAC_PI_2) && close(y.phi, FRAC_PI_2));

    let z = to_spherical(Vec3::Z).unwrap();
    assert!(close(z.theta, 0.0));

    let neg_z = to_spherical(Vec3::NEG_Z * 0.5).unwrap();
    assert!(close(neg_z.theta, PI));

    // azimuth range is (-PI, PI]
    let neg_x = to_spherical(Vec3::NEG_X).unwrap();
    assert!(close(neg_x.phi, PI));
}

#[test]
fn from_spherical_inverts_to_spherical() {
    let offsets = [
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(-0.3, 0.7, -2.0),
        Vec3::new(0.0, -4.0, 0.1),
        Vec3::new(5.0, 0.0, 0.0),
    ];
    for v in offsets {
        let angles = to_spherical(v).unwrap();
        let back = from_spherical(angles, v.length());
        assert!(
            (back - v).length() < 1e-4,
            "round trip drifted: {v:?} -> {back:?}"
        );
    }
}

#[test]
fn zero_offset_is_degenerate() {
    assert_eq!(
        to_spherical(Vec3::ZERO),
        Err(LayoutError::DegenerateGeometry(Degeneracy::ZeroRadius))
    );
}

#[test]
fn polar_angle_stays_in_range_for_near_axis_offsets() {
    // z/len can round slightly past 1.0
    let a = to_spherical(Vec3::new(1e-7, 0.0, 1.0)).unwrap();
    assert!(a.theta.is_finite() && a.theta >= 0.0);
    let b = to_spherical(Vec3::new(0.0, 1e-7, -1.0)).unwrap();
    assert!(b.theta.is_finite() && b.theta <= PI);
}

#[test]
fn angle_arithmetic_is_component_wise() {
    let a = SphericalAngles::new(1.0, -2.0);
    let b = SphericalAngles::new(0.5, 1.0);
    assert_eq!(a + b, SphericalAngles::new(1.5, -1.0));
    assert_eq!(a - b, SphericalAngles::new(0.5, -3.0));
    assert_eq!(b * 2.0, SphericalAngles::new(1.0, 2.0));
    assert_eq!(a / 4.0, SphericalAngles::new(0.25, -0.5));
}
