mod common;

use common::approx_vec;
use glam::{Quat, Vec3};
use sector_core::*;

fn quat_close(a: Quat, b: Quat) -> bool {
    // q and -q are the same rotation
    a.dot(b).abs() > 1.0 - 1e-5
}

#[test]
fn look_rotation_aims_local_forward() {
    let dirs = [
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(-1.0, 0.5, 0.2),
        Vec3::new(0.3, -0.2, -4.0),
    ];
    for d in dirs {
        let q = look_rotation(d, Vec3::Y);
        assert!(approx_vec(q * Vec3::Z, d.normalize(), 1e-5));
        // local up stays on the hinted side
        assert!((q * Vec3::Y).dot(Vec3::Y) > 0.0);
        assert!(q.is_normalized());
    }
}

#[test]
fn look_rotation_survives_up_parallel_to_forward() {
    for d in [Vec3::Y, Vec3::NEG_Y * 3.0] {
        let q = look_rotation(d, Vec3::Y);
        assert!(q.is_finite());
        assert!(approx_vec(q * Vec3::Z, d.normalize(), 1e-5));
    }
}

#[test]
fn resolve_faces_the_target() {
    let position = Vec3::new(2.0, 0.0, 0.0);
    let q = resolve(position, Vec3::ZERO, HeadDirection::PosY, Vec3::ZERO).unwrap();
    assert!(approx_vec(q * Vec3::Z, Vec3::NEG_X, 1e-5));
    assert!(approx_vec(q * Vec3::Y, Vec3::Y, 1e-5));
}

#[test]
fn up_hint_selects_roll() {
    let position = Vec3::new(0.0, 0.0, 2.0);
    let down = resolve(position, Vec3::ZERO, HeadDirection::NegY, Vec3::ZERO).unwrap();
    assert!(approx_vec(down * Vec3::Y, Vec3::NEG_Y, 1e-5));
    let side = resolve(position, Vec3::ZERO, HeadDirection::PosX, Vec3::ZERO).unwrap();
    assert!(approx_vec(side * Vec3::Y, Vec3::X, 1e-5));
}

#[test]
fn offset_is_applied_in_the_look_at_frame() {
    let position = Vec3::new(1.0, 2.0, -1.0);
    let target = Vec3::new(-3.0, 0.5, 0.0);
    let base = resolve(position, target, HeadDirection::PosY, Vec3::ZERO).unwrap();
    let offset = Vec3::new(0.0, 90.0, 0.0);
    let q = resolve(position, target, HeadDirection::PosY, offset).unwrap();

    assert!(quat_close(q, base * offset_rotation(offset)));
    // a 90 degree yaw turns local forward onto the look-at frame's local +X
    assert!(approx_vec(q * Vec3::Z, base * Vec3::X, 1e-5));
}

#[test]
fn coincident_look_target_is_degenerate() {
    let p = Vec3::new(1.0, 1.0, 1.0);
    assert_eq!(
        resolve(p, p, HeadDirection::PosY, Vec3::ZERO),
        Err(LayoutError::DegenerateGeometry(Degeneracy::LookAtCoincident))
    );
}

#[test]
fn head_directions_cover_all_principal_axes() {
    assert_eq!(HeadDirection::default(), HeadDirection::PosY);
    let sum: Vec3 = HeadDirection::ALL.iter().map(|d| d.axis()).sum();
    assert_eq!(sum, Vec3::ZERO);
    for d in HeadDirection::ALL {
        assert_eq!(d.axis().length(), 1.0);
    }
}

#[test]
fn policies_pick_their_look_targets() {
    let frame = ReferenceFrame {
        center: Vec3::new(0.0, 0.0, 1.0),
        start: Vec3::new(1.0, 0.0, 1.0),
        end: Vec3::new(0.0, 1.0, 1.0),
    };
    let arc = ArcSpec::from_frame(&frame).unwrap();
    let p = Vec3::new(0.7, 0.7, 1.0);

    let center = OrientationPolicy::LookAtCenter.look_target(p, &arc).unwrap();
    assert_eq!(center, frame.center);

    let normal = OrientationPolicy::LookAtCrossProduct
        .look_target(p, &arc)
        .unwrap();
    assert!(approx_vec(normal - p, Vec3::Z, 1e-5));

    let fixed = OrientationPolicy::LookAtFixedAxis(HeadDirection::NegX)
        .look_target(p, &arc)
        .unwrap();
    assert_eq!(fixed, p + Vec3::NEG_X);
}

#[test]
fn cross_product_policy_rejects_collinear_arc() {
    let frame = ReferenceFrame {
        center: Vec3::ZERO,
        start: Vec3::X,
        end: Vec3::NEG_X * 2.0,
    };
    let arc = ArcSpec::from_frame(&frame).unwrap();
    assert_eq!(
        OrientationPolicy::LookAtCrossProduct.look_target(Vec3::Y, &arc),
        Err(LayoutError::DegenerateGeometry(Degeneracy::CollinearArc))
    );
}
