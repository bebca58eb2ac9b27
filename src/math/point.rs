use glam::{DQuat, DVec3};

/// World or local space position. Units are whatever the caller agrees on
/// (board exports use millimeters).
pub type Point3 = DVec3;

/// Rotates `p` by `q` using the expanded form of `q * p * q^-1`.
///
/// `q` is used as given: it is not normalized, so a non-unit quaternion also
/// scales the point by its squared norm.
pub fn rotate_point(p: Point3, q: DQuat) -> Point3 {
    let (qx, qy, qz, qw) = (q.x, q.y, q.z, q.w);
    let (x, y, z) = (p.x, p.y, p.z);

    // q * p
    let ix = qw * x + qy * z - qz * y;
    let iy = qw * y + qz * x - qx * z;
    let iz = qw * z + qx * y - qy * x;
    let iw = -qx * x - qy * y - qz * z;

    // (q * p) * conj(q)
    DVec3::new(
        ix * qw + iw * -qx + iy * -qz - iz * -qy,
        iy * qw + iw * -qy + iz * -qx - ix * -qz,
        iz * qw + iw * -qz + ix * -qy - iy * -qx,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::f64::consts::FRAC_PI_2;

    fn random_point(rng: &mut StdRng) -> Point3 {
        DVec3::new(
            rng.gen_range(-100.0..100.0),
            rng.gen_range(-100.0..100.0),
            rng.gen_range(-100.0..100.0),
        )
    }

    fn random_unit_quat(rng: &mut StdRng) -> DQuat {
        let axis = DVec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        )
        .try_normalize()
        .unwrap_or(DVec3::Z);
        DQuat::from_axis_angle(axis, rng.gen_range(-6.3..6.3))
    }

    #[test]
    fn identity_quaternion_leaves_points_alone() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..256 {
            let p = random_point(&mut rng);
            let rotated = rotate_point(p, DQuat::from_xyzw(0.0, 0.0, 0.0, 1.0));
            assert!(rotated.abs_diff_eq(p, 1e-12), "{p} -> {rotated}");
        }
    }

    #[test]
    fn quarter_turn_about_z() {
        let q = DQuat::from_rotation_z(FRAC_PI_2);
        let rotated = rotate_point(DVec3::X, q);
        assert!(rotated.abs_diff_eq(DVec3::Y, 1e-12));

        let rotated = rotate_point(DVec3::Y, q);
        assert!(rotated.abs_diff_eq(-DVec3::X, 1e-12));
    }

    #[test]
    fn unit_rotation_preserves_length_and_matches_glam() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..256 {
            let p = random_point(&mut rng);
            let q = random_unit_quat(&mut rng);
            let rotated = rotate_point(p, q);

            assert!((rotated.length() - p.length()).abs() < 1e-9);
            assert!(rotated.abs_diff_eq(q * p, 1e-9));
        }
    }

    #[test]
    fn rotation_is_linear() {
        let mut rng = StdRng::seed_from_u64(3);
        let q = random_unit_quat(&mut rng);
        let a = random_point(&mut rng);
        let b = random_point(&mut rng);

        let lhs = rotate_point(a * 2.5 + b, q);
        let rhs = rotate_point(a, q) * 2.5 + rotate_point(b, q);
        assert!(lhs.abs_diff_eq(rhs, 1e-9));
    }

    #[test]
    fn non_unit_quaternion_is_not_normalized() {
        // |q|^2 = 4, so the point is scaled by 4 as well as rotated.
        let q = DQuat::from_xyzw(0.0, 0.0, 0.0, 2.0);
        let rotated = rotate_point(DVec3::new(1.0, 2.0, 3.0), q);
        assert!(rotated.abs_diff_eq(DVec3::new(4.0, 8.0, 12.0), 1e-12));
    }

    #[test]
    fn nan_propagates() {
        let rotated = rotate_point(DVec3::new(f64::NAN, 0.0, 0.0), DQuat::from_rotation_z(0.3));
        assert!(rotated.x.is_nan());

        let rotated = rotate_point(DVec3::ONE, DQuat::from_xyzw(0.0, 0.0, 0.0, f64::INFINITY));
        assert!(!rotated.is_finite());
    }
}
