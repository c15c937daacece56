/*

    Declare numeric types used throughout this repo.

    WARNING: If you like to use f32 instead of f64
    during computations, you need to change both of these:
    pub type Float = f32;
    pub type Vector3 = Vec3;

    @date: 2 Oct, 2025
    @author: Bartu
*/

use bevy_math::{DMat4, DVec3, DVec4};
pub type Float = f64; // WARNING: If you want to change it to f32, don't forget to update Vector3 and Matrix4 types
pub type Vector3 = DVec3;
pub type Matrix4 = DMat4;
pub type Vector4 = DVec4;

pub fn approx_zero(x: Float) -> bool {
    x.abs() < 1e-8
}

pub fn approx_eq(a: &Vector3, b: &Vector3) -> bool {
    approx_zero(a.x - b.x) && approx_zero(a.y - b.y) && approx_zero(a.z - b.z)
}

pub fn transform_point(mat: &Matrix4, v: &Vector3) -> Vector3 {
    let v4 = Vector4::new(v.x, v.y, v.z, 1.0);
    let r = *mat * v4;
    Vector3::new(r.x, r.y, r.z)
}

/// Rotation matrix for Euler angles (radians) in XYZ order,
/// i.e. X is applied first, then Y, then Z.
pub fn euler_xyz_matrix(euler: &Vector3) -> Matrix4 {
    Matrix4::from_rotation_z(euler.z)
        * Matrix4::from_rotation_y(euler.y)
        * Matrix4::from_rotation_x(euler.x)
}

/// Compose T * R * S, the order an object's local points are
/// brought into world space.
pub fn compose_matrix(location: &Vector3, euler: &Vector3, scale: &Vector3) -> Matrix4 {
    Matrix4::from_translation(*location) * euler_xyz_matrix(euler) * Matrix4::from_scale(*scale)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_compose() {
        let mat = compose_matrix(&Vector3::ZERO, &Vector3::ZERO, &Vector3::ONE);
        let p = Vector3::new(1.5, -2., 3.);
        assert!(approx_eq(&transform_point(&mat, &p), &p));
    }

    #[test]
    fn test_euler_order() {
        // X by 90 deg sends +Y to +Z, then Z by 90 deg leaves +Z alone.
        // If Z were applied first, +Y would go to -X and stay there.
        let half_pi = std::f64::consts::FRAC_PI_2;
        let mat = euler_xyz_matrix(&Vector3::new(half_pi, 0., half_pi));
        let p = transform_point(&mat, &Vector3::Y);
        assert!(approx_eq(&p, &Vector3::Z), "got {:?}", p);
    }

    #[test]
    fn test_scale_then_translate() {
        let mat = compose_matrix(&Vector3::new(10., 0., 0.), &Vector3::ZERO, &Vector3::splat(2.));
        let p = transform_point(&mat, &Vector3::new(1., 1., 1.));
        assert!(approx_eq(&p, &Vector3::new(12., 2., 2.)));
    }
}
