//! 4x4 homogeneous transform
//!
//! Row-major storage, row-vector convention: translation lives in row 3
//! and the perspective term in column 3.

use core::f32::consts::PI;

use libm::{cosf, sinf, tanf};

use super::vector::Vec3;

/// 4x4 matrix, all zeros unless populated
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Mat4 {
    pub m: [[f32; 4]; 4],
}

impl Mat4 {
    /// Identity transform
    pub fn identity() -> Self {
        let mut mat = Self::default();
        for (i, row) in mat.m.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        mat
    }

    /// Rotation about the Z axis by `theta` radians
    pub fn rotation_z(theta: f32) -> Self {
        let (s, c) = (sinf(theta), cosf(theta));
        let mut mat = Self::default();
        mat.m[0][0] = c;
        mat.m[0][1] = s;
        mat.m[1][0] = -s;
        mat.m[1][1] = c;
        mat.m[2][2] = 1.0;
        mat.m[3][3] = 1.0;
        mat
    }

    /// Rotation about the X axis by `theta` radians
    pub fn rotation_x(theta: f32) -> Self {
        let (s, c) = (sinf(theta), cosf(theta));
        let mut mat = Self::default();
        mat.m[0][0] = 1.0;
        mat.m[1][1] = c;
        mat.m[1][2] = s;
        mat.m[2][1] = -s;
        mat.m[2][2] = c;
        mat.m[3][3] = 1.0;
        mat
    }

    /// Perspective projection
    ///
    /// - `fov_degrees`: vertical field of view
    /// - `aspect`: multiplier applied to x
    /// - `near`, `far`: clip planes, mapped to depth 0 and 1
    pub fn projection(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let fov_rad = 1.0 / tanf(fov_degrees * 0.5 / 180.0 * PI);
        let mut mat = Self::default();
        mat.m[0][0] = aspect * fov_rad;
        mat.m[1][1] = fov_rad;
        mat.m[2][2] = far / (far - near);
        mat.m[3][2] = (-far * near) / (far - near);
        mat.m[2][3] = 1.0;
        mat.m[3][3] = 0.0;
        mat
    }

    /// Transform a point, dividing by the resulting `w` unless it is zero
    pub fn transform(&self, v: Vec3) -> Vec3 {
        let m = &self.m;
        let x = v.x * m[0][0] + v.y * m[1][0] + v.z * m[2][0] + m[3][0];
        let y = v.x * m[0][1] + v.y * m[1][1] + v.z * m[2][1] + m[3][1];
        let z = v.x * m[0][2] + v.y * m[1][2] + v.z * m[2][2] + m[3][2];
        let w = v.x * m[0][3] + v.y * m[1][3] + v.z * m[2][3] + m[3][3];

        if w != 0.0 {
            Vec3::new(x / w, y / w, z / w)
        } else {
            Vec3::new(x, y, z)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_close(a: Vec3, b: Vec3) {
        assert!(
            (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS && (a.z - b.z).abs() < EPS,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_default_is_zero() {
        assert!(Mat4::default().m.iter().flatten().all(|&v| v == 0.0));
    }

    #[test]
    fn test_identity_leaves_points_alone() {
        let v = Vec3::new(0.25, -3.0, 7.5);
        assert_close(Mat4::identity().transform(v), v);
    }

    #[test]
    fn test_zero_w_skips_divide() {
        // All-zero matrix gives w = 0: result is the raw product
        assert_close(Mat4::default().transform(Vec3::new(1.0, 2.0, 3.0)), Vec3::ZERO);
    }

    #[test]
    fn test_rotation_z_quarter_turn() {
        let r = Mat4::rotation_z(PI / 2.0);
        assert_close(r.transform(Vec3::new(1.0, 0.0, 0.0)), Vec3::new(0.0, 1.0, 0.0));
        assert_close(r.transform(Vec3::new(0.0, 0.0, 1.0)), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_rotation_x_quarter_turn() {
        let r = Mat4::rotation_x(PI / 2.0);
        assert_close(r.transform(Vec3::new(0.0, 1.0, 0.0)), Vec3::new(0.0, 0.0, 1.0));
        assert_close(r.transform(Vec3::new(1.0, 0.0, 0.0)), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_projection_maps_clip_planes_to_unit_depth() {
        let p = Mat4::projection(90.0, 1.0, 0.1, 1000.0);
        assert!((p.transform(Vec3::new(0.0, 0.0, 0.1)).z).abs() < 1e-4);
        assert!((p.transform(Vec3::new(0.0, 0.0, 1000.0)).z - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_projection_divides_by_depth() {
        // 90° fov: 1/tan(45°) = 1, so x' = aspect * x / z
        let p = Mat4::projection(90.0, 0.75, 0.1, 1000.0);
        let v = p.transform(Vec3::new(2.0, 1.0, 4.0));
        assert!((v.x - 0.375).abs() < 1e-4);
        assert!((v.y - 0.25).abs() < 1e-4);
    }
}
