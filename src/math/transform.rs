use glam::{Mat4, Vec3};

/// Axes shorter than this are treated as "no axis" and leave the transform untouched
const AXIS_EPSILON: f32 = 1e-6;

/// 4x4 affine model transform (column-major, translation in the fourth column)
///
/// Every mutation post-multiplies, so rotations and translations are applied
/// in the transform's current local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform(Mat4);

impl Transform {
    pub const IDENTITY: Self = Self(Mat4::IDENTITY);

    pub fn from_translation(translation: Vec3) -> Self {
        Self(Mat4::from_translation(translation))
    }

    pub fn from_matrix(matrix: Mat4) -> Self {
        Self(matrix)
    }

    /// Translate along local axes
    pub fn translate(&mut self, offset: Vec3) {
        self.0 = self.0 * Mat4::from_translation(offset);
    }

    /// Rotate `angle` radians about `axis` in the local frame.
    /// The axis is normalized first; a zero-length axis is a no-op.
    pub fn rotate(&mut self, angle: f32, axis: Vec3) {
        let length = axis.length();
        if length < AXIS_EPSILON {
            return;
        }
        self.0 = self.0 * Mat4::from_axis_angle(axis / length, angle);
    }

    pub fn translation(&self) -> Vec3 {
        self.0.w_axis.truncate()
    }

    /// Y component of the accumulated translation
    pub fn translation_y(&self) -> f32 {
        self.0.w_axis.y
    }

    pub fn matrix(&self) -> Mat4 {
        self.0
    }

    /// Column-major floats, ready for a uniform buffer
    pub fn to_cols_array(&self) -> [f32; 16] {
        self.0.to_cols_array()
    }

    pub fn abs_diff_eq(&self, other: &Transform, max_abs_diff: f32) -> bool {
        self.0.abs_diff_eq(other.0, max_abs_diff)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Right-handed perspective projection with a [0, 1] depth range
pub fn perspective(fov_y_radians: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    Mat4::perspective_rh(fov_y_radians, aspect, near, far)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_translation_accessors() {
        let t = Transform::from_translation(Vec3::new(1.0, -2.5, 3.0));
        assert_eq!(t.translation(), Vec3::new(1.0, -2.5, 3.0));
        assert_eq!(t.translation_y(), -2.5);
        assert_eq!(t.to_cols_array()[13], -2.5);
    }

    #[test]
    fn test_rotate_is_local() {
        // Quarter turn about Y, then a local +X step lands on world -Z
        let mut t = Transform::IDENTITY;
        t.rotate(FRAC_PI_2, Vec3::Y);
        t.translate(Vec3::X);

        let p = t.translation();
        assert!(p.x.abs() < 1e-6);
        assert!((p.z + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rotate_keeps_translation() {
        let mut t = Transform::from_translation(Vec3::new(0.0, 0.0, -8.0));
        t.rotate(PI, Vec3::new(1.0, 1.0, 0.0));
        assert!(t.translation().abs_diff_eq(Vec3::new(0.0, 0.0, -8.0), 1e-6));
    }

    #[test]
    fn test_rotate_normalizes_axis() {
        let mut a = Transform::IDENTITY;
        let mut b = Transform::IDENTITY;
        a.rotate(1.0, Vec3::new(0.0, 5.0, 0.0));
        b.rotate(1.0, Vec3::Y);
        assert!(a.abs_diff_eq(&b, 1e-6));
    }

    #[test]
    fn test_zero_axis_is_noop() {
        let mut t = Transform::from_translation(Vec3::ONE);
        t.rotate(1.0, Vec3::ZERO);
        assert_eq!(t, Transform::from_translation(Vec3::ONE));
    }

    #[test]
    fn test_perspective_maps_near_and_far() {
        let proj = perspective(PI / 4.0, 4.0 / 3.0, 1.0, 10000.0);

        let near = proj.project_point3(Vec3::new(0.0, 0.0, -1.0));
        let far = proj.project_point3(Vec3::new(0.0, 0.0, -10000.0));
        assert!(near.z.abs() < 1e-5);
        assert!((far.z - 1.0).abs() < 1e-4);
    }
}
