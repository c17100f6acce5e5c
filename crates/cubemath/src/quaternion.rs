//! Unit quaternions for cubelet orientation.
//!
//! Rotations use the passive convention: [`Quaternion::rotate_vector()`]
//! computes `q⁻¹ · v · q`. Composing `a * b` therefore applies `a` first and
//! then `b`, which is how a cubelet accumulates face turns.

use std::fmt;
use std::ops::Mul;

use approx::AbsDiffEq;

use crate::approx_cmp::approx_eq;
use crate::{EPSILON, Float, Vector3};

/// Quaternion with components `x`, `y`, `z` (vector part) and `w` (scalar
/// part).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quaternion {
    /// X component of the vector part.
    pub x: Float,
    /// Y component of the vector part.
    pub y: Float,
    /// Z component of the vector part.
    pub z: Float,
    /// Scalar part.
    pub w: Float,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}, {}, {}}}", self.x, self.y, self.z, self.w)
    }
}

impl Quaternion {
    /// Identity rotation.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Constructs a quaternion from its components.
    pub const fn new(x: Float, y: Float, z: Float, w: Float) -> Self {
        Self { x, y, z, w }
    }

    /// Constructs a rotation from Euler angles in degrees around the X, Y,
    /// and Z axes.
    ///
    /// The Y angle is the heading, Z is the attitude, and X is the bank.
    pub fn from_euler(x_degrees: Float, y_degrees: Float, z_degrees: Float) -> Self {
        let heading = y_degrees.to_radians();
        let attitude = z_degrees.to_radians();
        let bank = x_degrees.to_radians();

        let (s1, c1) = (heading / 2.0).sin_cos();
        let (s2, c2) = (attitude / 2.0).sin_cos();
        let (s3, c3) = (bank / 2.0).sin_cos();
        let c1c2 = c1 * c2;
        let s1s2 = s1 * s2;

        Self {
            w: c1c2 * c3 + s1s2 * s3,
            x: c1c2 * s3 - s1s2 * c3,
            y: s1 * c2 * c3 + c1 * s2 * s3,
            z: c1 * s2 * c3 - s1 * c2 * s3,
        }
    }

    /// Constructs a rotation of `degrees` around `axis`. Returns the identity
    /// if `axis` is zero.
    pub fn from_axis_angle(axis: Vector3, degrees: Float) -> Self {
        let Some(axis) = axis.normalize() else {
            return Self::IDENTITY;
        };
        let (s, c) = (degrees.to_radians() / 2.0).sin_cos();
        Self::new(axis.x * s, axis.y * s, axis.z * s, c)
    }

    /// Returns the Hamilton product `self * other` without normalizing it.
    pub fn multiply_non_normal(self, other: Self) -> Self {
        let (l, r) = (self, other);
        Self {
            x: l.x * r.w + l.y * r.z - l.z * r.y + l.w * r.x,
            y: -l.x * r.z + l.y * r.w + l.z * r.x + l.w * r.y,
            z: l.x * r.y - l.y * r.x + l.z * r.w + l.w * r.z,
            w: -l.x * r.x - l.y * r.y - l.z * r.z + l.w * r.w,
        }
    }
    /// Returns the normalized Hamilton product `self * other`.
    pub fn multiply(self, other: Self) -> Self {
        self.multiply_non_normal(other).normalize()
    }

    /// Returns the conjugate, which negates the vector part.
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }
    /// Returns the inverse of a unit quaternion.
    pub fn inverse(self) -> Self {
        self.conjugate()
    }

    /// Returns the 4D dot product of two quaternions.
    pub fn dot(self, other: Self) -> Float {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }
    /// Returns the magnitude of the quaternion.
    pub fn magnitude(self) -> Float {
        self.dot(self).sqrt()
    }
    /// Returns the quaternion scaled to unit magnitude.
    pub fn normalize(self) -> Self {
        let mag = self.magnitude();
        if mag < EPSILON {
            return Self::IDENTITY;
        }
        Self::new(self.x / mag, self.y / mag, self.z / mag, self.w / mag)
    }

    /// Rotates a vector, computing `q⁻¹ · v · q`.
    pub fn rotate_vector(self, v: Vector3) -> Vector3 {
        let v = Self::new(v.x, v.y, v.z, 0.0);
        let result = self.inverse().multiply_non_normal(v).multiply_non_normal(self);
        Vector3::new(result.x, result.y, result.z)
    }

    /// Returns whether two quaternions represent the same rotation.
    ///
    /// `q` and `-q` are the same rotation, so this compares the absolute dot
    /// product.
    pub fn nearly_equal(self, other: Self) -> bool {
        approx_eq(&self.dot(other).abs(), &1.0)
    }
    /// Returns whether the quaternion represents no rotation.
    pub fn is_identity(self) -> bool {
        self.nearly_equal(Self::IDENTITY)
    }

    /// Returns a 4x4 transformation matrix whose linear part maps `v` to
    /// `self.rotate_vector(v)`.
    pub fn to_matrix(self) -> cgmath::Matrix4<f32> {
        let Self { x, y, z, w } = self;
        // Rows of the Hamilton rotation matrix, which become the columns of
        // its transpose.
        let r0 = [
            1.0 - 2.0 * y * y - 2.0 * z * z,
            2.0 * x * y - 2.0 * z * w,
            2.0 * x * z + 2.0 * y * w,
        ];
        let r1 = [
            2.0 * x * y + 2.0 * z * w,
            1.0 - 2.0 * x * x - 2.0 * z * z,
            2.0 * y * z - 2.0 * x * w,
        ];
        let r2 = [
            2.0 * x * z - 2.0 * y * w,
            2.0 * y * z + 2.0 * x * w,
            1.0 - 2.0 * x * x - 2.0 * y * y,
        ];
        let col = |r: [Float; 3]| cgmath::Vector4::new(r[0] as f32, r[1] as f32, r[2] as f32, 0.0);
        cgmath::Matrix4::from_cols(col(r0), col(r1), col(r2), cgmath::Vector4::unit_w())
    }

    /// Spherically interpolates between two rotations along the shortest arc.
    /// `t = 0.0` returns `a` and `t = 1.0` returns `b`.
    pub fn slerp(a: Self, b: Self, t: Float) -> Self {
        let mut b = b;
        let mut cos_theta = a.dot(b);
        if cos_theta < 0.0 {
            b = Self::new(-b.x, -b.y, -b.z, -b.w);
            cos_theta = -cos_theta;
        }
        let (wa, wb) = if cos_theta > 1.0 - EPSILON {
            (1.0 - t, t)
        } else {
            let theta = cos_theta.acos();
            let sin_theta = theta.sin();
            (
                ((1.0 - t) * theta).sin() / sin_theta,
                (t * theta).sin() / sin_theta,
            )
        };
        Self::new(
            wa * a.x + wb * b.x,
            wa * a.y + wb * b.y,
            wa * a.z + wb * b.z,
            wa * a.w + wb * b.w,
        )
        .normalize()
    }
}

impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}

impl AbsDiffEq for Quaternion {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
            && self.w.abs_diff_eq(&other.w, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use cgmath::Vector4;
    use proptest::prelude::*;

    use super::*;

    fn rotated(v: [Float; 3], rotations: &[[Float; 3]]) -> Vec<Vector3> {
        let mut v = Vector3::from(v);
        rotations
            .iter()
            .map(|&[x, y, z]| {
                v = Quaternion::from_euler(x, y, z).rotate_vector(v);
                v
            })
            .collect()
    }

    #[test]
    fn test_single_axis_reference_rotations() {
        let cases = [
            ([1.0, 0.0, 0.0], [0.0, 90.0, 0.0], [0.0, 0.0, 1.0]),
            ([1.0, 0.0, 0.0], [0.0, -90.0, 0.0], [0.0, 0.0, -1.0]),
            ([-1.0, 0.0, 0.0], [0.0, 90.0, 0.0], [0.0, 0.0, -1.0]),
            ([-1.0, 0.0, 0.0], [0.0, -90.0, 0.0], [0.0, 0.0, 1.0]),
            ([0.0, 1.0, 0.0], [90.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
            ([0.0, 1.0, 0.0], [-90.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
            ([0.0, -1.0, 0.0], [90.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
            ([0.0, -1.0, 0.0], [-90.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ];
        for (v, rot, expected) in cases {
            assert_approx_eq!(rotated(v, &[rot])[0], Vector3::from(expected));
        }
    }

    #[test]
    fn test_chained_reference_rotations() {
        let results = rotated(
            [1.0, 0.0, 0.0],
            &[[0.0, 90.0, 0.0], [90.0, 0.0, 0.0], [0.0, 0.0, 90.0]],
        );
        assert_approx_eq!(results[0], Vector3::new(0.0, 0.0, 1.0));
        assert_approx_eq!(results[1], Vector3::new(0.0, 1.0, 0.0));
        assert_approx_eq!(results[2], Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_composition_order() {
        // Composing `a * b` rotates by `a` first.
        let a = Quaternion::from_euler(0.0, 90.0, 0.0);
        let b = Quaternion::from_euler(90.0, 0.0, 0.0);
        let v = Vector3::X;
        assert_approx_eq!((a * b).rotate_vector(v), b.rotate_vector(a.rotate_vector(v)));
    }

    #[test]
    fn test_four_quarter_turns_are_identity() {
        let quarter = Quaternion::from_euler(0.0, 0.0, 90.0);
        let full = quarter * quarter * quarter * quarter;
        assert!(full.is_identity());
        assert!(!(quarter * quarter).is_identity());
        // `q` and `-q` are the same rotation.
        let neg = Quaternion::new(-quarter.x, -quarter.y, -quarter.z, -quarter.w);
        assert!(neg.nearly_equal(quarter));
    }

    #[test]
    fn test_euler_matches_axis_angle() {
        assert_approx_eq!(
            Quaternion::from_euler(90.0, 0.0, 0.0),
            Quaternion::from_axis_angle(Vector3::X, 90.0),
        );
        assert_approx_eq!(
            Quaternion::from_euler(0.0, -90.0, 0.0),
            Quaternion::from_axis_angle(Vector3::Y, -90.0),
        );
        assert_approx_eq!(
            Quaternion::from_euler(0.0, 0.0, 90.0),
            Quaternion::from_axis_angle(Vector3::Z, 90.0),
        );
    }

    #[test]
    fn test_slerp_endpoints_and_midpoint() {
        let a = Quaternion::IDENTITY;
        let b = Quaternion::from_axis_angle(Vector3::Z, 90.0);
        assert!(Quaternion::slerp(a, b, 0.0).nearly_equal(a));
        assert!(Quaternion::slerp(a, b, 1.0).nearly_equal(b));
        let mid = Quaternion::slerp(a, b, 0.5);
        assert!(mid.nearly_equal(Quaternion::from_axis_angle(Vector3::Z, 45.0)));
    }

    proptest! {
        #[test]
        fn proptest_matrix_matches_rotate_vector(
            x in -180.0..180.0_f64,
            y in -180.0..180.0_f64,
            z in -180.0..180.0_f64,
            v in prop::array::uniform3(-2.0..2.0_f64),
        ) {
            let q = Quaternion::from_euler(x, y, z);
            let v = Vector3::from(v);
            let expected = q.rotate_vector(v);
            let actual = q.to_matrix() * Vector4::new(v.x as f32, v.y as f32, v.z as f32, 0.0);
            prop_assert!((actual.x as Float - expected.x).abs() < 1e-4);
            prop_assert!((actual.y as Float - expected.y).abs() < 1e-4);
            prop_assert!((actual.z as Float - expected.z).abs() < 1e-4);
        }

        #[test]
        fn proptest_rotation_preserves_length(
            x in -180.0..180.0_f64,
            y in -180.0..180.0_f64,
            z in -180.0..180.0_f64,
            v in prop::array::uniform3(-2.0..2.0_f64),
        ) {
            let v = Vector3::from(v);
            let rotated = Quaternion::from_euler(x, y, z).rotate_vector(v);
            prop_assert!((rotated.magnitude() - v.magnitude()).abs() < 1e-9);
        }
    }
}
