//! 3D vectors.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use approx::AbsDiffEq;

use crate::approx_cmp::approx_eq;
use crate::{EPSILON, Float};

/// 3D vector of floats.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vector3 {
    /// X component (left to right).
    pub x: Float,
    /// Y component (down to up).
    pub y: Float,
    /// Z component (front to back).
    pub z: Float,
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<[Float; 3]> for Vector3 {
    fn from([x, y, z]: [Float; 3]) -> Self {
        Self { x, y, z }
    }
}
impl From<[i8; 3]> for Vector3 {
    fn from([x, y, z]: [i8; 3]) -> Self {
        Self::new(x as Float, y as Float, z as Float)
    }
}
impl From<Vector3> for cgmath::Vector3<f32> {
    fn from(v: Vector3) -> Self {
        cgmath::Vector3::new(v.x as f32, v.y as f32, v.z as f32)
    }
}

impl Vector3 {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// Unit vector along the X axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit vector along the Y axis.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit vector along the Z axis.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Constructs a vector from its components.
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }

    /// Returns the dot product of two vectors.
    pub fn dot(self, other: Self) -> Float {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
    /// Returns the cross product of two vectors.
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
    /// Returns the Euclidean length of the vector.
    pub fn magnitude(self) -> Float {
        self.dot(self).sqrt()
    }
    /// Returns a unit vector in the same direction, or `None` if the vector
    /// is approximately zero.
    pub fn normalize(self) -> Option<Self> {
        let mag = self.magnitude();
        (mag > EPSILON).then(|| self * (1.0 / mag))
    }

    /// Returns whether two vectors are equal within `EPSILON` on every axis.
    pub fn approx_eq(self, other: Self) -> bool {
        approx_eq(&self, &other)
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}
impl Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}
impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}
impl Mul<Float> for Vector3 {
    type Output = Self;

    fn mul(self, rhs: Float) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl AbsDiffEq for Vector3 {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_product_handedness() {
        assert_eq!(Vector3::X.cross(Vector3::Y), Vector3::Z);
        assert_eq!(Vector3::Y.cross(Vector3::Z), Vector3::X);
        assert_eq!(Vector3::Y.cross(Vector3::X), -Vector3::Z);
    }

    #[test]
    fn test_normalize() {
        crate::assert_approx_eq!(
            Vector3::new(3.0, 0.0, 4.0).normalize().unwrap(),
            Vector3::new(0.6, 0.0, 0.8),
        );
        assert_eq!(Vector3::ZERO.normalize(), None);
    }
}
