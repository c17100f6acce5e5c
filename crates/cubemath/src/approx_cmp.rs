//! Float comparison with a fixed tolerance of [`EPSILON`].

pub use approx::AbsDiffEq;

use crate::{EPSILON, Float};

/// Returns whether `a` and `b` differ by at most `EPSILON` on every
/// component. Equal infinities compare equal.
pub fn approx_eq<T: AbsDiffEq<Epsilon = Float>>(a: &T, b: &T) -> bool {
    a == b || a.abs_diff_eq(b, EPSILON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Quaternion, Vector3};

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(&1.0, &(1.0 + EPSILON / 2.0)));
        assert!(!approx_eq(&1.0, &(1.0 + EPSILON * 2.0)));
        assert!(approx_eq(&Float::INFINITY, &Float::INFINITY));
        assert!(!approx_eq(&Float::INFINITY, &Float::NEG_INFINITY));
    }

    #[test]
    fn test_vectors_and_quaternions_share_tolerance() {
        let v = Vector3::new(1.0, -2.0, 0.5);
        assert!(v.approx_eq(v + Vector3::new(0.0, EPSILON / 2.0, 0.0)));
        assert!(!v.approx_eq(v + Vector3::new(0.0, 0.0, EPSILON * 2.0)));

        // A quaternion and its negation are the same rotation.
        let q = Quaternion::from_axis_angle(Vector3::Y, 90.0);
        assert!(q.nearly_equal(Quaternion::new(-q.x, -q.y, -q.z, -q.w)));
        assert!(!q.nearly_equal(Quaternion::IDENTITY));
    }
}
