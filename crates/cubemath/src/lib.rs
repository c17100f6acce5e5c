//! Vector, quaternion, and approximate comparison primitives used to track
//! the orientation of cubelets.

pub use {approx, cgmath};

/// Floating-point type used for geometry.
pub type Float = f64;

/// Small floating-point value used for comparisons.
pub const EPSILON: Float = 0.000001;

/// Asserts that both arguments are approximately equal.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = $crate::EPSILON)
    };
}

pub mod approx_cmp;
pub mod quaternion;
pub mod vector;

/// Structs, traits, and constants.
pub mod prelude {
    pub use approx::AbsDiffEq;

    pub use crate::approx_cmp::*;
    pub use crate::quaternion::Quaternion;
    pub use crate::vector::Vector3;
    pub use crate::{EPSILON, Float};
}
pub use prelude::*;
