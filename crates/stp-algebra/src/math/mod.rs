//! Small dense matrix types used by the STP operations.
//!
//! `Array2` (row-major 2D) carries the Kronecker product, the standard matrix
//! product and elementwise addition. `Array1` is a flat view used when a
//! column vector is shown as a signal. Both are dependency-free apart from
//! `num-traits` for the generic element bounds.
pub mod matrix;
pub mod vector;

pub use matrix::{Array2, ShapeError};
pub use vector::Array1;

use std::ops::{Add, Mul};

use num_traits::{CheckedAdd, CheckedMul, One, Zero};

/// Element type accepted by the STP operations.
///
/// The products and sums that combine operand entries go through
/// `checked_sum`/`checked_product`, which return `None` on overflow.
pub trait Scalar: Copy + Zero + One + Add<Output = Self> + Mul<Output = Self> {
    fn checked_sum(self, rhs: Self) -> Option<Self>;
    fn checked_product(self, rhs: Self) -> Option<Self>;
}

macro_rules! integer_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &rhs)
                }

                #[inline]
                fn checked_product(self, rhs: Self) -> Option<Self> {
                    CheckedMul::checked_mul(&self, &rhs)
                }
            }
        )*
    };
}

// Floats saturate to infinity instead of overflowing.
macro_rules! float_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }

                #[inline]
                fn checked_product(self, rhs: Self) -> Option<Self> {
                    Some(self * rhs)
                }
            }
        )*
    };
}

integer_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_scalar!(f32, f64);
