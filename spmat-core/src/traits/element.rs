//! Matrix element type constraints
//!
//! Only signed integer types can be stored. Arithmetic wraps on overflow
//! (two's complement), so no operation on a matrix ever panics.

use core::fmt::{Debug, Display};
use core::hash::Hash;
use core::str::FromStr;

/// Trait for types that can be stored as matrix elements
pub trait MatrixElement:
    Copy + Clone + PartialEq + Eq + Hash + Debug + Display + FromStr + Sized
{
    /// Additive identity; never stored
    const ZERO: Self;

    /// True for the additive identity
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    fn wrapping_add(self, rhs: Self) -> Self;

    fn wrapping_sub(self, rhs: Self) -> Self;

    fn wrapping_mul(self, rhs: Self) -> Self;

    fn wrapping_neg(self) -> Self;
}

macro_rules! impl_matrix_element {
    ($($ty:ty),*) => {
        $(
            impl MatrixElement for $ty {
                const ZERO: Self = 0;

                fn wrapping_add(self, rhs: Self) -> Self {
                    <$ty>::wrapping_add(self, rhs)
                }

                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$ty>::wrapping_sub(self, rhs)
                }

                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$ty>::wrapping_mul(self, rhs)
                }

                fn wrapping_neg(self) -> Self {
                    <$ty>::wrapping_neg(self)
                }
            }
        )*
    };
}

impl_matrix_element!(i32, i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_detection() {
        assert!(MatrixElement::is_zero(0i32));
        assert!(!MatrixElement::is_zero(-3i64));
    }

    #[test]
    fn test_wrapping_matches_twos_complement() {
        assert_eq!(MatrixElement::wrapping_add(i32::MAX, 1), i32::MIN);
        assert_eq!(MatrixElement::wrapping_neg(i64::MIN), i64::MIN);
        assert_eq!(MatrixElement::wrapping_mul(6i64, -7), -42);
    }
}
