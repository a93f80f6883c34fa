//! Operand shape validation for matrix arithmetic

use crate::{ShapeCheck, SpmatError};

/// Validate that two shapes are identical (element-wise operations)
pub fn validate_same_shape(
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(), SpmatError> {
    if left.0 != right.0 || left.1 != right.1 {
        return Err(SpmatError::InvalidDimensions {
            left,
            right,
            check: ShapeCheck::SameShape,
        });
    }
    Ok(())
}

/// Validate that `left.cols == right.rows` (matrix product)
pub fn validate_inner_dimension(
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(), SpmatError> {
    if left.1 != right.0 {
        return Err(SpmatError::InvalidDimensions {
            left,
            right,
            check: ShapeCheck::InnerDimension,
        });
    }
    Ok(())
}

/// Shape of `left x right`, assuming the inner dimension already matched
pub const fn product_shape(left: (usize, usize), right: (usize, usize)) -> (usize, usize) {
    (left.0, right.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_same_shape() {
        assert_eq!(validate_same_shape((2, 3), (2, 3)), Ok(()));
        assert_eq!(validate_same_shape((0, 0), (0, 0)), Ok(()));

        assert_eq!(
            validate_same_shape((2, 3), (3, 2)),
            Err(SpmatError::InvalidDimensions {
                left: (2, 3),
                right: (3, 2),
                check: ShapeCheck::SameShape
            })
        );
    }

    #[test]
    fn test_validate_inner_dimension() {
        assert_eq!(validate_inner_dimension((2, 3), (3, 5)), Ok(()));
        assert_eq!(validate_inner_dimension((4, 0), (0, 7)), Ok(()));

        assert_eq!(
            validate_inner_dimension((2, 3), (2, 3)),
            Err(SpmatError::InvalidDimensions {
                left: (2, 3),
                right: (2, 3),
                check: ShapeCheck::InnerDimension
            })
        );
    }

    #[test]
    fn test_product_shape() {
        assert_eq!(product_shape((2, 3), (3, 5)), (2, 5));
        assert_eq!(product_shape((4, 0), (0, 7)), (4, 7));
    }
}
