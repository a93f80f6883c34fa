//! Coordinate range validation
//!
//! Pure checks with no I/O. The unchecked write path never calls these;
//! they back `try_set_element` and strict loading.

use crate::traits::MatrixAccess;
use crate::{Coord, SpmatError};

/// Validate that a coordinate lies inside a `rows x cols` matrix
pub fn validate_coord(coord: Coord, rows: usize, cols: usize) -> Result<(), SpmatError> {
    if !coord.within(rows, cols) {
        return Err(SpmatError::OutOfRange {
            row: signed_index(coord.row),
            col: signed_index(coord.col),
            rows,
            cols,
        });
    }
    Ok(())
}

/// Saturating `usize -> i64` for error reporting
fn signed_index(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}

/// Validate that every stored entry of a matrix lies inside its shape
///
/// Reports the first offending coordinate in row-major order.
pub fn validate_stored_coords<M: MatrixAccess>(matrix: &M) -> Result<(), SpmatError> {
    let (rows, cols) = matrix.dimensions();
    for (coord, _) in matrix.sorted_entries() {
        validate_coord(coord, rows, cols)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SparseMatrix;

    #[test]
    fn test_validate_coord() {
        assert_eq!(validate_coord(Coord::new(0, 0), 1, 1), Ok(()));
        assert_eq!(validate_coord(Coord::new(4, 2), 5, 3), Ok(()));

        assert_eq!(
            validate_coord(Coord::new(5, 0), 5, 3),
            Err(SpmatError::OutOfRange {
                row: 5,
                col: 0,
                rows: 5,
                cols: 3
            })
        );
        assert!(validate_coord(Coord::new(0, 3), 5, 3).is_err());
        // Nothing fits in an empty matrix
        assert!(validate_coord(Coord::new(0, 0), 0, 0).is_err());
    }

    #[test]
    fn test_validate_stored_coords_reports_first_row_major() {
        let mut matrix: SparseMatrix = SparseMatrix::new(2, 2);
        matrix.set_element(0, 0, 1);
        matrix.set_element(3, 0, 2);
        matrix.set_element(0, 7, 3);

        assert_eq!(
            validate_stored_coords(&matrix),
            Err(SpmatError::OutOfRange {
                row: 0,
                col: 7,
                rows: 2,
                cols: 2
            })
        );

        matrix.set_element(3, 0, 0);
        matrix.set_element(0, 7, 0);
        assert_eq!(validate_stored_coords(&matrix), Ok(()));
    }
}
