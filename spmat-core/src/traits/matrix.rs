//! Read-only matrix access trait
//!
//! Renderers and validators work against this interface so they do not
//! depend on the storage scheme of the concrete matrix type.

use alloc::vec::Vec;

use super::element::MatrixElement;
use crate::Coord;

/// Format-agnostic read access to a sparse matrix
pub trait MatrixAccess {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get the element at the specified position
    ///
    /// Absent (zero) entries read as `Element::ZERO`. Positions outside the
    /// declared shape are not an error; they read as zero as well.
    fn get_element(&self, row: usize, col: usize) -> Self::Element;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of non-zero elements stored
    fn nnz(&self) -> usize;

    /// Non-zero entries in row-major order
    fn sorted_entries(&self) -> Vec<(Coord, Self::Element)>;
}
