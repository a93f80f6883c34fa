//! Hash-map backed sparse integer matrix
//!
//! Storage is a map from [`Coord`] to a non-zero value. A coordinate that is
//! absent from the map reads as zero, and writing zero removes the entry, so
//! the map never holds an explicit zero.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::traits::{MatrixAccess, MatrixElement};
use crate::validation::bounds::validate_coord;
use crate::{Coord, Result};

/// Sparse 2D matrix of integers
///
/// `rows` and `cols` are fixed at construction. Arithmetic lives in
/// [`crate::ops`] and always returns a fresh matrix.
#[derive(Debug, Clone)]
pub struct SparseMatrix<T: MatrixElement = i64> {
    rows: usize,
    cols: usize,
    elements: HashMap<Coord, T>,
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// Create an empty `rows x cols` matrix
    ///
    /// Zero dimensions are allowed and describe an empty matrix.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            elements: HashMap::new(),
        }
    }

    /// Build a matrix by applying `set_element` to each entry in order
    ///
    /// Later duplicates overwrite earlier ones and zero values delete.
    pub fn from_entries<I>(rows: usize, cols: usize, entries: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::new(rows, cols);
        for (row, col, value) in entries {
            matrix.set_element(row, col, value);
        }
        matrix
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of stored (non-zero) elements
    pub fn nnz(&self) -> usize {
        self.elements.len()
    }

    /// True when no element is stored
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Set the element at `(row, col)`
    ///
    /// A non-zero value is inserted or overwrites; zero removes any existing
    /// entry. Coordinates are not bounds checked: callers must stay inside
    /// `[0, rows) x [0, cols)`. Use [`Self::try_set_element`] for a checked
    /// write.
    pub fn set_element(&mut self, row: usize, col: usize, value: T) {
        let key = Coord::new(row, col);
        if value.is_zero() {
            self.elements.remove(&key);
        } else {
            self.elements.insert(key, value);
        }
    }

    /// Bounds-checked [`Self::set_element`]
    ///
    /// Fails with `OutOfRange` and leaves the matrix untouched when the
    /// coordinate lies outside the declared shape.
    pub fn try_set_element(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        validate_coord(Coord::new(row, col), self.rows, self.cols)?;
        self.set_element(row, col, value);
        Ok(())
    }

    /// Get the element at `(row, col)`, or zero if none is stored
    pub fn get_element(&self, row: usize, col: usize) -> T {
        self.elements
            .get(&Coord::new(row, col))
            .copied()
            .unwrap_or(T::ZERO)
    }

    /// Whether a non-zero value is stored at `(row, col)`
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.elements.contains_key(&Coord::new(row, col))
    }

    pub(crate) fn contains_key(&self, key: &Coord) -> bool {
        self.elements.contains_key(key)
    }

    /// Iterate stored entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (Coord, T)> + '_ {
        self.elements.iter().map(|(&coord, &value)| (coord, value))
    }

    /// Stored entries sorted row-major
    pub fn sorted_entries(&self) -> Vec<(Coord, T)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by_key(|&(coord, _)| coord);
        entries
    }
}

impl<T: MatrixElement> MatrixAccess for SparseMatrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> T {
        SparseMatrix::get_element(self, row, col)
    }

    fn dimensions(&self) -> (usize, usize) {
        SparseMatrix::dimensions(self)
    }

    fn nnz(&self) -> usize {
        SparseMatrix::nnz(self)
    }

    fn sorted_entries(&self) -> Vec<(Coord, T)> {
        SparseMatrix::sorted_entries(self)
    }
}

/// Element-wise equality over shape and stored entries
impl<T: MatrixElement> PartialEq for SparseMatrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions() && self.elements == other.elements
    }
}

impl<T: MatrixElement> Eq for SparseMatrix<T> {}
