//! Sparse matrix arithmetic and operation dispatch
//!
//! All three operations read both operands and accumulate into a freshly
//! created result through `get_element`/`set_element`, so the sparsity
//! invariant is enforced on every write, including sums that cancel to zero.

use alloc::string::{String, ToString};
use core::str::FromStr;

use crate::traits::MatrixElement;
use crate::validation::shape::{product_shape, validate_inner_dimension, validate_same_shape};
use crate::{Result, SparseMatrix, SpmatError};

impl<T: MatrixElement> SparseMatrix<T> {
    /// Element-wise sum with the shape of `self`
    ///
    /// Shapes are not compared; callers that need that guarantee use
    /// [`Self::ensure_same_shape`] first or go through
    /// [`Operation::apply_strict`].
    pub fn add(&self, other: &Self) -> Self {
        self.merge(other, T::wrapping_add, |value| value)
    }

    /// Element-wise difference with the shape of `self`
    ///
    /// Entries present only in `other` are stored negated.
    pub fn subtract(&self, other: &Self) -> Self {
        self.merge(other, T::wrapping_sub, T::wrapping_neg)
    }

    /// Matrix product `self x other`
    ///
    /// Fails with `InvalidDimensions` unless `self.cols == other.rows`; the
    /// check runs before any work. Every stored entry of `self` probes a full
    /// row of `other` by lookup, so the cost is `O(nnz(self) * other.cols)`.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        validate_inner_dimension(self.dimensions(), other.dimensions())?;

        let (rows, cols) = product_shape(self.dimensions(), other.dimensions());
        let mut result = Self::new(rows, cols);

        for (coord, value) in self.iter() {
            for k in 0..other.cols() {
                let other_value = other.get_element(coord.col, k);
                if other_value.is_zero() {
                    continue;
                }
                let current = result.get_element(coord.row, k);
                result.set_element(
                    coord.row,
                    k,
                    current.wrapping_add(value.wrapping_mul(other_value)),
                );
            }
        }

        Ok(result)
    }

    /// Fail with `InvalidDimensions` unless both shapes are identical
    pub fn ensure_same_shape(&self, other: &Self) -> Result<()> {
        validate_same_shape(self.dimensions(), other.dimensions())
    }

    fn merge<F, G>(&self, other: &Self, combine: F, only_other: G) -> Self
    where
        F: Fn(T, T) -> T,
        G: Fn(T) -> T,
    {
        let mut result = Self::new(self.rows(), self.cols());

        for (coord, value) in self.iter() {
            let other_value = other.get_element(coord.row, coord.col);
            result.set_element(coord.row, coord.col, combine(value, other_value));
        }

        for (coord, value) in other.iter() {
            if !self.contains_key(&coord) {
                result.set_element(coord.row, coord.col, only_other(value));
            }
        }

        result
    }
}

/// The three supported binary operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// Lower-case name accepted by [`FromStr`]
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }

    /// Human-readable label shown by the interactive menu
    pub const fn label(self) -> &'static str {
        match self {
            Operation::Add => "Addition",
            Operation::Subtract => "Subtraction",
            Operation::Multiply => "Multiplication",
        }
    }

    /// Default output file name for this operation's result
    pub const fn output_file_name(self) -> &'static str {
        match self {
            Operation::Add => "output_add.txt",
            Operation::Subtract => "output_subtract.txt",
            Operation::Multiply => "output_multiply.txt",
        }
    }

    /// Map an interactive menu choice (1, 2, 3) to an operation
    pub fn from_menu_choice(choice: &str) -> Result<Self> {
        match choice.trim() {
            "1" => Ok(Operation::Add),
            "2" => Ok(Operation::Subtract),
            "3" => Ok(Operation::Multiply),
            other => Err(SpmatError::InvalidOperation(other.to_string())),
        }
    }

    /// Apply the operation with reference semantics
    ///
    /// Only `Multiply` can fail.
    pub fn apply<T: MatrixElement>(
        self,
        left: &SparseMatrix<T>,
        right: &SparseMatrix<T>,
    ) -> Result<SparseMatrix<T>> {
        match self {
            Operation::Add => Ok(left.add(right)),
            Operation::Subtract => Ok(left.subtract(right)),
            Operation::Multiply => left.multiply(right),
        }
    }

    /// Apply the operation, also rejecting mismatched add/subtract shapes
    pub fn apply_strict<T: MatrixElement>(
        self,
        left: &SparseMatrix<T>,
        right: &SparseMatrix<T>,
    ) -> Result<SparseMatrix<T>> {
        if matches!(self, Operation::Add | Operation::Subtract) {
            left.ensure_same_shape(right)?;
        }
        self.apply(left, right)
    }
}

impl FromStr for Operation {
    type Err = SpmatError;

    fn from_str(s: &str) -> Result<Self> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| SpmatError::InvalidOperation(String::from(s)))
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
