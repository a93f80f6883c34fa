#![no_std]

//! SPMAT Core - Sparse Integer Matrix Definitions
//!
//! This crate provides the sparse matrix type, its arithmetic, and the
//! plain-text layouts used to exchange matrices. It performs no I/O.
//!
//! ```
//! use spmat_core::{parse_matrix, SparseMatrix};
//!
//! let a: SparseMatrix = parse_matrix("rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 2)\n").unwrap();
//! let b: SparseMatrix =
//!     parse_matrix("rows=2\ncols=2\n(0, 0, 3)\n(0, 1, 4)\n(1, 0, 5)\n(1, 1, 6)\n").unwrap();
//!
//! let product = a.multiply(&b).unwrap();
//! assert_eq!(product.get_element(1, 0), 10);
//! assert_eq!(
//!     product.to_string(),
//!     "Sparse Matrix (2x2):\n(0,0, 3)\n(0,1, 4)\n(1,0, 10)\n(1,1, 12)\n"
//! );
//! ```

extern crate alloc;

pub mod coord;
pub mod error;
pub mod format;
pub mod matrix;
pub mod ops;
pub mod traits;
pub mod validation;

pub use coord::Coord;
pub use error::*;
pub use format::{
    parse_matrix, parse_matrix_with, render_matrix, write_matrix, HeaderStyle, ParseOptions,
};
pub use matrix::SparseMatrix;
pub use ops::Operation;
pub use traits::{MatrixAccess, MatrixElement};
