//! Error types for SPMAT operations

use alloc::string::String;

/// Which arithmetic operation reported a shape problem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeCheck {
    /// Element-wise operations need identical shapes
    SameShape,
    /// Matrix product needs `left.cols == right.rows`
    InnerDimension,
}

/// Errors that can occur during SPMAT operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpmatError {
    /// Operand shapes are incompatible for the requested operation
    InvalidDimensions {
        left: (usize, usize),
        right: (usize, usize),
        check: ShapeCheck,
    },
    /// Operation name or menu choice outside `add`, `subtract`, `multiply`
    InvalidOperation(String),
    /// Coordinate outside `[0, rows) x [0, cols)`
    ///
    /// Signed so that negative coordinates read from text can be reported.
    OutOfRange {
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },
    /// Missing or unparseable dimension header (1-based line number)
    InvalidHeader { line: usize },
    /// Entry line starting with `(` that is not a `(row, col, value)` triple
    InvalidEntry { line: usize },
}

impl core::fmt::Display for SpmatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SpmatError::InvalidDimensions {
                left,
                right,
                check: ShapeCheck::InnerDimension,
            } => write!(
                f,
                "Matrix dimensions do not match for multiplication: ({}x{}) x ({}x{})",
                left.0, left.1, right.0, right.1
            ),
            SpmatError::InvalidDimensions {
                left,
                right,
                check: ShapeCheck::SameShape,
            } => write!(
                f,
                "Matrix dimensions differ: ({}x{}) vs ({}x{})",
                left.0, left.1, right.0, right.1
            ),
            SpmatError::InvalidOperation(name) => write!(
                f,
                "Invalid operation '{name}'. Choose between add, subtract, or multiply."
            ),
            SpmatError::OutOfRange {
                row,
                col,
                rows,
                cols,
            } => write!(f, "Index ({row}, {col}) out of range for {rows}x{cols} matrix"),
            SpmatError::InvalidHeader { line } => {
                write!(f, "Invalid dimension header on line {line}")
            }
            SpmatError::InvalidEntry { line } => write!(f, "Malformed entry on line {line}"),
        }
    }
}

impl core::error::Error for SpmatError {}

/// Result type for SPMAT operations
pub type Result<T> = core::result::Result<T, SpmatError>;
