//! Text encoding and decoding of whole matrices
//!
//! # Layout
//!
//! ```text
//! rows=<integer>            | Sparse Matrix (<rows>x<cols>):
//! cols=<integer>            |
//! (row, col, value)         | (row,col, value)
//! ...                       | ...
//! ```
//!
//! Body lines are trimmed. Lines that do not start with `(` are skipped; a
//! line that does must be a complete `(row, col, value)` triple. Entries are
//! applied in file order through `set_element`, so duplicates resolve
//! last-write-wins and a zero value deletes.
//!
//! Coordinates are signed in the text. Without bounds checking an entry with
//! a negative coordinate is dropped, since no cell of any matrix can hold it.
//! Encoding only emits entries inside the declared shape.

use alloc::string::String;
use core::fmt::{self, Write};

use super::constants::*;
use super::header::{Header, HeaderStyle};
use crate::traits::{MatrixAccess, MatrixElement};
use crate::{Coord, Result, SparseMatrix, SpmatError};

/// Options controlling how strictly text is decoded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject entries outside the declared shape with `OutOfRange`
    pub check_bounds: bool,
}

impl ParseOptions {
    /// Enable or disable bounds checking of entry coordinates
    pub fn with_bounds_check(mut self, check_bounds: bool) -> Self {
        self.check_bounds = check_bounds;
        self
    }
}

/// Decode a matrix with default options
pub fn parse_matrix<T: MatrixElement>(text: &str) -> Result<SparseMatrix<T>> {
    parse_matrix_with(text, ParseOptions::default())
}

/// Decode a matrix from either header style
pub fn parse_matrix_with<T: MatrixElement>(
    text: &str,
    options: ParseOptions,
) -> Result<SparseMatrix<T>> {
    let mut lines = text.lines();
    let first = lines.next();
    let second = lines.clone().next();
    let header = Header::parse(first, second)?;

    let mut matrix = SparseMatrix::new(header.rows, header.cols);
    let body = text.lines().enumerate().skip(header.line_count());

    for (index, line) in body {
        let line_number = index + 1;
        let Some((row, col, value)) = parse_entry::<T>(line, line_number)? else {
            continue;
        };

        let (Ok(r), Ok(c)) = (usize::try_from(row), usize::try_from(col)) else {
            if options.check_bounds {
                return Err(SpmatError::OutOfRange {
                    row,
                    col,
                    rows: header.rows,
                    cols: header.cols,
                });
            }
            continue;
        };

        if options.check_bounds {
            matrix.try_set_element(r, c, value)?;
        } else {
            matrix.set_element(r, c, value);
        }
    }

    Ok(matrix)
}

/// Decode one body line
///
/// Returns `Ok(None)` for lines that are not entries. Coordinates come back
/// signed; range checks are up to the caller.
pub fn parse_entry<T: MatrixElement>(
    line: &str,
    line_number: usize,
) -> Result<Option<(i64, i64, T)>> {
    let line = line.trim();
    if !line.starts_with(ENTRY_OPEN) {
        return Ok(None);
    }

    let malformed = || SpmatError::InvalidEntry { line: line_number };

    let inner = line[ENTRY_OPEN.len_utf8()..]
        .strip_suffix(ENTRY_CLOSE)
        .ok_or_else(malformed)?;

    let mut fields = inner.split(FIELD_SEPARATOR).map(str::trim);
    let row = fields
        .next()
        .and_then(|f| f.parse::<i64>().ok())
        .ok_or_else(malformed)?;
    let col = fields
        .next()
        .and_then(|f| f.parse::<i64>().ok())
        .ok_or_else(malformed)?;
    let value = fields
        .next()
        .and_then(|f| f.parse::<T>().ok())
        .ok_or_else(malformed)?;

    if fields.next().is_some() {
        return Err(malformed());
    }

    Ok(Some((row, col, value)))
}

/// Write a matrix in the given header style
///
/// Entries are written row-major, one per line; zeros never appear. Stored
/// entries outside `[0, rows) x [0, cols)` are not written.
pub fn write_matrix<M, W>(matrix: &M, style: HeaderStyle, out: &mut W) -> fmt::Result
where
    M: MatrixAccess,
    W: Write,
{
    let (rows, cols) = matrix.dimensions();
    Header::new(rows, cols, style).write_to(out)?;

    let entries = matrix
        .sorted_entries()
        .into_iter()
        .filter(|(coord, _)| coord.within(rows, cols));

    for (Coord { row, col }, value) in entries {
        match style {
            HeaderStyle::Banner => writeln!(out, "({row},{col}, {value})")?,
            HeaderStyle::Assignment => writeln!(out, "({row}, {col}, {value})")?,
        }
    }

    Ok(())
}

/// Encode a matrix to a new string
pub fn render_matrix<M: MatrixAccess>(matrix: &M, style: HeaderStyle) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_matrix(matrix, style, &mut out);
    out
}

/// Renders the result (banner) layout
impl<T: MatrixElement> fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_matrix(self, HeaderStyle::Banner, f)
    }
}
