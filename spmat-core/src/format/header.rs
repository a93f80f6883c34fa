//! Dimension header of the text layouts
//!
//! Two header styles exist. Operand files declare their shape with two
//! assignment lines:
//!
//! ```text
//! rows=3
//! cols=4
//! ```
//!
//! Result files carry a single banner line:
//!
//! ```text
//! Sparse Matrix (3x4):
//! ```
//!
//! The parser accepts either, so results can be fed back in as operands.

use core::fmt::{self, Write};

use super::constants::*;
use crate::{Result, SpmatError};

/// Which header style a text matrix starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderStyle {
    /// `Sparse Matrix (<rows>x<cols>):`, written for results
    #[default]
    Banner,
    /// `rows=<rows>` / `cols=<cols>`, the operand input layout
    Assignment,
}

/// Declared matrix shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub rows: usize,
    pub cols: usize,
    pub style: HeaderStyle,
}

impl Header {
    pub const fn new(rows: usize, cols: usize, style: HeaderStyle) -> Self {
        Self { rows, cols, style }
    }

    /// Number of text lines the header occupies
    pub const fn line_count(&self) -> usize {
        match self.style {
            HeaderStyle::Banner => 1,
            HeaderStyle::Assignment => 2,
        }
    }

    /// Parse a header from the first one or two lines of a document
    ///
    /// `first` and `second` are the raw lines 1 and 2 (`second` may be
    /// absent for a banner-only document).
    pub fn parse(first: Option<&str>, second: Option<&str>) -> Result<Self> {
        let first = first.ok_or(SpmatError::InvalidHeader { line: 1 })?;

        if let Some((rows, cols)) = parse_banner(first) {
            return Ok(Self::new(rows, cols, HeaderStyle::Banner));
        }

        let rows = parse_assignment(first).ok_or(SpmatError::InvalidHeader { line: 1 })?;
        let cols = second
            .and_then(parse_assignment)
            .ok_or(SpmatError::InvalidHeader { line: 2 })?;

        Ok(Self::new(rows, cols, HeaderStyle::Assignment))
    }

    /// Write the header lines, each terminated by a newline
    pub fn write_to<W: Write>(&self, out: &mut W) -> fmt::Result {
        match self.style {
            HeaderStyle::Banner => writeln!(
                out,
                "{BANNER_PREFIX}{}{BANNER_DIM_SEPARATOR}{}{BANNER_SUFFIX}",
                self.rows, self.cols
            ),
            HeaderStyle::Assignment => {
                writeln!(out, "{ROWS_KEY}{ASSIGN}{}", self.rows)?;
                writeln!(out, "{COLS_KEY}{ASSIGN}{}", self.cols)
            }
        }
    }
}

/// `Sparse Matrix (RxC):` → `(R, C)`
fn parse_banner(line: &str) -> Option<(usize, usize)> {
    let dims = line
        .trim()
        .strip_prefix(BANNER_PREFIX)?
        .strip_suffix(BANNER_SUFFIX)?;
    let (rows, cols) = dims.split_once(BANNER_DIM_SEPARATOR)?;
    Some((rows.trim().parse().ok()?, cols.trim().parse().ok()?))
}

/// `<key>=<count>` → `count`
///
/// The key itself is not checked; the first line is the row count and the
/// second the column count by position.
fn parse_assignment(line: &str) -> Option<usize> {
    let (_, value) = line.split_once(ASSIGN)?;
    value.split_whitespace().next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    #[test]
    fn test_parse_assignment_header() {
        let header = Header::parse(Some("rows=3"), Some("cols=4")).unwrap();
        assert_eq!(header, Header::new(3, 4, HeaderStyle::Assignment));
        assert_eq!(header.line_count(), 2);

        let spaced = Header::parse(Some("rows = 10 "), Some("  cols=   0")).unwrap();
        assert_eq!((spaced.rows, spaced.cols), (10, 0));
    }

    #[test]
    fn test_parse_banner_header() {
        let header = Header::parse(Some("Sparse Matrix (2x5):"), None).unwrap();
        assert_eq!(header, Header::new(2, 5, HeaderStyle::Banner));
        assert_eq!(header.line_count(), 1);
    }

    #[test]
    fn test_parse_header_errors() {
        assert_eq!(
            Header::parse(None, None),
            Err(SpmatError::InvalidHeader { line: 1 })
        );
        assert_eq!(
            Header::parse(Some("rows 3"), Some("cols=4")),
            Err(SpmatError::InvalidHeader { line: 1 })
        );
        assert_eq!(
            Header::parse(Some("rows=3"), None),
            Err(SpmatError::InvalidHeader { line: 2 })
        );
        assert_eq!(
            Header::parse(Some("rows=3"), Some("cols=-1")),
            Err(SpmatError::InvalidHeader { line: 2 })
        );
        assert_eq!(
            Header::parse(Some("Sparse Matrix (2xb):"), Some("cols=1")),
            Err(SpmatError::InvalidHeader { line: 1 })
        );
    }

    #[test]
    fn test_write_header() {
        let mut out = String::new();
        Header::new(3, 4, HeaderStyle::Banner)
            .write_to(&mut out)
            .unwrap();
        assert_eq!(out, "Sparse Matrix (3x4):\n");

        let mut out = String::new();
        Header::new(3, 4, HeaderStyle::Assignment)
            .write_to(&mut out)
            .unwrap();
        assert_eq!(out, "rows=3\ncols=4\n");
    }
}
