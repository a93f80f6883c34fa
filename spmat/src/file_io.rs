//! File I/O for text matrices
//!
//! Reading and writing matrix files in the text layouts defined by
//! `spmat_core::format`.

use crate::error::{CalcError, Result};
use spmat_core::{parse_matrix_with, write_matrix, HeaderStyle, ParseOptions, SparseMatrix};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// File handle for text matrix files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixFile {
    pub path: PathBuf,
}

impl MatrixFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read and decode the matrix stored at this path
    pub fn load(&self, options: ParseOptions) -> Result<SparseMatrix> {
        let text = fs::read_to_string(&self.path).map_err(|source| CalcError::Read {
            path: self.path.clone(),
            source,
        })?;

        let matrix = parse_matrix_with(&text, options).map_err(|source| CalcError::Load {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(
            path = %self.path.display(),
            rows = matrix.rows(),
            cols = matrix.cols(),
            nnz = matrix.nnz(),
            "matrix loaded"
        );
        Ok(matrix)
    }

    /// Encode `matrix` and write it to this path, replacing any existing file
    pub fn store(&self, matrix: &SparseMatrix, style: HeaderStyle) -> Result<()> {
        let write_error = |source: std::io::Error| CalcError::Write {
            path: self.path.clone(),
            source,
        };

        let file = File::create(&self.path).map_err(write_error)?;
        let mut writer = BufWriter::new(file);

        let mut text = String::with_capacity(32 + matrix.nnz() * 16);
        // Writing into a String cannot fail
        let _ = write_matrix(matrix, style, &mut text);

        writer.write_all(text.as_bytes()).map_err(write_error)?;
        writer.flush().map_err(write_error)?;

        tracing::debug!(
            path = %self.path.display(),
            nnz = matrix.nnz(),
            "matrix written"
        );
        Ok(())
    }

    /// Read a matrix with the given decoder options
    pub fn read<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<SparseMatrix> {
        Self::new(path).load(options)
    }

    /// Write a result matrix in the banner layout
    pub fn write<P: AsRef<Path>>(path: P, matrix: &SparseMatrix) -> Result<()> {
        Self::new(path).store(matrix, HeaderStyle::Banner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spmat_core::SpmatError;

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("m.txt");

        let matrix = SparseMatrix::from_entries(3, 2, [(0, 1, 4), (2, 0, -1)]);
        MatrixFile::write(&path, &matrix).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "Sparse Matrix (3x2):\n(0,1, 4)\n(2,0, -1)\n");

        let loaded = MatrixFile::read(&path, ParseOptions::default()).unwrap();
        assert_eq!(loaded, matrix);
    }

    #[test]
    fn test_store_assignment_layout() {
        let dir = tempfile::tempdir().unwrap();
        let file = MatrixFile::new(dir.path().join("operand.txt"));

        let matrix = SparseMatrix::from_entries(2, 2, [(1, 1, 9)]);
        file.store(&matrix, HeaderStyle::Assignment).unwrap();

        let text = fs::read_to_string(&file.path).unwrap();
        assert_eq!(text, "rows=2\ncols=2\n(1, 1, 9)\n");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = MatrixFile::read(dir.path().join("absent.txt"), ParseOptions::default())
            .unwrap_err();
        assert!(matches!(err, CalcError::Read { .. }));
    }

    #[test]
    fn test_malformed_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, "rows=2\ncols=two\n").unwrap();

        let err = MatrixFile::read(&path, ParseOptions::default()).unwrap_err();
        assert_eq!(
            err.matrix_error(),
            Some(&SpmatError::InvalidHeader { line: 2 })
        );
        assert!(err.to_string().contains("bad.txt"));
    }
}
