//! Error types for the calculator front end

use spmat_core::SpmatError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for calculator operations
pub type Result<T> = std::result::Result<T, CalcError>;

/// Errors raised while loading operands, computing, or writing results
#[derive(Error, Debug)]
pub enum CalcError {
    /// Operand file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Result file could not be written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Operand file was read but its contents are not a valid matrix
    #[error("failed to load {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: SpmatError,
    },

    /// Arithmetic or dispatch failure from the core
    #[error(transparent)]
    Matrix(#[from] SpmatError),

    /// Reading the menu choice or writing prompts failed
    #[error("console I/O failed: {0}")]
    Console(#[from] io::Error),

    /// Log filter or subscriber setup failed
    #[error("logging setup failed: {0}")]
    Logging(String),
}

impl CalcError {
    /// The core error behind this failure, if any
    pub fn matrix_error(&self) -> Option<&SpmatError> {
        match self {
            CalcError::Load { source, .. } => Some(source),
            CalcError::Matrix(source) => Some(source),
            _ => None,
        }
    }
}
