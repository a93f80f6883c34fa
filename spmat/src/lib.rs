//! SPMAT - Sparse Integer Matrix Calculator
//!
//! This library loads sparse integer matrices from text files, adds,
//! subtracts or multiplies them, and writes the result back as text.
//!
//! ## Architecture
//!
//! - **spmat-core**: the matrix type, arithmetic and text layouts (no I/O)
//! - **spmat**: file I/O, run configuration, logging and the command line
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spmat::{CalcConfig, Calculator, Operation};
//! use std::path::Path;
//!
//! fn example() -> spmat::error::Result<()> {
//!     let calculator = Calculator::new(CalcConfig::with_output_dir("results"));
//!     let report = calculator.run(
//!         Operation::Multiply,
//!         Path::new("matrixfile1.txt"),
//!         Path::new("matrixfile3.txt"),
//!         None,
//!     )?;
//!     println!("{}", report.summary());
//!     Ok(())
//! }
//! ```

// Re-export core abstractions
pub use spmat_core::{
    // Matrix type and element access
    Coord, MatrixAccess, MatrixElement, SparseMatrix,
    // Arithmetic dispatch
    Operation,
    // Text layouts
    parse_matrix, parse_matrix_with, render_matrix, HeaderStyle, ParseOptions,
    // Core errors
    ShapeCheck, SpmatError,
};

pub mod calculator;
pub mod config;
pub mod error;
pub mod file_io;
pub mod logging;
pub mod menu;
pub mod report;

pub use calculator::Calculator;
pub use config::CalcConfig;
pub use error::CalcError;
pub use file_io::MatrixFile;
pub use logging::{init_logging, LogConfig, LogFormat};
pub use menu::Menu;
pub use report::RunReport;
