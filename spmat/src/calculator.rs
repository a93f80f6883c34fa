//! Operation runner: load two operand files, compute, write the result

use crate::config::CalcConfig;
use crate::error::Result;
use crate::file_io::MatrixFile;
use crate::report::RunReport;
use spmat_core::validation::validate_stored_coords;
use spmat_core::{Operation, SparseMatrix};
use std::path::Path;
use std::time::Instant;

/// Runs matrix operations according to a [`CalcConfig`]
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    config: CalcConfig,
}

impl Calculator {
    pub fn new(config: CalcConfig) -> Self {
        Self { config }
    }

    /// Get the run configuration
    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    /// Apply `operation` to two in-memory matrices
    ///
    /// In strict mode both operands must hold only in-range entries and
    /// add/subtract also reject mismatched shapes.
    pub fn compute(
        &self,
        operation: Operation,
        left: &SparseMatrix,
        right: &SparseMatrix,
    ) -> Result<SparseMatrix> {
        let result = if self.config.strict {
            validate_stored_coords(left)?;
            validate_stored_coords(right)?;
            operation.apply_strict(left, right)?
        } else {
            operation.apply(left, right)?
        };
        Ok(result)
    }

    /// Load both operands, apply `operation` and write the result
    ///
    /// The result goes to `output` if given, else to the operation's default
    /// file inside the configured output directory. Nothing is written when
    /// loading or computing fails.
    #[tracing::instrument(skip(self, operation), fields(op = %operation))]
    pub fn run(
        &self,
        operation: Operation,
        left: &Path,
        right: &Path,
        output: Option<&Path>,
    ) -> Result<RunReport> {
        let started = Instant::now();
        let options = self.config.parse_options();

        let a = MatrixFile::read(left, options)?;
        let b = MatrixFile::read(right, options)?;

        let result = self.compute(operation, &a, &b).inspect_err(|e| {
            tracing::warn!(error = %e, "operation rejected");
        })?;

        let output = self.config.output_path(operation, output);
        MatrixFile::write(&output, &result)?;

        let elapsed = started.elapsed();
        tracing::info!(
            output = %output.display(),
            nnz = result.nnz(),
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "operation completed"
        );

        Ok(RunReport {
            operation,
            inputs: [left.to_path_buf(), right.to_path_buf()],
            output,
            left_shape: a.dimensions(),
            right_shape: b.dimensions(),
            result_shape: result.dimensions(),
            result_nnz: result.nnz(),
            elapsed,
        })
    }

    /// [`Self::run`] with the operation given by name
    ///
    /// Unknown names fail with `InvalidOperation` before any file is read.
    pub fn run_named(
        &self,
        name: &str,
        left: &Path,
        right: &Path,
        output: Option<&Path>,
    ) -> Result<RunReport> {
        let operation: Operation = name.parse()?;
        self.run(operation, left, right, output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spmat_core::SpmatError;

    #[test]
    fn test_compute_strict_rejects_stray_entry() {
        let mut left = SparseMatrix::new(2, 2);
        left.set_element(0, 0, 1);
        left.set_element(2, 2, 1);
        let right = SparseMatrix::new(2, 2);

        let lenient = Calculator::default();
        assert!(lenient.compute(Operation::Add, &left, &right).is_ok());

        let strict = Calculator::new(CalcConfig::default().with_strict(true));
        let err = strict
            .compute(Operation::Add, &left, &right)
            .unwrap_err();
        assert_eq!(
            err.matrix_error(),
            Some(&SpmatError::OutOfRange {
                row: 2,
                col: 2,
                rows: 2,
                cols: 2
            })
        );
    }

    #[test]
    fn test_compute_multiply_unchanged_by_strict() {
        let left = SparseMatrix::from_entries(1, 2, [(0, 0, 2), (0, 1, 3)]);
        let right = SparseMatrix::from_entries(2, 1, [(0, 0, 4), (1, 0, 5)]);

        let strict = Calculator::new(CalcConfig::default().with_strict(true));
        let product = strict.compute(Operation::Multiply, &left, &right).unwrap();
        assert_eq!(product.get_element(0, 0), 23);
    }
}
