//! Run configuration for the calculator

use spmat_core::{Operation, ParseOptions};
use std::path::{Path, PathBuf};

/// Configuration for loading operands and placing results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalcConfig {
    /// Directory that receives `output_<operation>.txt` when no explicit
    /// output path is given
    pub output_dir: PathBuf,
    /// Reject out-of-range entries while loading and mismatched shapes for
    /// add/subtract
    pub strict: bool,
    /// Print the run report as JSON instead of plain text
    pub emit_json: bool,
}

impl CalcConfig {
    /// Create config writing results into `output_dir`
    pub fn with_output_dir<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Enable or disable strict validation
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Enable or disable the JSON run report
    pub fn with_json(mut self, emit_json: bool) -> Self {
        self.emit_json = emit_json;
        self
    }

    /// Decoder options implied by this config
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions::default().with_bounds_check(self.strict)
    }

    /// Where a result goes: `explicit` if given, else the operation's
    /// default file name inside `output_dir`
    pub fn output_path(&self, operation: Operation, explicit: Option<&Path>) -> PathBuf {
        match explicit {
            Some(path) => path.to_path_buf(),
            None => self.output_dir.join(operation.output_file_name()),
        }
    }
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            strict: false,
            emit_json: false,
        }
    }
}
