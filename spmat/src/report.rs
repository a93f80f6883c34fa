//! Summary of one calculator run

use spmat_core::Operation;
use std::path::PathBuf;
use std::time::Duration;

/// What a run read, produced, and how long it took
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RunReport {
    pub operation: Operation,
    pub inputs: [PathBuf; 2],
    pub output: PathBuf,
    pub left_shape: (usize, usize),
    pub right_shape: (usize, usize),
    pub result_shape: (usize, usize),
    /// Non-zero entries in the result
    pub result_nnz: usize,
    pub elapsed: Duration,
}

impl RunReport {
    /// Plain-text summary, one line per fact
    pub fn summary(&self) -> String {
        format!(
            "Result written to {}\n{} of {}x{} and {}x{} -> {}x{} ({} non-zero)\nTime taken: {:.2?}",
            self.output.display(),
            self.operation.label(),
            self.left_shape.0,
            self.left_shape.1,
            self.right_shape.0,
            self.right_shape.1,
            self.result_shape.0,
            self.result_shape.1,
            self.result_nnz,
            self.elapsed,
        )
    }

    /// Report as a single JSON object
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RunReport {
        RunReport {
            operation: Operation::Multiply,
            inputs: [PathBuf::from("a.txt"), PathBuf::from("b.txt")],
            output: PathBuf::from("output_multiply.txt"),
            left_shape: (2, 3),
            right_shape: (3, 4),
            result_shape: (2, 4),
            result_nnz: 5,
            elapsed: Duration::from_millis(12),
        }
    }

    #[test]
    fn test_summary() {
        let summary = sample().summary();
        assert!(summary.starts_with("Result written to output_multiply.txt\n"));
        assert!(summary.contains("Multiplication of 2x3 and 3x4 -> 2x4 (5 non-zero)"));
        assert!(summary.contains("Time taken: "));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_report() {
        let json: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        assert_eq!(json["operation"], "multiply");
        assert_eq!(json["inputs"][1], "b.txt");
        assert_eq!(json["result_shape"], serde_json::json!([2, 4]));
        assert_eq!(json["result_nnz"], 5);
        assert_eq!(json["elapsed"]["secs"], 0);
    }
}
