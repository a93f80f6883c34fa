//! Interactive menu front end
//!
//! Prints a banner, asks for an operation number on the input stream, runs
//! it on two fixed operand files and reports the elapsed time.

use crate::calculator::Calculator;
use crate::error::Result;
use crate::report::RunReport;
use spmat_core::Operation;
use std::io::{BufRead, Write};
use std::path::Path;

/// Operand file read by the menu when none is given
pub const DEFAULT_LEFT_FILE: &str = "matrixfile1.txt";

/// Second operand file read by the menu when none is given
pub const DEFAULT_RIGHT_FILE: &str = "matrixfile3.txt";

const RULE: &str = "......................................................";
const FRAME: &str = "=======================================================";

/// Interactive session over arbitrary input and output streams
pub struct Menu<'a, R, W> {
    calculator: &'a Calculator,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(calculator: &'a Calculator, input: R, output: W) -> Self {
        Self {
            calculator,
            input,
            output,
        }
    }

    /// Run one menu session
    ///
    /// An invalid choice fails with `InvalidOperation` before any file is
    /// touched. Errors from the run itself are propagated after the banner
    /// output already written.
    pub fn run(&mut self, left: &Path, right: &Path) -> Result<RunReport> {
        self.print_banner()?;

        write!(self.output, ">>> Enter the number of the operation (1/2/3): ")?;
        self.output.flush()?;

        let mut choice = String::new();
        self.input.read_line(&mut choice)?;

        let operation = match Operation::from_menu_choice(&choice) {
            Ok(operation) => operation,
            Err(e) => {
                writeln!(self.output, "\nInvalid choice! Please select 1, 2, or 3.")?;
                return Err(e.into());
            }
        };

        writeln!(self.output, "\nYou have selected: {}\n", operation.label())?;
        writeln!(self.output, "   Processing your request. Please wait...")?;

        let report = self.calculator.run(operation, left, right, None)?;

        writeln!(self.output, "   Result written to {}", report.output.display())?;
        writeln!(self.output, "   Operation completed successfully!")?;
        writeln!(self.output, "   Time taken: {:.2?}", report.elapsed)?;
        writeln!(self.output)?;
        writeln!(self.output, "Thank you for using the Sparse Matrix Calculator!")?;
        writeln!(self.output, "{RULE}")?;

        Ok(report)
    }

    fn print_banner(&mut self) -> Result<()> {
        let out = &mut self.output;
        writeln!(out, "{RULE}")?;
        writeln!(out, "*{:^52}*", "")?;
        writeln!(out, "*{:^52}*", "Welcome to the Sparse Matrix Calculator!")?;
        writeln!(out, "*{:^52}*", "")?;
        writeln!(out, "{RULE}")?;
        writeln!(out)?;
        writeln!(out, "{FRAME}")?;
        writeln!(out, "||{:^51}||", "Please select an operation:")?;
        writeln!(out, "||{:^51}||", "---------------------------")?;
        for (index, operation) in Operation::ALL.iter().enumerate() {
            let item = format!("  {}. {}", index + 1, capitalize(operation.name()));
            writeln!(out, "||{item:<51}||")?;
        }
        writeln!(out, "{FRAME}")?;
        writeln!(out)?;
        Ok(())
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CalcConfig;
    use crate::error::CalcError;
    use spmat_core::SpmatError;
    use std::fs;
    use std::io::Cursor;

    fn write_operands(dir: &Path) -> (std::path::PathBuf, std::path::PathBuf) {
        let left = dir.join(DEFAULT_LEFT_FILE);
        let right = dir.join(DEFAULT_RIGHT_FILE);
        fs::write(&left, "rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 2)\n").unwrap();
        fs::write(&right, "rows=2\ncols=2\n(0, 0, 3)\n(0, 1, 4)\n(1, 0, 5)\n(1, 1, 6)\n").unwrap();
        (left, right)
    }

    #[test]
    fn test_menu_runs_selected_operation() {
        let dir = tempfile::tempdir().unwrap();
        let (left, right) = write_operands(dir.path());
        let calculator = Calculator::new(CalcConfig::with_output_dir(dir.path()));

        let mut output = Vec::new();
        let report = Menu::new(&calculator, Cursor::new("3\n"), &mut output)
            .run(&left, &right)
            .unwrap();

        assert_eq!(report.operation, Operation::Multiply);
        let written = fs::read_to_string(dir.path().join("output_multiply.txt")).unwrap();
        assert_eq!(
            written,
            "Sparse Matrix (2x2):\n(0,0, 3)\n(0,1, 4)\n(1,0, 10)\n(1,1, 12)\n"
        );

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("||  1. Add"));
        assert!(transcript.contains("You have selected: Multiplication"));
        assert!(transcript.contains("Operation completed successfully!"));
    }

    #[test]
    fn test_menu_rejects_invalid_choice() {
        let dir = tempfile::tempdir().unwrap();
        let (left, right) = write_operands(dir.path());
        let calculator = Calculator::new(CalcConfig::with_output_dir(dir.path()));

        let mut output = Vec::new();
        let err = Menu::new(&calculator, Cursor::new("7\n"), &mut output)
            .run(&left, &right)
            .unwrap_err();

        assert!(matches!(
            err,
            CalcError::Matrix(SpmatError::InvalidOperation(ref choice)) if choice == "7"
        ));
        assert!(String::from_utf8(output)
            .unwrap()
            .contains("Invalid choice! Please select 1, 2, or 3."));
        assert!(!dir.path().join("output_add.txt").exists());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("subtract"), "Subtract");
        assert_eq!(capitalize(""), "");
    }
}
