use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use spmat::menu::{DEFAULT_LEFT_FILE, DEFAULT_RIGHT_FILE};
use spmat::{
    init_logging, CalcConfig, Calculator, LogConfig, LogFormat, Menu, Operation, RunReport,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(about = "SPMAT - add, subtract and multiply sparse integer matrices stored as text")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory for output_<operation>.txt when --output is not given
    #[arg(long, global = true, default_value = ".")]
    output_dir: PathBuf,

    /// Reject out-of-range entries and mismatched add/subtract shapes
    #[arg(long, global = true)]
    strict: bool,

    /// Print the run report as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log format (default from SPMAT_LOG_FORMAT)
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Element-wise sum of two matrices
    Add(Operands),
    /// Element-wise difference of two matrices
    Subtract(Operands),
    /// Matrix product of two matrices
    Multiply(Operands),
    /// Run an operation given by name
    Run {
        /// One of add, subtract, multiply
        operation: String,

        #[command(flatten)]
        operands: Operands,
    },
    /// Interactive menu reading the operation number from stdin
    Menu {
        /// First operand file
        #[arg(long, default_value = DEFAULT_LEFT_FILE)]
        file1: PathBuf,

        /// Second operand file
        #[arg(long, default_value = DEFAULT_RIGHT_FILE)]
        file2: PathBuf,
    },
}

#[derive(Args)]
struct Operands {
    /// First operand file
    file1: PathBuf,

    /// Second operand file
    file2: PathBuf,

    /// Result file (default: <output-dir>/output_<operation>.txt)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut log_config = LogConfig::default();
    if let Some(format) = cli.log_format {
        log_config = log_config.with_format(format);
    }
    init_logging(log_config)?;

    let config = CalcConfig::with_output_dir(&cli.output_dir)
        .with_strict(cli.strict)
        .with_json(cli.json);
    let calculator = Calculator::new(config);

    let report = match &cli.command {
        Commands::Add(operands) => run(&calculator, Operation::Add, operands)?,
        Commands::Subtract(operands) => run(&calculator, Operation::Subtract, operands)?,
        Commands::Multiply(operands) => run(&calculator, Operation::Multiply, operands)?,
        Commands::Run {
            operation,
            operands,
        } => calculator
            .run_named(
                operation,
                &operands.file1,
                &operands.file2,
                operands.output.as_deref(),
            )
            .with_context(|| format!("{operation} failed"))?,
        Commands::Menu { file1, file2 } => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let report = Menu::new(&calculator, stdin.lock(), stdout.lock())
                .run(file1, file2)
                .context("menu run failed")?;
            // The menu already printed its own summary
            if calculator.config().emit_json {
                print_report(&calculator, &report)?;
            }
            return Ok(());
        }
    };

    print_report(&calculator, &report)
}

fn run(calculator: &Calculator, operation: Operation, operands: &Operands) -> Result<RunReport> {
    calculator
        .run(
            operation,
            &operands.file1,
            &operands.file2,
            operands.output.as_deref(),
        )
        .with_context(|| format!("{operation} failed"))
}

#[cfg(feature = "serde")]
fn print_report(calculator: &Calculator, report: &RunReport) -> Result<()> {
    if calculator.config().emit_json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.summary());
    }
    Ok(())
}

#[cfg(not(feature = "serde"))]
fn print_report(calculator: &Calculator, report: &RunReport) -> Result<()> {
    if calculator.config().emit_json {
        eprintln!("JSON reports require the 'serde' feature; printing plain text.");
    }
    println!("{}", report.summary());
    Ok(())
}
