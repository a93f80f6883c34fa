//! Structured logging setup
//!
//! Events are written to stderr so that stdout carries only results and the
//! optional JSON report.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter directive (e.g. `RUST_LOG=spmat=debug`)
//! - `SPMAT_LOG_FORMAT`: `pretty`, `compact` or `json` (default: `compact`)

use crate::error::{CalcError, Result};
use clap::ValueEnum;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Multi-line human-readable format
    Pretty,
    /// Single line per event
    #[default]
    Compact,
    /// One JSON object per event
    Json,
}

impl LogFormat {
    /// Parse a format name, ignoring case
    ///
    /// Used for `SPMAT_LOG_FORMAT`; unknown names fall back to `Compact`.
    /// The command line goes through [`ValueEnum`] and rejects them instead.
    pub fn parse(s: &str) -> Self {
        <Self as ValueEnum>::from_str(s, true).unwrap_or_default()
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub format: LogFormat,
    /// Filter directive (e.g. "spmat=debug,warn")
    pub filter: String,
    pub with_ansi: bool,
    pub with_target: bool,
}

impl LogConfig {
    /// Override the output format
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Override the filter directive
    pub fn with_filter<S: Into<String>>(mut self, filter: S) -> Self {
        self.filter = filter.into();
        self
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        let format = std::env::var("SPMAT_LOG_FORMAT")
            .map(|s| LogFormat::parse(&s))
            .unwrap_or_default();

        let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "spmat=info,warn".to_string());

        Self {
            format,
            filter,
            with_ansi: true,
            with_target: false,
        }
    }
}

/// Install the global tracing subscriber
///
/// Call once at startup; a second call fails with `CalcError::Logging`.
pub fn init_logging(config: LogConfig) -> Result<()> {
    let filter =
        EnvFilter::try_new(&config.filter).map_err(|e| CalcError::Logging(e.to_string()))?;

    let layer: Box<dyn Layer<Registry> + Send + Sync> = match config.format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_writer(std::io::stderr)
            .with_ansi(config.with_ansi)
            .with_target(config.with_target)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_ansi(config.with_ansi)
            .with_target(config.with_target)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(config.with_target)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(layer.with_filter(filter))
        .try_init()
        .map_err(|e| CalcError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("PRETTY"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("compact"), LogFormat::Compact);
        assert_eq!(LogFormat::parse("anything"), LogFormat::Compact);
    }

    #[test]
    fn test_log_format_value_names() {
        assert_eq!(
            <LogFormat as ValueEnum>::from_str("json", false),
            Ok(LogFormat::Json)
        );
        assert!(<LogFormat as ValueEnum>::from_str("verbose", false).is_err());

        let names: Vec<_> = LogFormat::value_variants()
            .iter()
            .filter_map(|v| v.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect();
        assert_eq!(names, ["pretty", "compact", "json"]);
    }

    #[test]
    fn test_invalid_filter_rejected() {
        let config = LogConfig::default().with_filter("spmat=notalevel");
        assert!(matches!(init_logging(config), Err(CalcError::Logging(_))));
    }
}
