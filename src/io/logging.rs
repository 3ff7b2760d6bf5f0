//! Structured logging initialisation
//!
//! Installs a global `tracing` subscriber writing to `stderr`, human-readable
//! by default or JSON when `MAZECARVE_LOG_FORMAT=json`. The level comes from
//! `RUST_LOG` and defaults to `info`.

use std::env;
use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::io::configuration::{DEFAULT_LOG_FILTER, LOG_FORMAT_ENV};
use crate::io::error::{AlgorithmError, Result};

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Output format of log records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Plain text lines
    Human,
    /// One JSON object per record
    Json,
}

/// Install global structured logging if it has not already been configured
///
/// A subscriber installed elsewhere is kept as-is.
///
/// # Errors
///
/// Returns an error if the format variable holds invalid Unicode or an
/// unsupported value
pub fn init_logging() -> Result<()> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    let format = format_from_env()?;
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let fmt_layer = match format {
        LogFormat::Human => fmt_layer.boxed(),
        LogFormat::Json => fmt_layer.json().with_current_span(true).boxed(),
    };

    // Another subscriber owning the global slot is not an error for callers
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();

    let _ = INITIALISED.set(());
    Ok(())
}

/// Parse a `MAZECARVE_LOG_FORMAT` value
///
/// # Errors
///
/// Returns an error for anything other than `human` or `json`
pub fn parse_log_format(raw: &str) -> Result<LogFormat> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "human" => Ok(LogFormat::Human),
        "json" => Ok(LogFormat::Json),
        other => Err(AlgorithmError::Logging {
            reason: format!("unsupported log format `{other}`; expected `human` or `json`"),
        }),
    }
}

fn format_from_env() -> Result<LogFormat> {
    match env::var(LOG_FORMAT_ENV) {
        Ok(raw) => parse_log_format(&raw),
        Err(env::VarError::NotPresent) => Ok(LogFormat::Human),
        Err(err @ env::VarError::NotUnicode(_)) => Err(AlgorithmError::Logging {
            reason: format!("environment variable `{LOG_FORMAT_ENV}` {err}"),
        }),
    }
}
