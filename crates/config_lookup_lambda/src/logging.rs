//! Structured log setup for the Lambda processes.

use std::fmt;
use std::str::FromStr;

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use crate::config::LookupConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line, with the active request span attached.
    Json,
    /// Single-line human-readable output without colors.
    Compact,
    /// Multi-line output for local runs.
    Pretty,
}

impl LogFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Compact => "compact",
            Self::Pretty => "pretty",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log format '{0}'")]
pub struct UnknownLogFormat(String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            _ => Err(UnknownLogFormat(value.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),
    #[error("failed to install log subscriber: {0}")]
    Init(Box<dyn std::error::Error + Send + Sync>),
}

/// Installs the global subscriber. Call once per process, before the first
/// invocation is served.
pub fn init_logging(config: &LookupConfig) -> Result<(), LoggingError> {
    let env_filter = EnvFilter::try_new(&config.log_filter)?;
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_ansi(false);

    match config.log_format {
        LogFormat::Json => subscriber
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .try_init()
            .map_err(LoggingError::Init)?,
        LogFormat::Compact => subscriber.compact().try_init().map_err(LoggingError::Init)?,
        LogFormat::Pretty => subscriber.pretty().try_init().map_err(LoggingError::Init)?,
    }

    tracing::info!(
        format = %config.log_format,
        filter = %config.log_filter,
        "logging initialized"
    );
    Ok(())
}
