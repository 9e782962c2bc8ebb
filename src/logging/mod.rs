//! Tracing subscriber setup driven by [`LoggerConfig`].

use std::{
    fs::{self, OpenOptions},
    io,
    path::PathBuf,
    sync::Mutex,
};
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, fmt::writer::BoxMakeWriter};

use crate::config::LoggerConfig;

/// Logging initialization error.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("failed to open log output {}: {source}", path.display())]
    OpenOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to install tracing subscriber: {0}")]
    Init(String),
}

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stdout,
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    /// Resolves `logger.output_path`: empty or "stdout", "stderr", otherwise a file.
    pub fn from_output_path(output_path: &str) -> Self {
        match output_path.trim() {
            "" | "stdout" => LogTarget::Stdout,
            "stderr" => LogTarget::Stderr,
            path => LogTarget::File(PathBuf::from(path)),
        }
    }

    /// Opens the target. Files are created if missing and appended to.
    pub fn make_writer(&self) -> Result<BoxMakeWriter, LoggingError> {
        match self {
            LogTarget::Stdout => Ok(BoxMakeWriter::new(io::stdout)),
            LogTarget::Stderr => Ok(BoxMakeWriter::new(io::stderr)),
            LogTarget::File(path) => {
                let open_err = |source: io::Error| LoggingError::OpenOutput {
                    path: path.clone(),
                    source,
                };

                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent).map_err(open_err)?;
                }

                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(open_err)?;

                Ok(BoxMakeWriter::new(Mutex::new(file)))
            }
        }
    }
}

/// Maps a configured level name to a tracing level. Unknown names fall back to info.
pub fn parse_level(level: &str) -> Level {
    match level.to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG`, when set, takes precedence over `config.level`.
pub fn init_tracing(config: &LoggerConfig) -> Result<(), LoggingError> {
    let level = parse_level(&config.level);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let target = LogTarget::from_output_path(&config.output_path);
    let ansi = target == LogTarget::Stdout || target == LogTarget::Stderr;
    let writer = target.make_writer()?;

    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let result = if config.format.eq_ignore_ascii_case("text") {
        builder.with_ansi(ansi).try_init()
    } else {
        builder.json().with_current_span(true).try_init()
    };

    result.map_err(|e| LoggingError::Init(e.to_string()))
}

#[cfg(test)]
mod tests;
