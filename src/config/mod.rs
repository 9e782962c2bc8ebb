//! Configuration loading, validation and defaulting.
//!
//! Uses serde_yaml to load YAML configuration files. Any field can be
//! overridden by an environment variable (see [`env`]); environment values
//! take precedence over the file.

mod database;
mod duration;
mod env;
mod error;
mod http_server;
mod logger;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use http_server::HttpServerConfig;
pub use logger::LoggerConfig;

use serde::Deserialize;
use std::{fs, io, path::Path};
use tracing::{debug, warn};

/// Root configuration structure.
///
/// Required: `env`. Everything else is optional and backfilled by
/// [`Config::apply_defaults`] during [`Config::load`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Deployment environment, e.g. "development", "staging", "production".
    pub env: String,
    /// Root directory for application data (optional, no default).
    pub storage_path: String,
    /// HTTP listener settings.
    pub http_server: HttpServerConfig,
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logger: LoggerConfig,
}

impl Config {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables from the process environment override values
    /// from the file. The result is validated and defaulted.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, |var| std::env::var(var).ok())
    }

    /// Like [`Config::load`], but resolves environment variables through `lookup`.
    pub fn load_with_env<F>(path: impl AsRef<Path>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath);
        }

        match path.try_exists() {
            Ok(true) => {}
            Ok(false) => return Err(ConfigError::NotFound(path.to_path_buf())),
            Err(source) => {
                return Err(ConfigError::ReadFile {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }

        let content = fs::read_to_string(path).map_err(|source| match source.kind() {
            // Removed between the existence check and the read.
            io::ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
            _ => ConfigError::ReadFile {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let config = Self::from_yaml_str(&content, lookup)?;

        debug!(
            path = %path.display(),
            env = %config.env,
            address = %config.formatted_address(),
            "Configuration loaded"
        );

        Ok(config)
    }

    /// Load configuration or panic with a descriptive message.
    ///
    /// Only for startup paths where running without configuration is
    /// meaningless. Use [`Config::load`] anywhere the error can be handled.
    ///
    /// # Panics
    ///
    /// Panics if [`Config::load`] fails.
    pub fn load_or_panic(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => panic!("failed to load config: {}", e),
        }
    }

    /// Decode, override, validate and default a YAML document held in memory.
    ///
    /// An empty document yields the zero configuration, which then fails
    /// validation unless `ENV` is supplied through `lookup`.
    pub fn from_yaml_str<F>(content: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(content)?
        };

        env::apply_overrides(&mut config, lookup)?;
        config.validate()?;
        config.apply_defaults();

        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// Runs before defaulting, so empty optional fields are accepted.
    /// Unrecognized logger level or format values are logged, not rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.env.trim().is_empty() {
            return Err(ConfigError::Validation(
                "env is required (set `env` in the config file or the ENV variable)".into(),
            ));
        }

        // Unknown logger values are not fatal: the logging setup falls back
        // to info level and JSON output.
        let level = self.logger.level.to_ascii_lowercase();
        if !level.is_empty() && !logger::LEVELS.contains(&level.as_str()) {
            warn!(
                level = %self.logger.level,
                expected = %logger::LEVELS.join(", "),
                "Unknown logger.level, falling back to info"
            );
        }

        let format = self.logger.format.to_ascii_lowercase();
        if !format.is_empty() && !logger::FORMATS.contains(&format.as_str()) {
            warn!(
                format = %self.logger.format,
                expected = %logger::FORMATS.join(", "),
                "Unknown logger.format, falling back to json"
            );
        }

        Ok(())
    }

    /// Fill every zero-valued optional field with its default.
    ///
    /// Only zero values are touched, so applying it more than once is a no-op.
    pub fn apply_defaults(&mut self) {
        self.http_server.apply_defaults();
        self.database.apply_defaults();
        self.logger.apply_defaults();
    }

    /// HTTP listen address as `"<address>:<port>"`.
    pub fn formatted_address(&self) -> String {
        self.http_server.formatted_address()
    }
}
