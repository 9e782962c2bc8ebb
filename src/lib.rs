//! Typed application configuration: YAML file plus environment overrides,
//! validated and defaulted once at startup.

pub mod config;
pub mod logging;

pub use config::{Config, ConfigError, DatabaseConfig, HttpServerConfig, LoggerConfig};
