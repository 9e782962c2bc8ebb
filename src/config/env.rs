//! Environment variable overrides.
//!
//! Every overridable field has one entry in [`BINDINGS`]. A variable that is
//! set and non-empty replaces whatever the file supplied.

use std::str::FromStr;
use tracing::debug;

use super::{Config, ConfigError, duration::parse_duration};

/// Maps one environment variable onto one config field.
pub(crate) struct EnvBinding {
    /// Environment variable name.
    pub var: &'static str,
    /// Dotted document key of the target field.
    pub key: &'static str,
    apply: fn(&mut Config, &str) -> Result<(), String>,
}

macro_rules! bind {
    ($var:literal => $key:literal, $($field:ident).+, $parse:path) => {
        EnvBinding {
            var: $var,
            key: $key,
            apply: |cfg, raw| {
                cfg.$($field).+ = $parse(raw)?;
                Ok(())
            },
        }
    };
}

pub(crate) const BINDINGS: &[EnvBinding] = &[
    bind!("ENV" => "env", env, parse_string),
    bind!("STORAGE_PATH" => "storage_path", storage_path, parse_string),
    bind!("HTTP_ADDRESS" => "http_server.address", http_server.address, parse_string),
    bind!("HTTP_PORT" => "http_server.port", http_server.port, parse_number),
    bind!(
        "HTTP_READ_TIMEOUT" => "http_server.read_timeout",
        http_server.read_timeout,
        parse_duration
    ),
    bind!(
        "HTTP_WRITE_TIMEOUT" => "http_server.write_timeout",
        http_server.write_timeout,
        parse_duration
    ),
    bind!(
        "HTTP_IDLE_TIMEOUT" => "http_server.idle_timeout",
        http_server.idle_timeout,
        parse_duration
    ),
    bind!(
        "HTTP_SHUTDOWN_TIMEOUT" => "http_server.shutdown_timeout",
        http_server.shutdown_timeout,
        parse_duration
    ),
    bind!("DB_HOST" => "database.host", database.host, parse_string),
    bind!("DB_PORT" => "database.port", database.port, parse_number),
    bind!("DB_USER" => "database.user", database.user, parse_string),
    bind!("DB_PASSWORD" => "database.password", database.password, parse_string),
    bind!("DB_NAME" => "database.name", database.name, parse_string),
    bind!("DB_SSL_MODE" => "database.ssl_mode", database.ssl_mode, parse_string),
    bind!("DB_MAX_OPEN_CONNS" => "database.max_open_conns", database.max_open_conns, parse_number),
    bind!("DB_MAX_IDLE_CONNS" => "database.max_idle_conns", database.max_idle_conns, parse_number),
    bind!(
        "DB_CONN_MAX_LIFETIME" => "database.conn_max_lifetime",
        database.conn_max_lifetime,
        parse_duration
    ),
    bind!("LOG_LEVEL" => "logger.level", logger.level, parse_string),
    bind!("LOG_FORMAT" => "logger.format", logger.format, parse_string),
    bind!("LOG_OUTPUT_PATH" => "logger.output_path", logger.output_path, parse_string),
];

fn parse_string(raw: &str) -> Result<String, String> {
    Ok(raw.to_string())
}

fn parse_number<T>(raw: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| format!("expected a non-negative integer, got {:?}: {}", raw, e))
}

/// Applies every binding whose variable `lookup` resolves to a non-empty value.
pub(crate) fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    for binding in BINDINGS {
        let Some(raw) = lookup(binding.var).filter(|v| !v.is_empty()) else {
            continue;
        };

        (binding.apply)(config, &raw).map_err(|reason| ConfigError::Env {
            var: binding.var,
            reason,
        })?;

        debug!(var = binding.var, key = binding.key, "Config value overridden from environment");
    }

    Ok(())
}
