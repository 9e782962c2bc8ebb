//! Database configuration.

use serde::Deserialize;
use std::time::Duration;

use super::duration;

pub const DEFAULT_SSL_MODE: &str = "disable";
pub const DEFAULT_MAX_OPEN_CONNS: u32 = 25;
pub const DEFAULT_MAX_IDLE_CONNS: u32 = 5;
pub const DEFAULT_CONN_MAX_LIFETIME: Duration = Duration::from_secs(5 * 60);

/// Database connection settings.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    /// Usually supplied through DB_PASSWORD rather than the file.
    pub password: String,
    /// Database name.
    pub name: String,
    /// Driver SSL mode, e.g. "disable", "require", "verify-full" (default: disable).
    pub ssl_mode: String,
    /// Pool size limit (default: 25).
    pub max_open_conns: u32,
    /// Idle connections kept in the pool (default: 5).
    pub max_idle_conns: u32,
    /// Maximum lifetime of a pooled connection (default: 5m).
    #[serde(with = "duration")]
    pub conn_max_lifetime: Duration,
}

impl DatabaseConfig {
    pub(crate) fn apply_defaults(&mut self) {
        if self.ssl_mode.is_empty() {
            self.ssl_mode = DEFAULT_SSL_MODE.to_string();
        }
        if self.max_open_conns == 0 {
            self.max_open_conns = DEFAULT_MAX_OPEN_CONNS;
        }
        if self.max_idle_conns == 0 {
            self.max_idle_conns = DEFAULT_MAX_IDLE_CONNS;
        }
        if self.conn_max_lifetime.is_zero() {
            self.conn_max_lifetime = DEFAULT_CONN_MAX_LIFETIME;
        }
    }
}

// Keeps the password out of logs.
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &if self.password.is_empty() { "" } else { "***" })
            .field("name", &self.name)
            .field("ssl_mode", &self.ssl_mode)
            .field("max_open_conns", &self.max_open_conns)
            .field("max_idle_conns", &self.max_idle_conns)
            .field("conn_max_lifetime", &self.conn_max_lifetime)
            .finish()
    }
}
