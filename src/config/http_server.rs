//! HTTP server configuration.

use serde::Deserialize;
use std::time::Duration;

use super::duration;

pub const DEFAULT_ADDRESS: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_WRITE_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP listener settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HttpServerConfig {
    /// Host or IP to bind (default: localhost).
    pub address: String,
    /// TCP port to bind (default: 8080).
    pub port: u16,
    /// Maximum time to read a full request (default: 10s).
    #[serde(with = "duration")]
    pub read_timeout: Duration,
    /// Maximum time to write a response (default: 10s).
    #[serde(with = "duration")]
    pub write_timeout: Duration,
    /// Keep-alive idle timeout (default: 60s).
    #[serde(with = "duration")]
    pub idle_timeout: Duration,
    /// Grace period for in-flight requests on shutdown (default: 30s).
    #[serde(with = "duration")]
    pub shutdown_timeout: Duration,
}

impl HttpServerConfig {
    /// Returns `"<address>:<port>"`.
    pub fn formatted_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }

    pub(crate) fn apply_defaults(&mut self) {
        if self.address.is_empty() {
            self.address = DEFAULT_ADDRESS.to_string();
        }
        if self.port == 0 {
            self.port = DEFAULT_PORT;
        }
        if self.read_timeout.is_zero() {
            self.read_timeout = DEFAULT_READ_TIMEOUT;
        }
        if self.write_timeout.is_zero() {
            self.write_timeout = DEFAULT_WRITE_TIMEOUT;
        }
        if self.idle_timeout.is_zero() {
            self.idle_timeout = DEFAULT_IDLE_TIMEOUT;
        }
        if self.shutdown_timeout.is_zero() {
            self.shutdown_timeout = DEFAULT_SHUTDOWN_TIMEOUT;
        }
    }
}
