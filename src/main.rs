use service_config::{Config, logging};
use std::{env, process};
use tracing::{debug, info};

const DEFAULT_CONFIG_PATH: &str = "configs/config.yaml";

fn parse_config_path() -> String {
    for arg in env::args().skip(1) {
        if let Some(path) = arg.strip_prefix("--config=") {
            return path.to_string();
        }
    }
    DEFAULT_CONFIG_PATH.to_string()
}

fn main() {
    dotenvy::dotenv().ok();

    let config_path = parse_config_path();

    let config = match Config::load(&config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = logging::init_tracing(&config.logger) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!(
        config = %config_path,
        env = %config.env,
        address = %config.formatted_address(),
        "Configuration ready"
    );
    debug!(
        read_timeout = ?config.http_server.read_timeout,
        write_timeout = ?config.http_server.write_timeout,
        idle_timeout = ?config.http_server.idle_timeout,
        shutdown_timeout = ?config.http_server.shutdown_timeout,
        "HTTP server settings"
    );
    debug!(
        host = %config.database.host,
        port = config.database.port,
        name = %config.database.name,
        ssl_mode = %config.database.ssl_mode,
        max_open_conns = config.database.max_open_conns,
        max_idle_conns = config.database.max_idle_conns,
        conn_max_lifetime = ?config.database.conn_max_lifetime,
        "Database settings"
    );
}
