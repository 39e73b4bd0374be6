//! Process configuration
//!
//! Two environment variables, read once at startup and never mutated:
//! - `PORT` (default 3000)
//! - `ENVIRONMENT` (default "development")

use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub port: u16,
    pub environment: String,
}

impl Config {
    /// Load configuration from the process environment with defaults applied.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Environment::default())
            .set_default("port", 3000)?
            .set_default("environment", "development")?
            .build()?;

        settings.try_deserialize()
    }

    /// Listen address: all interfaces on the configured port.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr_binds_all_interfaces() {
        let cfg = Config {
            port: 3000,
            environment: "development".to_string(),
        };
        let addr = cfg.socket_addr();
        assert_eq!(addr.to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_socket_addr_uses_configured_port() {
        let cfg = Config {
            port: 8081,
            environment: "production".to_string(),
        };
        assert_eq!(cfg.socket_addr().port(), 8081);
    }
}
