//! Core configuration types and loading.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use super::auth::AuthConfig;
use super::defaults::{default_metrics_port, default_server_name};
use super::fleet::{CommandBlock, RobotBlock};
use super::listen::ListenConfig;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Gateway configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server identity and metrics.
    #[serde(default)]
    pub server: ServerConfig,
    /// HTTP listen configuration.
    #[serde(default)]
    pub listen: ListenConfig,
    /// Optional Basic auth credentials. Absent means the API is open.
    pub auth: Option<AuthConfig>,
    /// Fleet-level commands.
    #[serde(default)]
    pub commands: Vec<CommandBlock>,
    /// Robots registered at startup, in order.
    #[serde(default)]
    pub robots: Vec<RobotBlock>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Server identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Name reported in logs (e.g., "lab-gateway").
    #[serde(default = "default_server_name")]
    pub name: String,
    /// Prometheus metrics HTTP port (default: 9090, 0 disables).
    #[serde(default = "default_metrics_port")]
    pub metrics_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_server_name(),
            metrics_port: default_metrics_port(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.name, "robogate");
        assert_eq!(config.server.metrics_port, 9090);
        assert!(config.auth.is_none());
        assert!(config.robots.is_empty());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Config::load("/nonexistent/robogate.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn load_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[server\nname = ").unwrap();
        assert!(matches!(Config::load(&path).unwrap_err(), ConfigError::Parse(_)));
    }
}
