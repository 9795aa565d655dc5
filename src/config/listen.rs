//! HTTP listener configuration.

use super::defaults::default_listen_address;
use serde::Deserialize;
use std::net::SocketAddr;

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ListenConfig {
    /// Address to bind the API to (e.g., "0.0.0.0:3000").
    #[serde(default = "default_listen_address")]
    pub address: SocketAddr,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            address: default_listen_address(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listen_defaults_to_loopback() {
        let listen: ListenConfig = toml::from_str("").unwrap();
        assert_eq!(listen.address, "127.0.0.1:3000".parse().unwrap());
    }

    #[test]
    fn listen_address_from_toml() {
        let listen: ListenConfig = toml::from_str(r#"address = "0.0.0.0:8080""#).unwrap();
        assert_eq!(listen.address.port(), 8080);
    }
}
