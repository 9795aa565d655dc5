//! Default value functions for configuration.

pub fn default_server_name() -> String {
    "robogate".to_string()
}

pub fn default_metrics_port() -> u16 {
    9090
}

pub fn default_listen_address() -> std::net::SocketAddr {
    std::net::SocketAddr::from(([127, 0, 0, 1], 3000))
}
