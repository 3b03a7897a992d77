use std::env;

/// HTTP listener settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

const DEFAULT_IP: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

impl ServerConfig {
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: 8080, also used when the value is not a port number)
    pub fn from_env() -> Self {
        let ip = env::var("SERVICE_IP").unwrap_or_else(|_| DEFAULT_IP.to_string());
        let port = env::var("SERVICE_PORT").ok().as_deref().map_or(DEFAULT_PORT, parse_port);

        Self { ip, port }
    }

    /// "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

fn parse_port(raw: &str) -> u16 {
    raw.trim().parse().unwrap_or_else(|_| {
        tracing::warn!("SERVICE_PORT '{}' is not a port, using {}", raw, DEFAULT_PORT);
        DEFAULT_PORT
    })
}
