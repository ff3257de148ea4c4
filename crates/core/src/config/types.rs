use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::from([127, 0, 0, 1])
}

fn default_port() -> u16 {
    5000
}

/// NC811 response display endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Page URL without query string
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Query parameter the ticket number is substituted into
    #[serde(default = "default_ticket_param")]
    pub ticket_param: String,
    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            ticket_param: default_ticket_param(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://newtina.nc811.org/newtinweb/responsedisplay.nas".to_string()
}

fn default_ticket_param() -> String {
    "ticket".to_string()
}

fn default_timeout() -> u64 {
    10
}
