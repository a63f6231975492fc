use std::net::{AddrParseError, IpAddr, SocketAddr};

use serde::{Deserialize, Serialize};

use crate::{env_or, env_string_or};

fn default_bind_addr() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5001
}

fn default_log_format() -> String {
    "pretty".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl ServerConfig {
    pub fn new() -> Self {
        Self {
            bind_addr: env_string_or("BIND_ADDR", default_bind_addr()),
            port: env_or("PORT", default_port()),
            log_format: env_string_or("LOG_FORMAT", default_log_format()),
        }
    }

    /// `bind_addr` must be an IP literal; IPv6 may be given with or without brackets
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let host = self.bind_addr.trim().trim_start_matches('[').trim_end_matches(']');
        let ip: IpAddr = host.parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            log_format: default_log_format(),
        }
    }
}
