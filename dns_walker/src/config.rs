use std::{net::Ipv4Addr, time::Duration};

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default = "default_root_server")]
    pub root_server: Ipv4Addr,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Queries allowed for one resolve call, nameserver lookups included.
    #[serde(default = "default_max_hops")]
    pub max_hops: usize,

    /// How many nameserver-name lookups may be nested inside each other.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    #[serde(default = "default_response_buffer_size")]
    pub response_buffer_size: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root_server: default_root_server(),
            port: default_port(),
            query_timeout_ms: default_query_timeout_ms(),
            max_hops: default_max_hops(),
            max_depth: default_max_depth(),
            response_buffer_size: default_response_buffer_size(),
        }
    }
}

impl ResolverConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: ResolverConfig =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_root_server(mut self, root_server: Ipv4Addr) -> Self {
        self.root_server = root_server;
        self
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_hops == 0 {
            return Err(ConfigError::Validation(
                "max_hops must be at least 1".to_string(),
            ));
        }
        if self.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "query_timeout_ms must be greater than 0".to_string(),
            ));
        }
        if self.response_buffer_size < constants::DNS_HEADER_SIZE {
            return Err(ConfigError::Validation(format!(
                "response_buffer_size must hold at least a {} byte header",
                constants::DNS_HEADER_SIZE
            )));
        }
        Ok(())
    }
}

fn default_root_server() -> Ipv4Addr {
    constants::ROOT_SERVER
}

fn default_port() -> u16 {
    constants::DNS_PORT
}

fn default_query_timeout_ms() -> u64 {
    5000
}

fn default_max_hops() -> usize {
    32
}

fn default_max_depth() -> usize {
    8
}

fn default_response_buffer_size() -> usize {
    constants::UDP_DNS_RESPONSE_SIZE
}
