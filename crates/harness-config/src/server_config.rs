use crate::error::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// HTTP listener settings shared by every worker in the pool.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address all workers bind with port sharing enabled.
    pub host: String,
    /// Listen port. 0 means pick an ephemeral port.
    pub port: u16,
    /// Path prefix guarded by the crash gate.
    pub sync_prefix: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: crate::DEFAULT_HOST.to_string(),
            port: crate::DEFAULT_PORT,
            sync_prefix: crate::DEFAULT_SYNC_PREFIX.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.host.parse::<std::net::IpAddr>().is_err() {
            return Err(ConfigError::server(format!(
                "host must be an IP address, got '{}'",
                self.host
            )));
        }

        if self.port != 0 && self.port < crate::MIN_PORT {
            return Err(ConfigError::server(format!(
                "port must be 0 or >= {}, got {}",
                crate::MIN_PORT,
                self.port
            )));
        }

        if !self.sync_prefix.starts_with('/') {
            return Err(ConfigError::server(format!(
                "sync_prefix must start with '/', got '{}'",
                self.sync_prefix
            )));
        }

        Ok(())
    }
}
