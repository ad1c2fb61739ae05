use crate::error::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// Worker pool sizing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Number of workers the controller forks at startup.
    pub initial_workers: u32,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            initial_workers: crate::DEFAULT_INITIAL_WORKERS,
        }
    }
}

impl PoolConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.initial_workers < 1 {
            return Err(ConfigError::pool("initial_workers must be at least 1"));
        }

        if self.initial_workers > crate::MAX_INITIAL_WORKERS {
            return Err(ConfigError::pool(format!(
                "initial_workers must be <= {}, got {}",
                crate::MAX_INITIAL_WORKERS,
                self.initial_workers
            )));
        }

        Ok(())
    }
}
