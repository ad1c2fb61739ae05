use crate::error::{ConfigError, ConfigErrorResult};
use crate::logging_config::LoggingConfig;
use crate::pool_config::PoolConfig;
use crate::server_config::ServerConfig;

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::info;
use serde::Deserialize;

/// Harness configuration, shared by the controller and every worker.
///
/// Loaded from `config.toml` in the config directory, then overridden
/// by `HARNESS_*` environment variables. Workers inherit the
/// controller's environment, so one load produces the same view in
/// every process.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub pool: PoolConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the config directory.
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)
            .map_err(|e| ConfigError::io(config_dir.clone(), e))?;

        let config_path = config_dir.join(crate::CONFIG_FILE_NAME);
        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Directory holding `config.toml` and the log directory.
    ///
    /// `HARNESS_CONFIG_DIR` wins; the fallback is `.harness` under the
    /// current working directory.
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = env::var(crate::CONFIG_DIR_ENV)
            && !dir.is_empty()
        {
            return Ok(PathBuf::from(dir));
        }

        let cwd = env::current_dir().map_err(|e| ConfigError::io(PathBuf::from("."), e))?;
        Ok(cwd.join(crate::DEFAULT_CONFIG_DIR))
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::io(path.to_path_buf(), e))?;
        toml::from_str(&raw).map_err(|e| ConfigError::toml(path.to_path_buf(), e))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.pool.validate()?;
        Ok(())
    }

    /// Address every worker binds, `host:port`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn log_summary(&self) {
        info!("Configuration:");
        info!("  server.host: {}", self.server.host);
        info!("  server.port: {}", self.server.port);
        info!("  server.sync_prefix: {}", self.server.sync_prefix);
        info!("  pool.initial_workers: {}", self.pool.initial_workers);
        info!("  logging.level: {}", self.logging.level);
        info!("  logging.colored: {}", self.logging.colored);
        match &self.logging.file {
            Some(file) => info!("  logging.file: {}/{}", self.logging.dir, file),
            None => info!("  logging.file: disabled"),
        }
    }

    fn apply_env_overrides(&mut self) {
        apply_env_string(&mut self.server.host, "HARNESS_HOST");
        apply_env_parse(&mut self.server.port, "HARNESS_PORT");
        apply_env_string(&mut self.server.sync_prefix, "HARNESS_SYNC_PREFIX");

        apply_env_parse(&mut self.pool.initial_workers, "HARNESS_INITIAL_WORKERS");

        apply_env_parse(&mut self.logging.level, "HARNESS_LOG_LEVEL");
        apply_env_bool(&mut self.logging.colored, "HARNESS_LOG_COLORED");
        apply_env_option_string(&mut self.logging.file, "HARNESS_LOG_FILE");
    }
}

fn apply_env_string(value: &mut String, var: &str) {
    if let Ok(v) = env::var(var)
        && !v.is_empty()
    {
        *value = v;
    }
}

fn apply_env_bool(value: &mut bool, var: &str) {
    if let Ok(v) = env::var(var) {
        *value = v == "true" || v == "1";
    }
}

fn apply_env_parse<T: FromStr>(value: &mut T, var: &str) {
    if let Ok(v) = env::var(var)
        && let Ok(parsed) = v.parse()
    {
        *value = parsed;
    }
}

fn apply_env_option_string(value: &mut Option<String>, var: &str) {
    if let Ok(v) = env::var(var)
        && !v.is_empty()
    {
        *value = Some(v);
    }
}
