mod config;
mod error;
mod log_level;
mod logging_config;
mod pool_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use pool_config::PoolConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "HARNESS_CONFIG_DIR";
const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_CONFIG_DIR: &str = ".harness";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8001;
const DEFAULT_SYNC_PREFIX: &str = "/mbaas/sync";
const MIN_PORT: u16 = 1024;

const DEFAULT_INITIAL_WORKERS: u32 = 8;
const MAX_INITIAL_WORKERS: u32 = 1024;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
