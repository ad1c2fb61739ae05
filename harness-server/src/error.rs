use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] harness_config::ConfigError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Invalid bind address {addr}: {source}")]
    Addr {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("Startup error: {message}")]
    Startup { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
