use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config error [{category}]: {message} {location}")]
    Generic {
        category: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error at {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("TOML parse error at {path}: {source} {location}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
        location: ErrorLocation,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::generic("config", message)
    }

    #[track_caller]
    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::generic("server", message)
    }

    #[track_caller]
    pub fn pool<S: Into<String>>(message: S) -> Self {
        Self::generic("pool", message)
    }

    #[track_caller]
    pub fn logging<S: Into<String>>(message: S) -> Self {
        Self::generic("logging", message)
    }

    #[track_caller]
    fn generic<S: Into<String>>(category: &'static str, message: S) -> Self {
        ConfigError::Generic {
            category,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        ConfigError::Io {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn toml(path: PathBuf, source: toml::de::Error) -> Self {
        ConfigError::Toml {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = std::result::Result<T, ConfigError>;
