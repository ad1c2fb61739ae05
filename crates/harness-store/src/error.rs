use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage backend error: {message} {location}")]
    Backend {
        message: String,
        location: ErrorLocation,
    },

    #[error("No record {uid} in dataset {dataset} {location}")]
    UnknownRecord {
        dataset: String,
        uid: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn backend<S: Into<String>>(message: S) -> Self {
        StoreError::Backend {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unknown_record<S: Into<String>>(dataset: S, uid: S) -> Self {
        StoreError::UnknownRecord {
            dataset: dataset.into(),
            uid: uid.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
