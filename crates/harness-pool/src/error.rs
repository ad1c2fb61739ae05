use crate::WorkerId;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PoolError {
    #[error("Worker {id} is already registered {location}")]
    DuplicateWorker {
        id: WorkerId,
        location: ErrorLocation,
    },

    #[error("Worker {id} is not registered {location}")]
    MissingWorker {
        id: WorkerId,
        location: ErrorLocation,
    },

    #[error("Failed to fork worker {id}: {source} {location}")]
    Spawn {
        id: WorkerId,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl PoolError {
    #[track_caller]
    pub fn duplicate_worker(id: WorkerId) -> Self {
        PoolError::DuplicateWorker {
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_worker(id: WorkerId) -> Self {
        PoolError::MissingWorker {
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn spawn(id: WorkerId, source: std::io::Error) -> Self {
        PoolError::Spawn {
            id,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type PoolResult<T> = std::result::Result<T, PoolError>;
