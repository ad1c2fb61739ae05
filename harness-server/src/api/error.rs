//! REST API error types.
//!
//! Errors surface to clients as the flat `{"error": "..."}` body the
//! sync test clients expect, with the class carried by the HTTP status.

use harness_store::StoreError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Storage facade failure (500)
    #[error("Facade error: {message} {location}")]
    Facade {
        message: String,
        location: ErrorLocation,
    },

    /// Request validation failure (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        ApiError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::error!("{}", self);

        let (status, message) = match self {
            ApiError::Facade { message, .. } => (StatusCode::INTERNAL_SERVER_ERROR, message),
            ApiError::Validation { message, .. } => (StatusCode::BAD_REQUEST, message),
        };

        (status, Json(ApiErrorResponse { error: message })).into_response()
    }
}

/// Convert storage facade errors to API errors
impl From<StoreError> for ApiError {
    #[track_caller]
    fn from(e: StoreError) -> Self {
        ApiError::Facade {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
