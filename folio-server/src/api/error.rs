//! REST API error types
//!
//! The single boundary that turns handler failures into JSON responses
//! with the appropriate HTTP status codes.

use crate::store::StoreError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// Flat JSON error body: `{"error": "<message>"}`
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
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
        // Log with location before it is dropped from the body
        log::error!("{}", self);

        let (status, message) = match self {
            ApiError::Validation { message, .. } => (StatusCode::BAD_REQUEST, message),
            ApiError::Internal { message, .. } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, Json(ApiErrorResponse { error: message })).into_response()
    }
}

/// Store failures map to 500; the failure text is echoed to the client
impl From<StoreError> for ApiError {
    #[track_caller]
    fn from(e: StoreError) -> Self {
        ApiError::Internal {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
