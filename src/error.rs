//! Error types for the activity signup server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Registry Error Enum ==
/// Unified error type for the signup server.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No activity is registered under the requested name
    #[error("Activity not found")]
    ActivityNotFound(String),

    /// The participant is already on the roster, or missing from it
    #[error("{0}")]
    ParticipantConflict(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl RegistryError {
    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RegistryError::ActivityNotFound(_) => StatusCode::NOT_FOUND,
            RegistryError::ParticipantConflict(_) => StatusCode::BAD_REQUEST,
            RegistryError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the signup server.
pub type Result<T> = std::result::Result<T, RegistryError>;
