//! Response DTOs for the signup server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::{Serialize, Serializer};

use crate::registry::Activity;

/// Response body for GET /activities
///
/// Serializes as a JSON object keyed by activity name, preserving
/// registration order.
#[derive(Debug, Clone)]
pub struct ActivitiesResponse(pub Vec<(String, Activity)>);

impl Serialize for ActivitiesResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(name, activity)| (name, activity)))
    }
}

/// Confirmation body for signup and unregister
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    /// Human readable confirmation
    pub message: String,
}

impl MessageResponse {
    /// Creates a new MessageResponse
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub detail: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
