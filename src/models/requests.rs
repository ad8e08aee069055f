//! Request DTOs for the signup server API
//!
//! Defines the structure of incoming query parameters.

use serde::Deserialize;

/// Query string for signup and unregister (`?email=`)
#[derive(Debug, Clone, Deserialize)]
pub struct ParticipantQuery {
    /// Participant email, matched exactly against the roster
    ///
    /// Missing parameters default to empty and are caught by `validate`.
    #[serde(default)]
    pub email: String,
}

impl ParticipantQuery {
    /// Validates the query data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.email.trim().is_empty() {
            return Some("Email cannot be empty".to_string());
        }
        None
    }
}
