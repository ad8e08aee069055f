//! Activity Module
//!
//! Defines a single joinable activity and its participant roster.

use serde::Serialize;

// == Activity ==
/// A named offering with a schedule, a capacity and a roster of emails.
///
/// The activity name is the registry key and is not stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    /// Short human readable description
    pub description: String,
    /// When the activity meets
    pub schedule: String,
    /// Advertised capacity
    pub max_participants: u32,
    /// Participant emails in signup order
    pub participants: Vec<String>,
}

impl Activity {
    // == Constructor ==
    /// Creates an activity with an empty roster.
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Replaces the roster, dropping repeated emails after their first occurrence.
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants.clear();
        for email in participants {
            let email = email.into();
            if !self.has_participant(&email) {
                self.participants.push(email);
            }
        }
        self
    }

    // == Has Participant ==
    /// Returns true if the email is on the roster (exact match).
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Appends an email. Returns false if it was already present.
    pub(crate) fn add_participant(&mut self, email: &str) -> bool {
        if self.has_participant(email) {
            return false;
        }
        self.participants.push(email.to_string());
        true
    }

    /// Removes an email, keeping the order of the others. Returns false if absent.
    pub(crate) fn remove_participant(&mut self, email: &str) -> bool {
        match self.participants.iter().position(|p| p == email) {
            Some(idx) => {
                self.participants.remove(idx);
                true
            }
            None => false,
        }
    }
}
