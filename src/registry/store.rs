//! Registry Store Module
//!
//! Keeps activities keyed by name, in the order they were registered.

use std::collections::HashMap;

use crate::error::{RegistryError, Result};
use crate::registry::{seed_activities, Activity, ALREADY_SIGNED_UP, PARTICIPANT_NOT_FOUND};

// == Activity Registry ==
/// In-memory mapping of activity name to activity.
#[derive(Debug, Default)]
pub struct ActivityRegistry {
    /// Activities in registration order
    activities: Vec<(String, Activity)>,
    /// Name to position in `activities`
    index: HashMap<String, usize>,
}

impl ActivityRegistry {
    // == Constructor ==
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the given activities.
    pub fn with_activities<I>(activities: I) -> Self
    where
        I: IntoIterator<Item = (String, Activity)>,
    {
        let mut registry = Self::new();
        for (name, activity) in activities {
            registry.insert(name, activity);
        }
        registry
    }

    /// Creates a registry holding the school's seeded activities.
    pub fn seeded() -> Self {
        Self::with_activities(seed_activities())
    }

    // == Insert ==
    /// Registers an activity, replacing any existing one with the same name
    /// in place.
    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&idx) => self.activities[idx].1 = activity,
            None => {
                self.index.insert(name.clone(), self.activities.len());
                self.activities.push((name, activity));
            }
        }
    }

    // == List ==
    /// Returns a snapshot of every activity in registration order.
    pub fn list(&self) -> Vec<(String, Activity)> {
        self.activities.clone()
    }

    // == Get ==
    /// Looks up a single activity by name.
    pub fn get(&self, name: &str) -> Result<&Activity> {
        self.index
            .get(name)
            .map(|&idx| &self.activities[idx].1)
            .ok_or_else(|| RegistryError::ActivityNotFound(name.to_string()))
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Activity> {
        match self.index.get(name) {
            Some(&idx) => Ok(&mut self.activities[idx].1),
            None => Err(RegistryError::ActivityNotFound(name.to_string())),
        }
    }

    // == Signup ==
    /// Adds `email` to the roster of `name`.
    ///
    /// Capacity is not enforced. Returns the confirmation message.
    pub fn signup(&mut self, name: &str, email: &str) -> Result<String> {
        let activity = self.get_mut(name)?;
        if !activity.add_participant(email) {
            return Err(RegistryError::ParticipantConflict(
                ALREADY_SIGNED_UP.to_string(),
            ));
        }
        Ok(format!("Signed up {} for {}", email, name))
    }

    // == Unregister ==
    /// Removes `email` from the roster of `name`. Returns the confirmation message.
    pub fn unregister(&mut self, name: &str, email: &str) -> Result<String> {
        let activity = self.get_mut(name)?;
        if !activity.remove_participant(email) {
            return Err(RegistryError::ParticipantConflict(
                PARTICIPANT_NOT_FOUND.to_string(),
            ));
        }
        Ok(format!("Unregistered {} from {}", email, name))
    }

    // == Length ==
    /// Returns the number of registered activities.
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    // == Is Empty ==
    /// Returns true if no activities are registered.
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}
