//! Registry Module
//!
//! In-memory roster of activities and the participants signed up for them.

mod activity;
mod seed;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use activity::Activity;
pub use seed::seed_activities;
pub use store::ActivityRegistry;

// == Public Constants ==
/// Detail returned when an email is already on an activity's roster
pub const ALREADY_SIGNED_UP: &str = "Student is already signed up";

/// Detail returned when an email is not on an activity's roster
pub const PARTICIPANT_NOT_FOUND: &str = "Participant not found";
