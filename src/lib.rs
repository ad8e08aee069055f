//! Activity Signup - A small HTTP API for extracurricular activity rosters
//!
//! Lists the school's activities and lets students sign up or unregister by email.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod registry;

pub use api::AppState;
pub use config::Config;
pub use error::RegistryError;
pub use registry::{Activity, ActivityRegistry};
