//! API Module
//!
//! HTTP handlers and routing for the activity signup REST API.
//!
//! # Endpoints
//! - `GET /activities` - List activities with their rosters
//! - `POST /activities/:activity_name/signup?email=` - Sign a participant up
//! - `DELETE /activities/:activity_name/unregister?email=` - Remove a participant
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
