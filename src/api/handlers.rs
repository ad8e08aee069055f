//! API Handlers
//!
//! HTTP request handlers for each signup server endpoint.

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, Query, State},
    response::Redirect,
    Json,
};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{RegistryError, Result};
use crate::models::{ActivitiesResponse, HealthResponse, MessageResponse, ParticipantQuery};
use crate::registry::ActivityRegistry;

/// Page the root path redirects to.
pub const INDEX_PATH: &str = "/static/index.html";

/// Application state shared across all handlers.
///
/// Contains the registry wrapped in Arc<RwLock<>> so handlers can share it.
#[derive(Clone)]
pub struct AppState {
    /// Shared activity registry
    pub registry: Arc<RwLock<ActivityRegistry>>,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
}

impl AppState {
    /// Creates a new AppState around the given registry.
    pub fn new(registry: ActivityRegistry) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
            static_dir: Config::default().static_dir,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Seeds the registry with the school's activities.
    pub fn from_config(config: &Config) -> Self {
        Self {
            static_dir: config.static_dir.clone(),
            ..Self::new(ActivityRegistry::seeded())
        }
    }
}

/// Handler for GET /
///
/// Sends browsers to the front-end page.
pub async fn root_handler() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

/// Handler for GET /activities
///
/// Returns every activity with its roster.
pub async fn list_activities_handler(State(state): State<AppState>) -> Json<ActivitiesResponse> {
    let registry = state.registry.read().await;
    Json(ActivitiesResponse(registry.list()))
}

/// Resolves the activity first so unknown names report 404 whatever the email.
fn checked_email<'q>(
    registry: &ActivityRegistry,
    activity_name: &str,
    query: &'q ParticipantQuery,
) -> Result<&'q str> {
    registry.get(activity_name)?;
    match query.validate() {
        Some(error_msg) => Err(RegistryError::InvalidRequest(error_msg)),
        None => Ok(&query.email),
    }
}

/// Handler for POST /activities/:activity_name/signup?email=
///
/// Adds a participant to an activity's roster.
pub async fn signup_handler(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
) -> Result<Json<MessageResponse>> {
    let mut registry = state.registry.write().await;
    match checked_email(&registry, &activity_name, &query)
        .and_then(|email| registry.signup(&activity_name, email))
    {
        Ok(message) => {
            info!(activity = %activity_name, "participant signed up");
            debug!(activity = %activity_name, email = %query.email, "participant signed up");
            Ok(Json(MessageResponse::new(message)))
        }
        Err(err) => {
            warn!(activity = %activity_name, "signup rejected: {}", err);
            Err(err)
        }
    }
}

/// Handler for DELETE /activities/:activity_name/unregister?email=
///
/// Removes a participant from an activity's roster.
pub async fn unregister_handler(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
) -> Result<Json<MessageResponse>> {
    let mut registry = state.registry.write().await;
    match checked_email(&registry, &activity_name, &query)
        .and_then(|email| registry.unregister(&activity_name, email))
    {
        Ok(message) => {
            info!(activity = %activity_name, "participant unregistered");
            debug!(activity = %activity_name, email = %query.email, "participant unregistered");
            Ok(Json(MessageResponse::new(message)))
        }
        Err(err) => {
            warn!(activity = %activity_name, "unregister rejected: {}", err);
            Err(err)
        }
    }
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
