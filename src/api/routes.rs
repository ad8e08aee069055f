//! API Routes
//!
//! Configures the Axum router with all signup server endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers::{
    health_handler, list_activities_handler, root_handler, signup_handler, unregister_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - Redirect to the front-end page
/// - `GET /activities` - List activities with their rosters
/// - `POST /activities/:activity_name/signup?email=` - Sign a participant up
/// - `DELETE /activities/:activity_name/unregister?email=` - Remove a participant
/// - `GET /health` - Health check endpoint
/// - `GET /static/*` - Front-end assets
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/", get(root_handler))
        .route("/activities", get(list_activities_handler))
        .route("/activities/:activity_name/signup", post(signup_handler))
        .route(
            "/activities/:activity_name/unregister",
            delete(unregister_handler),
        )
        .route("/health", get(health_handler))
        .nest_service("/static", static_files)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
