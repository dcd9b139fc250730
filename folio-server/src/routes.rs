use crate::health;
use crate::state::AppState;
use crate::{list_projects, submit_contact};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    // API endpoints, mounted under the /api prefix
    let api = Router::new()
        .route("/projects", get(list_projects))
        .route("/contact", post(submit_contact));

    Router::new()
        .nest("/api", api)
        // Health check endpoint
        .route("/health", get(health::health))
        // Add shared state
        .with_state(state)
        // CORS middleware (allow all origins on every route)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
