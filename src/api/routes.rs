//! API Routes
//!
//! Configures the Axum router with all catalogue endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cache_state_handler, cleanup_cache_handler, create_album_handler, create_artist_handler,
    delete_album_handler, get_album_handler, get_artist_handler, health_handler,
    list_albums_handler, list_artists_handler, stats_handler, update_album_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/v1/album",
            get(list_albums_handler).post(create_album_handler),
        )
        .route(
            "/api/v1/album/:id",
            get(get_album_handler)
                .put(update_album_handler)
                .delete(delete_album_handler),
        )
        .route(
            "/api/v1/artist",
            get(list_artists_handler).post(create_artist_handler),
        )
        .route("/api/v1/artist/:id", get(get_artist_handler))
        .route("/api/v1/cache/cleanup", post(cleanup_cache_handler))
        .route("/api/v1/cache/state", get(cache_state_handler))
        .route("/api/v1/cache/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
