//! Router assembly and HTTP listener.

use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::database::Database;
use crate::routes;

/// Shared state for all request handlers
pub struct AppState {
    pub db: Database,
    /// Shared secret for verifying tokens from the authentication service
    pub jwt_secret: String,
}

/// Build the application router.
///
/// Every route except the liveness check requires a bearer token, enforced
/// by the `AuthUser` extractor in each handler.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/ping", get(routes::ping))
        .route(
            "/jadwals",
            get(routes::list_entries).post(routes::create_entry),
        )
        .route("/jadwals/highlight", get(routes::highlight))
        .route(
            "/jadwals/{id}",
            get(routes::get_entry)
                .put(routes::update_entry)
                .patch(routes::update_entry)
                .delete(routes::delete_entry),
        )
        .route("/jadwals/{id}/start-timer", post(routes::start_timer))
        .route("/jadwals/{id}/stop-timer", post(routes::stop_timer))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind the listener and serve until shutdown
pub async fn serve(
    bind_addr: &str,
    state: Arc<AppState>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("Listening on {}", bind_addr);
    axum::serve(listener, router).await?;
    Ok(())
}
