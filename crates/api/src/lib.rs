//! `api` crate — HTTP REST API layer.
//!
//! Exposes:
//!   POST   /v1/room_availability
//!   POST   /v1/create_booking
//!   DELETE /v1/cancel_booking/{id}
//!   GET    /v1/get_booking/guest/{name}
//!   PUT    /v1/update_booking/{id}

pub mod error;
pub mod handlers;

pub use error::ApiError;
pub use handlers::AppState;

use axum::routing::{delete, get, post, put};
use axum::Router;
use db::DbPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the service router with every route registered against the given
/// application state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/v1/room_availability",
            post(handlers::availability::room_availability),
        )
        .route("/v1/create_booking", post(handlers::bookings::create))
        .route("/v1/cancel_booking/:id", delete(handlers::bookings::cancel))
        .route(
            "/v1/get_booking/guest/:guest_name",
            get(handlers::bookings::by_guest),
        )
        .route("/v1/update_booking/:id", put(handlers::bookings::update))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind `addr` and serve the API until the process is stopped.
pub async fn serve(bind: &str, pool: DbPool) -> anyhow::Result<()> {
    let app = router(AppState { pool });
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("API listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
