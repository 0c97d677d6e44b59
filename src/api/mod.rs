//! HTTP surface: an upload form, an HTML result page and a JSON endpoint.
//!
//! Every request runs its own analysis; the only shared value is the
//! immutable [`handlers::AppState`].

pub mod errors;
pub mod handlers;
pub mod render;

use axum::extract::DefaultBodyLimit;
use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use handlers::AppState;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/upload",
            get(handlers::upload_redirect).post(handlers::upload_page),
        )
        .route("/api/terms", post(handlers::upload_terms))
        .route("/health", get(handlers::health))
        .nest_service("/static", ServeDir::new(&state.static_dir))
        .layer(DefaultBodyLimit::max(state.max_upload_bytes))
        .layer(TimeoutLayer::new(state.request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST]),
        )
        .with_state(state)
}
