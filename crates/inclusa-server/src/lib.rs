//! inclusa-server
//!
//! HTTP host for the questionnaire: server-rendered pages, a JSON API over
//! the same wizard, and the in-memory session store.

pub mod config;
pub mod error;
pub mod flow;
pub mod forms;
pub mod middleware;
pub mod routes;
pub mod sessions;
pub mod sink;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Server-rendered questionnaire
        .route("/", get(routes::pages::start))
        .route("/s/{id}", get(routes::pages::show))
        .route("/s/{id}/language", post(routes::pages::toggle_language))
        .route("/s/{id}/next", post(routes::pages::next))
        .route("/s/{id}/previous", post(routes::pages::previous))
        .route("/s/{id}/submit", post(routes::pages::submit))
        .route("/s/{id}/export", get(routes::export::download_page))
        // JSON API
        .route("/api/sessions", post(routes::api::create_session))
        .route("/api/sessions/{id}", get(routes::api::get_session))
        .route("/api/sessions/{id}/language", put(routes::api::set_language))
        .route("/api/sessions/{id}/next", post(routes::api::next))
        .route("/api/sessions/{id}/previous", post(routes::api::previous))
        .route("/api/sessions/{id}/submit", post(routes::api::submit))
        .route("/api/sessions/{id}/dashboard", get(routes::api::dashboard))
        .route("/api/sessions/{id}/export", get(routes::export::download_api))
        .route("/api/locales/{language}", get(routes::locales::get_locale))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
