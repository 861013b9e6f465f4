pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

use crate::interview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // UI strings
        .route("/api/v1/locales", get(handlers::handle_list_locales))
        .route("/api/v1/locales/:code", get(handlers::handle_get_locale))
        // Interview sessions
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(handlers::handle_get_session).delete(handlers::handle_end_session),
        )
        .route(
            "/api/v1/sessions/:id/locale",
            put(handlers::handle_change_locale),
        )
        .route(
            "/api/v1/sessions/:id/profile",
            post(handlers::handle_submit_profile),
        )
        .route("/api/v1/sessions/:id/chat", post(handlers::handle_chat))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
