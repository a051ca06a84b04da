use axum::{
    routing::{delete, get},
    Router,
};

use crate::handlers;
use crate::shared::state::AppState;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/logs/",
            get(handlers::a001_log_entry::list_all).post(handlers::a001_log_entry::create),
        )
        // Static segment, matched before `/logs/:id/`.
        .route(
            "/logs/clear-all/",
            delete(handlers::a001_log_entry::clear_all),
        )
        .route(
            "/logs/:id/",
            get(handlers::a001_log_entry::get_by_id)
                .put(handlers::a001_log_entry::update)
                .delete(handlers::a001_log_entry::delete),
        )
        .with_state(state)
}
