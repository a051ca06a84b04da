use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a001_log_entry::aggregate::{Acknowledgment, LogEntry};

use crate::domain::a001_log_entry::service::{self, ServiceError};
use crate::shared::state::AppState;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<Acknowledgment>)>;

fn error_response(err: ServiceError) -> (StatusCode, Json<Acknowledgment>) {
    let status = match &err {
        ServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Storage(e) => {
            tracing::error!("log storage failure: {:#}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Acknowledgment::new("Internal server error")),
            );
        }
    };
    (status, Json(Acknowledgment::new(err.to_string())))
}

/// GET /logs/
pub async fn list_all(State(state): State<AppState>) -> ApiResult<Vec<LogEntry>> {
    service::list_all(&state.db)
        .await
        .map(Json)
        .map_err(error_response)
}

/// GET /logs/:id/
pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<LogEntry> {
    service::get_by_id(&state.db, id)
        .await
        .map(Json)
        .map_err(error_response)
}

/// POST /logs/
pub async fn create(
    State(state): State<AppState>,
    Json(entry): Json<LogEntry>,
) -> ApiResult<LogEntry> {
    service::create(&state.db, entry)
        .await
        .map(Json)
        .map_err(error_response)
}

/// PUT /logs/:id/
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(entry): Json<LogEntry>,
) -> ApiResult<LogEntry> {
    service::update(&state.db, id, entry)
        .await
        .map(Json)
        .map_err(error_response)
}

/// DELETE /logs/:id/
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Acknowledgment> {
    service::delete(&state.db, id)
        .await
        .map(|_| {
            Json(Acknowledgment::new(format!(
                "Log with ID {} deleted successfully.",
                id
            )))
        })
        .map_err(error_response)
}

/// DELETE /logs/clear-all/
pub async fn clear_all(State(state): State<AppState>) -> ApiResult<Acknowledgment> {
    service::clear_all(&state.db)
        .await
        .map(|removed| Json(Acknowledgment::new(format!("{} logs have been cleared.", removed))))
        .map_err(error_response)
}
