use chrono::Utc;
use contracts::domain::a001_log_entry::aggregate::LogEntry;
use sea_orm::DatabaseConnection;
use thiserror::Error;

use super::repository;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("Log with ID {0} not found.")]
    NotFound(i64),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

fn validate(entry: &LogEntry) -> Result<(), ServiceError> {
    if entry.source.is_empty() {
        return Err(ServiceError::Validation("source must not be empty".into()));
    }
    if entry.log.is_empty() {
        return Err(ServiceError::Validation("log must not be empty".into()));
    }
    Ok(())
}

pub async fn list_all(conn: &DatabaseConnection) -> Result<Vec<LogEntry>, ServiceError> {
    Ok(repository::list_all(conn).await?)
}

pub async fn get_by_id(conn: &DatabaseConnection, id: i64) -> Result<LogEntry, ServiceError> {
    repository::get_by_id(conn, id)
        .await?
        .ok_or(ServiceError::NotFound(id))
}

/// Any `id` in the payload is ignored; the timestamp defaults to now.
pub async fn create(conn: &DatabaseConnection, entry: LogEntry) -> Result<LogEntry, ServiceError> {
    validate(&entry)?;
    let timestamp = entry.timestamp.unwrap_or_else(Utc::now);
    let created = repository::insert(conn, &entry.source, &entry.log, timestamp).await?;
    tracing::debug!(id = ?created.id, source = %created.source, "log entry created");
    Ok(created)
}

pub async fn update(
    conn: &DatabaseConnection,
    id: i64,
    entry: LogEntry,
) -> Result<LogEntry, ServiceError> {
    validate(&entry)?;
    let timestamp = entry.timestamp.unwrap_or_else(Utc::now);
    repository::update(conn, id, &entry.source, &entry.log, timestamp)
        .await?
        .ok_or(ServiceError::NotFound(id))
}

pub async fn delete(conn: &DatabaseConnection, id: i64) -> Result<(), ServiceError> {
    if repository::delete(conn, id).await? {
        Ok(())
    } else {
        Err(ServiceError::NotFound(id))
    }
}

/// Number of entries removed.
pub async fn clear_all(conn: &DatabaseConnection) -> Result<u64, ServiceError> {
    let removed = repository::clear_all(conn).await?;
    tracing::info!(removed, "log cleared");
    Ok(removed)
}
