use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

/// Open (creating if needed) the SQLite database at `db_file` and bootstrap the schema.
pub async fn initialize_database(db_file: &Path) -> anyhow::Result<DatabaseConnection> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    tracing::info!("Opening database at {}", absolute_path.display());

    let conn = Database::connect(build_sqlite_url(&absolute_path)).await?;
    ensure_schema(&conn).await?;
    Ok(conn)
}

/// Private in-memory database. A single pooled connection, so every query sees the same data.
pub async fn connect_in_memory() -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);
    let conn = Database::connect(options).await?;
    ensure_schema(&conn).await?;
    Ok(conn)
}

fn build_sqlite_url(path: &Path) -> String {
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    format!("sqlite://{}{}?mode=rwc", prefix, normalized)
}

async fn ensure_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    let create_log_table = r#"
        CREATE TABLE IF NOT EXISTS a001_log_entry (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp TEXT NOT NULL,
            source TEXT NOT NULL,
            log TEXT NOT NULL
        );
    "#;
    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        create_log_table.to_string(),
    ))
    .await?;

    let create_timestamp_index = r#"
        CREATE INDEX IF NOT EXISTS idx_a001_log_entry_timestamp
            ON a001_log_entry (timestamp);
    "#;
    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        create_timestamp_index.to_string(),
    ))
    .await?;

    Ok(())
}
