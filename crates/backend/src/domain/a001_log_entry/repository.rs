use chrono::{DateTime, SecondsFormat, Utc};
use contracts::domain::a001_log_entry::aggregate::LogEntry;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, IntoActiveModel, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a001_log_entry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// RFC 3339, UTC, fixed microsecond precision so text order is time order.
    pub timestamp: String,
    pub source: String,
    pub log: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for LogEntry {
    fn from(m: Model) -> Self {
        let timestamp = DateTime::parse_from_rfc3339(&m.timestamp)
            .map(|t| t.with_timezone(&Utc))
            .ok();
        LogEntry {
            id: Some(m.id),
            source: m.source,
            log: m.log,
            timestamp,
        }
    }
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Добавить запись в лог
pub async fn insert(
    conn: &DatabaseConnection,
    source: &str,
    log: &str,
    timestamp: DateTime<Utc>,
) -> anyhow::Result<LogEntry> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        timestamp: Set(format_timestamp(timestamp)),
        source: Set(source.to_string()),
        log: Set(log.to_string()),
    };

    let model = active.insert(conn).await?;
    Ok(model.into())
}

/// Получить все записи лога (новые сверху)
pub async fn list_all(conn: &DatabaseConnection) -> anyhow::Result<Vec<LogEntry>> {
    let logs: Vec<LogEntry> = Entity::find()
        .order_by_desc(Column::Timestamp)
        .order_by_desc(Column::Id)
        .all(conn)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(logs)
}

pub async fn get_by_id(conn: &DatabaseConnection, id: i64) -> anyhow::Result<Option<LogEntry>> {
    let result = Entity::find_by_id(id).one(conn).await?;
    Ok(result.map(Into::into))
}

/// Перезаписать запись. `None`, если записи с таким id нет.
pub async fn update(
    conn: &DatabaseConnection,
    id: i64,
    source: &str,
    log: &str,
    timestamp: DateTime<Utc>,
) -> anyhow::Result<Option<LogEntry>> {
    let Some(existing) = Entity::find_by_id(id).one(conn).await? else {
        return Ok(None);
    };

    let mut active = existing.into_active_model();
    active.timestamp = Set(format_timestamp(timestamp));
    active.source = Set(source.to_string());
    active.log = Set(log.to_string());

    let model = active.update(conn).await?;
    Ok(Some(model.into()))
}

/// `true`, если запись была удалена
pub async fn delete(conn: &DatabaseConnection, id: i64) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected > 0)
}

/// Очистить все записи лога, вернуть количество удалённых
pub async fn clear_all(conn: &DatabaseConnection) -> anyhow::Result<u64> {
    let result = Entity::delete_many().exec(conn).await?;
    Ok(result.rows_affected)
}
