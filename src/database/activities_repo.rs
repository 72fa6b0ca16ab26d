use sqlx::SqliteExecutor;

use crate::models::{ActivityRow, NewActivity};

const SQL_FIND_BY_NAME: &str = r#"
SELECT
  id,
  name,
  description,
  schedule,
  max_participants
FROM activity
WHERE name = ?1
LIMIT 1
"#;

pub async fn find_by_name<'e, E>(executor: E, name: &str) -> sqlx::Result<Option<ActivityRow>>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, ActivityRow>(SQL_FIND_BY_NAME)
        .bind(name)
        .fetch_optional(executor)
        .await
}

const SQL_LIST_ORDERED_BY_NAME: &str = r#"
SELECT
  id,
  name,
  description,
  schedule,
  max_participants
FROM activity
ORDER BY name ASC
"#;

pub async fn list_ordered_by_name<'e, E>(executor: E) -> sqlx::Result<Vec<ActivityRow>>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, ActivityRow>(SQL_LIST_ORDERED_BY_NAME)
        .fetch_all(executor)
        .await
}

const SQL_COUNT_ACTIVITIES: &str = "SELECT COUNT(*) FROM activity";

pub async fn count_activities<'e, E>(executor: E) -> sqlx::Result<i64>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_scalar::<_, i64>(SQL_COUNT_ACTIVITIES)
        .fetch_one(executor)
        .await
}

const SQL_INSERT_ACTIVITY: &str = r#"
INSERT INTO activity (
  name,
  description,
  schedule,
  max_participants
) VALUES (?1, ?2, ?3, ?4)
"#;

/// Inserts an activity and returns its surrogate id.
pub async fn insert_activity<'e, E>(executor: E, activity: NewActivity<'_>) -> sqlx::Result<i64>
where
    E: SqliteExecutor<'e>,
{
    let res = sqlx::query(SQL_INSERT_ACTIVITY)
        .bind(activity.name)
        .bind(activity.description)
        .bind(activity.schedule)
        .bind(activity.max_participants)
        .execute(executor)
        .await?;
    Ok(res.last_insert_rowid())
}
