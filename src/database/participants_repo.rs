use sqlx::SqliteConnection;
use sqlx::SqliteExecutor;

use crate::models::ParticipantRow;

const SQL_FIND_BY_EMAIL: &str = r#"
SELECT
  id,
  email
FROM participant
WHERE email = ?1
LIMIT 1
"#;

pub async fn find_by_email<'e, E>(executor: E, email: &str) -> sqlx::Result<Option<ParticipantRow>>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, ParticipantRow>(SQL_FIND_BY_EMAIL)
        .bind(email)
        .fetch_optional(executor)
        .await
}

const SQL_INSERT_PARTICIPANT: &str = r#"
INSERT INTO participant (email) VALUES (?1)
"#;

/// Fails with a unique violation when the email is already taken.
pub async fn insert_participant<'e, E>(executor: E, email: &str) -> sqlx::Result<ParticipantRow>
where
    E: SqliteExecutor<'e>,
{
    let res = sqlx::query(SQL_INSERT_PARTICIPANT)
        .bind(email)
        .execute(executor)
        .await?;
    Ok(ParticipantRow {
        id: res.last_insert_rowid(),
        email: email.to_string(),
    })
}

const SQL_UPSERT_PARTICIPANT: &str = r#"
INSERT INTO participant (email) VALUES (?1)
ON CONFLICT (email) DO NOTHING
"#;

/// Find-or-create by email. Both statements run on the same connection, so
/// inside a transaction the returned row is the one the caller will link.
pub async fn upsert_participant(
    conn: &mut SqliteConnection,
    email: &str,
) -> sqlx::Result<ParticipantRow> {
    sqlx::query(SQL_UPSERT_PARTICIPANT)
        .bind(email)
        .execute(&mut *conn)
        .await?;
    sqlx::query_as::<_, ParticipantRow>(SQL_FIND_BY_EMAIL)
        .bind(email)
        .fetch_one(&mut *conn)
        .await
}

const SQL_COUNT_PARTICIPANTS: &str = "SELECT COUNT(*) FROM participant";

pub async fn count_participants<'e, E>(executor: E) -> sqlx::Result<i64>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_scalar::<_, i64>(SQL_COUNT_PARTICIPANTS)
        .fetch_one(executor)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{connect_in_memory, schema_repo};

    #[tokio::test]
    async fn upsert_reuses_existing_row() {
        let pool = connect_in_memory().await.unwrap();
        schema_repo::ensure_schema(&pool).await.unwrap();
        let mut conn = pool.acquire().await.unwrap();

        let first = upsert_participant(&mut conn, "emma@mergington.edu")
            .await
            .unwrap();
        let second = upsert_participant(&mut conn, "emma@mergington.edu")
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(count_participants(&mut *conn).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn insert_rejects_existing_email() {
        let pool = connect_in_memory().await.unwrap();
        schema_repo::ensure_schema(&pool).await.unwrap();

        let created = insert_participant(&pool, "liam@mergington.edu")
            .await
            .unwrap();
        assert_eq!(
            find_by_email(&pool, "liam@mergington.edu").await.unwrap(),
            Some(created)
        );
        assert!(insert_participant(&pool, "liam@mergington.edu")
            .await
            .is_err());
    }
}
