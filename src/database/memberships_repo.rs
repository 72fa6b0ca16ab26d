use sqlx::SqliteExecutor;

use crate::models::ActivityParticipantEmailRow;

const SQL_ADD_MEMBERSHIP: &str = r#"
INSERT INTO activity_participant (
  activity_id,
  participant_id
) VALUES (?1, ?2)
ON CONFLICT (activity_id, participant_id) DO NOTHING
"#;

/// Returns false when the pair was already linked.
pub async fn add_membership<'e, E>(
    executor: E,
    activity_id: i64,
    participant_id: i64,
) -> sqlx::Result<bool>
where
    E: SqliteExecutor<'e>,
{
    let res = sqlx::query(SQL_ADD_MEMBERSHIP)
        .bind(activity_id)
        .bind(participant_id)
        .execute(executor)
        .await?;
    Ok(res.rows_affected() == 1)
}

const SQL_REMOVE_MEMBERSHIP: &str = r#"
DELETE FROM activity_participant
WHERE activity_id = ?1
  AND participant_id = ?2
"#;

/// Returns false when there was nothing to remove.
pub async fn remove_membership<'e, E>(
    executor: E,
    activity_id: i64,
    participant_id: i64,
) -> sqlx::Result<bool>
where
    E: SqliteExecutor<'e>,
{
    let res = sqlx::query(SQL_REMOVE_MEMBERSHIP)
        .bind(activity_id)
        .bind(participant_id)
        .execute(executor)
        .await?;
    Ok(res.rows_affected() > 0)
}

// rowid keeps signup order within an activity.
const SQL_LIST_PARTICIPANT_EMAILS: &str = r#"
SELECT
  ap.activity_id,
  p.email
FROM activity_participant ap
JOIN participant p ON p.id = ap.participant_id
ORDER BY ap.activity_id ASC, ap.rowid ASC
"#;

pub async fn list_participant_emails<'e, E>(
    executor: E,
) -> sqlx::Result<Vec<ActivityParticipantEmailRow>>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, ActivityParticipantEmailRow>(SQL_LIST_PARTICIPANT_EMAILS)
        .fetch_all(executor)
        .await
}

const SQL_COUNT_MEMBERSHIPS: &str = "SELECT COUNT(*) FROM activity_participant";

pub async fn count_memberships<'e, E>(executor: E) -> sqlx::Result<i64>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_scalar::<_, i64>(SQL_COUNT_MEMBERSHIPS)
        .fetch_one(executor)
        .await
}
