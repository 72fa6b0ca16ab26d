use sqlx::SqliteExecutor;

// The composite primary key on activity_participant is what rejects a
// duplicate membership.
const SQL_CREATE_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS activity (
  id INTEGER PRIMARY KEY,
  name TEXT NOT NULL UNIQUE,
  description TEXT NOT NULL,
  schedule TEXT NOT NULL,
  max_participants INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS participant (
  id INTEGER PRIMARY KEY,
  email TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS activity_participant (
  activity_id INTEGER NOT NULL REFERENCES activity(id),
  participant_id INTEGER NOT NULL REFERENCES participant(id),
  PRIMARY KEY (activity_id, participant_id)
);
"#;

pub async fn ensure_schema<'e, E>(executor: E) -> sqlx::Result<()>
where
    E: SqliteExecutor<'e>,
{
    sqlx::raw_sql(SQL_CREATE_SCHEMA).execute(executor).await?;
    Ok(())
}
