#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ActivityRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
}

pub struct NewActivity<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub schedule: &'a str,
    pub max_participants: i64,
}
