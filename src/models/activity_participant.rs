// Membership joined with the participant's email, for listing.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ActivityParticipantEmailRow {
    pub activity_id: i64,
    pub email: String,
}
