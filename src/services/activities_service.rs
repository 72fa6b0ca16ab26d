use serde::Serialize;
use sqlx::SqlitePool;
use std::collections::{BTreeMap, HashMap};
use tracing::info;

use crate::database::{self, activities_repo, memberships_repo, participants_repo};
use crate::error::ActivityError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityView {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    pub participants: Vec<String>,
}

/// Activities keyed by name, in name order.
pub type ActivityDirectory = BTreeMap<String, ActivityView>;

pub async fn list_activities(pool: &SqlitePool) -> sqlx::Result<ActivityDirectory> {
    // One read transaction so both queries see the same snapshot.
    let mut tx = pool.begin().await?;
    let activities = activities_repo::list_ordered_by_name(&mut *tx).await?;
    let memberships = memberships_repo::list_participant_emails(&mut *tx).await?;
    tx.commit().await?;

    let mut emails_by_activity: HashMap<i64, Vec<String>> = HashMap::new();
    for row in memberships {
        emails_by_activity
            .entry(row.activity_id)
            .or_default()
            .push(row.email);
    }

    Ok(activities
        .into_iter()
        .map(|a| {
            let participants = emails_by_activity.remove(&a.id).unwrap_or_default();
            (
                a.name,
                ActivityView {
                    description: a.description,
                    schedule: a.schedule,
                    max_participants: a.max_participants,
                    participants,
                },
            )
        })
        .collect())
}

// Capacity is advisory: max_participants is not checked here.
pub async fn signup(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivityError> {
    let mut tx = database::begin_write(pool).await?;

    let activity = activities_repo::find_by_name(&mut *tx, activity_name)
        .await?
        .ok_or(ActivityError::ActivityNotFound)?;

    let participant = participants_repo::upsert_participant(&mut *tx, email).await?;

    // Dropping the transaction on conflict also discards a freshly created participant.
    if !memberships_repo::add_membership(&mut *tx, activity.id, participant.id).await? {
        return Err(ActivityError::AlreadySignedUp);
    }

    tx.commit().await?;

    info!(activity = %activity.name, email = %email, "signup");
    Ok(format!("Signed up {} for {}", email, activity_name))
}

/// The participant row is kept even when this was its last membership.
pub async fn unregister(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivityError> {
    let mut tx = database::begin_write(pool).await?;

    let activity = activities_repo::find_by_name(&mut *tx, activity_name)
        .await?
        .ok_or(ActivityError::ActivityNotFound)?;

    let Some(participant) = participants_repo::find_by_email(&mut *tx, email).await? else {
        return Err(ActivityError::NotSignedUp);
    };

    if !memberships_repo::remove_membership(&mut *tx, activity.id, participant.id).await? {
        return Err(ActivityError::NotSignedUp);
    }

    tx.commit().await?;

    info!(activity = %activity.name, email = %email, "unregister");
    Ok(format!("Unregistered {} from {}", email, activity_name))
}
