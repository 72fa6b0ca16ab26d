use sqlx::SqlitePool;
use tracing::info;

use crate::database::{self, activities_repo, memberships_repo, participants_repo};
use crate::models::NewActivity;

pub struct StarterActivity {
    pub name: &'static str,
    pub description: &'static str,
    pub schedule: &'static str,
    pub max_participants: i64,
    pub participants: &'static [&'static str],
}

pub const STARTER_ACTIVITIES: &[StarterActivity] = &[
    StarterActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    StarterActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    StarterActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    StarterActivity {
        name: "Soccer Team",
        description: "Join the school soccer team and compete in matches",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        max_participants: 22,
        participants: &["liam@mergington.edu", "noah@mergington.edu"],
    },
    StarterActivity {
        name: "Basketball Team",
        description: "Practice and play basketball with the school team",
        schedule: "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        max_participants: 15,
        participants: &["ava@mergington.edu", "mia@mergington.edu"],
    },
    StarterActivity {
        name: "Art Club",
        description: "Explore your creativity through painting and drawing",
        schedule: "Thursdays, 3:30 PM - 5:00 PM",
        max_participants: 15,
        participants: &["amelia@mergington.edu", "harper@mergington.edu"],
    },
    StarterActivity {
        name: "Drama Club",
        description: "Act, direct, and produce plays and performances",
        schedule: "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        max_participants: 20,
        participants: &["ella@mergington.edu", "scarlett@mergington.edu"],
    },
    StarterActivity {
        name: "Math Club",
        description: "Solve challenging problems and participate in math competitions",
        schedule: "Tuesdays, 3:30 PM - 4:30 PM",
        max_participants: 10,
        participants: &["james@mergington.edu", "benjamin@mergington.edu"],
    },
    StarterActivity {
        name: "Debate Team",
        description: "Develop public speaking and argumentation skills",
        schedule: "Fridays, 4:00 PM - 5:30 PM",
        max_participants: 12,
        participants: &["charlotte@mergington.edu", "henry@mergington.edu"],
    },
];

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub activities: usize,
    pub participants: usize,
    pub memberships: usize,
    pub skipped: bool,
}

/// Loads the starter activities, but only into an empty store.
pub async fn seed_initial_data(pool: &SqlitePool) -> sqlx::Result<SeedReport> {
    seed_activities(pool, STARTER_ACTIVITIES).await
}

pub async fn seed_activities(
    pool: &SqlitePool,
    dataset: &[StarterActivity],
) -> sqlx::Result<SeedReport> {
    let mut tx = database::begin_write(pool).await?;

    if activities_repo::count_activities(&mut *tx).await? > 0 {
        info!("seed skipped: activities already present");
        return Ok(SeedReport {
            skipped: true,
            ..SeedReport::default()
        });
    }

    let participants_before = participants_repo::count_participants(&mut *tx).await?;
    let mut report = SeedReport::default();

    for entry in dataset {
        let activity_id = activities_repo::insert_activity(
            &mut *tx,
            NewActivity {
                name: entry.name,
                description: entry.description,
                schedule: entry.schedule,
                max_participants: entry.max_participants,
            },
        )
        .await?;
        report.activities += 1;

        for email in entry.participants {
            let participant = participants_repo::upsert_participant(&mut *tx, email).await?;
            if memberships_repo::add_membership(&mut *tx, activity_id, participant.id).await? {
                report.memberships += 1;
            }
        }
    }

    let participants_after = participants_repo::count_participants(&mut *tx).await?;
    report.participants = usize::try_from(participants_after - participants_before).unwrap_or(0);

    tx.commit().await?;

    info!(
        activities = report.activities,
        participants = report.participants,
        memberships = report.memberships,
        "seed completed"
    );
    Ok(report)
}
