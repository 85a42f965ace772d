//! Wipe-and-repopulate procedure for the demo dataset.
//!
//! Runs statement by statement on the pool, deliberately not in a transaction:
//! a failure aborts the remaining steps and leaves whatever partial state
//! existed at that point, matching the documented reset semantics.

use crate::collection::Collection;
use crate::error::AppError;
use crate::models::{Activity, LeaderboardEntry, Team, User, Workout};
use crate::store;
use serde::Serialize;
use sqlx::PgPool;

/// Per-collection insert counts from one seeder run.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct SeedSummary {
    pub teams: u64,
    pub users: u64,
    pub activities: u64,
    pub leaderboard: u64,
    pub workouts: u64,
}

pub fn demo_teams() -> Vec<Team> {
    vec![
        Team { name: "Marvel".into() },
        Team { name: "DC".into() },
    ]
}

pub fn demo_users() -> Vec<User> {
    // team holds the literal team name, not a reference to a Team record.
    vec![
        User {
            email: "ironman@marvel.com".into(),
            name: "Iron Man".into(),
            team: "Marvel".into(),
        },
        User {
            email: "captain@marvel.com".into(),
            name: "Captain America".into(),
            team: "Marvel".into(),
        },
        User {
            email: "batman@dc.com".into(),
            name: "Batman".into(),
            team: "DC".into(),
        },
        User {
            email: "superman@dc.com".into(),
            name: "Superman".into(),
            team: "DC".into(),
        },
    ]
}

pub fn demo_activities() -> Vec<Activity> {
    vec![
        Activity {
            user: "Iron Man".into(),
            activity_type: "Running".into(),
            duration: 30,
        },
        Activity {
            user: "Captain America".into(),
            activity_type: "Cycling".into(),
            duration: 45,
        },
        Activity {
            user: "Batman".into(),
            activity_type: "Swimming".into(),
            duration: 60,
        },
        Activity {
            user: "Superman".into(),
            activity_type: "Yoga".into(),
            duration: 20,
        },
    ]
}

pub fn demo_leaderboard() -> Vec<LeaderboardEntry> {
    vec![
        LeaderboardEntry { team: "Marvel".into(), points: 75 },
        LeaderboardEntry { team: "DC".into(), points: 80 },
    ]
}

pub fn demo_workouts() -> Vec<Workout> {
    vec![
        Workout { name: "HIIT".into(), difficulty: "Hard".into() },
        Workout { name: "Cardio".into(), difficulty: "Medium".into() },
        Workout { name: "Strength".into(), difficulty: "Hard".into() },
        Workout { name: "Yoga".into(), difficulty: "Easy".into() },
    ]
}

/// Delete all documents from the five collections, then insert the demo
/// dataset. Idempotent: a second run produces the same counts.
pub async fn reset_demo_data(pool: &PgPool) -> Result<SeedSummary, AppError> {
    for collection in Collection::ALL {
        let removed = store::clear(pool, collection).await?;
        tracing::info!(collection = collection.table(), removed, "cleared");
    }

    let teams = insert_all(pool, Collection::Teams, &demo_teams()).await?;
    let users = insert_all(pool, Collection::Users, &demo_users()).await?;
    let activities = insert_all(pool, Collection::Activities, &demo_activities()).await?;
    let leaderboard = insert_all(pool, Collection::Leaderboard, &demo_leaderboard()).await?;
    let workouts = insert_all(pool, Collection::Workouts, &demo_workouts()).await?;

    let summary = SeedSummary {
        teams,
        users,
        activities,
        leaderboard,
        workouts,
    };
    tracing::info!(?summary, "demo data inserted");
    Ok(summary)
}

async fn insert_all<T: Serialize>(
    pool: &PgPool,
    collection: Collection,
    records: &[T],
) -> Result<u64, AppError> {
    let mut count = 0u64;
    for record in records {
        let doc = serde_json::to_value(record)
            .map_err(|e| AppError::BadRequest(format!("serialize {}: {}", collection.table(), e)))?;
        store::insert(pool, collection, &doc).await?;
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_dataset_counts() {
        assert_eq!(demo_teams().len(), 2);
        assert_eq!(demo_users().len(), 4);
        assert_eq!(demo_activities().len(), 4);
        assert_eq!(demo_leaderboard().len(), 2);
        assert_eq!(demo_workouts().len(), 4);
    }

    #[test]
    fn users_reference_teams_by_literal_name() {
        let team_names: Vec<String> = demo_teams().into_iter().map(|t| t.name).collect();
        for user in demo_users() {
            assert!(team_names.contains(&user.team), "unknown team {}", user.team);
        }
    }

    #[test]
    fn user_emails_are_distinct() {
        let mut emails: Vec<String> = demo_users().into_iter().map(|u| u.email).collect();
        emails.sort();
        emails.dedup();
        assert_eq!(emails.len(), 4);
    }

    #[test]
    fn activities_reference_users_by_display_name() {
        let names: Vec<String> = demo_users().into_iter().map(|u| u.name).collect();
        for activity in demo_activities() {
            assert!(names.contains(&activity.user), "unknown user {}", activity.user);
        }
    }

    #[test]
    fn activity_type_serializes_as_type_field() {
        let doc = serde_json::to_value(&demo_activities()[0]).unwrap();
        assert_eq!(doc["type"], "Running");
        assert_eq!(doc["duration"], 30);
    }

    #[test]
    fn leaderboard_points_match_dataset() {
        let entries = demo_leaderboard();
        assert_eq!((entries[0].team.as_str(), entries[0].points), ("Marvel", 75));
        assert_eq!((entries[1].team.as_str(), entries[1].points), ("DC", 80));
    }

    #[test]
    fn workout_difficulties_match_dataset() {
        let difficulties: Vec<(String, String)> = demo_workouts()
            .into_iter()
            .map(|w| (w.name, w.difficulty))
            .collect();
        assert_eq!(
            difficulties,
            vec![
                ("HIIT".to_string(), "Hard".to_string()),
                ("Cardio".to_string(), "Medium".to_string()),
                ("Strength".to_string(), "Hard".to_string()),
                ("Yoga".to_string(), "Easy".to_string()),
            ]
        );
    }
}
