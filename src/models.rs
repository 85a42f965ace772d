//! Record shapes for the five collections. The CRUD surface stores raw JSON
//! documents; these types exist for the demo dataset and for consumers that
//! want a typed view. Cross-collection references are plain display-name
//! strings, matched by convention only.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub name: String,
    /// Team name as free text, not a reference to a Team record.
    pub team: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Activity {
    /// User display name as free text.
    pub user: String,
    #[serde(rename = "type")]
    pub activity_type: String,
    /// Minutes.
    pub duration: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Team name as free text.
    pub team: String,
    pub points: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Workout {
    pub name: String,
    /// "Easy" | "Medium" | "Hard" by convention; not enforced.
    pub difficulty: String,
}
