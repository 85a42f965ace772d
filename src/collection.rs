//! The five document collections and their routing table.

/// One of the five record collections. Doubles as the routing table: each
/// collection knows its table name, URL path segment, and discovery-document key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collection {
    Users,
    Teams,
    Activities,
    Leaderboard,
    Workouts,
}

impl Collection {
    /// Declaration order is the order the seeder wipes and the API root lists.
    pub const ALL: [Collection; 5] = [
        Collection::Users,
        Collection::Teams,
        Collection::Activities,
        Collection::Leaderboard,
        Collection::Workouts,
    ];

    /// Table name inside the octofit schema.
    pub fn table(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Teams => "teams",
            Collection::Activities => "activities",
            Collection::Leaderboard => "leaderboard",
            Collection::Workouts => "workouts",
        }
    }

    /// URL path segment under /api/ (same as the table name for all five).
    pub fn path_segment(&self) -> &'static str {
        self.table()
    }

    /// Key in the API root discovery document.
    pub fn resource_key(&self) -> &'static str {
        self.table()
    }

    pub fn from_path(segment: &str) -> Option<Collection> {
        Collection::ALL
            .into_iter()
            .find(|c| c.path_segment() == segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_segments_round_trip() {
        for c in Collection::ALL {
            assert_eq!(Collection::from_path(c.path_segment()), Some(c));
        }
    }

    #[test]
    fn unknown_segment_is_rejected() {
        assert_eq!(Collection::from_path("gyms"), None);
        assert_eq!(Collection::from_path(""), None);
    }
}
