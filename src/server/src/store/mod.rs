use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    #[default]
    Upcoming,
    Live,
    Completed,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Upcoming => "upcoming",
            MatchStatus::Live => "live",
            MatchStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: u32,
    pub teams: Vec<String>,
    pub status: MatchStatus,
    pub score: BTreeMap<String, i64>,
}

/// Roster entry. Field names stay camelCase on the wire because the frontend
/// reads them verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_captain: bool,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub register_no: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub sport: String,
    pub captain: String,
    pub players: Vec<Player>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub id: u32,
    pub title: String,
    pub player: String,
}

/// Process-wide sample data. Owned by the app state behind a single lock and
/// reset to the seed rows on every restart.
#[derive(Debug, Default)]
pub struct SampleStore {
    pub matches: Vec<Match>,
    pub teams: Vec<Team>,
    pub achievements: Vec<Achievement>,
}

impl SampleStore {
    pub fn seed() -> Self {
        SampleStore {
            matches: vec![
                Match {
                    id: 1,
                    teams: vec!["Team A".to_string(), "Team B".to_string()],
                    status: MatchStatus::Live,
                    score: BTreeMap::from([
                        ("Team A".to_string(), 120),
                        ("Team B".to_string(), 115),
                    ]),
                },
                Match {
                    id: 2,
                    teams: vec!["Team C".to_string(), "Team D".to_string()],
                    status: MatchStatus::Upcoming,
                    score: BTreeMap::new(),
                },
            ],
            teams: vec![
                Team {
                    id: 1,
                    name: "Team A".to_string(),
                    sport: "cricket".to_string(),
                    captain: "Captain A".to_string(),
                    players: vec![
                        Player {
                            name: "Player 1".to_string(),
                            is_captain: true,
                            age: 28,
                            register_no: "REG001".to_string(),
                        },
                        Player {
                            name: "Player 2".to_string(),
                            is_captain: false,
                            age: 25,
                            register_no: "REG002".to_string(),
                        },
                    ],
                },
                Team {
                    id: 2,
                    name: "Team B".to_string(),
                    sport: "cricket".to_string(),
                    captain: "Captain B".to_string(),
                    players: vec![Player {
                        name: "Player 3".to_string(),
                        is_captain: true,
                        age: 30,
                        register_no: "REG003".to_string(),
                    }],
                },
            ],
            achievements: vec![Achievement {
                id: 1,
                title: "Highest Score".to_string(),
                player: "Player X".to_string(),
            }],
        }
    }

    pub fn match_by_id(&self, id: u32) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == id)
    }

    /// Ids are unique per collection: max existing + 1, or 1 when empty.
    pub fn next_match_id(&self) -> u32 {
        self.matches.iter().map(|m| m.id).max().map_or(1, |id| id + 1)
    }

    pub fn next_team_id(&self) -> u32 {
        self.teams.iter().map(|t| t.id).max().map_or(1, |id| id + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_contains_sample_rows() {
        let store = SampleStore::seed();

        assert_eq!(store.matches.len(), 2);
        assert_eq!(store.teams.len(), 2);
        assert_eq!(store.achievements.len(), 1);

        let live = store.match_by_id(1).unwrap();
        assert_eq!(live.status, MatchStatus::Live);
        assert_eq!(live.score.get("Team A"), Some(&120));
    }

    #[test]
    fn next_ids_follow_max_plus_one() {
        let store = SampleStore::seed();
        assert_eq!(store.next_match_id(), 3);
        assert_eq!(store.next_team_id(), 3);

        let empty = SampleStore::default();
        assert_eq!(empty.next_match_id(), 1);
        assert_eq!(empty.next_team_id(), 1);
    }

    #[test]
    fn player_serializes_with_frontend_field_names() {
        let player = Player {
            name: "Player 1".to_string(),
            is_captain: true,
            age: 28,
            register_no: "REG001".to_string(),
        };

        let json = serde_json::to_value(&player).unwrap();

        assert_eq!(json["isCaptain"], true);
        assert_eq!(json["registerNo"], "REG001");
    }

    #[test]
    fn match_status_round_trips_lowercase() {
        assert_eq!(
            serde_json::to_value(MatchStatus::Upcoming).unwrap(),
            "upcoming"
        );
        let status: MatchStatus = serde_json::from_value("live".into()).unwrap();
        assert_eq!(status, MatchStatus::Live);
        assert_eq!(MatchStatus::Completed.as_str(), "completed");
    }
}
