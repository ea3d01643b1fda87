use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The global reference data: every player, club and gameweek of the season.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalogue {
    pub events: Vec<GameweekEvent>,
    #[serde(rename = "teams")]
    pub clubs: Vec<Club>,
    #[serde(rename = "elements")]
    pub players: Vec<PlayerCatalogueEntry>,
    /// Number of managers registered in the whole game.
    pub total_players: u64,
}

impl Catalogue {
    /// Ids of every finished gameweek, ascending.
    pub fn finished_gameweeks(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self
            .events
            .iter()
            .filter(|e| e.finished)
            .map(|e| e.id)
            .collect();
        ids.sort_unstable();
        ids
    }
}

/// A scheduling unit of the season.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameweekEvent {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    pub finished: bool,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub deadline_time: Option<DateTime<Utc>>,
}

/// A Premier League club.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Club {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub short_name: String,
}

/// A player in the global catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerCatalogueEntry {
    pub id: u32,
    #[serde(rename = "web_name")]
    pub name: String,
    #[serde(rename = "element_type")]
    pub position: Position,
    #[serde(rename = "team")]
    pub club_id: u32,
    /// Price in tenths of a million.
    #[serde(rename = "now_cost")]
    pub cost: u32,
    /// Global ownership as published, e.g. `"12.3"`.
    pub selected_by_percent: String,
    #[serde(default)]
    pub status: String,
}

impl PlayerCatalogueEntry {
    pub fn value(&self) -> f64 {
        f64::from(self.cost) / 10.0
    }

    /// Global ownership percentage. Values that are not a finite number count as 0.
    pub fn ownership_percent(&self) -> f64 {
        parse_ownership_percent(&self.selected_by_percent)
    }
}

fn parse_ownership_percent(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Playing position, decoded from the provider's `element_type` code.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::FromRepr,
)]
#[serde(from = "u8")]
#[repr(u8)]
pub enum Position {
    Goalkeeper = 1,
    Defender = 2,
    Midfielder = 3,
    Forward = 4,
    #[default]
    Unknown = 0,
}

impl From<u8> for Position {
    fn from(code: u8) -> Self {
        Position::from_repr(code).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_catalogue() {
        let raw = r#"{
            "events": [
                {"id": 2, "name": "Gameweek 2", "finished": false, "is_current": true,
                 "deadline_time": "2024-08-24T10:00:00Z", "chip_plays": []},
                {"id": 1, "name": "Gameweek 1", "finished": true, "is_current": false,
                 "deadline_time": "2024-08-16T17:30:00Z"}
            ],
            "teams": [{"id": 14, "name": "Man Utd", "short_name": "MUN", "strength": 4}],
            "elements": [
                {"id": 7, "web_name": "Fernandes", "element_type": 3, "team": 14,
                 "now_cost": 84, "selected_by_percent": "12.3", "status": "a", "form": "5.0"},
                {"id": 8, "web_name": "Coach", "element_type": 5, "team": 14,
                 "now_cost": 5, "selected_by_percent": "", "status": "a"}
            ],
            "total_players": 9000000,
            "element_types": []
        }"#;
        let catalogue: Catalogue = serde_json::from_str(raw).unwrap();
        assert_eq!(catalogue.finished_gameweeks(), vec![1]);
        assert_eq!(catalogue.players[0].position, Position::Midfielder);
        assert_eq!(catalogue.players[1].position, Position::Unknown);
        assert!((catalogue.players[0].value() - 8.4).abs() < 1e-9);
        assert!((catalogue.players[0].ownership_percent() - 12.3).abs() < 1e-9);
        assert_eq!(catalogue.players[1].ownership_percent(), 0.0);
        assert_eq!(catalogue.clubs[0].short_name, "MUN");
    }

    #[test]
    fn test_parse_ownership_percent_rejects_garbage() {
        assert_eq!(parse_ownership_percent("abc"), 0.0);
        assert_eq!(parse_ownership_percent("NaN"), 0.0);
        assert_eq!(parse_ownership_percent(" 4.5 "), 4.5);
    }
}
