use serde::{Deserialize, Serialize};

/// Live scoring for every player in one gameweek.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LiveGameweek {
    pub elements: Vec<LiveGameweekScore>,
}

/// A player's points in a single gameweek.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveGameweekScore {
    #[serde(rename = "id")]
    pub player_id: u32,
    pub stats: LiveStats,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LiveStats {
    pub total_points: i32,
    #[serde(default)]
    pub minutes: u32,
}

impl LiveGameweekScore {
    pub fn points(&self) -> i32 {
        self.stats.total_points
    }
}
