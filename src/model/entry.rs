use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A manager's season so far: one summary per played gameweek plus the chips used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManagerSeasonHistory {
    #[serde(rename = "current")]
    pub gameweeks: Vec<GameweekSummary>,
    #[serde(default)]
    pub chips: Vec<ChipPlay>,
}

impl ManagerSeasonHistory {
    /// First play of the given chip, if any.
    pub fn chip(&self, kind: ChipKind) -> Option<&ChipPlay> {
        self.chips.iter().find(|c| c.kind() == Some(kind))
    }

    pub fn gameweek(&self, event: u32) -> Option<&GameweekSummary> {
        self.gameweeks.iter().find(|g| g.event == event)
    }
}

/// A manager's results for one gameweek. Money fields are in tenths of a million.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameweekSummary {
    pub event: u32,
    pub points: i32,
    pub total_points: i32,
    /// Gameweek rank; absent until the provider has ranked the gameweek.
    #[serde(default)]
    pub rank: Option<u64>,
    #[serde(default)]
    pub overall_rank: Option<u64>,
    pub bank: i32,
    pub value: i32,
    pub event_transfers: u32,
    pub event_transfers_cost: i32,
    pub points_on_bench: i32,
}

/// A chip played in a gameweek.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChipPlay {
    pub name: String,
    pub event: u32,
    #[serde(default)]
    pub time: Option<DateTime<Utc>>,
}

impl ChipPlay {
    pub fn kind(&self) -> Option<ChipKind> {
        ChipKind::from_str(&self.name).ok()
    }
}

/// The chips this crate knows how to value, keyed by their wire names.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
pub enum ChipKind {
    #[strum(serialize = "wildcard")]
    Wildcard,
    #[strum(serialize = "3xc")]
    TripleCaptain,
    #[strum(serialize = "bboost")]
    BenchBoost,
    #[strum(serialize = "freehit")]
    FreeHit,
}

/// The response of the picks endpoint for one manager and gameweek.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryPicks {
    pub picks: Vec<ManagerGameweekPick>,
    #[serde(default)]
    pub active_chip: Option<String>,
}

/// One of the 15 players in a manager's squad for a gameweek.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerGameweekPick {
    #[serde(rename = "element")]
    pub player_id: u32,
    /// Squad slot, 1-11 starting, 12-15 bench.
    pub position: u8,
    pub multiplier: u8,
    pub is_captain: bool,
    pub is_vice_captain: bool,
}

impl ManagerGameweekPick {
    pub fn is_bench(&self) -> bool {
        (12..=15).contains(&self.position)
    }
}
