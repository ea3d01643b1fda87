use serde::{Deserialize, Serialize};

use crate::model::Position;

/// Everything derived for one league.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeagueStats {
    pub league_id: u32,
    pub league_name: String,
    pub finished_gameweeks: Vec<u32>,
    pub teams: Vec<ManagerStatistics>,
    pub players: Vec<LeaguePlayerStatistics>,
    /// Managers left out of `teams` because their history could not be fetched.
    pub failed_managers: Vec<ManagerFailure>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManagerFailure {
    pub manager_id: u32,
    pub reason: String,
}

/// Points a chip earned and the gameweek it was played in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChipUsageRecord {
    pub points: i32,
    pub gameweek: u32,
}

/// Season aggregates for one manager.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManagerStatistics {
    pub manager_id: u32,
    pub rank: u32,
    pub manager_name: String,
    pub team_name: String,
    pub total_points: i32,
    pub event_total: i32,

    pub total_transfers: u32,
    pub transfers_this_week: u32,
    pub total_transfer_point_deduction: i32,
    pub team_value: f64,
    pub bank: f64,
    pub overall_rank: Option<u64>,
    pub chips_used: Vec<String>,
    pub wildcards_used: u32,
    pub points_on_bench: i32,
    pub highest_gameweek_score: i32,
    pub best_overall_rank: Option<u64>,
    pub worst_overall_rank: Option<u64>,
    pub highest_gameweek_rank: Option<u64>,
    pub lowest_gameweek_rank: Option<u64>,

    pub total_captain_points: i32,
    pub captain_points_percentage: f64,
    pub captain: String,
    pub vice_captain: String,
    /// Formatted as `"Name (times)"`, empty when no captain was ever recorded.
    pub most_captained_player: String,
    pub captain_diversity: u32,

    pub triple_captain: Option<ChipUsageRecord>,
    pub bench_boost: Option<ChipUsageRecord>,
    pub free_hit: Option<ChipUsageRecord>,
    pub total_chip_points: i32,

    pub total_gk_points: i32,
    pub total_def_points: i32,
    pub total_mid_points: i32,
    pub total_fwd_points: i32,
}

/// Ownership figures for a player picked by at least one manager in the league.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaguePlayerStatistics {
    pub player_id: u32,
    pub name: String,
    pub position: Position,
    pub club: String,
    pub value: f64,
    pub status: String,
    pub global_ownership_percentage: f64,
    pub global_ownership_count: u64,
    pub league_ownership_count: u32,
    pub league_ownership_percentage: f64,
    pub league_captain_count: u32,
    pub league_vice_captain_count: u32,
}

/// Which picks count towards league ownership.
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
    strum_macros::EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum OwnershipScope {
    /// Squads of the most recent finished gameweek only.
    #[default]
    LatestGameweek,
    /// Every finished gameweek.
    AllGameweeks,
}

/// Tuning for a single league computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsOptions {
    pub ownership_scope: OwnershipScope,
    /// A manager whose fetches are logged in detail.
    pub debug_manager: Option<u32>,
    /// Upper bound on standings pages followed (50 managers per page).
    pub max_standings_pages: u32,
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self {
            ownership_scope: OwnershipScope::default(),
            debug_manager: None,
            max_standings_pages: 20,
        }
    }
}
