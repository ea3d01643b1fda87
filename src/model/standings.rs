use serde::{Deserialize, Serialize};

/// One page of a classic league's standings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueStandingsPage {
    pub league: LeagueInfo,
    pub standings: StandingsPage,
}

/// Basic information about a classic league.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueInfo {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsPage {
    pub has_next: bool,
    pub page: u32,
    pub results: Vec<LeagueStanding>,
}

/// A manager's row in the league table, as published by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueStanding {
    #[serde(rename = "entry")]
    pub manager_id: u32,
    #[serde(rename = "player_name")]
    pub manager_name: String,
    #[serde(rename = "entry_name")]
    pub team_name: String,
    pub rank: u32,
    #[serde(rename = "total")]
    pub total_points: i32,
    pub event_total: i32,
}
