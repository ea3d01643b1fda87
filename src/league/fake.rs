//! In-memory provider and builders for pipeline tests.

use std::collections::HashMap;

use reqwest::StatusCode;

use crate::error::{FplError, Result};
use crate::model::*;
use crate::provider::SportsDataProvider;

/// Serves whatever documents were registered; anything else is a 404.
#[derive(Debug, Default, Clone)]
pub(crate) struct FakeProvider {
    pub standings: Vec<LeagueStandingsPage>,
    pub catalogue: Option<Catalogue>,
    pub live: HashMap<u32, LiveGameweek>,
    pub histories: HashMap<u32, ManagerSeasonHistory>,
    pub picks: HashMap<(u32, u32), Vec<ManagerGameweekPick>>,
}

impl FakeProvider {
    pub fn add_standings_page(&mut self, has_next: bool, results: Vec<LeagueStanding>) {
        let page = self.standings.len() as u32 + 1;
        self.standings.push(LeagueStandingsPage {
            league: LeagueInfo {
                id: 0,
                name: String::new(),
            },
            standings: StandingsPage {
                has_next,
                page,
                results,
            },
        });
    }
}

fn not_found(path: String) -> FplError {
    FplError::UnexpectedStatus {
        url: format!("fake://{path}"),
        status: StatusCode::NOT_FOUND,
    }
}

impl SportsDataProvider for FakeProvider {
    async fn league_standings(&self, league_id: u32, page: u32) -> Result<LeagueStandingsPage> {
        let mut response = self
            .standings
            .get(page.saturating_sub(1) as usize)
            .cloned()
            .ok_or_else(|| not_found(format!("leagues-classic/{league_id}/standings/{page}")))?;
        response.league = LeagueInfo {
            id: league_id,
            name: format!("League {league_id}"),
        };
        Ok(response)
    }

    async fn catalogue(&self) -> Result<Catalogue> {
        self.catalogue
            .clone()
            .ok_or_else(|| not_found("bootstrap-static".to_string()))
    }

    async fn live_gameweek(&self, gameweek: u32) -> Result<LiveGameweek> {
        self.live
            .get(&gameweek)
            .cloned()
            .ok_or_else(|| not_found(format!("event/{gameweek}/live")))
    }

    async fn manager_history(&self, manager_id: u32) -> Result<ManagerSeasonHistory> {
        self.histories
            .get(&manager_id)
            .cloned()
            .ok_or_else(|| not_found(format!("entry/{manager_id}/history")))
    }

    async fn manager_picks(&self, manager_id: u32, gameweek: u32) -> Result<EntryPicks> {
        self.picks
            .get(&(manager_id, gameweek))
            .map(|picks| EntryPicks {
                picks: picks.clone(),
                active_chip: None,
            })
            .ok_or_else(|| not_found(format!("entry/{manager_id}/event/{gameweek}/picks")))
    }
}

const CLUBS: &[(u32, &str)] = &[
    (1, "Arsenal"),
    (12, "Liverpool"),
    (13, "Man City"),
    (14, "Man Utd"),
];

/// A catalogue with the given players, finished gameweeks, and one upcoming gameweek.
pub(crate) fn catalogue(players: Vec<PlayerCatalogueEntry>, finished: &[u32]) -> Catalogue {
    let next = finished.iter().max().map_or(1, |gw| gw + 1);
    let events = finished
        .iter()
        .map(|&id| (id, true))
        .chain(std::iter::once((next, false)))
        .map(|(id, finished)| GameweekEvent {
            id,
            name: format!("Gameweek {id}"),
            finished,
            is_current: false,
            deadline_time: None,
        })
        .collect();
    let clubs = CLUBS
        .iter()
        .map(|&(id, name)| Club {
            id,
            name: name.to_string(),
            short_name: name[..3].to_uppercase(),
        })
        .collect();

    Catalogue {
        events,
        clubs,
        players,
        total_players: 9_000_000,
    }
}

pub(crate) fn player(
    id: u32,
    name: &str,
    position: Position,
    club_id: u32,
) -> PlayerCatalogueEntry {
    PlayerCatalogueEntry {
        id,
        name: name.to_string(),
        position,
        club_id,
        cost: 50,
        selected_by_percent: "10.0".to_string(),
        status: "a".to_string(),
    }
}

pub(crate) fn live(points: &[(u32, i32)]) -> LiveGameweek {
    LiveGameweek {
        elements: points
            .iter()
            .map(|&(player_id, total_points)| LiveGameweekScore {
                player_id,
                stats: LiveStats {
                    total_points,
                    minutes: 90,
                },
            })
            .collect(),
    }
}

pub(crate) fn standing(manager_id: u32, name: &str, total_points: i32) -> LeagueStanding {
    LeagueStanding {
        manager_id,
        manager_name: name.to_string(),
        team_name: format!("{name} XI"),
        rank: 1,
        total_points,
        event_total: 0,
    }
}

/// A history with one summary per `(gameweek, points)` and the given `(chip, gameweek)` plays.
pub(crate) fn history(gameweeks: &[(u32, i32)], chips: &[(&str, u32)]) -> ManagerSeasonHistory {
    let mut total = 0;
    let gameweeks = gameweeks
        .iter()
        .map(|&(event, points)| {
            total += points;
            GameweekSummary {
                event,
                points,
                total_points: total,
                rank: Some(1_000 * u64::from(event)),
                overall_rank: Some(5_000 / u64::from(event)),
                bank: 5,
                value: 1_000 + event as i32,
                ..GameweekSummary::default()
            }
        })
        .collect();
    let chips = chips
        .iter()
        .map(|&(name, event)| ChipPlay {
            name: name.to_string(),
            event,
            time: None,
        })
        .collect();

    ManagerSeasonHistory { gameweeks, chips }
}

pub(crate) fn pick(
    player_id: u32,
    position: u8,
    multiplier: u8,
    is_captain: bool,
    is_vice_captain: bool,
) -> ManagerGameweekPick {
    ManagerGameweekPick {
        player_id,
        position,
        multiplier,
        is_captain,
        is_vice_captain,
    }
}
