use std::collections::BTreeMap;

use futures::future::{join_all, try_join_all};
use tracing::{debug, info, instrument, warn};

use crate::error::{FplError, Result};
use crate::model::{
    Catalogue, LeagueStanding, LiveGameweek, ManagerFailure, ManagerGameweekPick,
    ManagerSeasonHistory, StatsOptions,
};
use crate::provider::SportsDataProvider;

/// Every raw document fetched for one league.
#[derive(Debug, Clone)]
pub struct LeagueData {
    pub league_id: u32,
    pub league_name: String,
    pub standings: Vec<LeagueStanding>,
    pub catalogue: Catalogue,
    /// Finished gameweek ids, ascending.
    pub finished_gameweeks: Vec<u32>,
    pub live: BTreeMap<u32, LiveGameweek>,
    /// Every manager in the standings, in standings order.
    pub managers: Vec<ManagerData>,
    pub failed_managers: Vec<ManagerFailure>,
}

impl LeagueData {
    pub fn latest_finished_gameweek(&self) -> Option<u32> {
        self.finished_gameweeks.last().copied()
    }
}

/// One manager's history and per-gameweek squads.
#[derive(Debug, Clone)]
pub struct ManagerData {
    pub manager_id: u32,
    /// `None` when the history fetch failed; the squads still count towards ownership.
    pub history: Option<ManagerSeasonHistory>,
    /// Squads keyed by finished gameweek. Empty when the picks fetch failed.
    pub picks: BTreeMap<u32, Vec<ManagerGameweekPick>>,
}

impl ManagerData {
    pub fn picks_for(&self, gameweek: u32) -> &[ManagerGameweekPick] {
        self.picks.get(&gameweek).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Fetch standings, catalogue, live scores, and every manager's history and picks.
///
/// Fails only when data shared by all managers is unavailable. A manager whose
/// history cannot be fetched is reported in [`LeagueData::failed_managers`] and
/// keeps whatever squads were fetched; a missing squad for one gameweek becomes
/// an empty pick list.
#[instrument(skip(provider, options))]
pub async fn fetch_league_data<P: SportsDataProvider>(
    provider: &P,
    league_id: u32,
    options: &StatsOptions,
) -> Result<LeagueData> {
    let ((league_name, standings), catalogue) = futures::try_join!(
        fetch_standings(provider, league_id, options.max_standings_pages),
        async {
            provider
                .catalogue()
                .await
                .map_err(FplError::unavailable("catalogue"))
        },
    )?;

    if let Some(debug_id) = options.debug_manager {
        match standings.iter().find(|s| s.manager_id == debug_id) {
            Some(row) => info!(manager_id = debug_id, ?row, "debug manager found in standings"),
            None => info!(manager_id = debug_id, "debug manager not in standings"),
        }
    }

    let finished_gameweeks = catalogue.finished_gameweeks();
    let live = fetch_live(provider, &finished_gameweeks).await?;

    let results = join_all(
        standings
            .iter()
            .map(|s| fetch_manager(provider, s.manager_id, &finished_gameweeks, options)),
    )
    .await;

    let mut failed_managers = Vec::new();
    let managers: Vec<ManagerData> = results
        .into_iter()
        .map(|(manager_id, history, picks)| {
            let history = history
                .inspect_err(|e| {
                    warn!(manager_id, error = %e, "history unavailable, skipping team row");
                    failed_managers.push(ManagerFailure {
                        manager_id,
                        reason: e.to_string(),
                    });
                })
                .ok();
            ManagerData {
                manager_id,
                history,
                picks,
            }
        })
        .collect();

    debug!(
        league_id,
        managers = managers.len(),
        failed = failed_managers.len(),
        gameweeks = finished_gameweeks.len(),
        "fetched league data"
    );

    Ok(LeagueData {
        league_id,
        league_name,
        standings,
        catalogue,
        finished_gameweeks,
        live,
        managers,
        failed_managers,
    })
}

async fn fetch_standings<P: SportsDataProvider>(
    provider: &P,
    league_id: u32,
    max_pages: u32,
) -> Result<(String, Vec<LeagueStanding>)> {
    let mut league_name = String::new();
    let mut standings = Vec::new();

    for page in 1..=max_pages.max(1) {
        let resource = format!("standings page {page} of league {league_id}");
        let response = provider
            .league_standings(league_id, page)
            .await
            .map_err(FplError::unavailable(resource))?;

        league_name = response.league.name;
        standings.extend(response.standings.results);

        if !response.standings.has_next {
            return Ok((league_name, standings));
        }
    }

    warn!(
        league_id,
        max_pages,
        count = standings.len(),
        "standings truncated at page limit"
    );
    Ok((league_name, standings))
}

async fn fetch_live<P: SportsDataProvider>(
    provider: &P,
    gameweeks: &[u32],
) -> Result<BTreeMap<u32, LiveGameweek>> {
    let live = try_join_all(gameweeks.iter().map(|&gameweek| async move {
        provider
            .live_gameweek(gameweek)
            .await
            .map(|scores| (gameweek, scores))
            .map_err(FplError::unavailable(format!("live scores for gameweek {gameweek}")))
    }))
    .await?;
    Ok(live.into_iter().collect())
}

/// A manager's history and squads, fetched concurrently.
///
/// The history may fail on its own; squads are best-effort per gameweek.
async fn fetch_manager<P: SportsDataProvider>(
    provider: &P,
    manager_id: u32,
    gameweeks: &[u32],
    options: &StatsOptions,
) -> (
    u32,
    Result<ManagerSeasonHistory>,
    BTreeMap<u32, Vec<ManagerGameweekPick>>,
) {
    let verbose = options.debug_manager == Some(manager_id);

    let (history, picks) = futures::join!(
        async {
            provider
                .manager_history(manager_id)
                .await
                .map_err(|e| FplError::ManagerUnavailable {
                    manager_id,
                    source: Box::new(e),
                })
        },
        join_all(gameweeks.iter().map(|&gameweek| async move {
            let picks = match provider.manager_picks(manager_id, gameweek).await {
                Ok(response) => response.picks,
                Err(e) => {
                    warn!(manager_id, gameweek, error = %e, "picks unavailable, using empty squad");
                    Vec::new()
                }
            };
            (gameweek, picks)
        })),
    );

    if verbose {
        if let Ok(history) = &history {
            info!(
                manager_id,
                gameweeks = history.gameweeks.len(),
                latest_total = ?history.gameweeks.last().map(|g| g.total_points),
                "debug manager history fetched"
            );
        }
        let missing: Vec<u32> = picks
            .iter()
            .filter(|(_, p)| p.is_empty())
            .map(|(gw, _)| *gw)
            .collect();
        info!(manager_id, ?missing, "debug manager picks fetched");
    }

    (manager_id, history, picks.into_iter().collect())
}
