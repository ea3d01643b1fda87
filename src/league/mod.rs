//! The league statistics pipeline: fetch, index, then derive team and player tables.

mod fetch;
mod manager;
mod ownership;

#[cfg(test)]
pub(crate) mod fake;

pub use fetch::{fetch_league_data, LeagueData, ManagerData};
pub use manager::compute_manager_statistics;
pub use ownership::compute_player_statistics;

use std::collections::HashMap;

use tracing::{debug, instrument, warn};

use crate::error::Result;
use crate::index::LeagueIndex;
use crate::model::{LeagueStats, StatsOptions};
use crate::provider::SportsDataProvider;

/// Fetch a league from `provider` and derive its statistics.
#[instrument(skip(provider, options))]
pub async fn league_stats<P: SportsDataProvider>(
    provider: &P,
    league_id: u32,
    options: &StatsOptions,
) -> Result<LeagueStats> {
    let data = fetch_league_data(provider, league_id, options).await?;
    Ok(compute_league_stats(&data, options))
}

/// Derive statistics from already-fetched documents. Pure: the same input gives the same output.
pub fn compute_league_stats(data: &LeagueData, options: &StatsOptions) -> LeagueStats {
    let index = LeagueIndex::build(&data.catalogue, &data.live);
    let latest_gameweek = data.latest_finished_gameweek();

    let managers_by_id: HashMap<u32, &ManagerData> =
        data.managers.iter().map(|m| (m.manager_id, m)).collect();

    let teams = data
        .standings
        .iter()
        .filter_map(|standing| {
            let stats = managers_by_id
                .get(&standing.manager_id)
                .and_then(|m| compute_manager_statistics(standing, m, &index, latest_gameweek));
            if stats.is_none() {
                debug!(manager_id = standing.manager_id, "no history for manager, row omitted");
            }
            stats
        })
        .collect();

    if latest_gameweek.is_none() {
        warn!(league_id = data.league_id, "no finished gameweeks yet");
    }

    let players = compute_player_statistics(
        &data.managers,
        &index,
        data.catalogue.total_players,
        data.standings.len(),
        options.ownership_scope,
        latest_gameweek,
    );

    LeagueStats {
        league_id: data.league_id,
        league_name: data.league_name.clone(),
        finished_gameweeks: data.finished_gameweeks.clone(),
        teams,
        players,
        failed_managers: data.failed_managers.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FplError;
    use crate::league::fake::{self, FakeProvider};
    use crate::model::Position;

    /// Two managers, one finished gameweek; Bob's picks are unavailable.
    fn two_manager_league() -> FakeProvider {
        let mut provider = FakeProvider::default();
        provider.catalogue = Some(fake::catalogue(
            vec![
                fake::player(3, "Salah", Position::Midfielder, 12),
                fake::player(4, "Haaland", Position::Forward, 13),
            ],
            &[1],
        ));
        provider.add_standings_page(
            false,
            vec![fake::standing(10, "Ann", 60), fake::standing(20, "Bob", 45)],
        );
        provider.live.insert(1, fake::live(&[(3, 10), (4, 2)]));
        provider.histories.insert(10, fake::history(&[(1, 60)], &[]));
        provider.histories.insert(20, fake::history(&[(1, 45)], &[]));
        provider.picks.insert(
            (10, 1),
            vec![
                fake::pick(3, 1, 2, true, false),
                fake::pick(4, 2, 1, false, true),
            ],
        );
        provider
    }

    #[tokio::test]
    async fn test_missing_picks_scenario() {
        let provider = two_manager_league();
        let stats = league_stats(&provider, 7, &StatsOptions::default())
            .await
            .unwrap();

        assert_eq!(stats.league_name, "League 7");
        assert_eq!(stats.teams.len(), 2);
        assert_eq!(stats.teams[0].manager_name, "Ann");
        assert_eq!(stats.teams[0].total_captain_points, 20);
        assert_eq!(stats.teams[1].manager_name, "Bob");
        assert_eq!(stats.teams[1].total_captain_points, 0);
        assert_eq!(stats.teams[1].captain, "");

        // Bob still counts towards the league size.
        let salah = stats.players.iter().find(|p| p.player_id == 3).unwrap();
        assert_eq!(salah.league_ownership_count, 1);
        assert_eq!(salah.league_ownership_percentage, 50.0);
    }

    #[tokio::test]
    async fn test_failed_history_omits_row_only() {
        let mut provider = two_manager_league();
        provider.histories.remove(&20);

        let stats = league_stats(&provider, 7, &StatsOptions::default())
            .await
            .unwrap();
        assert_eq!(stats.teams.len(), 1);
        assert_eq!(stats.failed_managers.len(), 1);
        assert_eq!(stats.failed_managers[0].manager_id, 20);
    }

    #[tokio::test]
    async fn test_failed_history_still_counts_ownership() {
        let mut provider = two_manager_league();
        provider.histories.remove(&20);
        provider.picks.insert(
            (20, 1),
            vec![
                fake::pick(3, 1, 2, true, false),
                fake::pick(4, 2, 1, false, false),
            ],
        );

        let stats = league_stats(&provider, 7, &StatsOptions::default())
            .await
            .unwrap();
        assert_eq!(stats.teams.len(), 1);
        assert_eq!(stats.teams[0].manager_name, "Ann");
        assert_eq!(stats.failed_managers[0].manager_id, 20);

        let salah = stats.players.iter().find(|p| p.player_id == 3).unwrap();
        assert_eq!(salah.league_ownership_count, 2);
        assert_eq!(salah.league_ownership_percentage, 100.0);
        assert_eq!(salah.league_captain_count, 2);
        let haaland = stats.players.iter().find(|p| p.player_id == 4).unwrap();
        assert_eq!(haaland.league_ownership_count, 2);
        assert_eq!(haaland.league_vice_captain_count, 1);
    }

    #[tokio::test]
    async fn test_shared_resource_failure_aborts() {
        let mut provider = two_manager_league();
        provider.live.clear();

        let err = league_stats(&provider, 7, &StatsOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, FplError::ProviderUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_computation_is_idempotent() {
        let provider = two_manager_league();
        let options = StatsOptions {
            debug_manager: Some(10),
            ..StatsOptions::default()
        };

        let first = league_stats(&provider, 7, &options).await.unwrap();
        let second = league_stats(&provider, 7, &options).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );

        let data = fetch_league_data(&provider, 7, &options).await.unwrap();
        assert_eq!(compute_league_stats(&data, &options), first);
    }

    #[tokio::test]
    async fn test_chip_total_invariant() {
        let mut provider = two_manager_league();
        provider
            .histories
            .insert(10, fake::history(&[(1, 60)], &[("3xc", 1), ("freehit", 1)]));

        let stats = league_stats(&provider, 7, &StatsOptions::default())
            .await
            .unwrap();
        for team in &stats.teams {
            let expected: i32 = [team.triple_captain, team.bench_boost, team.free_hit]
                .iter()
                .map(|c| c.map_or(0, |c| c.points))
                .sum();
            assert_eq!(team.total_chip_points, expected);
        }
        assert_eq!(stats.teams[0].total_chip_points, 10 + 60);
    }
}
