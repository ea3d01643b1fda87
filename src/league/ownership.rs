use std::collections::{BTreeMap, BTreeSet};

use itertools::Itertools;
use tracing::warn;

use crate::index::LeagueIndex;
use crate::league::ManagerData;
use crate::model::{LeaguePlayerStatistics, ManagerGameweekPick, OwnershipScope};

#[derive(Debug, Default)]
struct Tally {
    owners: BTreeSet<u32>,
    captain: u32,
    vice_captain: u32,
}

/// Ownership and captaincy figures for every player picked in the league.
///
/// `total_players` is the number of managers in the whole game and
/// `total_managers` the number of managers in the league, including any whose
/// data could not be fetched. Rows are sorted by name, ignoring case.
pub fn compute_player_statistics(
    managers: &[ManagerData],
    index: &LeagueIndex<'_>,
    total_players: u64,
    total_managers: usize,
    scope: OwnershipScope,
    latest_gameweek: Option<u32>,
) -> Vec<LeaguePlayerStatistics> {
    let mut tallies: BTreeMap<u32, Tally> = BTreeMap::new();

    for manager in managers {
        for pick in squads_in_scope(manager, scope, latest_gameweek) {
            let tally = tallies.entry(pick.player_id).or_default();
            tally.owners.insert(manager.manager_id);
            tally.captain += u32::from(pick.is_captain);
            tally.vice_captain += u32::from(pick.is_vice_captain);
        }
    }

    tallies
        .into_iter()
        .filter_map(|(player_id, tally)| {
            let Some(player) = index.player(player_id) else {
                warn!(player_id, "picked player missing from catalogue");
                return None;
            };

            let global_ownership_percentage = player.ownership_percent();
            let league_ownership_count = tally.owners.len() as u32;

            Some(LeaguePlayerStatistics {
                player_id,
                name: player.name.clone(),
                position: player.position,
                club: index
                    .club_name(player.club_id)
                    .unwrap_or("Unknown")
                    .to_string(),
                value: player.value(),
                status: player.status.clone(),
                global_ownership_percentage,
                global_ownership_count: global_count(global_ownership_percentage, total_players),
                league_ownership_count,
                league_ownership_percentage: percentage(league_ownership_count, total_managers),
                league_captain_count: tally.captain,
                league_vice_captain_count: tally.vice_captain,
            })
        })
        .sorted_by_cached_key(|p| (p.name.to_lowercase(), p.player_id))
        .collect()
}

fn squads_in_scope(
    manager: &ManagerData,
    scope: OwnershipScope,
    latest_gameweek: Option<u32>,
) -> impl Iterator<Item = &ManagerGameweekPick> {
    let squads: Vec<&[ManagerGameweekPick]> = match scope {
        OwnershipScope::LatestGameweek => latest_gameweek
            .map(|gw| manager.picks_for(gw))
            .into_iter()
            .collect(),
        OwnershipScope::AllGameweeks => manager.picks.values().map(Vec::as_slice).collect(),
    };
    squads.into_iter().flatten()
}

fn global_count(percentage: f64, total_players: u64) -> u64 {
    (percentage / 100.0 * total_players as f64).round() as u64
}

fn percentage(count: u32, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        f64::from(count) / total as f64 * 100.0
    }
}
