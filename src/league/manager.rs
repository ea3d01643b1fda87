use std::collections::BTreeMap;

use itertools::{Itertools, MinMaxResult};
use tracing::{debug, warn};

use crate::index::LeagueIndex;
use crate::league::ManagerData;
use crate::model::{
    ChipKind, ChipUsageRecord, LeagueStanding, ManagerGameweekPick, ManagerSeasonHistory,
    ManagerStatistics, Position,
};

/// Derive a manager's season statistics from their history, squads and the shared index.
///
/// `latest_gameweek` is the most recent finished gameweek; its squad supplies
/// the current captain and vice-captain. Returns `None` when the manager's
/// history could not be fetched.
pub fn compute_manager_statistics(
    standing: &LeagueStanding,
    manager: &ManagerData,
    index: &LeagueIndex<'_>,
    latest_gameweek: Option<u32>,
) -> Option<ManagerStatistics> {
    let history = manager.history.as_ref()?;
    let gameweeks = &history.gameweeks;
    let latest = gameweeks.last();

    let (best_overall_rank, worst_overall_rank) =
        extremes(gameweeks.iter().filter_map(|g| g.overall_rank));
    let (highest_gameweek_rank, lowest_gameweek_rank) =
        extremes(gameweeks.iter().filter_map(|g| g.rank));

    let captaincy = Captaincy::collect(manager);
    let total_captain_points = captaincy.points(index);
    let captain_points_percentage = if standing.total_points <= 0 {
        0.0
    } else {
        f64::from(total_captain_points) / f64::from(standing.total_points) * 100.0
    };

    let triple_captain = triple_captain_value(history, manager, index);
    let bench_boost = bench_boost_value(history, manager, index);
    let free_hit = free_hit_value(history);
    let total_chip_points = [triple_captain, bench_boost, free_hit]
        .iter()
        .flatten()
        .map(|c| c.points)
        .sum();

    let positional = PositionalPoints::collect(manager, index);

    let latest_picks = latest_gameweek
        .map(|gw| manager.picks_for(gw))
        .unwrap_or_default();
    let captain = pick_name(latest_picks.iter().find(|p| p.is_captain), index);
    let vice_captain = pick_name(latest_picks.iter().find(|p| p.is_vice_captain), index);

    Some(ManagerStatistics {
        manager_id: standing.manager_id,
        rank: standing.rank,
        manager_name: standing.manager_name.clone(),
        team_name: standing.team_name.clone(),
        total_points: standing.total_points,
        event_total: standing.event_total,

        total_transfers: gameweeks.iter().map(|g| g.event_transfers).sum(),
        transfers_this_week: latest.map_or(0, |g| g.event_transfers),
        total_transfer_point_deduction: gameweeks.iter().map(|g| g.event_transfers_cost).sum(),
        team_value: latest.map_or(0.0, |g| f64::from(g.value) / 10.0),
        bank: latest.map_or(0.0, |g| f64::from(g.bank) / 10.0),
        overall_rank: latest.and_then(|g| g.overall_rank),
        chips_used: history.chips.iter().map(|c| c.name.clone()).collect(),
        wildcards_used: history
            .chips
            .iter()
            .filter(|c| c.kind() == Some(ChipKind::Wildcard))
            .count() as u32,
        points_on_bench: gameweeks.iter().map(|g| g.points_on_bench).sum(),
        highest_gameweek_score: gameweeks.iter().map(|g| g.points).fold(0, i32::max),
        best_overall_rank,
        worst_overall_rank,
        highest_gameweek_rank,
        lowest_gameweek_rank,

        total_captain_points,
        captain_points_percentage,
        captain,
        vice_captain,
        most_captained_player: captaincy.most_captained(index),
        captain_diversity: captaincy.counts.len() as u32,

        triple_captain,
        bench_boost,
        free_hit,
        total_chip_points,

        total_gk_points: positional.goalkeeper,
        total_def_points: positional.defender,
        total_mid_points: positional.midfielder,
        total_fwd_points: positional.forward,
    })
}

/// Smallest and largest value, or `None` for an empty iterator.
fn extremes(values: impl Iterator<Item = u64>) -> (Option<u64>, Option<u64>) {
    match values.minmax() {
        MinMaxResult::NoElements => (None, None),
        MinMaxResult::OneElement(v) => (Some(v), Some(v)),
        MinMaxResult::MinMax(min, max) => (Some(min), Some(max)),
    }
}

fn pick_name(pick: Option<&ManagerGameweekPick>, index: &LeagueIndex<'_>) -> String {
    pick.and_then(|p| index.player(p.player_id))
        .map(|p| p.name.clone())
        .unwrap_or_default()
}

/// The captain pick of every gameweek that recorded one.
struct Captaincy<'m> {
    picks: Vec<(u32, &'m ManagerGameweekPick)>,
    counts: BTreeMap<u32, u32>,
}

impl<'m> Captaincy<'m> {
    fn collect(manager: &'m ManagerData) -> Self {
        let mut picks = Vec::new();
        let mut counts = BTreeMap::new();

        for (&gameweek, squad) in &manager.picks {
            if squad.is_empty() {
                debug!(manager_id = manager.manager_id, gameweek, "no squad, captain scores 0");
                continue;
            }
            match squad.iter().find(|p| p.is_captain) {
                Some(captain) => {
                    *counts.entry(captain.player_id).or_default() += 1;
                    picks.push((gameweek, captain));
                }
                None => warn!(
                    manager_id = manager.manager_id,
                    gameweek, "no captain recorded"
                ),
            }
        }

        Self { picks, counts }
    }

    fn points(&self, index: &LeagueIndex<'_>) -> i32 {
        self.picks
            .iter()
            .map(|&(gameweek, captain)| {
                index.live_points(gameweek, captain.player_id).unwrap_or(0)
                    * i32::from(captain.multiplier)
            })
            .sum()
    }

    /// `"Name (times)"` for the most frequent captain; ties go to the lower player id.
    fn most_captained(&self, index: &LeagueIndex<'_>) -> String {
        self.counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(a.0)))
            .map(|(&player_id, times)| {
                let name = index
                    .player(player_id)
                    .map_or("Unknown", |p| p.name.as_str());
                format!("{name} ({times})")
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Default)]
struct PositionalPoints {
    goalkeeper: i32,
    defender: i32,
    midfielder: i32,
    forward: i32,
}

impl PositionalPoints {
    fn collect(manager: &ManagerData, index: &LeagueIndex<'_>) -> Self {
        let mut totals = Self::default();

        for (&gameweek, squad) in &manager.picks {
            for pick in squad {
                let Some(player) = index.player(pick.player_id) else {
                    warn!(
                        manager_id = manager.manager_id,
                        gameweek,
                        player_id = pick.player_id,
                        "pick references unknown player"
                    );
                    continue;
                };
                let points = index.live_points(gameweek, pick.player_id).unwrap_or(0)
                    * i32::from(pick.multiplier);
                match player.position {
                    Position::Goalkeeper => totals.goalkeeper += points,
                    Position::Defender => totals.defender += points,
                    Position::Midfielder => totals.midfielder += points,
                    Position::Forward => totals.forward += points,
                    Position::Unknown => warn!(
                        player_id = player.id,
                        "player has no outfield position, points not bucketed"
                    ),
                }
            }
        }

        totals
    }
}

/// The captain's raw score in the triple-captain gameweek: the extra multiplier's worth.
fn triple_captain_value(
    history: &ManagerSeasonHistory,
    manager: &ManagerData,
    index: &LeagueIndex<'_>,
) -> Option<ChipUsageRecord> {
    let gameweek = history.chip(ChipKind::TripleCaptain)?.event;
    let Some(captain) = manager.picks_for(gameweek).iter().find(|p| p.is_captain) else {
        warn!(
            manager_id = manager.manager_id,
            gameweek, "no captain found for triple captain gameweek"
        );
        return None;
    };
    let points = index.live_points(gameweek, captain.player_id)?;
    Some(ChipUsageRecord { points, gameweek })
}

/// Live points of squad slots 12-15 in the bench-boost gameweek.
fn bench_boost_value(
    history: &ManagerSeasonHistory,
    manager: &ManagerData,
    index: &LeagueIndex<'_>,
) -> Option<ChipUsageRecord> {
    let gameweek = history.chip(ChipKind::BenchBoost)?.event;
    let squad = manager.picks_for(gameweek);
    if squad.is_empty() || !index.has_live(gameweek) {
        warn!(
            manager_id = manager.manager_id,
            gameweek, "bench boost gameweek has no squad or live data"
        );
        return None;
    }
    let points = squad
        .iter()
        .filter(|p| p.is_bench())
        .map(|p| index.live_points(gameweek, p.player_id).unwrap_or(0))
        .sum();
    Some(ChipUsageRecord { points, gameweek })
}

/// The whole free-hit gameweek score, taken from history.
fn free_hit_value(history: &ManagerSeasonHistory) -> Option<ChipUsageRecord> {
    let gameweek = history.chip(ChipKind::FreeHit)?.event;
    history.gameweek(gameweek).map(|g| ChipUsageRecord {
        points: g.points,
        gameweek,
    })
}
