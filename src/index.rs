use std::collections::{BTreeMap, HashMap};

use crate::model::{Catalogue, LiveGameweek, PlayerCatalogueEntry};

/// Constant-time lookups over the catalogue and live scores of one league computation.
#[derive(Debug)]
pub struct LeagueIndex<'a> {
    players: HashMap<u32, &'a PlayerCatalogueEntry>,
    clubs: HashMap<u32, &'a str>,
    live: HashMap<u32, HashMap<u32, i32>>,
}

impl<'a> LeagueIndex<'a> {
    pub fn build(catalogue: &'a Catalogue, live: &BTreeMap<u32, LiveGameweek>) -> Self {
        let players = catalogue.players.iter().map(|p| (p.id, p)).collect();
        let clubs = catalogue
            .clubs
            .iter()
            .map(|c| (c.id, c.name.as_str()))
            .collect();
        let live = live
            .iter()
            .map(|(&gameweek, scores)| {
                let points = scores
                    .elements
                    .iter()
                    .map(|e| (e.player_id, e.points()))
                    .collect();
                (gameweek, points)
            })
            .collect();

        Self {
            players,
            clubs,
            live,
        }
    }

    pub fn player(&self, player_id: u32) -> Option<&'a PlayerCatalogueEntry> {
        self.players.get(&player_id).copied()
    }

    pub fn club_name(&self, club_id: u32) -> Option<&'a str> {
        self.clubs.get(&club_id).copied()
    }

    /// Points `player_id` scored in `gameweek`, if the player appears in that gameweek's live data.
    pub fn live_points(&self, gameweek: u32, player_id: u32) -> Option<i32> {
        self.live.get(&gameweek)?.get(&player_id).copied()
    }

    pub fn has_live(&self, gameweek: u32) -> bool {
        self.live.contains_key(&gameweek)
    }
}
