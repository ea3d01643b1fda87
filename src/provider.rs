use crate::error::Result;
use crate::model::{
    Catalogue, EntryPicks, LeagueStandingsPage, LiveGameweek, ManagerSeasonHistory,
};

/// Source of the raw documents the league pipeline consumes.
///
/// [`FplClient`](crate::FplClient) implements this against the public FPL API.
/// Every call is a read-only fetch; implementations must not cache data that
/// changes during a live gameweek unless told to.
#[allow(async_fn_in_trait)]
pub trait SportsDataProvider {
    /// One page (1-based) of a classic league's standings.
    async fn league_standings(&self, league_id: u32, page: u32) -> Result<LeagueStandingsPage>;

    /// Global players, clubs and gameweeks.
    async fn catalogue(&self) -> Result<Catalogue>;

    /// Points scored by every player in a gameweek.
    async fn live_gameweek(&self, gameweek: u32) -> Result<LiveGameweek>;

    async fn manager_history(&self, manager_id: u32) -> Result<ManagerSeasonHistory>;

    /// A manager's squad for a gameweek. May legitimately fail for some gameweeks.
    async fn manager_picks(&self, manager_id: u32, gameweek: u32) -> Result<EntryPicks>;
}
