use std::time::Duration;

use tracing::{instrument, warn};

use crate::cache::ResponseCache;
use crate::error::Result;
use crate::fpl_api::{self, Api};
use crate::league;
use crate::model::*;
use crate::provider::SportsDataProvider;

const USER_AGENT: &str = concat!("fpl-league-stats/", env!("CARGO_PKG_VERSION"));

/// The main entry point for interacting with the Fantasy Premier League API.
///
/// `FplClient` wraps a [`reqwest::Client`] and exposes the raw resources the
/// statistics pipeline needs, plus [`FplClient::league_stats`] which runs the
/// whole pipeline for one league.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> fpl_league_stats::Result<()> {
/// use fpl_league_stats::{FplClient, StatsOptions};
///
/// let client = FplClient::new();
/// let stats = client.league_stats(314, &StatsOptions::default()).await?;
/// println!("{} managers in {}", stats.teams.len(), stats.league_name);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FplClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Option<Duration>,
    cache: Option<ResponseCache>,
}

impl FplClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self::with_client(http_client(USER_AGENT))
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure proxies, headers, etc.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            http: client,
            base_url: fpl_api::BASE_URL.to_string(),
            timeout: None,
            cache: None,
        }
    }

    /// Point the client at another host serving the same API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Abort any single request that takes longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Reuse response bodies for `ttl` instead of refetching them.
    ///
    /// Off by default. Useful when several league views are computed in a
    /// short burst; standings and live scores may be up to `ttl` stale.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache = Some(ResponseCache::new(ttl));
        self
    }

    fn api(&self) -> Api<'_> {
        Api {
            http: &self.http,
            base_url: &self.base_url,
            timeout: self.timeout,
            cache: self.cache.as_ref(),
        }
    }

    /// Fetch one page of a classic league's standings.
    #[instrument(skip(self))]
    pub async fn get_league_standings(
        &self,
        league_id: u32,
        page: u32,
    ) -> Result<LeagueStandingsPage> {
        fpl_api::standings::get_standings_page(&self.api(), league_id, page).await
    }

    /// Fetch the global player, club and gameweek catalogue.
    #[instrument(skip(self))]
    pub async fn get_catalogue(&self) -> Result<Catalogue> {
        fpl_api::catalogue::get_catalogue(&self.api()).await
    }

    /// Fetch every player's points for a gameweek.
    #[instrument(skip(self))]
    pub async fn get_live_gameweek(&self, gameweek: u32) -> Result<LiveGameweek> {
        fpl_api::live::get_live_gameweek(&self.api(), gameweek).await
    }

    /// Fetch a manager's season history and chip plays.
    #[instrument(skip(self))]
    pub async fn get_manager_history(&self, manager_id: u32) -> Result<ManagerSeasonHistory> {
        fpl_api::entry::get_history(&self.api(), manager_id).await
    }

    /// Fetch a manager's squad for a gameweek.
    #[instrument(skip(self))]
    pub async fn get_manager_picks(&self, manager_id: u32, gameweek: u32) -> Result<EntryPicks> {
        fpl_api::entry::get_picks(&self.api(), manager_id, gameweek).await
    }

    /// Fetch everything for a league and derive team and player statistics.
    #[instrument(skip(self, options))]
    pub async fn league_stats(
        &self,
        league_id: u32,
        options: &StatsOptions,
    ) -> Result<LeagueStats> {
        league::league_stats(self, league_id, options).await
    }
}

fn http_client(user_agent: &str) -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(user_agent)
        .build()
        .unwrap_or_else(|e| {
            warn!(error = %e, "failed to build HTTP client, using reqwest defaults");
            reqwest::Client::new()
        })
}

impl Default for FplClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SportsDataProvider for FplClient {
    async fn league_standings(&self, league_id: u32, page: u32) -> Result<LeagueStandingsPage> {
        self.get_league_standings(league_id, page).await
    }

    async fn catalogue(&self) -> Result<Catalogue> {
        self.get_catalogue().await
    }

    async fn live_gameweek(&self, gameweek: u32) -> Result<LiveGameweek> {
        self.get_live_gameweek(gameweek).await
    }

    async fn manager_history(&self, manager_id: u32) -> Result<ManagerSeasonHistory> {
        self.get_manager_history(manager_id).await
    }

    async fn manager_picks(&self, manager_id: u32, gameweek: u32) -> Result<EntryPicks> {
        self.get_manager_picks(manager_id, gameweek).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "hits the live FPL API"]
    async fn test_get_catalogue() {
        let client = FplClient::new();
        let catalogue = client.get_catalogue().await.unwrap();
        assert!(!catalogue.players.is_empty());
        assert!(catalogue.total_players > 0);
    }

    #[tokio::test]
    async fn test_invalid_user_agent_falls_back_to_default_client() {
        let client = FplClient::with_client(http_client("fpl\nstats"))
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(Duration::from_secs(2));
        let err = client.get_catalogue().await.unwrap_err();
        assert!(matches!(err, crate::FplError::Http { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_http_error() {
        let client = FplClient::new()
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(Duration::from_secs(2));
        let err = client.get_live_gameweek(1).await.unwrap_err();
        assert!(matches!(err, crate::FplError::Http { .. }));
    }
}
