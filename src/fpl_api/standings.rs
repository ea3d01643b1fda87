use tracing::{debug, instrument};

use crate::error::Result;
use crate::fpl_api::Api;
use crate::model::LeagueStandingsPage;

#[instrument(skip(api))]
pub(crate) async fn get_standings_page(
    api: &Api<'_>,
    league_id: u32,
    page: u32,
) -> Result<LeagueStandingsPage> {
    let path = format!("leagues-classic/{league_id}/standings/?page_standings={page}");
    let standings: LeagueStandingsPage = api.get_json(&path).await?;
    debug!(
        count = standings.standings.results.len(),
        has_next = standings.standings.has_next,
        league = %standings.league.name,
        "parsed standings page"
    );
    Ok(standings)
}
