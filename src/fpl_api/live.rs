use tracing::{debug, instrument};

use crate::error::Result;
use crate::fpl_api::Api;
use crate::model::LiveGameweek;

#[instrument(skip(api))]
pub(crate) async fn get_live_gameweek(api: &Api<'_>, gameweek: u32) -> Result<LiveGameweek> {
    let live: LiveGameweek = api.get_json(&format!("event/{gameweek}/live/")).await?;
    debug!(count = live.elements.len(), gameweek, "parsed live scores");
    Ok(live)
}
