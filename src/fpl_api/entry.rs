use tracing::{debug, instrument};

use crate::error::Result;
use crate::fpl_api::Api;
use crate::model::{EntryPicks, ManagerSeasonHistory};

#[instrument(skip(api))]
pub(crate) async fn get_history(api: &Api<'_>, manager_id: u32) -> Result<ManagerSeasonHistory> {
    let history: ManagerSeasonHistory = api
        .get_json(&format!("entry/{manager_id}/history/"))
        .await?;
    debug!(
        gameweeks = history.gameweeks.len(),
        chips = history.chips.len(),
        manager_id,
        "parsed manager history"
    );
    Ok(history)
}

#[instrument(skip(api))]
pub(crate) async fn get_picks(api: &Api<'_>, manager_id: u32, gameweek: u32) -> Result<EntryPicks> {
    let picks: EntryPicks = api
        .get_json(&format!("entry/{manager_id}/event/{gameweek}/picks/"))
        .await?;
    debug!(
        count = picks.picks.len(),
        manager_id, gameweek, "parsed manager picks"
    );
    Ok(picks)
}
