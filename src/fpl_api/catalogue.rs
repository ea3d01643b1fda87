use tracing::{debug, instrument};

use crate::error::Result;
use crate::fpl_api::Api;
use crate::model::Catalogue;

#[instrument(skip(api))]
pub(crate) async fn get_catalogue(api: &Api<'_>) -> Result<Catalogue> {
    let catalogue: Catalogue = api.get_json("bootstrap-static/").await?;
    debug!(
        players = catalogue.players.len(),
        clubs = catalogue.clubs.len(),
        finished = ?catalogue.finished_gameweeks(),
        "parsed catalogue"
    );
    Ok(catalogue)
}
