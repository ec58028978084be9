use crate::errors::BrowseEaseError;
use crate::repl::ReplSession;
use crate::sequencer::Pacing;

use super::setup;

pub async fn handle_start(config_path: Option<&str>) -> Result<(), BrowseEaseError> {
    let runtime = setup::load(config_path).await?;
    let pacing = Pacing::from(&runtime.config.sequencer());
    ReplSession::new(runtime.catalog, pacing).run().await
}
