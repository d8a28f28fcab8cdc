use std::sync::Arc;

use tracing::error;

use crate::application::{GoalProjector, ImportHistory, KeywordImporter, SharedImportHistory};
use crate::domain::error::Result;
use crate::infrastructure::config::{AppConfig, ConfigService};
use crate::infrastructure::history_store::JsonFileHistoryStore;
use crate::infrastructure::storage::history_file_path;
use crate::infrastructure::webhook::{KeywordDelivery, WebhookClient};

/// Everything the collaborator layer needs, wired from one config.
/// Dropping the workspace releases the history store.
pub struct Workspace {
    pub config: AppConfig,
    pub importer: KeywordImporter,
    pub projector: GoalProjector,
    pub history: SharedImportHistory<JsonFileHistoryStore>,
}

/// Load configuration from file and environment, install logging, and
/// build the workspace
pub fn setup_from_env() -> Result<Workspace> {
    let config = ConfigService::load()?;
    crate::init_tracing(&config.log_filter);
    setup(config)
}

pub fn setup(config: AppConfig) -> Result<Workspace> {
    let history_path = history_file_path(&config.data_dir).map_err(|err| {
        error!(
            error = %err,
            data_dir = %config.data_dir.display(),
            "Failed to create data dir"
        );
        err
    })?;

    let delivery: Arc<dyn KeywordDelivery> = Arc::new(WebhookClient::new(&config.webhook)?);
    let store = JsonFileHistoryStore::open(history_path);
    let history = SharedImportHistory::new(ImportHistory::new(store, delivery));

    tracing::info!(data_dir = %config.data_dir.display(), "Workspace ready");

    Ok(Workspace {
        importer: KeywordImporter::new(config.import.clone()),
        projector: GoalProjector::default(),
        history,
        config,
    })
}
