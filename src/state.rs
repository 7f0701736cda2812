use std::sync::Arc;

use crate::config::Config;
use crate::store::memory::MemoryStore;
use crate::store::ContentStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn ContentStore>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let store = if config.data_file.exists() {
            let store = MemoryStore::load(&config.data_file)?;
            tracing::info!("Dataset loaded: {}", store.describe());
            store
        } else {
            tracing::warn!(
                "Dataset file {} not found, starting with an empty catalog",
                config.data_file.display()
            );
            MemoryStore::empty()
        };

        Ok(Self {
            config,
            store: Arc::new(store),
        })
    }
}
