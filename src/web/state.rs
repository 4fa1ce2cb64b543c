use std::sync::Arc;

use crate::state::StateStore;

use super::config::Config;

/// Shared handler state: the config and the snapshot store, both injected
/// by the caller that owns them. The store is the read side only here; the
/// UDP ingest task holds the writing handle.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: StateStore,
}

impl AppState {
    pub fn new(config: Config, store: StateStore) -> Self {
        AppState {
            config: Arc::new(config),
            store,
        }
    }
}
