use std::sync::{Arc, RwLock};

use axum::extract::FromRef;

use crate::config::Config;
use crate::store::QuestionStore;

/// Shared handle to the in-memory dataset. The write guard makes an append
/// atomic with respect to concurrent readers: a reader sees the store before
/// or after a new row, never a partial one.
pub type SharedStore = Arc<RwLock<QuestionStore>>;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub config: Config,
}

impl AppState {
    pub fn new(store: QuestionStore, config: Config) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            config,
        }
    }
}

impl FromRef<AppState> for SharedStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
