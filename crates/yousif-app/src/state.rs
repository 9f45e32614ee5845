use std::sync::Arc;

use tokio::sync::RwLock;
use yousif_config::Config;
use yousif_core::{ConnectivityMonitor, KeyValueStore, PreferenceStore};

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub connectivity: ConnectivityMonitor,
    pub preferences: PreferenceStore,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn KeyValueStore>) -> Self {
        let connectivity = ConnectivityMonitor::new(!config.start_offline);
        let preferences = PreferenceStore::new(store, config.storage.history_limit);

        Self {
            config: Arc::new(RwLock::new(config)),
            connectivity,
            preferences,
        }
    }
}
