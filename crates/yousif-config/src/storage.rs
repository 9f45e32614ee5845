use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_history_limit() -> usize {
    10
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    /// Where history and theme are persisted, platform data dir when unset
    pub data_dir: Option<PathBuf>,
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

impl StorageConfig {
    pub(crate) fn apply_env(&mut self, lookup: &impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup("YOUSIF_DATA_DIR") {
            self.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(limit) = crate::parsed::<usize>(lookup, "HISTORY_LIMIT").filter(|l| *l > 0) {
            self.history_limit = limit;
        }
    }

    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            crate::project_dirs()
                .map(|dirs| dirs.data_local_dir().to_path_buf())
                .unwrap_or_else(|| PathBuf::from(".yousif"))
        })
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            history_limit: default_history_limit(),
        }
    }
}
