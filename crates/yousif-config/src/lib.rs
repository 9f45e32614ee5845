use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use self::gemini::GeminiConfig;
use self::offline::OfflineConfig;
use self::storage::StorageConfig;
use self::ui::UiConfig;

pub mod gemini;
pub mod offline;
pub mod storage;
pub mod ui;

#[cfg(test)]
mod tests;

#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub gemini: GeminiConfig,
    pub storage: StorageConfig,
    pub offline: OfflineConfig,
    pub ui: UiConfig,

    /// Start with connectivity reported as offline
    pub start_offline: bool,
}

impl Config {
    /// Environment variables that are set win over values from a profile file
    pub fn apply_env(self) -> Self {
        self.apply_env_from(&|name: &str| env::var(name).ok())
    }

    /// Same as [`Config::apply_env`], reading variables through `lookup`
    pub fn apply_env_from(mut self, lookup: &impl Fn(&str) -> Option<String>) -> Self {
        self.gemini.apply_env(lookup);
        self.storage.apply_env(lookup);
        self.offline.apply_env(lookup);
        self.ui.apply_env(lookup);

        if let Some(offline) = parsed(lookup, "YOUSIF_START_OFFLINE") {
            self.start_offline = offline;
        }
        self
    }
}

/// Parsed value of `name`, unset or unparsable values are `None`
pub(crate) fn parsed<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Option<T> {
    lookup(name).and_then(|v| v.trim().parse().ok())
}

/// `GEMINI_API_KEY`, falling back to the plain `API_KEY`
pub(crate) fn api_key_from(lookup: &impl Fn(&str) -> Option<String>) -> Option<String> {
    let usable = |name: &str| lookup(name).filter(|k| !k.trim().is_empty());
    usable("GEMINI_API_KEY").or_else(|| usable("API_KEY"))
}

/// Per-user directories for profiles and persisted state
pub fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", "yousif")
}
