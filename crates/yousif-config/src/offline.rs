use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_cache_version() -> String {
    "yousif-ai-v2".to_string()
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_assets() -> Vec<String> {
    ["/", "/index.html", "/manifest.json", "/logo-192.png", "/logo-512.png"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OfflineConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Cache name, bumping it invalidates every older cache on activation
    #[serde(default = "default_cache_version")]
    pub cache_version: String,
    /// Origin the static assets are served from
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_assets")]
    pub assets: Vec<String>,
}

impl OfflineConfig {
    pub(crate) fn apply_env(&mut self, lookup: &impl Fn(&str) -> Option<String>) {
        if let Some(version) = lookup("ASSET_CACHE_VERSION") {
            self.cache_version = version;
        }
        if let Some(url) = lookup("ASSET_BASE_URL") {
            self.base_url = url;
        }
    }
}

impl Default for OfflineConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            cache_version: default_cache_version(),
            base_url: default_base_url(),
            assets: default_assets(),
        }
    }
}
