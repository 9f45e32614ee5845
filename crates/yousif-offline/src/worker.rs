use std::sync::Arc;

use futures_util::future::join_all;
use yousif_config::offline::OfflineConfig;

use crate::OfflineError;
use crate::network::{AssetNetwork, HttpAssetNetwork};
use crate::storage::CacheStorage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetSource {
    Network,
    Cache,
}

#[derive(Debug, Clone)]
pub struct AssetResponse {
    pub path: String,
    pub body: Vec<u8>,
    pub source: AssetSource,
}

/// Outcome of pre-populating the cache, failures do not abort the install
#[derive(Debug, Default)]
pub struct InstallReport {
    pub cached: Vec<String>,
    pub failed: Vec<(String, String)>,
}

impl InstallReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Network-first asset cache with a versioned cache name
pub struct OfflineCache {
    storage: CacheStorage,
    network: Arc<dyn AssetNetwork>,
    cache_name: String,
    assets: Vec<String>,
}

impl OfflineCache {
    pub fn new(
        storage: CacheStorage,
        network: Arc<dyn AssetNetwork>,
        cache_name: impl Into<String>,
        assets: Vec<String>,
    ) -> Self {
        Self {
            storage,
            network,
            cache_name: cache_name.into(),
            assets,
        }
    }

    pub fn from_config(config: &OfflineConfig, storage: CacheStorage) -> Self {
        Self::new(
            storage,
            Arc::new(HttpAssetNetwork::new(config.base_url.clone())),
            config.cache_version.clone(),
            config.assets.clone(),
        )
    }

    /// Best-effort pre-population of the current cache
    pub async fn install(&self) -> Result<InstallReport, OfflineError> {
        let cache = self.storage.open(&self.cache_name).await?;
        let cache = &cache;

        let results = join_all(self.assets.iter().map(|path| async move {
            let body = self.network.fetch(path).await?;
            cache.put(path, &body).await?;
            Ok::<_, OfflineError>(body.len())
        }))
        .await;

        let mut report = InstallReport::default();
        for (path, result) in self.assets.iter().zip(results) {
            match result {
                Ok(bytes) => {
                    tracing::debug!("Cached {} ({} bytes)", path, bytes);
                    report.cached.push(path.clone());
                }
                Err(e) => {
                    tracing::warn!("Skipping asset {}: {}", path, e);
                    report.failed.push((path.clone(), e.to_string()));
                }
            }
        }

        tracing::info!(
            "Cache '{}' installed: {} cached, {} failed",
            self.cache_name,
            report.cached.len(),
            report.failed.len()
        );
        Ok(report)
    }

    /// Drops every cache left over from other versions
    pub async fn activate(&self) -> Result<Vec<String>, OfflineError> {
        let mut deleted = Vec::new();
        for name in self.storage.keys().await? {
            if name != self.cache_name && self.storage.delete(&name).await? {
                tracing::info!("Deleted stale cache '{}'", name);
                deleted.push(name);
            }
        }
        Ok(deleted)
    }

    /// Network first, cached copy when the network fails
    pub async fn fetch(&self, path: &str) -> Result<AssetResponse, OfflineError> {
        let path = if path.is_empty() { "/" } else { path };

        match self.network.fetch(path).await {
            Ok(body) => Ok(AssetResponse {
                path: path.to_string(),
                body,
                source: AssetSource::Network,
            }),
            Err(e) => {
                tracing::debug!("Network fetch of {} failed: {}", path, e);
                match self.storage.match_request(path).await? {
                    Some(body) => Ok(AssetResponse {
                        path: path.to_string(),
                        body,
                        source: AssetSource::Cache,
                    }),
                    None => Err(OfflineError::Unavailable(path.to_string())),
                }
            }
        }
    }
}
