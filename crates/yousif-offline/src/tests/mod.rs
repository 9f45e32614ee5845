use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use crate::{AssetNetwork, AssetSource, CacheStorage, OfflineCache, OfflineError};

/// In-memory origin that can be switched off
struct FakeNetwork {
    assets: HashMap<String, Vec<u8>>,
    online: AtomicBool,
}

impl FakeNetwork {
    fn new(assets: &[(&str, &str)]) -> Self {
        Self {
            assets: assets
                .iter()
                .map(|(p, b)| (p.to_string(), b.as_bytes().to_vec()))
                .collect(),
            online: AtomicBool::new(true),
        }
    }

    fn go_offline(&self) {
        self.online.store(false, Ordering::SeqCst);
    }
}

#[async_trait]
impl AssetNetwork for FakeNetwork {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, OfflineError> {
        if !self.online.load(Ordering::SeqCst) {
            return Err(OfflineError::Unavailable(path.to_string()));
        }
        self.assets
            .get(path)
            .cloned()
            .ok_or_else(|| OfflineError::HttpStatus {
                status: 404,
                path: path.to_string(),
            })
    }
}

fn manifest() -> Vec<String> {
    ["/", "/index.html", "/manifest.json", "/logo-192.png", "/logo-512.png"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn origin_without_large_icon() -> Arc<FakeNetwork> {
    Arc::new(FakeNetwork::new(&[
        ("/", "<html>root</html>"),
        ("/index.html", "<html>index</html>"),
        ("/manifest.json", "{}"),
        ("/logo-192.png", "png"),
    ]))
}

#[tokio::test]
async fn test_install_tolerates_missing_asset() {
    let dir = tempfile::tempdir().unwrap();
    let cache = OfflineCache::new(
        CacheStorage::new(dir.path()),
        origin_without_large_icon(),
        "yousif-ai-v2",
        manifest(),
    );

    let report = cache.install().await.unwrap();

    assert_eq!(report.cached.len(), 4);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, "/logo-512.png");
    assert!(!report.is_complete());
}

#[tokio::test]
async fn test_activate_deletes_other_versions() {
    let dir = tempfile::tempdir().unwrap();
    let storage = CacheStorage::new(dir.path());
    storage.open("yousif-ai-v1").await.unwrap();
    storage.open("yousif-ai-v2").await.unwrap();

    let cache = OfflineCache::new(
        storage.clone(),
        origin_without_large_icon(),
        "yousif-ai-v2",
        manifest(),
    );
    let deleted = cache.activate().await.unwrap();

    assert_eq!(deleted, vec!["yousif-ai-v1".to_string()]);
    assert_eq!(storage.keys().await.unwrap(), vec!["yousif-ai-v2".to_string()]);
}

#[tokio::test]
async fn test_fetch_prefers_network_then_cache() {
    let dir = tempfile::tempdir().unwrap();
    let network = origin_without_large_icon();
    let cache = OfflineCache::new(
        CacheStorage::new(dir.path()),
        network.clone(),
        "yousif-ai-v2",
        manifest(),
    );
    cache.install().await.unwrap();

    let online = cache.fetch("/index.html").await.unwrap();
    assert_eq!(online.source, AssetSource::Network);

    network.go_offline();

    let offline = cache.fetch("/index.html").await.unwrap();
    assert_eq!(offline.source, AssetSource::Cache);
    assert_eq!(offline.body, b"<html>index</html>".to_vec());

    let missing = cache.fetch("/logo-512.png").await;
    assert!(matches!(missing, Err(OfflineError::Unavailable(_))));
}

#[tokio::test]
async fn test_keys_on_missing_root_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let storage = CacheStorage::new(dir.path().join("never-created"));

    assert!(storage.keys().await.unwrap().is_empty());
    assert!(!storage.delete("nothing").await.unwrap());
}

#[tokio::test]
async fn test_long_paths_are_cached_and_missing_ones_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let long_path = format!("/{}", "a".repeat(200));
    let network = Arc::new(FakeNetwork::new(&[(long_path.as_str(), "deep asset")]));
    let cache = OfflineCache::new(
        CacheStorage::new(dir.path()),
        network.clone(),
        "yousif-ai-v2",
        vec![long_path.clone()],
    );

    let report = cache.install().await.unwrap();
    assert!(report.is_complete());

    network.go_offline();

    let cached = cache.fetch(&long_path).await.unwrap();
    assert_eq!(cached.source, AssetSource::Cache);
    assert_eq!(cached.body, b"deep asset".to_vec());

    let missing = cache.fetch(&format!("/{}", "b".repeat(200))).await;
    assert!(matches!(missing, Err(OfflineError::Unavailable(_))));
}
