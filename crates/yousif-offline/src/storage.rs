use std::io::ErrorKind;
use std::path::PathBuf;

use sha2::{Digest, Sha256};
use tokio::fs;

use crate::OfflineError;

/// Longest hex entry name kept as is, well under the usual 255 byte limit
const MAX_PLAIN_NAME: usize = 200;

/// Named caches on disk, one directory per cache name
#[derive(Clone)]
pub struct CacheStorage {
    root: PathBuf,
}

impl CacheStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub async fn open(&self, name: &str) -> Result<Cache, OfflineError> {
        let dir = self.root.join(encode(name));
        fs::create_dir_all(&dir).await?;
        Ok(Cache { dir })
    }

    /// Names of every existing cache
    pub async fn keys(&self) -> Result<Vec<String>, OfflineError> {
        let mut entries = match fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str().and_then(decode) {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    pub async fn delete(&self, name: &str) -> Result<bool, OfflineError> {
        match fs::remove_dir_all(self.root.join(encode(name))).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// First cached copy of `path` in any cache
    pub async fn match_request(&self, path: &str) -> Result<Option<Vec<u8>>, OfflineError> {
        for name in self.keys().await? {
            let cache = self.open(&name).await?;
            if let Some(body) = cache.get(path).await? {
                return Ok(Some(body));
            }
        }
        Ok(None)
    }
}

/// One named cache, entries keyed by request path
pub struct Cache {
    dir: PathBuf,
}

impl Cache {
    pub async fn put(&self, path: &str, body: &[u8]) -> Result<(), OfflineError> {
        fs::write(self.dir.join(entry_name(path)), body).await?;
        Ok(())
    }

    pub async fn get(&self, path: &str) -> Result<Option<Vec<u8>>, OfflineError> {
        match fs::read(self.dir.join(entry_name(path))).await {
            Ok(body) => Ok(Some(body)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Hex file name, keeps `/` and friends out of the file system
fn encode(raw: &str) -> String {
    raw.bytes().map(|b| format!("{b:02x}")).collect()
}

/// File name of a cached path, long paths are stored under their digest
fn entry_name(path: &str) -> String {
    let plain = encode(path);
    if plain.len() <= MAX_PLAIN_NAME {
        return plain;
    }
    let digest: String = Sha256::digest(path.as_bytes())
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect();
    format!("sha256-{digest}")
}

fn decode(encoded: &str) -> Option<String> {
    if !encoded.is_ascii() || encoded.len() % 2 != 0 {
        return None;
    }
    let bytes = (0..encoded.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&encoded[i..i + 2], 16).ok())
        .collect::<Option<Vec<u8>>>()?;
    String::from_utf8(bytes).ok()
}
