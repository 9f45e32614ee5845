pub mod network;
pub mod storage;
pub mod worker;

pub use network::{AssetNetwork, HttpAssetNetwork};
pub use storage::{Cache, CacheStorage};
pub use worker::{AssetResponse, AssetSource, InstallReport, OfflineCache};

#[derive(Debug, thiserror::Error)]
pub enum OfflineError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("HTTP {status} for {path}")]
    HttpStatus { status: u16, path: String },

    #[error("'{0}' is neither reachable nor cached")]
    Unavailable(String),
}

#[cfg(test)]
mod tests;
