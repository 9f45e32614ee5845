pub mod connectivity;
pub mod error;
pub mod history;
pub mod preferences;
pub mod preprocess;
pub mod render;
pub mod store;

pub use connectivity::ConnectivityMonitor;
pub use error::StoreError;
pub use history::SearchHistory;
pub use preferences::PreferenceStore;
pub use store::{FileStore, KeyValueStore, MemoryStore};

#[cfg(test)]
mod tests;
