use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use yousif_core::FileStore;
use yousif_gemini::{DefinitionFetcher, GeminiClient, RetryPolicy};
use yousif_offline::{CacheStorage, OfflineCache};

pub mod controller;
pub mod events;
pub mod io;
pub mod profile;
pub mod search;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

/// English/Urdu vocabulary guide in the terminal
#[derive(Parser, Debug)]
#[command(name = "yousif", version)]
struct Args {
    /// Profile to load from the config folder
    #[arg(long, default_value = "main")]
    profile: String,

    /// Start with connectivity reported as offline
    #[arg(long)]
    offline: bool,

    /// Where history, theme and the asset cache live
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // stdout belongs to the UI
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.json_logs);

    let config_root = profile::config_root();
    if let Err(e) = profile::init_user_config(&config_root) {
        tracing::warn!("Could not initialize user config: {}", e);
    }
    let mut config = profile::load_user_profile(&config_root, &args.profile)?;

    if args.offline {
        config.start_offline = true;
    }
    if let Some(dir) = args.data_dir {
        config.storage.data_dir = Some(dir);
    }
    if config.gemini.api_key.is_empty() {
        tracing::warn!("No GEMINI_API_KEY or API_KEY set, searches will fail");
    }

    let data_dir = config.storage.resolved_data_dir();
    tracing::info!("Using data dir {}", data_dir.display());

    let client = GeminiClient::from_config(&config.gemini)?;
    let fetcher = DefinitionFetcher::new(Arc::new(client), RetryPolicy::from_config(&config.gemini));

    let offline = config.offline.enabled.then(|| {
        Arc::new(OfflineCache::from_config(
            &config.offline,
            CacheStorage::new(data_dir.join("caches")),
        ))
    });

    let store = Arc::new(FileStore::new(data_dir.join("prefs")));
    let state = Arc::new(AppState::new(config, store));

    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(fetcher, offline).await;

    tokio::select! {
        result = signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::error!("failed to listen for ctrl+c: {e}");
            }
            tracing::info!("Shutdown requested");
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::info!("task exited"),
                Some(Ok(Err(e))) => tracing::error!("task failed: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => tracing::warn!("no tasks were running"),
            }
        }
    }

    controller.shutdown();

    // Let the UI drain its last events
    let drain = async { while tasks.join_next().await.is_some() {} };
    if tokio::time::timeout(Duration::from_millis(500), drain).await.is_err() {
        tasks.shutdown().await;
    }

    Ok(())
}
