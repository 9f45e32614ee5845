use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use yousif_gemini::DefinitionFetcher;
use yousif_offline::OfflineCache;
use yousif_types::{AppEvent, UiEvent};

use crate::events::{Completion, Session, event_loop};
use crate::io::{connectivity_watch, spawn_input_reader};
use crate::state::AppState;
use crate::ui::ui_loop;

/// Channels between stdin, the app loop, the UI and fetch tasks
pub struct ChannelSet {
    pub input_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub app_to_ui: (AsyncSender<UiEvent>, AsyncReceiver<UiEvent>),
    pub fetch_to_app: (AsyncSender<Completion>, AsyncReceiver<Completion>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            input_to_app: kanal::bounded_async(64), // typed commands
            app_to_ui: kanal::bounded_async(256),   // screen updates
            fetch_to_app: kanal::bounded_async(16), // finished searches
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the channels and the shutdown token of a running app
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub async fn spawn_tasks(
        &self,
        fetcher: DefinitionFetcher,
        offline: Option<Arc<OfflineCache>>,
    ) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        let session = Session::new(
            self.state.clone(),
            fetcher,
            offline.clone(),
            self.channels.app_to_ui.0.clone(),
            self.channels.fetch_to_app.0.clone(),
        )
        .await;

        // Event loop
        tasks.spawn(event_loop(
            session,
            self.channels.input_to_app.1.clone(),
            self.channels.fetch_to_app.1.clone(),
            self.cancel_token.child_token(),
        ));

        // UI loop
        tasks.spawn(ui_loop(
            self.channels.app_to_ui.1.clone(),
            self.state.config.clone(),
        ));

        // Connectivity signals
        tasks.spawn(connectivity_watch(
            self.state.connectivity.clone(),
            self.channels.app_to_ui.0.clone(),
            self.cancel_token.child_token(),
        ));

        // Offline asset cache warm-up, detached: finishing it must not end the app
        if let Some(offline) = offline {
            tokio::spawn(async move {
                if let Err(e) = warm_offline_cache(&offline).await {
                    tracing::error!("Offline cache setup failed: {}", e);
                }
            });
        }

        // Stdin runs on a plain thread, see spawn_input_reader
        spawn_input_reader(
            self.channels.input_to_app.0.clone(),
            self.channels.app_to_ui.0.clone(),
        );

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}

async fn warm_offline_cache(offline: &OfflineCache) -> anyhow::Result<()> {
    let report = offline.install().await?;
    if !report.is_complete() {
        tracing::warn!("{} assets could not be cached", report.failed.len());
    }
    offline.activate().await?;
    Ok(())
}
