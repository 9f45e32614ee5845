use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;
use yousif_gemini::{DefinitionFetcher, FetchError};
use yousif_offline::OfflineCache;
use yousif_types::{AppEvent, Theme, UiEvent, WordDefinition};

use crate::search::{SearchController, SearchTicket};
use crate::state::AppState;

pub mod asset;
pub mod search;
pub mod theme;
pub mod tooltip;

use asset::handle_asset_fetch;
use search::{handle_completion, handle_history_search, handle_reset, handle_search};
use theme::handle_theme_toggle;
use tooltip::{handle_hover, handle_leave, handle_look};

/// A finished fetch reporting back to the loop
pub struct Completion {
    pub ticket: SearchTicket,
    pub result: Result<WordDefinition, FetchError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Everything the loop owns while the app runs
pub struct Session {
    pub state: Arc<AppState>,
    pub fetcher: DefinitionFetcher,
    pub offline: Option<Arc<OfflineCache>>,
    pub search: SearchController,
    pub theme: Theme,
    pub ui_tx: AsyncSender<UiEvent>,
    pub done_tx: AsyncSender<Completion>,
    pub focus_delay: Duration,
}

impl Session {
    pub async fn new(
        state: Arc<AppState>,
        fetcher: DefinitionFetcher,
        offline: Option<Arc<OfflineCache>>,
        ui_tx: AsyncSender<UiEvent>,
        done_tx: AsyncSender<Completion>,
    ) -> Self {
        let focus_delay = {
            let config = state.config.read().await;
            Duration::from_millis(config.ui.focus_delay_ms)
        };

        let history = state.preferences.load_history();
        let theme = state
            .preferences
            .load_theme(yousif_core::preferences::system_prefers_dark());

        Self {
            state,
            fetcher,
            offline,
            search: SearchController::new(history),
            theme,
            ui_tx,
            done_tx,
            focus_delay,
        }
    }

    pub async fn send(&self, event: UiEvent) -> anyhow::Result<()> {
        self.ui_tx.send(event).await?;
        Ok(())
    }

    /// Initial screen
    pub async fn announce(&self) -> anyhow::Result<()> {
        self.send(UiEvent::ThemeChanged(self.theme)).await?;
        self.send(UiEvent::Connectivity(self.state.connectivity.is_online()))
            .await?;
        self.send(UiEvent::Home {
            history: self.search.history().items().to_vec(),
        })
        .await
    }
}

/// App's main loop
pub async fn event_loop(
    mut session: Session,
    app_rx: AsyncReceiver<AppEvent>,
    done_rx: AsyncReceiver<Completion>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    session.announce().await?;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                break;
            }
            event = app_rx.recv() => {
                let event = event?;
                tracing::debug!("[EVENT_LOOP] EVENT RECEIVED: {:?}", event);
                if handle_events(&mut session, event).await? == Flow::Quit {
                    break;
                }
            }
            completion = done_rx.recv() => {
                handle_completion(&mut session, completion?).await?;
            }
        }
    }

    Ok(())
}

pub async fn handle_events(session: &mut Session, event: AppEvent) -> anyhow::Result<Flow> {
    match event {
        AppEvent::Submit(line) => {
            session.search.set_query(&line);
            handle_search(session, None).await?;
        }
        AppEvent::SearchWord(word) => {
            handle_search(session, Some(word)).await?;
        }
        AppEvent::SearchHistory(n) => {
            handle_history_search(session, n).await?;
        }
        AppEvent::LookWord(n) => {
            handle_look(session, n).await?;
        }
        AppEvent::HoverWord(n) => {
            handle_hover(session, n).await?;
        }
        AppEvent::LeaveWord => {
            handle_leave(session).await?;
        }
        AppEvent::NewSearch => {
            handle_reset(session).await?;
        }
        AppEvent::ClearQuery => {
            session.search.clear_query();
            session.send(UiEvent::QueryChanged(String::new())).await?;
        }
        AppEvent::ToggleTheme => {
            handle_theme_toggle(session).await?;
        }
        AppEvent::ShowHistory => {
            let items = session.search.history().items().to_vec();
            session.send(UiEvent::ShowHistory(items)).await?;
        }
        AppEvent::ConnectivityChanged(online) => {
            // Watchers forward the change to the UI
            session.state.connectivity.set_online(online);
        }
        AppEvent::FetchAsset(path) => {
            handle_asset_fetch(session, path).await?;
        }
        AppEvent::Quit => {
            tracing::info!("Quit requested");
            session.send(UiEvent::Shutdown).await?;
            return Ok(Flow::Quit);
        }
    }

    Ok(Flow::Continue)
}
