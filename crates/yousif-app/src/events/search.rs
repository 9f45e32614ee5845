use std::time::Duration;

use kanal::AsyncSender;
use yousif_types::UiEvent;

use crate::events::{Completion, Session};
use crate::search::{FinishOutcome, SearchState, SubmitOutcome};

/// Search for `word`, or for the current input when `None`
pub async fn handle_search(session: &mut Session, word: Option<String>) -> anyhow::Result<()> {
    let online = session.state.connectivity.is_online();

    match session.search.submit(word.as_deref(), online) {
        SubmitOutcome::Ignored => {
            tracing::debug!("Empty query, nothing to search");
        }
        SubmitOutcome::Offline => {
            tracing::warn!("Search blocked, offline");
            if let SearchState::Error(message) = session.search.state() {
                let message = message.clone();
                session.send(UiEvent::ShowError(message)).await?;
            }
        }
        SubmitOutcome::Started(ticket) => {
            tracing::info!("Searching '{}' (#{})", ticket.term, ticket.generation);
            session
                .send(UiEvent::QueryChanged(ticket.term.clone()))
                .await?;
            session
                .send(UiEvent::Loading {
                    query: ticket.term.clone(),
                })
                .await?;

            let fetcher = session.fetcher.clone();
            let done_tx = session.done_tx.clone();
            tokio::spawn(async move {
                let result = fetcher.fetch(&ticket.term).await;
                if let Err(e) = done_tx.send(Completion { ticket, result }).await {
                    tracing::error!("Failed to report search result: {}", e);
                }
            });
        }
    }

    Ok(())
}

pub async fn handle_history_search(session: &mut Session, n: usize) -> anyhow::Result<()> {
    let word = session.search.history().nth(n).map(|item| item.word.clone());

    match word {
        Some(word) => handle_search(session, Some(word)).await,
        None => {
            session
                .send(UiEvent::Status(format!("No recent word #{n}")))
                .await
        }
    }
}

pub async fn handle_completion(session: &mut Session, completion: Completion) -> anyhow::Result<()> {
    let now_ms = chrono::Utc::now().timestamp_millis();
    let Completion { ticket, result } = completion;

    match session.search.finish(&ticket, result, now_ms) {
        FinishOutcome::Stale => {}
        FinishOutcome::Succeeded => {
            session
                .state
                .preferences
                .save_history(session.search.history());

            session.send(UiEvent::ScrollToTop).await?;
            if let Some(definition) = session.search.current_definition() {
                let definition = definition.clone();
                session.send(UiEvent::ShowDefinition(definition)).await?;
            }
        }
        FinishOutcome::Failed => {
            if let SearchState::Error(message) = session.search.state() {
                let message = message.clone();
                session.send(UiEvent::ShowError(message)).await?;
            }
        }
    }

    Ok(())
}

/// New search: empty screen, cleared input, focus restored a moment later
pub async fn handle_reset(session: &mut Session) -> anyhow::Result<()> {
    session.search.reset();

    session.send(UiEvent::QueryChanged(String::new())).await?;
    session
        .send(UiEvent::Home {
            history: session.search.history().items().to_vec(),
        })
        .await?;

    tokio::spawn(refocus_after(session.ui_tx.clone(), session.focus_delay));

    Ok(())
}

/// Deferred input focus, false when the UI was gone by then
pub async fn refocus_after(ui_tx: AsyncSender<UiEvent>, delay: Duration) -> bool {
    tokio::time::sleep(delay).await;
    match ui_tx.send(UiEvent::FocusInput).await {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!("Dropped input focus: {}", e);
            false
        }
    }
}
