use yousif_core::render::{interactive_tokens, token_at};
use yousif_types::{TooltipTarget, UiEvent};

use crate::events::Session;
use crate::events::search::handle_search;

/// n-th (1-based) hoverable word of the card on screen
fn nth_target(session: &Session, n: usize) -> Option<TooltipTarget> {
    let definition = session.search.current_definition()?;
    n.checked_sub(1)
        .and_then(|i| interactive_tokens(definition).into_iter().nth(i))
}

async fn missing_word(session: &Session, n: usize) -> anyhow::Result<()> {
    session
        .send(UiEvent::Status(format!("No underlined word #{n}")))
        .await
}

pub async fn handle_hover(session: &mut Session, n: usize) -> anyhow::Result<()> {
    match nth_target(session, n) {
        Some(target) => session.send(UiEvent::ShowTooltip(target)).await,
        None => missing_word(session, n).await,
    }
}

pub async fn handle_leave(session: &mut Session) -> anyhow::Result<()> {
    session.send(UiEvent::HideTooltip).await
}

/// Clicking an underlined word searches it
pub async fn handle_look(session: &mut Session, n: usize) -> anyhow::Result<()> {
    let query = nth_target(session, n).and_then(|target| {
        let definition = session.search.current_definition()?;
        let token = token_at(definition, &target)?;
        token.click_query().map(str::to_string)
    });

    match query {
        Some(query) => {
            session.send(UiEvent::HideTooltip).await?;
            handle_search(session, Some(query)).await
        }
        None => missing_word(session, n).await,
    }
}
