use yousif_types::UiEvent;

use crate::events::Session;

pub async fn handle_theme_toggle(session: &mut Session) -> anyhow::Result<()> {
    session.theme = session.theme.toggled();
    session.state.preferences.save_theme(session.theme);
    tracing::info!("Theme set to {}", session.theme.as_token());

    session.send(UiEvent::ThemeChanged(session.theme)).await
}
