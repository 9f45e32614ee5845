use yousif_offline::AssetSource;
use yousif_types::UiEvent;

use crate::events::Session;

pub async fn handle_asset_fetch(session: &mut Session, path: String) -> anyhow::Result<()> {
    let Some(offline) = session.offline.clone() else {
        tracing::warn!("Offline cache disabled");
        return session
            .send(UiEvent::Status("Offline cache is disabled".to_string()))
            .await;
    };

    let status = match offline.fetch(&path).await {
        Ok(response) => {
            let source = match response.source {
                AssetSource::Network => "network",
                AssetSource::Cache => "cache",
            };
            format!("{}: {} bytes from {}", response.path, response.body.len(), source)
        }
        Err(e) => {
            tracing::error!("Asset fetch failed: {}", e);
            format!("{path}: {e}")
        }
    };

    session.send(UiEvent::Status(status)).await
}
