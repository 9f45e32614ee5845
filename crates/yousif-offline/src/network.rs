use async_trait::async_trait;

use crate::OfflineError;

/// Where assets come from when the network is up
#[async_trait]
pub trait AssetNetwork: Send + Sync {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, OfflineError>;
}

#[derive(Clone)]
pub struct HttpAssetNetwork {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAssetNetwork {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl AssetNetwork for HttpAssetNetwork {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, OfflineError> {
        let response = self.client.get(self.url_for(path)).send().await?;

        if !response.status().is_success() {
            return Err(OfflineError::HttpStatus {
                status: response.status().as_u16(),
                path: path.to_string(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
