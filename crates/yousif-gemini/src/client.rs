use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use yousif_config::gemini::GeminiConfig;
use yousif_types::WordDefinition;

use crate::wire::{GenerateContentRequest, GenerateContentResponse, parse_definition};
use crate::{DefinitionProvider, FetchError, ProviderMetadata};

#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
    system_instruction: String,
}

impl GeminiClient {
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url,
            model,
            system_instruction: yousif_config::gemini::DEFAULT_SYSTEM_INSTRUCTION
                .trim()
                .to_string(),
        }
    }

    pub fn from_config(config: &GeminiConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            system_instruction: config.system_instruction.clone(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// Error for a non-success status, `None` when the body is worth parsing
pub fn status_error(status: StatusCode) -> Option<FetchError> {
    match status {
        StatusCode::TOO_MANY_REQUESTS => Some(FetchError::RateLimitExceeded),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Some(FetchError::AuthenticationError),
        status if !status.is_success() => Some(FetchError::ApiError(format!("HTTP {status}"))),
        _ => None,
    }
}

#[async_trait]
impl DefinitionProvider for GeminiClient {
    async fn define(&self, term: &str) -> Result<WordDefinition, FetchError> {
        if self.api_key.is_empty() {
            return Err(FetchError::AuthenticationError);
        }

        let request = GenerateContentRequest::for_term(term, &self.system_instruction);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        if let Some(e) = status_error(response.status()) {
            return Err(e);
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            FetchError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        let text = body.text().ok_or(FetchError::EmptyResponse)?;
        tracing::debug!("Gemini returned {} bytes for '{}'", text.len(), term);

        parse_definition(&text)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Gemini".to_string(),
            model: self.model.clone(),
            requires_api_key: true,
        }
    }
}
