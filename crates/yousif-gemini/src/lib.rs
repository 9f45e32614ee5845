pub mod client;
pub mod fetcher;
pub mod wire;

pub use client::GeminiClient;
pub use fetcher::{DefinitionFetcher, RetryPolicy};

use yousif_types::WordDefinition;

/// User-facing message once every attempt failed
pub const CONNECTION_ERROR_MESSAGE: &str = "Connection error. Please try again.";

/// Definition provider interface, one call is one attempt
#[async_trait::async_trait]
pub trait DefinitionProvider: Send + Sync {
    /// Fetch learning content for `term`
    async fn define(&self, term: &str) -> Result<WordDefinition, FetchError>;

    /// Name and model, used in logs
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub model: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("AI returned empty content")]
    EmptyResponse,

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,

    #[error("Search term is empty")]
    EmptyQuery,

    #[error("{}", CONNECTION_ERROR_MESSAGE)]
    ConnectionFailed {
        attempts: u32,
        #[source]
        last: Box<FetchError>,
    },
}

impl FetchError {
    /// Worth another attempt
    pub fn is_retryable(&self) -> bool {
        !matches!(self, FetchError::EmptyQuery | FetchError::ConnectionFailed { .. })
    }
}

#[cfg(test)]
mod tests;
