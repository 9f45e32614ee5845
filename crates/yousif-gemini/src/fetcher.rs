use std::sync::Arc;
use std::time::Duration;

use yousif_config::gemini::GeminiConfig;
use yousif_types::WordDefinition;

use crate::{DefinitionProvider, FetchError};

/// Attempt budget with linearly growing delays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, the first one included
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    pub fn from_config(config: &GeminiConfig) -> Self {
        Self::new(config.max_attempts, Duration::from_millis(config.backoff_ms))
    }

    /// Delay after the failed 1-based `attempt`
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.base_delay * attempt
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_secs(1))
    }
}

/// Retrying front of a [`DefinitionProvider`]
#[derive(Clone)]
pub struct DefinitionFetcher {
    provider: Arc<dyn DefinitionProvider>,
    policy: RetryPolicy,
}

impl DefinitionFetcher {
    pub fn new(provider: Arc<dyn DefinitionProvider>, policy: RetryPolicy) -> Self {
        Self { provider, policy }
    }

    pub async fn fetch(&self, term: &str) -> Result<WordDefinition, FetchError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(FetchError::EmptyQuery);
        }

        let mut attempt = 1;
        loop {
            match self.provider.define(term).await {
                Ok(definition) => {
                    tracing::info!("Fetched '{}' on attempt {}", term, attempt);
                    return Ok(definition);
                }
                Err(e) => {
                    tracing::warn!(
                        "{} attempt {} error: {}",
                        self.provider.metadata().name,
                        attempt,
                        e
                    );

                    if !e.is_retryable() || attempt >= self.policy.max_attempts {
                        tracing::error!("Giving up on '{}' after {} attempts", term, attempt);
                        return Err(FetchError::ConnectionFailed {
                            attempts: attempt,
                            last: Box::new(e),
                        });
                    }

                    tokio::time::sleep(self.policy.delay_after(attempt)).await;
                    attempt += 1;
                }
            }
        }
    }
}
