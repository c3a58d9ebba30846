//! Failover AI Provider - Wrapper that provides automatic failover between providers.
//!
//! When the primary provider fails with a transient error (rate limit,
//! unavailable, network, timeout), the request is replayed against the
//! fallback provider if one is configured. Non-transient errors are returned
//! unchanged.
//!
//! # Example
//!
//! ```ignore
//! let primary = Arc::new(AnthropicProvider::new(anthropic_config)?);
//! let fallback = Arc::new(OpenAIProvider::new(OpenAIConfig::self_hosted(url, model))?);
//!
//! let provider = FailoverAIProvider::new(primary).with_fallback(fallback);
//! ```

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::ports::{AIError, AIProvider, CompletionRequest, CompletionResponse, ProviderInfo};

/// AI provider wrapper with automatic failover support.
pub struct FailoverAIProvider {
    primary: Arc<dyn AIProvider>,
    fallback: Option<Arc<dyn AIProvider>>,
}

impl FailoverAIProvider {
    /// Creates a new failover provider with only a primary provider.
    pub fn new(primary: Arc<dyn AIProvider>) -> Self {
        Self {
            primary,
            fallback: None,
        }
    }

    /// Adds a fallback provider.
    pub fn with_fallback(mut self, fallback: Arc<dyn AIProvider>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Whether a fallback provider is configured.
    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

#[async_trait]
impl AIProvider for FailoverAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let err = match self.primary.complete(request.clone()).await {
            Ok(response) => return Ok(response),
            Err(err) => err,
        };

        let fallback = match &self.fallback {
            Some(fallback) if err.is_retryable() => fallback,
            _ => return Err(err),
        };

        warn!(
            primary = %self.primary.provider_info().name,
            fallback = %fallback.provider_info().name,
            feature = %request.metadata.feature,
            trace_id = %request.metadata.trace_id,
            error = %err,
            "primary AI provider failed, using fallback"
        );

        let response = fallback.complete(request).await?;
        info!(model = %response.model, "fallback AI provider succeeded");
        Ok(response)
    }

    fn provider_info(&self) -> ProviderInfo {
        self.primary.provider_info()
    }
}
