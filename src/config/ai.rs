//! AI provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// AI provider configuration
///
/// Missing API keys are not a startup error: the service still serves
/// non-AI routes and AI routes answer with a configuration error.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// OpenAI API key
    pub openai_api_key: Option<String>,

    /// Anthropic API key
    pub anthropic_api_key: Option<String>,

    /// Primary AI provider
    #[serde(default = "default_provider")]
    pub primary_provider: ProviderKind,

    /// Model override for fast-tier prompts
    pub fast_model: Option<String>,

    /// Model override for accurate-tier prompts
    pub accurate_model: Option<String>,

    /// Base URL of a self-hosted, OpenAI-compatible fallback
    pub fallback_url: Option<String>,

    /// Model served by the self-hosted fallback
    pub fallback_model: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum retries on failure
    #[serde(default = "default_retries")]
    pub max_retries: u32,

    /// Output token ceiling per completion
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

/// AI provider type
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    OpenAI,
    #[default]
    Anthropic,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if OpenAI is configured
    pub fn has_openai(&self) -> bool {
        self.openai_api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Check if Anthropic is configured
    pub fn has_anthropic(&self) -> bool {
        self.anthropic_api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Check if the primary provider has its key
    pub fn has_primary(&self) -> bool {
        match self.primary_provider {
            ProviderKind::OpenAI => self.has_openai(),
            ProviderKind::Anthropic => self.has_anthropic(),
        }
    }

    /// Returns `(base_url, model)` for the self-hosted fallback, if configured
    pub fn fallback(&self) -> Option<(&str, &str)> {
        let url = self.fallback_url.as_deref().filter(|u| !u.is_empty())?;
        let model = self.fallback_model.as_deref().filter(|m| !m.is_empty())?;
        Some((url, model))
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 600 {
            return Err(ValidationError::InvalidAiTimeout);
        }

        if let Some(url) = self.fallback_url.as_deref().filter(|u| !u.is_empty()) {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidFallbackUrl);
            }
            if self.fallback_model.as_deref().map_or(true, str::is_empty) {
                return Err(ValidationError::MissingRequired("AI__FALLBACK_MODEL"));
            }
        }

        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            anthropic_api_key: None,
            primary_provider: default_provider(),
            fast_model: None,
            accurate_model: None,
            fallback_url: None,
            fallback_model: None,
            timeout_secs: default_timeout(),
            max_retries: default_retries(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_provider() -> ProviderKind {
    ProviderKind::Anthropic
}

fn default_timeout() -> u64 {
    120
}

fn default_retries() -> u32 {
    3
}

fn default_max_tokens() -> u32 {
    4096
}
