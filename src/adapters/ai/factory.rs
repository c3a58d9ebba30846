//! Builds the AI provider stack from configuration.

use std::sync::Arc;

use crate::config::{AiConfig, FeatureFlags, ProviderKind};
use crate::ports::{AIError, AIProvider};

use super::{AnthropicConfig, AnthropicProvider, FailoverAIProvider, OpenAIConfig, OpenAIProvider};

/// Returns the provider the AI routes should use, or `None` when no
/// credential is configured at all.
///
/// The configured primary is used when its key is present, otherwise the
/// other vendor if that key is present. With `enable_ai_fallback` and a
/// fallback URL, the self-hosted server is chained behind it (or used alone).
pub fn provider_from_config(
    ai: &AiConfig,
    features: &FeatureFlags,
) -> Result<Option<Arc<dyn AIProvider>>, AIError> {
    let primary = vendor_provider(ai)?;

    let fallback = match ai.fallback() {
        Some((url, model)) if features.enable_ai_fallback => {
            let config = OpenAIConfig::self_hosted(url, model)
                .with_timeout(ai.timeout())
                .with_max_retries(ai.max_retries)
                .with_max_tokens(ai.max_tokens);
            Some(Arc::new(OpenAIProvider::new(config)?) as Arc<dyn AIProvider>)
        }
        _ => None,
    };

    let provider = match (primary, fallback) {
        (Some(primary), Some(fallback)) => {
            tracing::info!(
                primary = %primary.provider_info().name,
                fallback = %fallback.provider_info().model,
                "AI failover enabled"
            );
            Some(Arc::new(FailoverAIProvider::new(primary).with_fallback(fallback)) as Arc<dyn AIProvider>)
        }
        (Some(primary), None) => Some(primary),
        (None, Some(fallback)) => {
            tracing::warn!("no vendor AI key configured; using the self-hosted model only");
            Some(fallback)
        }
        (None, None) => None,
    };

    Ok(provider)
}

fn vendor_provider(ai: &AiConfig) -> Result<Option<Arc<dyn AIProvider>>, AIError> {
    let kind = if ai.has_primary() {
        ai.primary_provider
    } else {
        match ai.primary_provider {
            ProviderKind::Anthropic if ai.has_openai() => ProviderKind::OpenAI,
            ProviderKind::OpenAI if ai.has_anthropic() => ProviderKind::Anthropic,
            _ => {
                tracing::warn!("no AI provider key configured; AI endpoints will be unavailable");
                return Ok(None);
            }
        }
    };

    if kind != ai.primary_provider {
        tracing::warn!(
            configured = ?ai.primary_provider,
            using = ?kind,
            "primary AI provider has no key; using the other vendor"
        );
    }

    let provider: Arc<dyn AIProvider> = match kind {
        ProviderKind::Anthropic => {
            let key = ai.anthropic_api_key.clone().unwrap_or_default();
            let mut config = AnthropicConfig::new(key)
                .with_timeout(ai.timeout())
                .with_max_retries(ai.max_retries)
                .with_max_tokens(ai.max_tokens);
            apply_model_overrides(ai, &mut config.fast_model, &mut config.accurate_model);
            Arc::new(AnthropicProvider::new(config)?)
        }
        ProviderKind::OpenAI => {
            let key = ai.openai_api_key.clone().unwrap_or_default();
            let mut config = OpenAIConfig::new(key)
                .with_timeout(ai.timeout())
                .with_max_retries(ai.max_retries)
                .with_max_tokens(ai.max_tokens);
            apply_model_overrides(ai, &mut config.fast_model, &mut config.accurate_model);
            Arc::new(OpenAIProvider::new(config)?)
        }
    };

    Ok(Some(provider))
}

fn apply_model_overrides(ai: &AiConfig, fast: &mut String, accurate: &mut String) {
    if let Some(model) = ai.fast_model.as_deref().filter(|m| !m.is_empty()) {
        *fast = model.to_string();
    }
    if let Some(model) = ai.accurate_model.as_deref().filter(|m| !m.is_empty()) {
        *accurate = model.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(fallback: bool) -> FeatureFlags {
        FeatureFlags {
            enable_ai_fallback: fallback,
            ..Default::default()
        }
    }

    #[test]
    fn no_keys_means_no_provider() {
        let provider = provider_from_config(&AiConfig::default(), &flags(false)).unwrap();
        assert!(provider.is_none());
    }

    #[test]
    fn primary_key_selects_primary_vendor() {
        let ai = AiConfig {
            anthropic_api_key: Some("sk-ant-test".to_string()),
            accurate_model: Some("claude-custom".to_string()),
            ..Default::default()
        };
        let provider = provider_from_config(&ai, &flags(false)).unwrap().unwrap();
        assert_eq!(provider.provider_info().name, "anthropic");
    }

    #[test]
    fn falls_over_to_other_vendor_key() {
        let ai = AiConfig {
            openai_api_key: Some("sk-test".to_string()),
            fast_model: Some("gpt-custom-mini".to_string()),
            ..Default::default()
        };
        let provider = provider_from_config(&ai, &flags(false)).unwrap().unwrap();
        let info = provider.provider_info();
        assert_eq!(info.name, "openai");
        assert_eq!(info.model, "gpt-custom-mini");
    }

    #[test]
    fn fallback_ignored_unless_flag_enabled() {
        let ai = AiConfig {
            fallback_url: Some("http://localhost:11434/v1".to_string()),
            fallback_model: Some("llama3".to_string()),
            ..Default::default()
        };
        assert!(provider_from_config(&ai, &flags(false)).unwrap().is_none());

        let provider = provider_from_config(&ai, &flags(true)).unwrap().unwrap();
        assert_eq!(provider.provider_info().name, "self-hosted");
    }

    #[test]
    fn failover_reports_primary() {
        let ai = AiConfig {
            anthropic_api_key: Some("sk-ant-test".to_string()),
            fallback_url: Some("http://localhost:11434/v1".to_string()),
            fallback_model: Some("llama3".to_string()),
            ..Default::default()
        };
        let provider = provider_from_config(&ai, &flags(true)).unwrap().unwrap();
        assert_eq!(provider.provider_info().name, "anthropic");
    }
}
