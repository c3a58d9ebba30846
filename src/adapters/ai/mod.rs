//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port for various LLM providers.
//!
//! ## Available Adapters
//!
//! - `MockAIProvider` - Configurable mock for testing
//! - `OpenAIProvider` - OpenAI and self-hosted OpenAI-compatible servers
//! - `AnthropicProvider` - Anthropic Claude models
//! - `FailoverAIProvider` - Wrapper with automatic failover between providers
//!
//! `provider_from_config` assembles them from [`AiConfig`](crate::config::AiConfig).

mod anthropic_provider;
mod factory;
mod failover_provider;
mod mock_provider;
mod openai_provider;
mod retry;
mod structured;

pub use anthropic_provider::{AnthropicConfig, AnthropicProvider};
pub use factory::provider_from_config;
pub use failover_provider::FailoverAIProvider;
pub use mock_provider::{MockAIProvider, MockError, MockResponse};
pub use openai_provider::{OpenAIConfig, OpenAIProvider};
