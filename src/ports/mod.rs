//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## AI Port
//!
//! - `AIProvider` - generative-AI invocation (prompt, system prompt, tier, JSON mode)
//!
//! ## Identity Port
//!
//! - `SessionValidator` - verifies access tokens issued by the auth platform
//!
//! ## Activity Ports
//!
//! - `PresenceStore` - last-seen tracking
//! - `AuditLog` - append-only record of AI generations

mod ai_provider;
mod audit_log;
mod presence_store;
mod session_validator;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ModelTier,
    ProviderInfo, RequestMetadata, TokenUsage,
};
pub use audit_log::AuditLog;
pub use presence_store::PresenceStore;
pub use session_validator::SessionValidator;
