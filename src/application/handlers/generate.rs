//! GenerateHandler - the per-endpoint AI pipeline.
//!
//! Every AI endpoint runs the same stages:
//!
//! ```text
//! Received -> Validated -> PromptBuilt -> AIInvoked -> Normalized -> Responded
//!     \__________\______________\____________\______________\________-> Failed
//! ```
//!
//! A feature plugs into the pipeline by implementing [`AiFeature`]: how to
//! validate its request, which template it uses, and how to shape the
//! normalized output.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::application::HandlerError;
use crate::domain::access::{AccessPolicy, Permission};
use crate::domain::activity::AuditEntry;
use crate::domain::foundation::{AuthenticatedUser, ValidationError};
use crate::domain::normalize::extract_json;
use crate::domain::prompt::{synthesize, PromptPayload, PromptTemplate};
use crate::ports::{AIProvider, AuditLog, CompletionRequest, RequestMetadata};

/// Message returned when no AI provider credential is configured.
pub const AI_NOT_CONFIGURED: &str =
    "AI service is not configured: no provider API key is set on the server";

/// One AI-backed endpoint.
pub trait AiFeature: Send + Sync + 'static {
    /// Raw request body.
    type Request: DeserializeOwned + Send;
    /// Request after validation; renders itself into prompt sections.
    type Validated: PromptPayload + Send + Sync;
    /// Normalized response `data`.
    type Output: Serialize + Send;

    /// Template (system prompt, output contract and model tier).
    const TEMPLATE: PromptTemplate;

    fn validate(request: Self::Request) -> Result<Self::Validated, ValidationError>;

    /// Shapes the final output from the validated request and the untrusted
    /// model payload. Must not fail: every field is defaulted or clamped.
    fn finish(validated: Self::Validated, raw: &Value) -> Self::Output;
}

/// Pipeline stage of a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStage {
    Received,
    Validated,
    PromptBuilt,
    AIInvoked,
    Normalized,
    Responded,
    Failed,
}

impl RequestStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStage::Received => "received",
            RequestStage::Validated => "validated",
            RequestStage::PromptBuilt => "prompt_built",
            RequestStage::AIInvoked => "ai_invoked",
            RequestStage::Normalized => "normalized",
            RequestStage::Responded => "responded",
            RequestStage::Failed => "failed",
        }
    }
}

impl fmt::Display for RequestStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracks and logs stage transitions for one request.
struct StageTracker<'a> {
    feature: &'static str,
    trace_id: &'a str,
    stage: RequestStage,
}

impl<'a> StageTracker<'a> {
    fn start(feature: &'static str, trace_id: &'a str) -> Self {
        debug!(feature, trace_id, stage = %RequestStage::Received, "request stage");
        Self {
            feature,
            trace_id,
            stage: RequestStage::Received,
        }
    }

    fn advance(&mut self, next: RequestStage) {
        debug!(
            feature = self.feature,
            trace_id = self.trace_id,
            from = %self.stage,
            stage = %next,
            "request stage"
        );
        self.stage = next;
    }

    fn fail(&mut self, err: HandlerError) -> HandlerError {
        warn!(
            feature = self.feature,
            trace_id = self.trace_id,
            from = %self.stage,
            kind = err.kind(),
            status = err.status_code(),
            error = %err,
            "request failed"
        );
        self.stage = RequestStage::Failed;
        err
    }
}

/// Successful pipeline outcome.
#[derive(Debug, Clone)]
pub struct GenerateResult<T> {
    pub data: T,
    /// Model that produced the generation.
    pub model: String,
}

/// Runs [`AiFeature`]s end to end.
pub struct GenerateHandler {
    provider: Option<Arc<dyn AIProvider>>,
    audit_log: Arc<dyn AuditLog>,
    policy: Arc<AccessPolicy>,
}

impl GenerateHandler {
    /// `provider` is `None` when no AI credential is configured; every call
    /// then fails with a configuration error.
    pub fn new(
        provider: Option<Arc<dyn AIProvider>>,
        audit_log: Arc<dyn AuditLog>,
        policy: Arc<AccessPolicy>,
    ) -> Self {
        Self {
            provider,
            audit_log,
            policy,
        }
    }

    pub async fn handle<F: AiFeature>(
        &self,
        user: &AuthenticatedUser,
        request: F::Request,
        trace_id: &str,
    ) -> Result<GenerateResult<F::Output>, HandlerError> {
        let template = F::TEMPLATE;
        let mut stage = StageTracker::start(template.id(), trace_id);

        self.policy
            .authorize(user, Permission::UseAiTools)
            .map_err(|e| stage.fail(e.into()))?;

        let validated = F::validate(request).map_err(|e| stage.fail(e.into()))?;
        stage.advance(RequestStage::Validated);

        let prompt = synthesize(&validated, template);
        stage.advance(RequestStage::PromptBuilt);

        let provider = self
            .provider
            .as_ref()
            .ok_or_else(|| stage.fail(HandlerError::configuration(AI_NOT_CONFIGURED)))?;

        let completion = CompletionRequest::new(
            prompt.prompt,
            RequestMetadata::new(user.id.as_str(), template.id(), trace_id),
        )
        .with_system_prompt(prompt.system_prompt)
        .with_tier(template.tier())
        .with_temperature(template.temperature())
        .expecting_structured();

        let response = provider
            .complete(completion)
            .await
            .map_err(|e| stage.fail(e.into()))?;
        stage.advance(RequestStage::AIInvoked);
        info!(
            feature = template.id(),
            trace_id,
            tier = %template.tier(),
            model = %response.model,
            prompt_tokens = response.usage.prompt_tokens,
            completion_tokens = response.usage.completion_tokens,
            "AI generation completed"
        );

        let raw = response
            .structured
            .or_else(|| extract_json(&response.content))
            .unwrap_or(Value::Null);
        let data = F::finish(validated, &raw);
        stage.advance(RequestStage::Normalized);

        self.record_audit(user, template, &response.model).await;

        stage.advance(RequestStage::Responded);
        Ok(GenerateResult {
            data,
            model: response.model,
        })
    }

    async fn record_audit(&self, user: &AuthenticatedUser, template: PromptTemplate, model: &str) {
        let entry = AuditEntry::record(user, template.id(), model);
        if let Err(err) = self.audit_log.append(entry).await {
            warn!(feature = template.id(), error = %err, "failed to record audit entry");
        }
    }
}
