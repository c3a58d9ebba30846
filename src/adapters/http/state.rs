//! Shared application state for the HTTP adapter.

use std::sync::Arc;

use crate::application::{
    AuditHandler, GenerateHandler, HandlerError, PermissionsHandler, PresenceHandler,
};
use crate::config::{self, AppConfig};
use crate::ports::{AIProvider, AuditLog, PresenceStore, SessionValidator};

use super::error::ApiError;

/// Port implementations the HTTP adapter is assembled from.
pub struct AppDependencies {
    /// `None` when no AI credential is configured.
    pub ai_provider: Option<Arc<dyn AIProvider>>,
    pub session_validator: Arc<dyn SessionValidator>,
    pub presence_store: Arc<dyn PresenceStore>,
    pub audit_log: Arc<dyn AuditLog>,
}

/// Shared application state containing all handlers.
///
/// Cloned per request; every field is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub generate: Arc<GenerateHandler>,
    pub presence: Arc<PresenceHandler>,
    pub audit: Arc<AuditHandler>,
    pub permissions: Arc<PermissionsHandler>,
    pub session_validator: Arc<dyn SessionValidator>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Wires handlers around the given ports. The access policy is built
    /// once here from `config.access`.
    pub fn new(
        config: Arc<AppConfig>,
        deps: AppDependencies,
    ) -> Result<Self, config::ValidationError> {
        let policy = Arc::new(config.access.policy()?);

        Ok(Self {
            generate: Arc::new(GenerateHandler::new(
                deps.ai_provider,
                deps.audit_log.clone(),
                policy.clone(),
            )),
            presence: Arc::new(PresenceHandler::new(deps.presence_store, policy.clone())),
            audit: Arc::new(AuditHandler::new(deps.audit_log, policy.clone())),
            permissions: Arc::new(PermissionsHandler::new(policy)),
            session_validator: deps.session_validator,
            config,
        })
    }

    /// Internal error details are only exposed outside production.
    pub fn expose_details(&self) -> bool {
        !self.config.is_production()
    }

    /// Renders a handler failure for this deployment.
    pub fn reject(&self, err: HandlerError) -> ApiError {
        ApiError::from_handler(err, self.expose_details())
    }
}
