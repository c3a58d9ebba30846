use std::sync::Arc;

use sqlx::PgPool;
use tokio::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use ndis_assist::adapters::activity::{
    run_migrations, InMemoryAuditLog, InMemoryPresenceStore, PostgresAuditLog,
    PostgresPresenceStore,
};
use ndis_assist::adapters::ai::provider_from_config;
use ndis_assist::adapters::auth::{PlatformJwtConfig, PlatformJwtValidator};
use ndis_assist::adapters::http::{build_router, AppDependencies, AppState};
use ndis_assist::config::{AppConfig, DatabaseConfig};
use ndis_assist::ports::{AuditLog, PresenceStore, SessionValidator};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    init_tracing(&config);

    if let Err(err) = config.validate() {
        tracing::error!(error = %err, "invalid configuration");
        return Err(err.into());
    }

    let config = Arc::new(config);
    let addr = config.server.socket_addr()?;

    let session_validator = session_validator(&config);
    let ai_provider = provider_from_config(&config.ai, &config.features)?;
    let (presence_store, audit_log) = activity_stores(config.database.as_ref()).await?;

    let state = AppState::new(
        config.clone(),
        AppDependencies {
            ai_provider,
            session_validator,
            presence_store,
            audit_log,
        },
    )?;
    let app = build_router(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        "ndis-assist listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn session_validator(config: &AppConfig) -> Arc<dyn SessionValidator> {
    let auth = &config.auth;
    let mut jwt = PlatformJwtConfig::new(auth.jwt_secret.clone(), auth.audience.clone())
        .with_leeway(auth.leeway_secs);
    if let Some(issuer) = &auth.issuer {
        jwt = jwt.with_issuer(issuer.clone());
    }
    Arc::new(PlatformJwtValidator::new(jwt))
}

async fn activity_stores(
    database: Option<&DatabaseConfig>,
) -> Result<(Arc<dyn PresenceStore>, Arc<dyn AuditLog>), BoxError> {
    let Some(database) = database else {
        tracing::warn!("no database configured; presence and audit are kept in memory");
        return Ok((
            Arc::new(InMemoryPresenceStore::new()),
            Arc::new(InMemoryAuditLog::new()),
        ));
    };

    let pool: PgPool = database.pool_options().connect(&database.url).await?;
    if database.run_migrations {
        run_migrations(&pool).await?;
        tracing::info!("database migrations applied");
    }

    Ok((
        Arc::new(PostgresPresenceStore::new(pool.clone())),
        Arc::new(PostgresAuditLog::new(pool)),
    ))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutdown signal received");
}
