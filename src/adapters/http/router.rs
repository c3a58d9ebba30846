//! Top-level router: routes, auth and the cross-cutting tower layers.

use std::any::Any;

use axum::http::{header, HeaderValue, Method};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{middleware, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::activity::activity_routes;
use super::ai::ai_routes;
use super::error::ApiError;
use super::health::health;
use super::middleware::auth_middleware;
use super::state::AppState;

/// Builds the service.
///
/// `/health` is public; everything under `/api` runs behind the auth
/// middleware and checks capabilities in the handlers.
pub fn build_router(state: AppState) -> Router {
    let config = state.config.clone();
    let expose_details = state.expose_details();

    let api = Router::new()
        .merge(ai_routes())
        .merge(activity_routes())
        .route_layer(middleware::from_fn_with_state(
            state.session_validator.clone(),
            auth_middleware,
        ));

    let router = Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .with_state(state)
        .layer(CatchPanicLayer::custom(move |panic: Box<dyn Any + Send + 'static>| {
            panic_response(panic, expose_details)
        }))
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server));

    if config.features.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() && !server.is_production() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}

fn panic_response(panic: Box<dyn Any + Send + 'static>, expose_details: bool) -> Response {
    let message = panic
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| panic.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "unknown panic".to_string());

    tracing::error!(panic = %message, "handler panicked");

    ApiError::internal(expose_details.then_some(message)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn panic_response_is_generic_500() {
        let response = panic_response(Box::new("index out of bounds"), false);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn configured_origins_restrict_cors() {
        let server = ServerConfig {
            cors_origins: Some("https://app.example.org".to_string()),
            ..Default::default()
        };
        // builds without panicking on a valid origin list
        let _layer = cors_layer(&server);
    }
}
