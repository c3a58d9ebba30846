//! HTTP adapter - REST API over the application handlers.
//!
//! - `ai` - the five AI feature endpoints
//! - `activity` - presence, audit trail and permissions
//! - `middleware` - bearer-token authentication
//! - `router` - route table and tower layers

pub mod activity;
pub mod ai;
pub mod error;
pub mod extract;
pub mod health;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::{ApiError, ErrorBody};
pub use extract::ApiJson;
pub use router::build_router;
pub use state::{AppDependencies, AppState};
