//! AI feature HTTP adapter.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::GenerationResponse;
pub use routes::ai_routes;
