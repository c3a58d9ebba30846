//! Presence, audit and permissions HTTP adapter.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::activity_routes;
