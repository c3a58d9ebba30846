//! Adapters - Implementations of port interfaces.
//!
//! - `ai` - Anthropic, OpenAI-compatible, failover and mock AI providers
//! - `auth` - platform JWT validation and a mock validator
//! - `activity` - presence and audit stores (in-memory, PostgreSQL)
//! - `http` - axum REST API

pub mod activity;
pub mod ai;
pub mod auth;
pub mod http;
