//! JSON API layer and the redirect endpoint.
//!
//! Translates HTTP requests into [`crate::application::services::LinkService`]
//! calls and formats responses in the `{"success", "message", "payload"}`
//! envelope.
//!
//! # Modules
//!
//! - [`dto`] - Request/response types
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
