//! HTTP middleware for the API and redirect routes.

pub mod tracing;
