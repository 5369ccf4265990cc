//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers and the admin
//! CLI one place where mapping rules are enforced.
//!
//! - [`services::link_service::LinkService`] - Slug mapping create/get/update/delete

pub mod services;
