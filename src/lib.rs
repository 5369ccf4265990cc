//! # Slug Shortener
//!
//! Maps short slugs to target URLs, redirects `/{slug}` to its target, and
//! exposes create/read/update/delete over a JSON API. Built with Axum and
//! PostgreSQL.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The link entity and the storage contract
//! - **Application Layer** ([`application`]) - Validation order and slug resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL and in-process stores
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, redirect, tracing middleware
//! - **Web Layer** ([`web`]) - Home and "bad link" HTML pages
//!
//! ## Rules
//!
//! - Slugs: 1-50 characters from `[A-Za-z0-9-]`, unique
//! - Targets: 1-100 characters, `http://` or `https://`, containing a dot
//! - Missing or over-long slugs are replaced by a random 10-character slug
//! - Every write is one transaction; a uniqueness constraint backs the
//!   existence check
//!
//! ## Quick Start
//!
//! ```bash
//! export DB_USER=postgres DB_PASSWORD=postgres DB_NAME=links
//! export PORT=3000
//! cargo run
//! ```
//!
//! Migrations in `migrations/` are applied at startup.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{MemoryLinkRepository, PgLinkRepository};
    pub use crate::state::AppState;
}
