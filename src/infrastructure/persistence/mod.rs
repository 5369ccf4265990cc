//! Link repository implementations.
//!
//! - [`PgLinkRepository`] - PostgreSQL storage with transactional writes
//! - [`MemoryLinkRepository`] - In-process map with the same semantics

pub mod memory_link_repository;
pub mod pg_link_repository;

pub use memory_link_repository::MemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;
