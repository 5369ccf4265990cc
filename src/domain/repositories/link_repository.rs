//! Repository trait for slug mapping storage.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for slug mappings.
///
/// Every write runs as a single transaction in which the existence check and
/// the write cannot be interleaved with another writer on the same slug.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-process map
/// - Test mocks available with `cfg(test)`
///
/// # Errors
///
/// All methods return [`AppError::StoreUnavailable`] when the store cannot be
/// reached within the configured timeout.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::SlugExists`] if the slug is already present, whether
    /// detected by the existence check or by the uniqueness constraint at commit.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds the mapping for `slug`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if present
    /// - `Ok(None)` if absent
    async fn find(&self, slug: &str) -> Result<Option<Link>, AppError>;

    /// Replaces the target of an existing mapping.
    ///
    /// Returns `Ok(None)` if no mapping exists for `slug`.
    async fn update_target(&self, slug: &str, target: &str) -> Result<Option<Link>, AppError>;

    /// Removes a mapping.
    ///
    /// Returns `Ok(true)` if a mapping was removed, `Ok(false)` if none existed.
    async fn delete(&self, slug: &str) -> Result<bool, AppError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
