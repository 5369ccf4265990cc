//! In-process implementation of the link repository.
//!
//! Holds mappings in a map behind an async lock. Each operation takes the
//! write lock for its whole check-then-write sequence, which gives the same
//! atomicity the PostgreSQL transactions provide. Used by integration tests
//! and anywhere a throwaway store is enough.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

#[derive(Default)]
pub struct MemoryLinkRepository {
    links: RwLock<HashMap<String, String>>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored mappings.
    pub async fn len(&self) -> usize {
        self.links.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.links.read().await.is_empty()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut links = self.links.write().await;

        if links.contains_key(&new_link.slug) {
            return Err(AppError::SlugExists);
        }

        links.insert(new_link.slug.clone(), new_link.target.clone());
        Ok(Link::from(new_link))
    }

    async fn find(&self, slug: &str) -> Result<Option<Link>, AppError> {
        let links = self.links.read().await;
        Ok(links.get(slug).map(|target| Link::new(slug, target.as_str())))
    }

    async fn update_target(&self, slug: &str, target: &str) -> Result<Option<Link>, AppError> {
        let mut links = self.links.write().await;

        match links.get_mut(slug) {
            Some(stored) => {
                *stored = target.to_string();
                Ok(Some(Link::new(slug, target)))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, slug: &str) -> Result<bool, AppError> {
        Ok(self.links.write().await.remove(slug).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
