//! Slug mapping service: create, resolve, update and delete.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::validation::{
    DEFAULT_SLUG_LENGTH, MAX_SLUG_LENGTH, generate_slug, is_valid_slug, is_valid_target_length,
    is_valid_url,
};

/// Attempts at drawing a free slug before giving up.
const MAX_GENERATE_ATTEMPTS: usize = 10;

/// Service applying the mapping rules on top of a [`LinkRepository`].
///
/// Validation always runs in the same order: target length, target URL
/// shape, slug charset, and only then the store. A malformed request is
/// rejected before anything is written.
pub struct LinkService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Creates a mapping from `candidate_slug` (or a generated slug) to `target`.
    ///
    /// A caller-supplied slug is used when it is non-empty and at most
    /// 50 characters long. Otherwise a 10-character slug is generated; a
    /// generated slug that happens to be taken is redrawn.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidTarget`] if `target` is empty or longer than 100 characters
    /// - [`AppError::InvalidUrl`] if `target` is not an http(s) URL
    /// - [`AppError::InvalidSlug`] if the supplied slug has characters outside `[A-Za-z0-9-]`
    /// - [`AppError::SlugExists`] if the slug is already mapped
    pub async fn create_link(
        &self,
        candidate_slug: Option<String>,
        target: String,
    ) -> Result<Link, AppError> {
        validate_target(&target)?;

        let supplied = candidate_slug
            .filter(|slug| !slug.is_empty() && slug.chars().count() <= MAX_SLUG_LENGTH);

        let link = match supplied {
            Some(slug) => {
                if !is_valid_slug(&slug) {
                    return Err(AppError::InvalidSlug);
                }
                self.link_repository
                    .insert(NewLink { slug, target })
                    .await?
            }
            None => self.insert_generated(target).await?,
        };

        tracing::info!(slug = %link.slug, "Link created");
        Ok(link)
    }

    /// Resolves a slug to its mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping exists.
    pub async fn get_link(&self, slug: &str) -> Result<Link, AppError> {
        self.link_repository
            .find(slug)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Replaces the target of an existing mapping. The slug never changes.
    ///
    /// # Errors
    ///
    /// Target errors as in [`Self::create_link`], checked before the store is
    /// consulted; [`AppError::NotFound`] if no mapping exists.
    pub async fn update_link(&self, slug: &str, target: String) -> Result<Link, AppError> {
        validate_target(&target)?;

        let link = self
            .link_repository
            .update_target(slug, &target)
            .await?
            .ok_or(AppError::NotFound)?;

        tracing::info!(slug = %link.slug, "Link updated");
        Ok(link)
    }

    /// Removes a mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping exists, including when it
    /// was already deleted.
    pub async fn delete_link(&self, slug: &str) -> Result<(), AppError> {
        if !self.link_repository.delete(slug).await? {
            return Err(AppError::NotFound);
        }

        tracing::info!(slug, "Link deleted");
        Ok(())
    }

    /// Checks that the underlying store answers.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }

    async fn insert_generated(&self, target: String) -> Result<Link, AppError> {
        for attempt in 1..=MAX_GENERATE_ATTEMPTS {
            let new_link = NewLink {
                slug: generate_slug(DEFAULT_SLUG_LENGTH),
                target: target.clone(),
            };

            match self.link_repository.insert(new_link).await {
                Err(AppError::SlugExists) => {
                    tracing::warn!(attempt, "Generated slug collision, retrying");
                }
                result => return result,
            }
        }

        Err(AppError::SlugExists)
    }
}

/// Checks target length, then URL shape.
fn validate_target(target: &str) -> Result<(), AppError> {
    if !is_valid_target_length(target) {
        return Err(AppError::InvalidTarget);
    }

    if !is_valid_url(target) {
        return Err(AppError::InvalidUrl);
    }

    Ok(())
}
