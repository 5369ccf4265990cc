//! Link entity representing a slug-to-target mapping.

use serde::Serialize;

/// A persisted mapping from a slug to its target URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub slug: String,
    pub target: String,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(slug: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            target: target.into(),
        }
    }
}

/// Input data for inserting a new mapping.
///
/// By the time a `NewLink` is built both fields have passed validation.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub slug: String,
    pub target: String,
}

impl From<NewLink> for Link {
    fn from(new_link: NewLink) -> Self {
        Link::new(new_link.slug, new_link.target)
    }
}
