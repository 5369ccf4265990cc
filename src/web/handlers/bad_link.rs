//! "Bad link" page shown when a slug cannot be resolved.

use askama::Template;
use askama_web::WebTemplate;

/// Template for `templates/bad_link.html`.
///
/// The slug is HTML-escaped by Askama before it reaches the page.
#[derive(Template, WebTemplate)]
#[template(path = "bad_link.html")]
pub struct BadLinkTemplate {
    pub slug: String,
}

impl BadLinkTemplate {
    pub fn new(slug: &str) -> Self {
        Self {
            slug: slug.to_string(),
        }
    }
}
