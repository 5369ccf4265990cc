//! HTML template rendering handlers.

mod bad_link;
mod home;

pub use bad_link::BadLinkTemplate;
pub use home::{HomeTemplate, home_handler};
