//! HTTP request handlers for API endpoints.

pub mod links;
pub mod redirect;

pub use links::{
    create_generated_link_handler, create_link_handler, delete_link_handler, get_link_handler,
    update_link_handler,
};
pub use redirect::redirect_handler;
