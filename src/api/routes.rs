//! API route configuration.

use crate::api::handlers::{
    create_generated_link_handler, create_link_handler, delete_link_handler, get_link_handler,
    update_link_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST   /`        - Create a mapping under a generated slug
/// - `GET    /{slug}`  - Fetch the target of a slug
/// - `POST   /{slug}`  - Create a mapping for the slug
/// - `PUT    /{slug}`  - Replace the target of a slug
/// - `DELETE /{slug}`  - Delete a mapping
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_generated_link_handler))
        .route(
            "/{slug}",
            get(get_link_handler)
                .post(create_link_handler)
                .put(update_link_handler)
                .delete(delete_link_handler),
        )
}
