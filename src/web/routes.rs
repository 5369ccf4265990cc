//! HTML page route configuration.

use crate::state::AppState;
use crate::web::handlers::home_handler;
use axum::{Router, routing::get};

/// Public pages.
///
/// # Endpoints
///
/// - `GET /` - Home page
///
/// The "bad link" page has no route of its own; it is rendered by
/// [`crate::api::handlers::redirect_handler`] for unresolvable slugs.
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/", get(home_handler))
}
