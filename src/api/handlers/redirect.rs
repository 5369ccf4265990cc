//! Handler for short link redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::handlers::BadLinkTemplate;

/// Redirects a slug to its stored target.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// # Behavior
///
/// - Mapped slug: 307 Temporary Redirect to the target
/// - Unknown slug, or a target that cannot be sent as a `Location` header:
///   404 with the "bad link" HTML page
/// - Store failure: the same page with 503 or 500
///
/// Every request reads the store; there is no cache in front of it.
pub async fn redirect_handler(Path(slug): Path<String>, State(state): State<AppState>) -> Response {
    match state.link_service.get_link(&slug).await {
        Ok(link) => match HeaderValue::try_from(link.target.as_str()) {
            Ok(location) => {
                debug!(slug = %slug, "Redirecting");
                (StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response()
            }
            Err(err) => {
                tracing::warn!(
                    slug = %slug,
                    error = %err,
                    "Stored target is not a valid Location header"
                );
                (StatusCode::NOT_FOUND, BadLinkTemplate::new(&slug)).into_response()
            }
        },
        Err(AppError::NotFound) => {
            debug!(slug = %slug, "Unknown slug");
            (StatusCode::NOT_FOUND, BadLinkTemplate::new(&slug)).into_response()
        }
        Err(err) => {
            if let AppError::Internal(detail) = &err {
                tracing::error!(slug = %slug, detail = %detail, "Redirect failed");
            } else {
                tracing::warn!(
                    slug = %slug,
                    error = %err,
                    retryable = err.is_retryable(),
                    "Redirect failed"
                );
            }
            (err.status(), BadLinkTemplate::new(&slug)).into_response()
        }
    }
}
