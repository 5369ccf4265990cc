//! Handlers for the `/api/{slug}` endpoints (get, create, update, delete).

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::dto::envelope::Envelope;
use crate::api::dto::link::{CreatedPayload, LinkPayload, LinkRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the target stored for a slug.
///
/// # Endpoint
///
/// `GET /api/{slug}`
///
/// # Response
///
/// ```json
/// { "success": true, "payload": { "link": "https://example.com" } }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the slug is not mapped.
pub async fn get_link_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Envelope>, AppError> {
    let link = state.link_service.get_link(&slug).await?;

    Ok(Json(Envelope::with_payload(LinkPayload {
        link: link.target,
    })))
}

/// Creates a mapping for the slug in the path.
///
/// # Endpoint
///
/// `POST /api/{slug}`
///
/// # Request Body
///
/// ```json
/// { "link": "https://example.com" }
/// ```
///
/// A slug longer than 50 characters is replaced by a generated one; the
/// slug actually used is returned in the payload.
///
/// # Errors
///
/// Returns 400 Bad Request for an invalid target, URL or slug, and when the
/// slug is already taken.
pub async fn create_link_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
    body: Result<Json<LinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope>), AppError> {
    let target = LinkRequest::into_target(body)?;
    create(&state, Some(slug), target).await
}

/// Creates a mapping under a generated 10-character slug.
///
/// # Endpoint
///
/// `POST /api`
pub async fn create_generated_link_handler(
    State(state): State<AppState>,
    body: Result<Json<LinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope>), AppError> {
    let target = LinkRequest::into_target(body)?;
    create(&state, None, target).await
}

async fn create(
    state: &AppState,
    slug: Option<String>,
    target: String,
) -> Result<(StatusCode, Json<Envelope>), AppError> {
    let link = state.link_service.create_link(slug, target).await?;

    let body = Envelope::with_payload(CreatedPayload {
        slug: link.slug,
        link: link.target,
    })
    .message("Link created");

    Ok((StatusCode::CREATED, Json(body)))
}

/// Replaces the target of an existing slug.
///
/// # Endpoint
///
/// `PUT /api/{slug}`
///
/// Responds 204 No Content on success; the slug itself never changes.
///
/// # Errors
///
/// Returns 400 Bad Request for an invalid target and 404 Not Found if the
/// slug is not mapped. Target errors win over a missing slug.
pub async fn update_link_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
    body: Result<Json<LinkRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let target = LinkRequest::into_target(body)?;
    state.link_service.update_link(&slug, target).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a mapping.
///
/// # Endpoint
///
/// `DELETE /api/{slug}`
///
/// # Errors
///
/// Returns 404 Not Found if the slug is not mapped, including on a repeated
/// delete.
pub async fn delete_link_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete_link(&slug).await?;

    Ok(StatusCode::NO_CONTENT)
}
