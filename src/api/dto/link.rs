//! DTOs for the link endpoints.

use axum::{Json, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppError;

/// Request body for `POST` and `PUT` on `/api/{slug}`.
///
/// ```json
/// { "link": "https://example.com/some/long/path" }
/// ```
///
/// `link` is declared optional so that a missing field is reported as
/// [`AppError::InvalidTarget`] rather than a generic deserialization failure.
#[derive(Debug, Deserialize, Validate)]
pub struct LinkRequest {
    #[validate(required, length(min = 1, max = 100))]
    pub link: Option<String>,
}

impl LinkRequest {
    /// Checks the body once at the boundary and yields the target string.
    ///
    /// Malformed JSON, a non-string `link`, a missing `link`, and a `link`
    /// outside 1..=100 characters all map to [`AppError::InvalidTarget`].
    pub fn into_target(
        body: Result<Json<LinkRequest>, JsonRejection>,
    ) -> Result<String, AppError> {
        let Json(request) = body.map_err(|rejection| {
            tracing::debug!(error = %rejection, "Rejected link request body");
            AppError::InvalidTarget
        })?;

        request.validate()?;
        request.link.ok_or(AppError::InvalidTarget)
    }
}

/// Payload of `GET /api/{slug}`.
#[derive(Debug, Serialize)]
pub struct LinkPayload {
    pub link: String,
}

/// Payload of a successful create.
#[derive(Debug, Serialize)]
pub struct CreatedPayload {
    pub slug: String,
    pub link: String,
}
