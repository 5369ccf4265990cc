//! Application error type and its HTTP mapping.
//!
//! Every failure of the mapping engine is one of the [`AppError`] variants.
//! Handlers return `Result<_, AppError>` and rely on [`IntoResponse`] to render
//! the `{"success": false, "message": ...}` envelope with the right status.
//!
//! # Status mapping
//!
//! | Variant            | Status |
//! |--------------------|--------|
//! | `InvalidTarget`    | 400    |
//! | `InvalidUrl`       | 400    |
//! | `InvalidSlug`      | 400    |
//! | `SlugExists`       | 400    |
//! | `NotFound`         | 404    |
//! | `StoreUnavailable` | 503    |
//! | `Internal`         | 500    |
//!
//! `Internal` carries a detail string for logs only. The client always sees
//! the fixed message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::dto::envelope::Envelope;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Link must be a non-empty string of at most 100 characters")]
    InvalidTarget,

    #[error("Link must be an http:// or https:// URL")]
    InvalidUrl,

    #[error("Slug may only contain letters, digits and hyphens")]
    InvalidSlug,

    #[error("Slug already exists")]
    SlugExists,

    #[error("Slug not found")]
    NotFound,

    #[error("Link store is temporarily unavailable, try again later")]
    StoreUnavailable,

    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal(detail.into())
    }

    /// Machine-readable name of the error class.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidTarget => "invalid_target",
            AppError::InvalidUrl => "invalid_url",
            AppError::InvalidSlug => "invalid_slug",
            AppError::SlugExists => "slug_exists",
            AppError::NotFound => "not_found",
            AppError::StoreUnavailable => "store_unavailable",
            AppError::Internal(_) => "internal_error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidTarget
            | AppError::InvalidUrl
            | AppError::InvalidSlug
            | AppError::SlugExists => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Only store outages are worth retrying by the caller.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::StoreUnavailable)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::Internal(detail) => {
                tracing::error!(code = self.code(), detail = %detail, "Internal error");
            }
            _ if self.is_retryable() => {
                tracing::warn!(code = self.code(), "Store unavailable");
            }
            _ => {
                tracing::debug!(code = self.code(), "Request rejected");
            }
        }

        (status, Json(Envelope::failure(self.to_string()))).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        crate::utils::db_error::map_sqlx_error(e)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(_: validator::ValidationErrors) -> Self {
        AppError::InvalidTarget
    }
}
