//! Translation of SQLx errors into [`AppError`].

use crate::error::AppError;

/// Name of the uniqueness constraint on `links.slug`.
pub const SLUG_UNIQUE_CONSTRAINT: &str = "links_slug_key";

pub fn is_unique_violation_on_slug(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(SLUG_UNIQUE_CONSTRAINT))
}

/// Maps a driver error onto the error taxonomy.
///
/// Connection-level failures become [`AppError::StoreUnavailable`]; a unique
/// violation on the slug constraint becomes [`AppError::SlugExists`]. The raw
/// driver message is kept in [`AppError::Internal`] for logging only.
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if is_unique_violation_on_slug(&e) {
        return AppError::SlugExists;
    }

    match e {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Protocol(_)
        | sqlx::Error::WorkerCrashed => AppError::StoreUnavailable,
        other => AppError::internal(other.to_string()),
    }
}
