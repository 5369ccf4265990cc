//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for slug mappings.
///
/// Writes run inside an explicit transaction that locks the slug's row before
/// acting on it. The `links_slug_key` constraint rejects any insert that races
/// past the existence check. Every operation is bounded by `op_timeout`.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
    op_timeout: Duration,
}

impl PgLinkRepository {
    /// Default bound on a single repository operation.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self::with_timeout(pool, Self::DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(pool: Arc<PgPool>, op_timeout: Duration) -> Self {
        Self { pool, op_timeout }
    }

    async fn begin(&self) -> Result<Transaction<'static, Postgres>, AppError> {
        Ok(self.pool.begin().await?)
    }

    /// Awaits `fut` under the operation timeout, labelling logs with `op`.
    ///
    /// An elapsed timeout drops the future, which rolls back any open
    /// transaction, and reports [`AppError::StoreUnavailable`].
    async fn bounded<T, F>(&self, op: &'static str, fut: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, AppError>>,
    {
        match tokio::time::timeout(self.op_timeout, fut).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    op,
                    timeout_ms = self.op_timeout.as_millis() as u64,
                    "Store operation timed out"
                );
                Err(AppError::StoreUnavailable)
            }
        }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        self.bounded("insert", async {
            let mut tx = self.begin().await?;

            let exists: bool =
                sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM links WHERE slug = $1)")
                    .bind(&new_link.slug)
                    .fetch_one(&mut *tx)
                    .await?;

            if exists {
                tx.rollback().await?;
                return Err(AppError::SlugExists);
            }

            // A concurrent insert of the same slug blocks here until the other
            // transaction ends, then fails on links_slug_key.
            sqlx::query("INSERT INTO links (slug, link) VALUES ($1, $2)")
                .bind(&new_link.slug)
                .bind(&new_link.target)
                .execute(&mut *tx)
                .await?;

            tx.commit().await?;

            Ok(Link::from(new_link))
        })
        .await
    }

    async fn find(&self, slug: &str) -> Result<Option<Link>, AppError> {
        self.bounded("find", async {
            let row: Option<(String, String)> =
                sqlx::query_as("SELECT slug, link FROM links WHERE slug = $1")
                    .bind(slug)
                    .fetch_optional(self.pool.as_ref())
                    .await?;

            Ok(row.map(|(slug, target)| Link::new(slug, target)))
        })
        .await
    }

    async fn update_target(&self, slug: &str, target: &str) -> Result<Option<Link>, AppError> {
        self.bounded("update_target", async {
            let mut tx = self.begin().await?;

            let locked: Option<String> =
                sqlx::query_scalar("SELECT slug FROM links WHERE slug = $1 FOR UPDATE")
                    .bind(slug)
                    .fetch_optional(&mut *tx)
                    .await?;

            if locked.is_none() {
                tx.rollback().await?;
                return Ok(None);
            }

            sqlx::query("UPDATE links SET link = $2 WHERE slug = $1")
                .bind(slug)
                .bind(target)
                .execute(&mut *tx)
                .await?;

            tx.commit().await?;

            Ok(Some(Link::new(slug, target)))
        })
        .await
    }

    async fn delete(&self, slug: &str) -> Result<bool, AppError> {
        self.bounded("delete", async {
            let mut tx = self.begin().await?;

            let locked: Option<String> =
                sqlx::query_scalar("SELECT slug FROM links WHERE slug = $1 FOR UPDATE")
                    .bind(slug)
                    .fetch_optional(&mut *tx)
                    .await?;

            if locked.is_none() {
                tx.rollback().await?;
                return Ok(false);
            }

            sqlx::query("DELETE FROM links WHERE slug = $1")
                .bind(slug)
                .execute(&mut *tx)
                .await?;

            tx.commit().await?;

            Ok(true)
        })
        .await
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.bounded("ping", async {
            sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
            Ok(())
        })
        .await
    }
}
