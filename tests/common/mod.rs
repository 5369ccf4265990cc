#![allow(dead_code)]

use axum_test::TestServer;
use slug_shortener::domain::entities::NewLink;
use slug_shortener::domain::repositories::LinkRepository;
use slug_shortener::infrastructure::persistence::MemoryLinkRepository;
use slug_shortener::routes::router;
use slug_shortener::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

/// State backed by an in-process repository, returned alongside it so tests
/// can seed and inspect the store directly.
pub fn create_test_state() -> (AppState, Arc<MemoryLinkRepository>) {
    let repo = Arc::new(MemoryLinkRepository::new());
    let state = AppState::new(repo.clone());
    (state, repo)
}

/// Test server over the full route table.
pub fn make_server() -> (TestServer, Arc<MemoryLinkRepository>) {
    let (state, repo) = create_test_state();
    let server = TestServer::new(router(state)).unwrap();
    (server, repo)
}

pub async fn seed_link(repo: &MemoryLinkRepository, slug: &str, target: &str) {
    repo.insert(NewLink {
        slug: slug.to_string(),
        target: target.to_string(),
    })
    .await
    .unwrap();
}

pub async fn create_test_link(pool: &PgPool, slug: &str, target: &str) {
    sqlx::query("INSERT INTO links (slug, link) VALUES ($1, $2)")
        .bind(slug)
        .bind(target)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_links(pool: &PgPool, slug: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links WHERE slug = $1")
        .bind(slug)
        .fetch_one(pool)
        .await
        .unwrap()
}
