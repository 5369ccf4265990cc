mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use slug_shortener::domain::repositories::LinkRepository;

// ─── GET ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_link_success() {
    let (server, repo) = common::make_server();
    common::seed_link(&repo, "get001", "https://example.com/target").await;

    let response = server.get("/api/get001").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(
        body,
        json!({ "success": true, "payload": { "link": "https://example.com/target" } })
    );
}

#[tokio::test]
async fn test_get_link_not_found() {
    let (server, _repo) = common::make_server();

    let response = server.get("/api/nothing-here").await;

    response.assert_status_not_found();
    let body = response.json::<Value>();
    assert_eq!(body["success"], false);
    assert!(body["message"].is_string());
    assert!(body.get("payload").is_none());
}

// ─── POST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_link_success() {
    let (server, _repo) = common::make_server();

    let response = server
        .post("/api/mytest")
        .json(&json!({ "link": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["success"], true);
    assert!(body["message"].is_string());
    assert_eq!(body["payload"]["slug"], "mytest");
    assert_eq!(body["payload"]["link"], "https://example.com");

    let fetched = server.get("/api/mytest").await;
    fetched.assert_status_ok();
    assert_eq!(fetched.json::<Value>()["payload"]["link"], "https://example.com");
}

#[tokio::test]
async fn test_create_link_generated_slug() {
    let (server, _repo) = common::make_server();

    let response = server
        .post("/api")
        .json(&json!({ "link": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    let slug = body["payload"]["slug"].as_str().unwrap().to_string();
    assert_eq!(slug.len(), 10);
    assert!(slug.chars().all(|c| c.is_ascii_alphanumeric()));

    let fetched = server.get(&format!("/api/{slug}")).await;
    fetched.assert_status_ok();
    assert_eq!(fetched.json::<Value>()["payload"]["link"], "https://example.com");
}

#[tokio::test]
async fn test_create_link_too_long_slug_is_replaced() {
    let (server, repo) = common::make_server();
    let long_slug = "a".repeat(51);

    let response = server
        .post(&format!("/api/{long_slug}"))
        .json(&json!({ "link": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let slug = response.json::<Value>()["payload"]["slug"]
        .as_str()
        .unwrap()
        .to_string();
    assert_eq!(slug.len(), 10);
    assert!(repo.find(&long_slug).await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_link_invalid_slug() {
    let (server, repo) = common::make_server();

    let response = server
        .post("/api/ab%20cd")
        .json(&json!({ "link": "https://example.com" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["success"], false);
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_create_link_invalid_url_scheme() {
    let (server, repo) = common::make_server();

    let response = server
        .post("/api/mytest")
        .json(&json!({ "link": "ftp://example.com" }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<Value>();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Link must be an http:// or https:// URL");
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_create_link_missing_link_field() {
    let (server, _repo) = common::make_server();

    let response = server.post("/api/mytest").json(&json!({})).await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>()["message"],
        "Link must be a non-empty string of at most 100 characters"
    );
}

#[tokio::test]
async fn test_create_link_non_string_link() {
    let (server, _repo) = common::make_server();

    let response = server
        .post("/api/mytest")
        .json(&json!({ "link": 42 }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["success"], false);
}

#[tokio::test]
async fn test_create_link_malformed_json() {
    let (server, _repo) = common::make_server();

    let response = server
        .post("/api/mytest")
        .content_type("application/json")
        .text("{not json")
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["success"], false);
}

#[tokio::test]
async fn test_create_link_target_too_long() {
    let (server, _repo) = common::make_server();
    let target = format!("https://example.com/{}", "a".repeat(90));

    let response = server
        .post("/api/mytest")
        .json(&json!({ "link": target }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_create_link_duplicate_slug() {
    let (server, _repo) = common::make_server();

    server
        .post("/api/dup")
        .json(&json!({ "link": "https://one.com" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/api/dup")
        .json(&json!({ "link": "https://two.com" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["message"], "Slug already exists");

    let fetched = server.get("/api/dup").await;
    assert_eq!(fetched.json::<Value>()["payload"]["link"], "https://one.com");
}

#[tokio::test]
async fn test_create_link_invalid_target_reported_before_conflict() {
    let (server, repo) = common::make_server();
    common::seed_link(&repo, "taken", "https://example.com").await;

    let response = server
        .post("/api/taken")
        .json(&json!({ "link": "not-a-url" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>()["message"],
        "Link must be an http:// or https:// URL"
    );
}

// ─── PUT ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_link_success() {
    let (server, repo) = common::make_server();
    common::seed_link(&repo, "upd001", "https://old.com").await;

    let response = server
        .put("/api/upd001")
        .json(&json!({ "link": "https://new.com" }))
        .await;

    response.assert_status(StatusCode::NO_CONTENT);

    let fetched = server.get("/api/upd001").await;
    fetched.assert_status_ok();
    assert_eq!(fetched.json::<Value>()["payload"]["link"], "https://new.com");
}

#[tokio::test]
async fn test_update_link_not_found() {
    let (server, _repo) = common::make_server();

    let response = server
        .put("/api/ghost")
        .json(&json!({ "link": "https://new.com" }))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_update_link_invalid_url() {
    let (server, repo) = common::make_server();
    common::seed_link(&repo, "upd002", "https://old.com").await;

    let response = server
        .put("/api/upd002")
        .json(&json!({ "link": "not-a-url" }))
        .await;

    response.assert_status_bad_request();

    let stored = repo.find("upd002").await.unwrap().unwrap();
    assert_eq!(stored.target, "https://old.com");
}

#[tokio::test]
async fn test_update_link_invalid_target_on_missing_slug() {
    let (server, _repo) = common::make_server();

    let response = server.put("/api/ghost").json(&json!({ "link": "" })).await;

    response.assert_status_bad_request();
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_link_success() {
    let (server, repo) = common::make_server();
    common::seed_link(&repo, "del001", "https://example.com").await;

    let response = server.delete("/api/del001").await;

    response.assert_status(StatusCode::NO_CONTENT);
    server.get("/api/del001").await.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_link_not_found() {
    let (server, _repo) = common::make_server();

    let response = server.delete("/api/nonexistent").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["success"], false);
}

#[tokio::test]
async fn test_delete_link_twice() {
    let (server, repo) = common::make_server();
    common::seed_link(&repo, "del002", "https://example.com").await;

    server
        .delete("/api/del002")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server.delete("/api/del002").await.assert_status_not_found();
}

#[tokio::test]
async fn test_slug_can_be_reused_after_delete() {
    let (server, repo) = common::make_server();
    common::seed_link(&repo, "again", "https://first.com").await;

    server
        .delete("/api/again")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .post("/api/again")
        .json(&json!({ "link": "https://second.com" }))
        .await
        .assert_status(StatusCode::CREATED);
}
