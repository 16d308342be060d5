//! Runs against a live MySQL server when `TEST_MYSQL_URL` is set, e.g.
//! `TEST_MYSQL_URL=mysql://root:pw@localhost/blog_test cargo test --test mysql_store_tests`.
//! Without it every test returns early.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use blogging_platform::{
    db::{MySqlPostStore, NewPost, PostStore},
    router::{BlogState, blog_router},
};
use serde_json::{Value, json};
use sqlx::mysql::MySqlPoolOptions;
use std::sync::Arc;
use tower::ServiceExt;

async fn mysql_store() -> Option<MySqlPostStore> {
    let Ok(url) = std::env::var("TEST_MYSQL_URL") else {
        eprintln!("TEST_MYSQL_URL not set; skipping MySQL store test");
        return None;
    };
    let pool = MySqlPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("failed to connect to TEST_MYSQL_URL");
    let store = MySqlPostStore::new(pool);
    store.init_schema().await.expect("schema init failed");
    Some(store)
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request");
    let resp = app.clone().oneshot(req).await.expect("request failed");
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    (
        status,
        serde_json::from_slice(&bytes).expect("response body was not json"),
    )
}

#[tokio::test]
async fn mysql_create_update_repeat_and_miss() {
    let Some(store) = mysql_store().await else {
        return;
    };
    let app = blog_router(BlogState::new(Arc::new(store.clone())));

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/posts",
        json!({"title":"Hello","content":"World","category":"general","tags":["intro","test"]}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_i64().expect("id is an integer");
    assert!(id > 0);

    let update = json!({"title":"Hello v2","content":"World"});
    let uri = format!("/api/posts/{id}");
    let first = send_json(&app, "PUT", &uri, update.clone()).await;
    assert_eq!(first.0, StatusCode::OK);
    assert_eq!(first.1, json!({"id":id,"title":"Hello v2","content":"World"}));

    // identical values leave zero changed rows; matched rows must still count
    let second = send_json(&app, "PUT", &uri, update.clone()).await;
    assert_eq!(first, second);

    let stored = store.get(id).await.expect("get failed").expect("row exists");
    assert_eq!(stored.title, "Hello v2");
    assert_eq!(stored.category, None);
    assert_eq!(stored.tags, None);

    let (status, _) = send_json(&app, "PUT", &format!("/api/posts/{}", i64::MAX), update).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    assert_eq!(store.delete(id).await.expect("delete failed"), 1);
}

#[tokio::test]
async fn mysql_tags_round_trip_through_text_column() {
    let Some(store) = mysql_store().await else {
        return;
    };
    let post = NewPost {
        title: "t".to_string(),
        content: "c".to_string(),
        category: Some(json!("general")),
        tags: Some(json!(["b", "a", "c"])),
    };
    let id = store.insert(&post).await.expect("insert failed");
    let fetched = store.get(id).await.expect("get failed");
    assert_eq!(fetched, Some(post.into_post(id)));
    assert_eq!(store.delete(id).await.expect("delete failed"), 1);
}
