use axum::{Router, middleware::from_fn, routing::get};
use std::sync::Arc;

use crate::db::PostStore;
use crate::handlers::{
    posts::{create_post, delete_post, get_post, list_posts, update_post},
    root_handler,
};
use crate::middleware::request_log::log_requests;

/// Shared handler state. The store is injected so tests can hand in their own.
#[derive(Clone)]
pub struct BlogState {
    pub store: Arc<dyn PostStore>,
}

impl BlogState {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }
}

pub fn blog_router(state: BlogState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/api/posts", get(list_posts).post(create_post))
        .route(
            "/api/posts/{id}",
            get(get_post).put(update_post).delete(delete_post),
        )
        .layer(from_fn(log_requests))
        .with_state(state)
}
