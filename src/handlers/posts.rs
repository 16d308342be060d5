use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::{debug, info};

use crate::db::Post;
use crate::middleware::post_request::{PostId, ValidPost};
use crate::{BlogError, router::BlogState};

/// POST /api/posts -> inserts one row, answers 201 with the assigned id.
pub async fn create_post(
    State(state): State<BlogState>,
    ValidPost(post): ValidPost,
) -> Result<impl IntoResponse, BlogError> {
    let id = state.store.insert(&post).await?;
    info!(id, "post created");
    Ok((StatusCode::CREATED, Json(post.into_post(id))))
}

/// PUT /api/posts/{id} -> overwrites every field; echoes the submitted values.
pub async fn update_post(
    State(state): State<BlogState>,
    PostId(id): PostId,
    ValidPost(post): ValidPost,
) -> Result<Json<Post>, BlogError> {
    let affected = state.store.update(id, &post).await?;
    if affected == 0 {
        return Err(BlogError::NotFound(id));
    }
    info!(id, "post updated");
    Ok(Json(post.into_post(id)))
}

/// DELETE /api/posts/{id} -> 204 on success.
pub async fn delete_post(
    State(state): State<BlogState>,
    PostId(id): PostId,
) -> Result<StatusCode, BlogError> {
    let affected = state.store.delete(id).await?;
    if affected == 0 {
        return Err(BlogError::NotFound(id));
    }
    info!(id, "post deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_post(
    State(state): State<BlogState>,
    PostId(id): PostId,
) -> Result<Json<Post>, BlogError> {
    state
        .store
        .get(id)
        .await?
        .map(Json)
        .ok_or(BlogError::NotFound(id))
}

pub async fn list_posts(State(state): State<BlogState>) -> Result<Json<Vec<Post>>, BlogError> {
    let posts = state.store.list().await?;
    debug!(count = posts.len(), "listed posts");
    Ok(Json(posts))
}
