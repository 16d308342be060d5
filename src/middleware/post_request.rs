use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};

use crate::db::NewPost;
use crate::error::BlogError;
use crate::types::post::PostPayload;

/// A create/update body that parsed and passed the required-field check.
#[derive(Debug)]
pub struct ValidPost(pub NewPost);

impl<S> FromRequest<S> for ValidPost
where
    S: Send + Sync,
{
    type Rejection = BlogError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<PostPayload>::from_request(req, state)
            .await
            .map_err(|rejection| BlogError::InvalidBody(rejection.body_text()))?;
        Ok(ValidPost(payload.validate()?))
    }
}

/// The `{id}` path segment, parsed as an integer before any store access.
#[derive(Debug, Clone, Copy)]
pub struct PostId(pub i64);

impl<S> FromRequestParts<S> for PostId
where
    S: Send + Sync,
{
    type Rejection = BlogError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| BlogError::InvalidId(rejection.body_text()))?;
        raw.parse::<i64>()
            .map(PostId)
            .map_err(|_| BlogError::InvalidId(raw))
    }
}
