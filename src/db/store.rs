use async_trait::async_trait;

use crate::db::models::{NewPost, Post};
use crate::error::BlogError;

/// Storage seam for the posts handlers. Every method issues exactly one statement.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Create the `posts` table when it does not exist yet.
    async fn init_schema(&self) -> Result<(), BlogError>;

    /// Insert a row and return the id assigned by the store.
    async fn insert(&self, post: &NewPost) -> Result<i64, BlogError>;

    /// Overwrite all mutable fields of row `id`. Returns rows affected.
    async fn update(&self, id: i64, post: &NewPost) -> Result<u64, BlogError>;

    /// Returns rows affected.
    async fn delete(&self, id: i64) -> Result<u64, BlogError>;

    async fn get(&self, id: i64) -> Result<Option<Post>, BlogError>;

    /// All posts ordered by id.
    async fn list(&self) -> Result<Vec<Post>, BlogError>;
}
