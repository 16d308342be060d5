//! Statements and row decoding shared by every backend. Both SQLite and MySQL
//! take `?` placeholders, so the text is identical.

use serde_json::Value;
use sqlx::{ColumnIndex, Decode, Row, Type};

use crate::db::models::{NewPost, Post, decode_tags, encode_category, encode_tags};
use crate::error::BlogError;

pub const INSERT_POST: &str =
    "INSERT INTO posts (title, content, category, tags) VALUES (?, ?, ?, ?)";

pub const UPDATE_POST: &str = r#"UPDATE posts SET
    title = ?,
    content = ?,
    category = ?,
    tags = ?
  WHERE id = ?"#;

pub const DELETE_POST: &str = "DELETE FROM posts WHERE id = ?";

pub const SELECT_POST: &str = "SELECT id, title, content, category, tags FROM posts WHERE id = ?";

pub const SELECT_POSTS: &str = "SELECT id, title, content, category, tags FROM posts ORDER BY id";

/// Column values for `category` and `tags`, in bind order.
pub fn bind_values(post: &NewPost) -> Result<(Option<String>, Option<String>), BlogError> {
    let category = encode_category(post.category.as_ref());
    let tags = encode_tags(post.tags.as_ref())?;
    Ok((category, tags))
}

pub fn row_to_post<'r, R>(row: &'r R) -> Result<Post, BlogError>
where
    R: Row,
    &'static str: ColumnIndex<R>,
    i64: Decode<'r, R::Database> + Type<R::Database>,
    String: Decode<'r, R::Database> + Type<R::Database>,
{
    let id: i64 = row.try_get("id")?;
    let title: String = row.try_get("title")?;
    let content: String = row.try_get("content")?;
    let category: Option<String> = row.try_get("category")?;
    let tags_json: Option<String> = row.try_get("tags")?;

    Ok(Post {
        id,
        title,
        content,
        category: category.map(Value::String),
        tags: decode_tags(tags_json)?,
    })
}
