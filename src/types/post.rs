use serde::Deserialize;
use serde_json::Value;

use crate::db::NewPost;
use crate::error::BlogError;

/// Body accepted by create and update. Every field is optional on the wire;
/// `title` and `content` are enforced by [`PostPayload::validate`].
/// `category` and `tags` are taken as any JSON value and never checked.
#[derive(Debug, Default, Deserialize)]
pub struct PostPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: Option<Value>,
    #[serde(default)]
    pub tags: Option<Value>,
}

impl PostPayload {
    pub fn validate(self) -> Result<NewPost, BlogError> {
        let title = required(self.title, "title")?;
        let content = required(self.content, "content")?;
        Ok(NewPost {
            title,
            content,
            category: self.category,
            tags: self.tags,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, BlogError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(BlogError::MissingRequiredField(field))
}
