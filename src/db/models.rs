use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A blog post. `category` and `tags` carry whatever JSON the client sent;
/// on read, `category` comes back as a string and `tags` as the decoded column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value>,
}

/// The mutable fields of a post, already validated at the HTTP boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub category: Option<Value>,
    pub tags: Option<Value>,
}

impl NewPost {
    pub fn into_post(self, id: i64) -> Post {
        Post {
            id,
            title: self.title,
            content: self.content,
            category: self.category,
            tags: self.tags,
        }
    }
}

/// Text stored in the `category` column. Strings go in verbatim, any other
/// JSON value in its serialized form.
pub fn encode_category(category: Option<&Value>) -> Option<String> {
    category.map(|c| match c {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

/// Encode tags into the text form stored in the `tags` column, as submitted.
pub fn encode_tags(tags: Option<&Value>) -> Result<Option<String>, serde_json::Error> {
    tags.map(serde_json::to_string).transpose()
}

/// Decode the `tags` column back into the submitted JSON value.
pub fn decode_tags(raw: Option<String>) -> Result<Option<Value>, serde_json::Error> {
    raw.as_deref().map(serde_json::from_str).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tags_keep_order_through_the_column() {
        let tags = json!(["intro", "test", "alpha"]);
        let raw = encode_tags(Some(&tags)).unwrap();
        assert_eq!(raw.as_deref(), Some(r#"["intro","test","alpha"]"#));
        let decoded = decode_tags(raw).unwrap().unwrap();
        let list: Vec<String> = serde_json::from_value(decoded).unwrap();
        assert_eq!(list, vec!["intro", "test", "alpha"]);
    }

    #[test]
    fn absent_tags_stay_null() {
        assert_eq!(encode_tags(None).unwrap(), None);
        assert_eq!(decode_tags(None).unwrap(), None);
    }

    #[test]
    fn non_array_tags_are_stored_as_is() {
        let raw = encode_tags(Some(&json!("x"))).unwrap();
        assert_eq!(raw.as_deref(), Some(r#""x""#));
        assert_eq!(decode_tags(raw).unwrap(), Some(json!("x")));

        let raw = encode_tags(Some(&json!({"a": 1}))).unwrap();
        assert_eq!(decode_tags(raw).unwrap(), Some(json!({"a": 1})));
    }

    #[test]
    fn empty_list_is_not_null() {
        let raw = encode_tags(Some(&json!([]))).unwrap();
        assert_eq!(raw.as_deref(), Some("[]"));
        assert_eq!(decode_tags(raw).unwrap(), Some(json!([])));
    }

    #[test]
    fn garbage_column_fails_to_decode() {
        assert!(decode_tags(Some("intro,test".to_string())).is_err());
    }

    #[test]
    fn category_text_form() {
        assert_eq!(encode_category(None), None);
        assert_eq!(encode_category(Some(&json!("general"))).as_deref(), Some("general"));
        assert_eq!(encode_category(Some(&json!(5))).as_deref(), Some("5"));
    }

    #[test]
    fn absent_optionals_are_omitted_from_json() {
        let post = Post {
            id: 1,
            title: "Hello v2".to_string(),
            content: "World".to_string(),
            category: None,
            tags: None,
        };
        assert_eq!(
            serde_json::to_string(&post).unwrap(),
            r#"{"id":1,"title":"Hello v2","content":"World"}"#
        );
    }
}
