use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(PostId);

/// A single post as served by the remote collection.
///
/// Fields beyond `id`, `title` and `body` (such as `userId`) are ignored
/// on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub body: String,
}

impl Post {
    pub fn new(id: i64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: PostId(id),
            title: title.into(),
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_post_and_ignores_extra_fields() {
        let raw = r#"{"userId": 1, "id": 7, "title": "qui est esse", "body": "est rerum"}"#;
        let post: Post = serde_json::from_str(raw).expect("post");
        assert_eq!(post, Post::new(7, "qui est esse", "est rerum"));
    }

    #[test]
    fn post_id_serializes_as_bare_number() {
        let json = serde_json::to_string(&Post::new(3, "t", "b")).expect("json");
        assert_eq!(json, r#"{"id":3,"title":"t","body":"b"}"#);
        assert_eq!(PostId(3).to_string(), "3");
    }

    #[test]
    fn rejects_post_without_title() {
        let raw = r#"{"id": 1, "body": "x"}"#;
        assert!(serde_json::from_str::<Post>(raw).is_err());
    }
}
