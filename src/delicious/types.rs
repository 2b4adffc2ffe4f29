// Delicious API response types.

use serde::{Deserialize, Deserializer, Serialize};

/// A single bookmark. Only `tags` feeds the graph; `href` and `description`
/// are deserialized but otherwise unused.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Bookmark {
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub description: String,
    /// Tags in the order the owner entered them. The API sends a single
    /// space-separated string.
    #[serde(default, deserialize_with = "split_tags")]
    pub tags: Vec<String>,
}

/// Body of `/v1/posts/all`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostsResponse {
    #[serde(default)]
    pub posts: Vec<Bookmark>,
}

/// Accept either `"a b c"` or `["a", "b", "c"]`.
fn split_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTags {
        Joined(String),
        List(Vec<String>),
    }

    Ok(match Option::<RawTags>::deserialize(deserializer)? {
        Some(RawTags::Joined(s)) => s.split_whitespace().map(str::to_string).collect(),
        Some(RawTags::List(list)) => list,
        None => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_split_on_whitespace() {
        let json = r#"{"href": "https://www.rust-lang.org", "description": "Rust", "tags": "rust  lang rust"}"#;
        let bookmark: Bookmark = serde_json::from_str(json).unwrap();
        assert_eq!(bookmark.tags, vec!["rust", "lang", "rust"]);
    }

    #[test]
    fn test_tags_as_list_and_missing() {
        let bookmark: Bookmark = serde_json::from_str(r#"{"tags": ["a", "b"]}"#).unwrap();
        assert_eq!(bookmark.tags, vec!["a", "b"]);

        let bookmark: Bookmark = serde_json::from_str(r#"{"href": "x"}"#).unwrap();
        assert!(bookmark.tags.is_empty());

        let bookmark: Bookmark = serde_json::from_str(r#"{"tags": null}"#).unwrap();
        assert!(bookmark.tags.is_empty());
    }

    #[test]
    fn test_posts_response() {
        let json = r#"{"user": "me", "posts": [{"tags": "x y"}, {"tags": ""}]}"#;
        let response: PostsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.posts.len(), 2);
        assert!(response.posts[1].tags.is_empty());
    }
}
