//! Backend rows, insert payloads and form drafts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored post as returned by a backend query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub board: String,
    #[serde(default)]
    pub username: Option<String>,
    /// Raw user text; sanitized at render time
    pub content: String,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub status: Option<PostStatus>,
    #[serde(default)]
    pub social_label: Option<String>,
    #[serde(default)]
    pub social_link: Option<String>,
}

/// Moderation state of a post.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Pending,
    Approved,
}

/// Row inserted for a new post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewPost {
    pub board: String,
    pub username: String,
    pub content: String,
    pub media_url: Option<String>,
    pub status: PostStatus,
    pub social_label: Option<String>,
    pub social_link: Option<String>,
}

impl NewPost {
    /// Materialize the stored row, as a backend does on insert.
    pub fn into_post(self, id: i64, created_at: DateTime<Utc>) -> Post {
        Post {
            id: Some(id),
            created_at,
            board: self.board,
            username: Some(self.username),
            content: self.content,
            media_url: self.media_url,
            status: Some(self.status),
            social_label: self.social_label,
            social_link: self.social_link,
        }
    }
}

/// A file selected for upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaFile {
    /// Original file name, used for the extension
    pub name: String,
    pub bytes: Vec<u8>,
}

impl MediaFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Extension after the last `.`, or the whole name when there is none.
    pub fn extension(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

/// Untrimmed form input for a new post.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub username: String,
    pub content: String,
    pub social_label: String,
    pub social_link: String,
    pub media: Option<MediaFile>,
}

impl PostDraft {
    /// Draft with only a message.
    pub fn message(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn with_social(mut self, label: impl Into<String>, link: impl Into<String>) -> Self {
        self.social_label = label.into();
        self.social_link = link.into();
        self
    }

    pub fn with_media(mut self, media: MediaFile) -> Self {
        self.media = Some(media);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_from_backend_row() {
        let json = r#"{
            "id": 7,
            "created_at": "2024-05-01T12:34:56.789+00:00",
            "board": "contacts",
            "username": "quinn",
            "content": "[b]hi[/b]",
            "media_url": null,
            "status": "approved",
            "social_label": "IG",
            "social_link": "https://instagram.com/quinn"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, Some(7));
        assert_eq!(post.status, Some(PostStatus::Approved));
        assert_eq!(post.social_label.as_deref(), Some("IG"));
        assert_eq!(post.created_at.timestamp(), 1714566896);
    }

    #[test]
    fn test_post_minimal_row() {
        let json = r#"{"created_at":"2024-05-01T00:00:00Z","board":"random","content":"yo"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.username, None);
        assert_eq!(post.status, None);
    }

    #[test]
    fn test_new_post_payload() {
        let post = NewPost {
            board: "random".to_string(),
            username: "Anonymous".to_string(),
            content: "hello".to_string(),
            media_url: None,
            status: PostStatus::Pending,
            social_label: None,
            social_link: None,
        };
        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["status"], "pending");
        assert!(value["media_url"].is_null());
    }

    #[test]
    fn test_media_extension() {
        assert_eq!(MediaFile::new("cat.PNG", vec![]).extension(), "PNG");
        assert_eq!(MediaFile::new("clip.final.mp4", vec![]).extension(), "mp4");
        assert_eq!(MediaFile::new("noext", vec![]).extension(), "noext");
    }
}
