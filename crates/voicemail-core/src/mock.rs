//! In-memory backend for tests.

use std::cell::RefCell;
use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};

use crate::error::BackendError;
use crate::models::{NewPost, Post};
use crate::service::{Backend, PostQuery};

/// Base URL returned by [`MemoryBackend::public_url`].
pub const MOCK_STORAGE_URL: &str = "https://storage.test";

/// Backend keeping rows and uploads in memory.
///
/// Inserted rows get sequential ids and `created_at` one second apart,
/// so listing order is deterministic.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    posts: RefCell<Vec<Post>>,
    uploads: RefCell<BTreeMap<String, Vec<u8>>>,
    failure: Option<String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend whose every query, insert and upload fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Backend preloaded with stored rows.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RefCell::new(posts),
            ..Self::default()
        }
    }

    pub fn posts(&self) -> Vec<Post> {
        self.posts.borrow().clone()
    }

    /// Stored object keys as `bucket/path`.
    pub fn uploads(&self) -> Vec<String> {
        self.uploads.borrow().keys().cloned().collect()
    }

    fn check(&self, error: fn(String) -> BackendError) -> Result<(), BackendError> {
        match &self.failure {
            Some(message) => Err(error(message.clone())),
            None => Ok(()),
        }
    }
}

fn epoch() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap_or_default()
}

impl Backend for MemoryBackend {
    async fn select_posts(&self, query: &PostQuery) -> Result<Vec<Post>, BackendError> {
        self.check(BackendError::Query)?;
        let mut posts: Vec<Post> = self
            .posts
            .borrow()
            .iter()
            .filter(|post| post.board == query.board)
            .cloned()
            .collect();
        posts.sort_by_key(|post| post.created_at);
        if !query.ascending {
            posts.reverse();
        }
        Ok(posts)
    }

    async fn insert_post(&self, post: &NewPost) -> Result<(), BackendError> {
        self.check(BackendError::Query)?;
        let mut posts = self.posts.borrow_mut();
        let id = posts.len() as i64 + 1;
        let created_at = epoch() + Duration::seconds(id);
        posts.push(post.clone().into_post(id, created_at));
        Ok(())
    }

    async fn upload(&self, bucket: &str, path: &str, bytes: &[u8]) -> Result<(), BackendError> {
        self.check(BackendError::Upload)?;
        self.uploads
            .borrow_mut()
            .insert(format!("{}/{}", bucket, path), bytes.to_vec());
        Ok(())
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/{}/{}", MOCK_STORAGE_URL, bucket, path)
    }
}
