//! Board loading and posting on top of the hosted backend.
//!
//! [`Backend`] is the seam to the backend-as-a-service (table queries,
//! inserts, blob storage). [`BoardService`] owns the glue: turning rows into
//! a listing and turning a form draft into one validated insert.

use chrono::Utc;
use rand::Rng;

use crate::config::{ANONYMOUS_USERNAME, SiteConfig, UPLOAD_SUFFIX_LEN};
use crate::error::{BackendError, SubmitError};
use crate::markup::{RenderOptions, render_load_error, render_posts};
use crate::models::{Board, MediaFile, NewPost, Post, PostDraft, PostStatus, SortOrder};
use crate::utils::validate_link;

/// Query for one board's posts ordered by `created_at`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostQuery {
    pub board: String,
    pub ascending: bool,
}

impl PostQuery {
    pub fn new(board: impl Into<String>, sort: SortOrder) -> Self {
        Self {
            board: board.into(),
            ascending: sort.ascending(),
        }
    }
}

/// Hosted database and file storage.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// Select all posts matching the query, in its order.
    async fn select_posts(&self, query: &PostQuery) -> Result<Vec<Post>, BackendError>;

    /// Insert one post row.
    async fn insert_post(&self, post: &NewPost) -> Result<(), BackendError>;

    /// Store a file at `path` inside `bucket`.
    async fn upload(&self, bucket: &str, path: &str, bytes: &[u8]) -> Result<(), BackendError>;

    /// Public URL of a stored file.
    fn public_url(&self, bucket: &str, path: &str) -> String;
}

/// Loads and posts to the configured boards.
pub struct BoardService<B> {
    backend: B,
    config: SiteConfig,
}

impl<B: Backend> BoardService<B> {
    pub fn new(backend: B, config: SiteConfig) -> Self {
        Self { backend, config }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Render a board's listing.
    ///
    /// Never fails: an unknown board or a backend error renders an error
    /// notice in place of the listing.
    pub async fn load_board(
        &self,
        board_name: &str,
        sort: SortOrder,
        show_tags: bool,
    ) -> String {
        let Some(board) = self.config.board(board_name) else {
            tracing::warn!(board = board_name, "unknown board");
            return render_load_error(&format!("no board named '{}'", board_name));
        };

        let query = PostQuery::new(&board.name, sort);
        match self.backend.select_posts(&query).await {
            Ok(posts) => {
                tracing::debug!(board = board_name, count = posts.len(), "loaded posts");
                render_posts(&posts, board, RenderOptions { show_tags })
            }
            Err(e) => {
                tracing::error!(board = board_name, error = %e, "error loading posts");
                render_load_error(&e.to_string())
            }
        }
    }

    /// Validate a draft, upload its media if any, and insert the post.
    ///
    /// Returns the inserted row payload.
    pub async fn submit(
        &self,
        board_name: &str,
        draft: PostDraft,
    ) -> Result<NewPost, SubmitError> {
        let result = self.submit_inner(board_name, draft).await;
        if let Err(e) = &result {
            tracing::error!(board = board_name, error = %e, "error posting");
        }
        result
    }

    async fn submit_inner(
        &self,
        board_name: &str,
        draft: PostDraft,
    ) -> Result<NewPost, SubmitError> {
        let board = self
            .config
            .board(board_name)
            .ok_or_else(|| SubmitError::UnknownBoard(board_name.to_string()))?;

        let content = draft.content.trim();
        if content.is_empty() {
            return Err(SubmitError::EmptyContent);
        }

        let username = match draft.username.trim() {
            "" => ANONYMOUS_USERNAME,
            name => name,
        };

        let (social_label, social_link) = if board.collects_socials {
            let link = non_blank(&draft.social_link)
                .map(|link| validate_link(link).map_err(|_| SubmitError::InvalidLink))
                .transpose()?;
            (non_blank(&draft.social_label), link)
        } else {
            (None, None)
        };

        let media_url = match &draft.media {
            Some(file) if board.allow_media => Some(self.upload_media(board, file).await?),
            Some(file) => {
                tracing::debug!(
                    board = board_name,
                    file = %file.name,
                    "board does not take media, skipping"
                );
                None
            }
            None => None,
        };

        let post = NewPost {
            board: board.name.clone(),
            username: username.to_string(),
            content: content.to_string(),
            media_url,
            status: if board.requires_review {
                PostStatus::Pending
            } else {
                PostStatus::Approved
            },
            social_label: social_label.map(str::to_string),
            social_link: social_link.map(str::to_string),
        };

        self.backend.insert_post(&post).await?;
        tracing::info!(board = board_name, status = ?post.status, "post submitted");
        Ok(post)
    }

    async fn upload_media(&self, board: &Board, file: &MediaFile) -> Result<String, SubmitError> {
        if file.size() > board.max_file_size_bytes() {
            return Err(SubmitError::FileTooLarge {
                max_mb: board.max_file_size_mb,
            });
        }

        let path = media_object_path(
            &board.name,
            file,
            Utc::now().timestamp_millis(),
            &random_suffix(),
        );
        let bucket = &self.config.media_bucket;
        self.backend.upload(bucket, &path, &file.bytes).await?;
        tracing::debug!(bucket = %bucket, path = %path, size = file.size(), "uploaded media");
        Ok(self.backend.public_url(bucket, &path))
    }
}

fn non_blank(value: &str) -> Option<&str> {
    Some(value.trim()).filter(|v| !v.is_empty())
}

/// Storage path for an upload: `{board}/{millis}_{suffix}.{ext}`.
pub fn media_object_path(board: &str, file: &MediaFile, millis: i64, suffix: &str) -> String {
    format!("{}/{}_{}.{}", board, millis, suffix, file.extension())
}

/// Random lowercase base36 string for upload names.
fn random_suffix() -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::thread_rng();
    (0..UPLOAD_SUFFIX_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
