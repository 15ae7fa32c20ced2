//! Site configuration.
//!
//! Centralizes the constants used across the boards, plus the board table
//! itself, which can be loaded from TOML or taken from [`default_boards`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::Board;

// =============================================================================
// Posting
// =============================================================================

/// Username used when a poster leaves the field blank.
pub const ANONYMOUS_USERNAME: &str = "Anonymous";

/// Bytes in one megabyte for upload limits.
pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// Length of the random base36 suffix in upload object names.
pub const UPLOAD_SUFFIX_LEN: usize = 6;

// =============================================================================
// Storage
// =============================================================================

/// Storage bucket holding uploaded media.
pub const DEFAULT_MEDIA_BUCKET: &str = "media";

/// Media URL extensions rendered as `<video>` rather than `<img>`.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "ogg"];

// =============================================================================
// Rendering
// =============================================================================

/// `chrono` format for post timestamps (UTC).
pub const POST_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Shown in place of a listing when a board has no posts.
pub const EMPTY_BOARD_MESSAGE: &str = "No posts yet. Be the first to post!";

// =============================================================================
// Boards
// =============================================================================

/// The stock boards: `#random`, `#media` and `#contacts`.
pub fn default_boards() -> Vec<Board> {
    vec![
        Board::new("random", "hey guys keep memes out of #general"),
        Board::new("media", "A board for sharing images and videos").with_media(10),
        Board::new("contacts", "Drop ur handle and an intro if u want")
            .with_media(10)
            .with_socials(),
    ]
}

fn default_media_bucket() -> String {
    DEFAULT_MEDIA_BUCKET.to_string()
}

/// Board table and storage settings.
///
/// ```toml
/// media_bucket = "media"
///
/// [[boards]]
/// name = "random"
/// description = "hey guys keep memes out of #general"
///
/// [[boards]]
/// name = "media"
/// allow_media = true
/// max_file_size_mb = 10
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_media_bucket")]
    pub media_bucket: String,
    #[serde(default = "default_boards")]
    pub boards: Vec<Board>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            media_bucket: default_media_bucket(),
            boards: default_boards(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a TOML configuration.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml(&source)
    }

    /// Look up a board by name.
    pub fn board(&self, name: &str) -> Option<&Board> {
        self.boards.iter().find(|board| board.name == name)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.boards.is_empty() {
            return Err(ConfigError::NoBoards);
        }
        for (i, board) in self.boards.iter().enumerate() {
            if board.name.trim().is_empty() {
                return Err(ConfigError::BlankBoardName);
            }
            if self.boards[..i].iter().any(|b| b.name == board.name) {
                return Err(ConfigError::DuplicateBoard(board.name.clone()));
            }
        }
        Ok(())
    }
}
