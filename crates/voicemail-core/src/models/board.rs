//! Boards and listing order.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::BYTES_PER_MB;

/// A message board and the rules for posting to it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Board name, shown as `#name` (e.g., "random")
    pub name: String,
    /// One-line description under the title
    #[serde(default)]
    pub description: String,
    /// Whether posts may carry one uploaded image or video
    #[serde(default)]
    pub allow_media: bool,
    /// Upload size limit in megabytes
    #[serde(default)]
    pub max_file_size_mb: u64,
    /// New posts start out pending instead of approved
    #[serde(default)]
    pub requires_review: bool,
    /// Posts may carry a social label and profile link
    #[serde(default)]
    pub collects_socials: bool,
}

impl Board {
    /// Create a plain text board.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            allow_media: false,
            max_file_size_mb: 0,
            requires_review: false,
            collects_socials: false,
        }
    }

    /// Allow media uploads up to `max_mb` megabytes.
    pub fn with_media(mut self, max_mb: u64) -> Self {
        self.allow_media = true;
        self.max_file_size_mb = max_mb;
        self
    }

    /// Collect a social label and link with each post.
    pub fn with_socials(mut self) -> Self {
        self.collects_socials = true;
        self
    }

    /// Hold new posts for review.
    pub fn with_review(mut self) -> Self {
        self.requires_review = true;
        self
    }

    /// Upload size limit in bytes.
    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb.saturating_mul(BYTES_PER_MB)
    }

    /// Label for the submit button.
    pub fn submit_label(&self) -> &'static str {
        if self.requires_review {
            "Submit for Review"
        } else {
            "Post Comment"
        }
    }
}

/// Listing order by creation time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Most recent first
    #[default]
    Newest,
    /// Oldest first
    Oldest,
}

impl SortOrder {
    /// Whether `created_at` sorts ascending.
    pub fn ascending(self) -> bool {
        matches!(self, Self::Oldest)
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            other => Err(format!("unknown sort order '{}' (use newest or oldest)", other)),
        }
    }
}
