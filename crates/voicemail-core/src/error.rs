//! Error types for the board glue layer.
//!
//! The sanitizer and renderers are total and have no errors. Everything
//! that talks to the backend or reads configuration reports through:
//!
//! - [`BackendError`] - Failures reported by the hosted backend
//! - [`SubmitError`] - Rejected or failed post submissions
//! - [`ConfigError`] - Invalid site configuration

use thiserror::Error;

/// Failures reported by the hosted database/storage backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BackendError {
    /// Query or insert was rejected
    #[error("query failed: {0}")]
    Query(String),
    /// File upload was rejected
    #[error("upload failed: {0}")]
    Upload(String),
    /// Operation not offered by this backend
    #[error("operation not supported: {0}")]
    Unsupported(&'static str),
}

/// Reasons a post submission is rejected or fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    /// Board name not in the site configuration
    #[error("no board named '{0}'")]
    UnknownBoard(String),
    /// Message is blank after trimming
    #[error("message is required")]
    EmptyContent,
    /// Social link is not an http(s) URL
    #[error("link must start with http:// or https://")]
    InvalidLink,
    /// Upload exceeds the board's size limit
    #[error("File size must be less than {max_mb}MB")]
    FileTooLarge { max_mb: u64 },
    /// Upload or insert rejected by the backend
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Site configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// Config file is not valid TOML for [`SiteConfig`](crate::SiteConfig)
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// Board table is empty
    #[error("at least one board must be configured")]
    NoBoards,
    /// A board has a blank name
    #[error("board name must not be blank")]
    BlankBoardName,
    /// Two boards share a name
    #[error("board '{0}' is configured more than once")]
    DuplicateBoard(String),
}
