//! Core library for the voicemail message boards.
//!
//! This crate provides:
//! - [`markup`] - Rich-text sanitizer and post/board markup rendering
//! - [`models`] - Boards, backend rows, insert payloads and drafts
//! - [`service`] - [`BoardService`] loading and posting through a [`Backend`]
//! - [`config`] - Stock boards and TOML-loaded [`SiteConfig`]

pub mod config;
pub mod error;
pub mod markup;
pub mod models;
pub mod service;
pub mod utils;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use config::SiteConfig;
pub use error::{BackendError, ConfigError, SubmitError};
pub use markup::{escape_html, sanitize};
pub use models::{Board, MediaFile, NewPost, Post, PostDraft, PostStatus, SortOrder};
pub use service::{Backend, BoardService, PostQuery};
