//! Data models for the message boards.
//!
//! Contains domain types for:
//! - [`Board`] - A board and its posting rules
//! - [`Post`], [`NewPost`], [`PostStatus`] - Backend rows and insert payloads
//! - [`PostDraft`], [`MediaFile`] - Form input before validation
//! - [`SortOrder`] - Listing order

mod board;
mod post;

pub use board::{Board, SortOrder};
pub use post::{MediaFile, NewPost, Post, PostDraft, PostStatus};
