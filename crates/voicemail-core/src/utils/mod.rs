//! Utility helpers for formatting and URL checks.
//!
//! Provides:
//! - [`format_post_time`] - Timestamp display for post headers
//! - [`validate_link`] - http(s) check for user-supplied and stored URLs
//! - [`is_video_url`] - Media kind detection by extension

mod format;
mod url;

pub use format::format_post_time;
pub use url::{LinkError, is_video_url, validate_link};
