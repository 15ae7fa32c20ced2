//! Formatting utilities for display values.

use chrono::{DateTime, Utc};

use crate::config::POST_TIME_FORMAT;

/// Format a post timestamp for the header (e.g., "2024-05-01 12:34").
pub fn format_post_time(created_at: &DateTime<Utc>) -> String {
    created_at.format(POST_TIME_FORMAT).to_string()
}
