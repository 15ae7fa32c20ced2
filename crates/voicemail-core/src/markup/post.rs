//! Post and board listing markup.
//!
//! Every user-controlled value goes through [`sanitize`] (message bodies,
//! social labels) or [`escape_html`] (usernames, attribute values) before it
//! is placed in a template. URLs must also pass [`validate_link`].

use crate::config::{ANONYMOUS_USERNAME, EMPTY_BOARD_MESSAGE};
use crate::models::{Board, Post};
use crate::utils::{format_post_time, is_video_url, validate_link};

use super::sanitize::{escape_html, sanitize};

/// Display options for a listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Show the username tag on each post
    pub show_tags: bool,
}

/// Render one post as a `div.post` fragment.
pub fn render_post(post: &Post, board: &Board, options: RenderOptions) -> String {
    let username = post
        .username
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(ANONYMOUS_USERNAME);
    let tag_style = if options.show_tags {
        ""
    } else {
        r#" style="display:none""#
    };

    format!(
        concat!(
            r#"<div class="post">"#,
            r#"<div class="post-header">"#,
            r#"<span class="user-tag"{}>{}</span>"#,
            r#"<span class="post-time">{}{}</span>"#,
            r#"</div>"#,
            r#"<div class="post-content">{}</div>"#,
            "{}",
            "</div>"
        ),
        tag_style,
        escape_html(username),
        format_post_time(&post.created_at),
        social_badge(post, board),
        sanitize(&post.content),
        media_embed(post),
    )
}

/// Render a board listing, or the empty-state notice.
pub fn render_posts(posts: &[Post], board: &Board, options: RenderOptions) -> String {
    if posts.is_empty() {
        return format!(r#"<div class="empty-state">{}</div>"#, EMPTY_BOARD_MESSAGE);
    }
    posts
        .iter()
        .map(|post| render_post(post, board, options))
        .collect()
}

/// Render the notice shown when a listing cannot be loaded.
pub fn render_load_error(message: &str) -> String {
    format!(
        r#"<div class="error">Error loading posts: {}</div>"#,
        escape_html(message)
    )
}

fn social_badge(post: &Post, board: &Board) -> String {
    if !board.collects_socials {
        return String::new();
    }
    let (Some(label), Some(link)) = (post.social_label.as_deref(), post.social_link.as_deref())
    else {
        return String::new();
    };
    if label.trim().is_empty() {
        return String::new();
    }
    let Ok(link) = validate_link(link) else {
        return String::new();
    };
    format!(
        r#"<a href="{}" class="post-status" target="_blank" rel="noopener noreferrer">{}</a>"#,
        escape_html(link),
        sanitize(label)
    )
}

fn media_embed(post: &Post) -> String {
    let Some(url) = post.media_url.as_deref() else {
        return String::new();
    };
    let Ok(url) = validate_link(url) else {
        return String::new();
    };
    let src = escape_html(url);
    if is_video_url(url) {
        format!(
            r#"<video class="post-video" controls><source src="{}" type="video/mp4"></video>"#,
            src
        )
    } else {
        format!(r#"<img class="post-image" src="{}" alt="Posted media">"#, src)
    }
}
