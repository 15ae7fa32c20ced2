//! Markup generation for board pages.
//!
//! Provides:
//! - [`sanitize`] - Escape user text, then convert `[b]`, `[i]`, `[s]` markers
//! - [`escape_html`] - Plain escaping for fields without marker support
//! - [`render_post`], [`render_posts`] - Post and board listing fragments

mod post;
mod sanitize;

pub use post::{RenderOptions, render_load_error, render_post, render_posts};
pub use sanitize::{escape_html, sanitize};
