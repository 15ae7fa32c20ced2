//! URL validation for links that end up in `href`/`src` attributes.
//!
//! Only absolute http(s) URLs with a host are accepted, which keeps
//! `javascript:` and `data:` schemes out of rendered posts.

use thiserror::Error;

use crate::config::VIDEO_EXTENSIONS;

/// Reasons a link is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("URL is empty")]
    Empty,
    #[error("URL must start with http:// or https://")]
    InvalidProtocol,
    #[error("URL has no host")]
    NoHost,
}

/// Validate a link for use in markup.
///
/// Checks:
/// 1. URL is not empty
/// 2. URL starts with http:// or https:// (any case)
/// 3. URL has a host
///
/// Returns the trimmed URL.
pub fn validate_link(url: &str) -> Result<&str, LinkError> {
    let url = url.trim();

    if url.is_empty() {
        return Err(LinkError::Empty);
    }

    let Some(rest) = strip_scheme(url) else {
        return Err(LinkError::InvalidProtocol);
    };

    let host = rest
        .split(['/', '?', '#'])
        .next()
        .and_then(|authority| authority.rsplit('@').next())
        .and_then(|host_port| host_port.split(':').next())
        .unwrap_or("");
    if host.is_empty() {
        return Err(LinkError::NoHost);
    }

    Ok(url)
}

/// Strip an http(s) scheme, matched case-insensitively.
fn strip_scheme(url: &str) -> Option<&str> {
    ["https://", "http://"].iter().find_map(|scheme| {
        let head = url.get(..scheme.len())?;
        head.eq_ignore_ascii_case(scheme)
            .then(|| &url[scheme.len()..])
    })
}

/// Whether a media URL points at a video (by extension, any case).
pub fn is_video_url(url: &str) -> bool {
    let Some((_, ext)) = url.rsplit_once('.') else {
        return false;
    };
    VIDEO_EXTENSIONS
        .iter()
        .any(|video| ext.eq_ignore_ascii_case(video))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_links() {
        assert_eq!(
            validate_link("https://twitter.com/user"),
            Ok("https://twitter.com/user")
        );
        assert_eq!(validate_link("  http://x.com  "), Ok("http://x.com"));
        assert!(validate_link("HTTPS://Example.com/a?b=c").is_ok());
        assert!(validate_link("https://example.com:8443").is_ok());
    }

    #[test]
    fn test_invalid_links() {
        assert_eq!(validate_link(""), Err(LinkError::Empty));
        assert_eq!(validate_link("   "), Err(LinkError::Empty));
        assert_eq!(
            validate_link("javascript:alert(1)"),
            Err(LinkError::InvalidProtocol)
        );
        assert_eq!(
            validate_link("ftp://example.com"),
            Err(LinkError::InvalidProtocol)
        );
        assert_eq!(validate_link("https://"), Err(LinkError::NoHost));
        assert_eq!(validate_link("https:///path"), Err(LinkError::NoHost));
    }

    #[test]
    fn test_is_video_url() {
        assert!(is_video_url("https://cdn.example.com/media/1_abc.mp4"));
        assert!(is_video_url("https://cdn.example.com/clip.WEBM"));
        assert!(is_video_url("https://cdn.example.com/a.ogg"));
        assert!(!is_video_url("https://cdn.example.com/cat.png"));
        assert!(!is_video_url("https://cdn.example.com/mp4"));
    }
}
