//! Rich-text sanitizer for user-submitted messages.
//!
//! Text is escaped first and markers are substituted afterwards, so the
//! only tags that can appear in the output are the fixed templates below.
//! Nothing derived from user input is ever emitted as markup.
//!
//! Escaping is not idempotent: `sanitize(sanitize(x))` re-escapes the
//! entities produced by the first call (`&amp;` becomes `&amp;amp;`).
//! Callers must sanitize raw text exactly once.

use std::sync::LazyLock;

use regex::Regex;

/// A marker pair and the markup it is replaced with.
struct Marker {
    pattern: LazyLock<Regex>,
    replacement: &'static str,
}

// Marker bodies are non-greedy and stop at line terminators.
static BOLD: Marker = Marker {
    pattern: LazyLock::new(|| marker_regex('b')),
    replacement: "<strong>${1}</strong>",
};

static ITALIC: Marker = Marker {
    pattern: LazyLock::new(|| marker_regex('i')),
    replacement: "<em>${1}</em>",
};

static STRIKE: Marker = Marker {
    pattern: LazyLock::new(|| marker_regex('s')),
    replacement: "<s>${1}</s>",
};

fn marker_regex(tag: char) -> Regex {
    let upper = tag.to_ascii_uppercase();
    let pattern = format!(
        r"\[[{tag}{upper}]\]([^\n\r\x{{2028}}\x{{2029}}]*?)\[/[{tag}{upper}]\]"
    );
    Regex::new(&pattern).expect("marker pattern is a valid regex")
}

/// Escape the five HTML-significant characters.
///
/// `&` `<` `>` `"` `'` become `&amp;` `&lt;` `&gt;` `&quot;` `&#39;`.
/// Everything else passes through unchanged.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Convert raw user text into markup safe for direct insertion.
///
/// After escaping, `[b]X[/b]`, `[i]X[/i]` and `[s]X[/s]` (marker letters in
/// either case) become `<strong>X</strong>`, `<em>X</em>` and `<s>X</s>`.
/// Each pass takes the shortest body up to the next closing marker of its
/// kind, so same-kind nesting is not supported and an unterminated marker
/// stays literal. Total over all inputs.
pub fn sanitize(raw_text: &str) -> String {
    let mut markup = escape_html(raw_text);
    // Bold, then italic, then strikethrough
    for marker in [&BOLD, &ITALIC, &STRIKE] {
        markup = marker
            .pattern
            .replace_all(&markup, marker.replacement)
            .into_owned();
    }
    markup
}
