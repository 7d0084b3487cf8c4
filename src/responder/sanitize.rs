//! Prompt sanitization.
//!
//! Prompts are display text only. Markup, script payloads, control and
//! bidi-override characters are stripped or neutralized before any rule
//! looks at them.

use std::sync::LazyLock;

use regex::Regex;

static CONTROL_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x00-\x08\x0B\x0C\x0E-\x1F\x7F-\x{9F}\x{202A}-\x{202E}\x{2066}-\x{2069}]")
        .expect("valid control character pattern")
});

static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script.*?>.*?</script\s*>").expect("valid script block pattern")
});

static STYLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<style.*?>.*?</style\s*>").expect("valid style block pattern")
});

static STYLE_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)style\s*=\s*['"].*?['"]"#).expect("valid style attribute pattern")
});

static EVENT_HANDLER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bon\w+\s*=").expect("valid event handler pattern"));

static DANGEROUS_SCHEME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(javascript|data|vbscript|file|about|mocha|livescript)\s*:")
        .expect("valid URI scheme pattern")
});

/// Escapes the characters that are significant in HTML.
fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Cleans a prompt for display and rule matching.
///
/// Truncates to `max_chars` characters, strips control and bidi characters,
/// drops `<script>`/`<style>` blocks, inline styles and `on*=` handlers,
/// HTML-escapes the rest, defuses dangerous URI schemes and trims.
///
/// # Example
///
/// ```
/// use whiteboard_challenges::responder::sanitize;
///
/// assert_eq!(sanitize("<script>alert(1)</script>Hi?", 300), "Hi?");
/// assert_eq!(sanitize("  a < b  ", 300), "a &lt; b");
/// ```
pub fn sanitize(input: &str, max_chars: usize) -> String {
    let truncated: String = input.chars().take(max_chars).collect();

    let cleaned = CONTROL_CHARS.replace_all(&truncated, "");
    let cleaned = SCRIPT_BLOCK.replace_all(&cleaned, "");
    let cleaned = STYLE_BLOCK.replace_all(&cleaned, "");
    let cleaned = STYLE_ATTRIBUTE.replace_all(&cleaned, "");
    let cleaned = EVENT_HANDLER.replace_all(&cleaned, "");

    let escaped = escape_html(&cleaned);
    let defused = DANGEROUS_SCHEME.replace_all(&escaped, "${1}&#58;");

    defused.trim().to_string()
}
