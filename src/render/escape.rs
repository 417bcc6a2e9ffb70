//! HTML text escaping.

/// Escape text for inclusion in HTML element content.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with entities and NUL with U+FFFD.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&#34;"),
            '\'' => result.push_str("&#39;"),
            '\0' => result.push('\u{FFFD}'),
            _ => result.push(c),
        }
    }
    result
}
