//! Text escaping and visible character counting.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// Whitespace excluded from the visible count. `\s` already covers the
/// ideographic space; U+FEFF is listed for BOM-prefixed input.
static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\u{3000}\u{FEFF}]+").expect("whitespace pattern is valid"));

/// Escape HTML special characters
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(|c: char| matches!(c, '&' | '<' | '>' | '"' | '\'')) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len() + 16);

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }

    Cow::Owned(result)
}

/// Number of code points left after removing all whitespace
pub fn visible_len(text: &str) -> usize {
    WHITESPACE.replace_all(text, "").chars().count()
}
