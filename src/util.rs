//! Shared utility functions

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate a string to at most `max_width` terminal columns, appending an
/// ellipsis when anything was cut.
///
/// Width is measured in display columns (CJK characters and emoji count as
/// two), so truncated table cells line up regardless of content.
///
/// # Examples
///
/// ```
/// use linkdeck::util::truncate_to_width;
///
/// assert_eq!(truncate_to_width("http://example.com", 30), "http://example.com");
/// assert_eq!(truncate_to_width("http://example.com/long/path", 12), "http://exam…");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if s.width() <= max_width {
        return s.to_string();
    }

    // Reserve one column for the ellipsis
    let budget = max_width - 1;
    let mut width = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(ch);
    }
    out.push('…');
    out
}
