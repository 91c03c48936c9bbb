

/// First `max_chars` characters of `s`, never splitting a code point.
#[inline]
pub fn safe_truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}


#[inline]
pub fn safe_truncate_ellipsis(s: &str, max_chars: usize) -> String {
    let truncated = safe_truncate(s, max_chars);
    if truncated.len() < s.len() {
        format!("{truncated}...")
    } else {
        s.to_string()
    }
}

/// Single spaces between words, no leading or trailing whitespace.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
