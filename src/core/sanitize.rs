// src/core/sanitize.rs

/// Collapse whitespace runs (incl. newlines, NBSP) to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Replace line breaks with spaces, keeping everything else as-is.
/// Used for multi-line definition lists that must fit in one table cell.
pub fn flatten_lines(s: &str) -> String {
    s.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// Last non-empty path segment of a URL-ish string.
pub fn file_name_from_url(url: &str) -> Option<&str> {
    let path = url.split(['?', '#']).next()?;
    path.rsplit('/').find(|seg| !seg.is_empty())
}
