// Author: Dustin Pilgrim
// License: MIT

pub(crate) fn is_quote(c: char) -> bool {
    c == '\'' || c == '"'
}

/// Strip one layer of matching quotes surrounding a key.
/// Anything not wrapped in a matching pair is returned as-is.
pub(crate) fn strip_key_quotes(key: &str) -> &str {
    let mut chars = key.chars();
    match (chars.next(), chars.next_back()) {
        (Some(open), Some(close)) if is_quote(open) && open == close => &key[1..key.len() - 1],
        _ => key,
    }
}
