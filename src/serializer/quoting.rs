// Author: Dustin Pilgrim
// License: MIT

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static APOSTROPHE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\?'").expect("apostrophe pattern is valid"));

static DOUBLE_QUOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\\?""#).expect("double quote pattern is valid"));

/// Rewrite double-quoted output into the single-quoted house style.
///
/// Apostrophes become `\'`, bare double quotes become apostrophes, and
/// escaped double quotes survive as literal `"`.
pub(super) fn apply(text: &str) -> String {
    let escaped = APOSTROPHE.replace_all(text, r"\'");
    DOUBLE_QUOTE
        .replace_all(&escaped, |caps: &Captures| {
            if caps[0].starts_with('\\') { "\"" } else { "'" }
        })
        .into_owned()
}
