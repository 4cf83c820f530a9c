// Author: Dustin Pilgrim
// License: MIT

//! Line-level view of a document: normalization plus the predicates the
//! parser uses to classify each line.

use tracing::debug;

mod scanner;

pub(crate) use scanner::{is_quote, strip_key_quotes};

pub const COMMENT_MARKER: char = '#';
pub const SEPARATOR: char = ':';
pub const LIST_MARKER: &str = "- ";
pub const EMPTY_MAP_MARKER: &str = "{}";
pub const EMPTY_LIST_MARKER: &str = "[]";
pub const INDENT_UNIT: &str = "  ";

/// Bookkeeping key written by the runtime; never part of the model.
pub const SKIPPED_KEY: &str = "loaded";
pub const NAME_KEY: &str = "name";
pub const TYPE_KEY: &str = "type";

/// Keys whose sequences hold composite elements rather than strings.
pub const COMPOSITE_KEYS: [&str; 2] = ["components", "children"];

/// One normalized source line with its leading-space count precomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    text: String,
    indent: usize,
}

impl Line {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let indent = text.len() - text.trim_start_matches(' ').len();
        Self { text, indent }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of leading spaces. Tabs do not count.
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// The line without its leading spaces.
    pub fn content(&self) -> &str {
        &self.text[self.indent..]
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn is_comment(&self) -> bool {
        self.text.trim_start().starts_with(COMMENT_MARKER)
    }

    /// Blank and comment lines carry nothing and are skipped everywhere.
    pub fn is_significant(&self) -> bool {
        !self.is_blank() && !self.is_comment()
    }

    pub fn is_list_item(&self) -> bool {
        self.list_item().is_some()
    }

    /// Text after the `- ` marker. A lone `-` is an empty item.
    pub fn list_item(&self) -> Option<&str> {
        let content = self.content();
        if content == LIST_MARKER.trim_end() {
            return Some("");
        }
        content.strip_prefix(LIST_MARKER)
    }

    /// Split into raw key and value text around the first separator.
    ///
    /// A quoted key may itself contain the separator. The value has its
    /// leading whitespace removed; the key its trailing whitespace.
    pub fn split_entry(&self) -> Option<(&str, &str)> {
        let content = self.content();
        let search_from = match content.chars().next() {
            Some(q) if is_quote(q) => content[1..].find(q).map_or(0, |end| end + 2),
            _ => 0,
        };
        let pos = content[search_from..].find(SEPARATOR)? + search_from;
        let key = content[..pos].trim_end();
        let value = content[pos + SEPARATOR.len_utf8()..].trim_start();
        Some((key, value))
    }
}

/// Empty-braces marker check on a raw value.
pub fn is_empty_map_suffix(value: &str) -> bool {
    value == EMPTY_MAP_MARKER
}

pub fn is_empty_list_suffix(value: &str) -> bool {
    value == EMPTY_LIST_MARKER
}

/// Canonicalize raw text into lines.
///
/// `\r\n` and lone `\r` become `\n`, trailing spaces and tabs are stripped,
/// and whitespace-only lines are dropped entirely.
pub fn normalize(input: &str) -> Vec<Line> {
    let unified = input.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<Line> = unified
        .split('\n')
        .map(|line| line.trim_end_matches([' ', '\t']))
        .filter(|line| !line.trim().is_empty())
        .map(Line::new)
        .collect();

    debug!(lines = lines.len(), "normalized document");
    lines
}
