// Author: Dustin Pilgrim
// License: MIT

//! Writes a [`Node`] tree back out as indentation-based text.

use std::borrow::Cow;

use tracing::{debug, warn};

use crate::ast::{Node, Scalar, Value};
use crate::lexer::{
    is_quote, COMMENT_MARKER, COMPOSITE_KEYS, EMPTY_LIST_MARKER, EMPTY_MAP_MARKER, INDENT_UNIT,
    LIST_MARKER, SEPARATOR,
};
use crate::scalar;

mod quoting;

/// Serialize a tree. Never fails; shapes the format cannot hold degrade
/// to `key: []`.
///
/// # Examples
/// ```ignore
/// let text = skill_cfg::serialize(&root);
/// ```
pub fn serialize(node: &Node) -> String {
    let mut serializer = Serializer::new();
    serializer.write_section(node, node.display_label(), 0);
    debug!(entries = node.len(), bytes = serializer.out.len(), "serialized document");
    quoting::apply(&serializer.out)
}

struct Serializer {
    out: String,
    /// Suffix source for composite element labels.
    next_id: usize,
}

impl Serializer {
    fn new() -> Self {
        Self {
            out: String::new(),
            next_id: 0,
        }
    }

    fn line(&mut self, depth: usize, text: &str) {
        for _ in 0..depth {
            self.out.push_str(INDENT_UNIT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// Write a section. With a header its entries go one level deeper.
    fn write_section(&mut self, node: &Node, header: Option<&str>, depth: usize) {
        let depth = match header {
            Some(label) if node.is_empty() => {
                let quoted = scalar::quote_string(label);
                self.line(depth, &format!("{}: {}", quoted, EMPTY_MAP_MARKER));
                return;
            }
            Some(label) => {
                self.line(depth, &format!("{}:", scalar::quote_string(label)));
                depth + 1
            }
            None => depth,
        };

        for (key, value) in node.iter() {
            self.write_entry(key, value, depth);
        }
    }

    /// List items are written at the key's own indent, not one level deeper.
    fn write_entry(&mut self, key: &str, value: &Value, depth: usize) {
        let key_text = entry_key(key);
        let key_text = key_text.as_ref();
        match value {
            Value::Scalar(s) => {
                self.line(depth, &format!("{}: {}", key_text, scalar::encode(s)));
            }
            Value::List(items) if items.is_empty() => {
                self.line(depth, &format!("{}: {}", key_text, EMPTY_LIST_MARKER));
            }
            Value::List(items) => {
                self.line(depth, &format!("{}:", key_text));
                for item in items {
                    let encoded = scalar::encode(&Scalar::String(item.clone()));
                    self.line(depth, &format!("- {}", encoded));
                }
            }
            Value::Node(child) => {
                let header = child.label().unwrap_or(key);
                self.write_section(child, Some(header), depth);
            }
            Value::Components(elements) if !COMPOSITE_KEYS.contains(&key) => {
                warn!(key, count = elements.len(), "components under a non-composite key are not serialized");
                self.line(depth, &format!("{}: {}", key_text, EMPTY_LIST_MARKER));
            }
            Value::Components(elements) if elements.is_empty() => {
                self.line(depth, &format!("{}: {}", key_text, EMPTY_MAP_MARKER));
            }
            Value::Components(elements) => {
                self.line(depth, &format!("{}:", key_text));
                for element in elements {
                    let label = self.unique_label(element);
                    self.write_section(element, Some(&label), depth + 1);
                }
            }
        }
    }

    /// `<name>-<n>`, so same-named siblings never collide.
    fn unique_label(&mut self, element: &Node) -> String {
        let id = self.next_id;
        self.next_id += 1;
        format!("{}-{}", element.display_label().unwrap_or("component"), id)
    }
}

/// Quote a key the parser would otherwise split, skip or read as a list item.
fn entry_key(key: &str) -> Cow<'_, str> {
    let needs_quotes = key.contains(SEPARATOR)
        || key.starts_with(is_quote)
        || key.starts_with(COMMENT_MARKER)
        || key.starts_with(LIST_MARKER)
        || key == LIST_MARKER.trim_end();
    if needs_quotes {
        Cow::Owned(scalar::quote_string(key))
    } else {
        Cow::Borrowed(key)
    }
}

#[cfg(test)]
mod tests;
