// Author: Dustin Pilgrim
// License: MIT

use tracing::{debug, trace};

use super::value::{self, Shape};
use crate::ast::{Node, Value};
use crate::lexer::{strip_key_quotes, Line, SKIPPED_KEY};

/// A section under construction.
struct Frame {
    node: Node,
    indent: usize,
}

impl Frame {
    fn new(indent: usize, label: Option<String>) -> Self {
        let mut node = Node::new();
        node.set_label(label);
        Self { node, indent }
    }

    fn finish(mut self) -> Node {
        if self.node.collapse_self() {
            debug!(label = ?self.node.label(), "collapsed self-named section");
        }
        self.node
    }
}

enum Scan {
    /// Next entry line for the current section.
    Entry(usize),
    /// The section ends before this index.
    End(usize),
}

/// Find the next line that is an entry of a section at `indent`, dropping
/// anything in between that cannot be one.
fn scan(lines: &[Line], mut index: usize, indent: usize) -> Scan {
    while let Some(line) = lines.get(index) {
        if !line.is_significant() {
            trace!(line = index, "skipping comment");
        } else if line.indent() < indent {
            return Scan::End(index);
        } else if line.indent() != indent {
            trace!(line = index, indent = line.indent(), expected = indent, "skipping misindented line");
        } else if line.is_list_item() {
            trace!(line = index, "skipping stray list item");
        } else if line.split_entry().is_none() {
            trace!(line = index, "skipping line without separator");
        } else {
            return Scan::Entry(index);
        }
        index += 1;
    }
    Scan::End(index)
}

/// Build a section tree with an explicit stack of open frames, so nesting
/// depth never grows the call stack.
pub(super) fn parse_section(
    lines: &[Line],
    start: usize,
    expected_indent: usize,
    label: Option<&str>,
) -> (Node, usize) {
    let mut current = Frame::new(expected_indent, label.map(String::from));
    let mut parents: Vec<(Frame, String)> = Vec::new();
    let mut index = start;

    loop {
        match scan(lines, index, current.indent) {
            Scan::End(at) => {
                index = at;
                let node = current.finish();
                match parents.pop() {
                    Some((mut parent, key)) => {
                        parent.node.put(key, node);
                        current = parent;
                    }
                    None => {
                        debug!(entries = node.len(), next = index, "parsed section");
                        return (node, index);
                    }
                }
            }
            Scan::Entry(at) => {
                index = at;
                let Some((raw_key, raw_value)) = lines[index].split_entry() else {
                    index += 1;
                    continue;
                };

                if raw_key == SKIPPED_KEY {
                    trace!(line = index, "skipping reserved key");
                    index += 1;
                    continue;
                }

                let key = strip_key_quotes(raw_key).to_string();
                if current.node.label().is_none() {
                    current.node.set_label(Some(key.clone()));
                }

                match value::classify(lines, index, current.indent, raw_value) {
                    Shape::EmptyMap => {
                        current.node.put(key.clone(), Node::with_label(key));
                        index += 1;
                    }
                    Shape::EmptyList => {
                        current.node.put(key, Value::List(Vec::new()));
                        index += 1;
                    }
                    Shape::List { items, next } => {
                        current.node.put(key, Value::List(items));
                        index = next;
                    }
                    Shape::Nested { at, indent } => {
                        let child = Frame::new(indent, Some(key.clone()));
                        let parent = std::mem::replace(&mut current, child);
                        parents.push((parent, key));
                        index = at;
                    }
                    Shape::Scalar(scalar) => {
                        current.node.put(key, Value::Scalar(scalar));
                        index += 1;
                    }
                }
            }
        }
    }
}
