// Author: Dustin Pilgrim
// License: MIT

use crate::ast::Scalar;
use crate::lexer::{is_empty_list_suffix, is_empty_map_suffix, Line};
use crate::scalar;

/// What an entry line holds, decided once by lookahead.
pub(super) enum Shape {
    EmptyMap,
    EmptyList,
    List { items: Vec<String>, next: usize },
    Nested { at: usize, indent: usize },
    Scalar(Scalar),
}

fn next_significant(lines: &[Line], from: usize) -> Option<usize> {
    (from..lines.len()).find(|&i| lines[i].is_significant())
}

/// Classify the entry on line `index` of a section at `indent`.
///
/// Precedence: `{}`, `[]`, following `- item` lines, deeper following line, scalar.
pub(super) fn classify(lines: &[Line], index: usize, indent: usize, raw_value: &str) -> Shape {
    if is_empty_map_suffix(raw_value) {
        return Shape::EmptyMap;
    }
    if is_empty_list_suffix(raw_value) {
        return Shape::EmptyList;
    }

    if let Some(next) = next_significant(lines, index + 1) {
        let line = &lines[next];
        if line.is_list_item() && line.indent() >= indent {
            let (items, after) = collect_list(lines, next, line.indent());
            // Deeper items followed by entries at that same depth open a section.
            let section_follows = line.indent() > indent
                && next_significant(lines, after).is_some_and(|i| lines[i].indent() == line.indent());
            if !section_follows {
                return Shape::List { items, next: after };
            }
        }
        if line.indent() > indent {
            return Shape::Nested {
                at: next,
                indent: line.indent(),
            };
        }
    }

    Shape::Scalar(scalar::coerce(raw_value))
}

/// Consume consecutive `- item` lines at `indent`, starting at `start`.
fn collect_list(lines: &[Line], start: usize, indent: usize) -> (Vec<String>, usize) {
    let mut items = Vec::new();
    let mut index = start;

    while let Some(line) = lines.get(index) {
        if !line.is_significant() {
            index += 1;
            continue;
        }
        if line.indent() != indent {
            break;
        }
        match line.list_item() {
            Some(text) => items.push(scalar::coerce_list_item(text)),
            None => break,
        }
        index += 1;
    }

    (items, index)
}
