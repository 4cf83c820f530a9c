// Author: Dustin Pilgrim
// License: MIT

use crate::ast::Node;
use crate::lexer::{self, Line};

mod document;
mod value;

/// Indentation parser over normalized lines.
///
/// Parsing never fails: lines it cannot place (wrong indent, comments,
/// no separator) are dropped and the rest of the document is kept.
pub struct Parser {
    lines: Vec<Line>,
}

impl Parser {
    pub fn new(input: &str) -> Self {
        Self {
            lines: lexer::normalize(input),
        }
    }

    pub fn from_lines(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Parse the whole input as one document rooted at its shallowest indent.
    pub fn parse_document(&self) -> Node {
        let indent = self
            .lines
            .iter()
            .filter(|line| line.is_significant())
            .map(Line::indent)
            .min()
            .unwrap_or(0);
        let (node, _) = self.parse_from(0, indent, None);
        node
    }

    /// Parse one section starting at `start` whose entries sit at `expected_indent`.
    ///
    /// Returns the section and the index of the first line it did not consume.
    pub fn parse_from(&self, start: usize, expected_indent: usize, label: Option<&str>) -> (Node, usize) {
        parse(&self.lines, start, expected_indent, label)
    }
}

pub fn parse(lines: &[Line], start: usize, expected_indent: usize, label: Option<&str>) -> (Node, usize) {
    document::parse_section(lines, start, expected_indent, label)
}

/// Normalize and parse a text blob in one call.
pub fn parse_document(input: &str) -> Node {
    Parser::new(input).parse_document()
}
