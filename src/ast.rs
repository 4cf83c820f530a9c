// Author: Dustin Pilgrim
// License: MIT

use indexmap::IndexMap;

use crate::lexer::{EMPTY_LIST_MARKER, NAME_KEY, TYPE_KEY};

/// An atomic typed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    String(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    /// Ordered `- item` lines under a key.
    List(Vec<String>),
    Node(Node),
    /// Consumer-built composite elements (skill components, child components).
    /// Only rendered under the reserved composite keys; never produced by the parser.
    Components(Vec<Node>),
}

/// One level of a document tree: an ordered mapping from keys to values.
///
/// Keys are unique; `put` on an existing key overwrites the value in place
/// and keeps the key's original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    label: Option<String>,
    entries: IndexMap<String, Value>,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            entries: IndexMap::new(),
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    /// The label used for a header line: the node's own label, else a string `name` entry.
    pub fn display_label(&self) -> Option<&str> {
        self.label().or_else(|| match self.entries.get(NAME_KEY) {
            Some(Value::Scalar(Scalar::String(name))) => Some(name.as_str()),
            _ => None,
        })
    }

    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Owned lookup with a fallback.
    ///
    /// A string scalar holding the literal `[]` is returned as an empty list.
    pub fn get_or(&self, key: &str, default: Value) -> Value {
        match self.entries.get(key) {
            Some(Value::Scalar(Scalar::String(s))) if s == EMPTY_LIST_MARKER => {
                Value::List(Vec::new())
            }
            Some(value) => value.clone(),
            None => default,
        }
    }

    /// Like [`Node::get_or`], passing a present value through `mapping`.
    /// The default is returned untouched.
    pub fn get_with<T, F>(&self, key: &str, default: T, mapping: F) -> T
    where
        F: FnOnce(Value) -> T,
    {
        if self.has(key) {
            mapping(self.get_or(key, Value::List(Vec::new())))
        } else {
            default
        }
    }

    /// Typed lookup. Fails with `MissingKey` or `TypeError`.
    pub fn get_as<T>(&self, key: &str) -> Result<T, crate::CfgError>
    where
        T: for<'a> TryFrom<&'a Value, Error = crate::CfgError>,
    {
        if !self.has(key) {
            return Err(crate::CfgError::missing_key(key));
        }
        let value = self.get_or(key, Value::List(Vec::new()));
        T::try_from(&value).map_err(|e| e.with_key(key))
    }

    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Removes a key, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn section(&self, key: &str) -> Option<&Node> {
        match self.entries.get(key) {
            Some(Value::Node(node)) => Some(node),
            _ => None,
        }
    }

    pub fn section_mut(&mut self, key: &str) -> Option<&mut Node> {
        match self.entries.get_mut(key) {
            Some(Value::Node(node)) => Some(node),
            _ => None,
        }
    }

    /// The `type` entry of the nested section stored under `key`.
    pub fn component_type(&self, key: &str) -> Option<&str> {
        self.section(key)?.get(TYPE_KEY)?.as_str()
    }

    /// Resolve a dotted path (`a.b.c`) through nested sections.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.entries.get(first)?;
        for segment in segments {
            match current {
                Value::Node(node) => current = node.entries.get(segment)?,
                _ => return None,
            }
        }
        Some(current)
    }

    /// Replace this node's entries with those of its single same-named child section.
    ///
    /// Returns whether a level was discarded.
    pub(crate) fn collapse_self(&mut self) -> bool {
        let Some(label) = self.label.as_deref() else {
            return false;
        };
        if self.entries.len() != 1 || !matches!(self.entries.get(label), Some(Value::Node(_))) {
            return false;
        }
        if let Some(Value::Node(inner)) = self.entries.shift_remove(label) {
            self.entries = inner.entries;
            return true;
        }
        false
    }
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        if let Value::Node(node) = self {
            Some(node)
        } else {
            None
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        if let Value::List(items) = self {
            Some(items)
        } else {
            None
        }
    }

    /// Short shape name used in type errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Scalar(Scalar::Integer(_)) => "integer",
            Value::Scalar(Scalar::Float(_)) => "float",
            Value::Scalar(Scalar::Boolean(_)) => "boolean",
            Value::Scalar(Scalar::String(_)) => "string",
            Value::List(_) => "list",
            Value::Node(_) => "section",
            Value::Components(_) => "components",
        }
    }
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        Value::Scalar(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(Scalar::String(s.to_string()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(Scalar::String(s))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Scalar(Scalar::Integer(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Scalar(Scalar::Integer(n as i64))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Scalar(Scalar::Float(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Scalar(Scalar::Boolean(b))
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items)
    }
}

impl From<Vec<&str>> for Value {
    fn from(items: Vec<&str>) -> Self {
        Value::List(items.into_iter().map(String::from).collect())
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Value::Node(node)
    }
}

impl From<Vec<Node>> for Value {
    fn from(nodes: Vec<Node>) -> Self {
        Value::Components(nodes)
    }
}
