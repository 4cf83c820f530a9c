// Author: Dustin Pilgrim
// License: MIT

use super::*;
use crate::ast::Value;

impl DataFile {
    /// Get a typed value using dot notation through nested sections.
    ///
    /// # Examples
    /// ```ignore
    /// let level: i64 = data.get("level")?;
    /// let health: f64 = data.get("attributes.health-base")?;
    /// let tags: Vec<String> = data.get("tags")?;
    /// ```
    ///
    /// # Errors
    /// `MissingKey` if the path does not resolve, `TypeError` if the value
    /// cannot be converted to `T`.
    pub fn get<T>(&self, path: &str) -> Result<T, CfgError>
    where
        T: for<'a> TryFrom<&'a Value, Error = CfgError>,
    {
        let (parent, key) = self.resolve_parent(path)?;
        parent.get_as(key).map_err(|e| match e {
            CfgError::MissingKey { hint, code, .. } => CfgError::MissingKey {
                key: path.to_string(),
                hint,
                code,
            },
            other => other.with_key(path),
        })
    }

    /// Get a value with a fallback default.
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: for<'a> TryFrom<&'a Value, Error = CfgError>,
    {
        self.get(path).unwrap_or(default)
    }

    /// Get an optional typed value - `None` if the path doesn't exist.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, CfgError>
    where
        T: for<'a> TryFrom<&'a Value, Error = CfgError>,
    {
        match self.get(path) {
            Ok(value) => Ok(Some(value)),
            Err(CfgError::MissingKey { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn has(&self, path: &str) -> bool {
        self.root.lookup(path).is_some()
    }

    /// Keys of the section at `path`, in document order. An empty path
    /// lists the root.
    pub fn get_keys(&self, path: &str) -> Result<Vec<String>, CfgError> {
        if path.trim().is_empty() {
            return Ok(self.root.keys());
        }
        match self.root.lookup(path) {
            Some(Value::Node(node)) => Ok(node.keys()),
            Some(other) => Err(CfgError::TypeError {
                message: format!("Expected section, got {}", other.kind()),
                key: path.to_string(),
                hint: Some("Only sections have keys".into()),
                code: Some(306),
            }),
            None => Err(CfgError::missing_key(path)),
        }
    }

    /// Put a value at a dotted path. Parent sections must already exist.
    pub fn put(&mut self, path: &str, value: impl Into<Value>) -> Result<(), CfgError> {
        let (parent_path, key) = split_path(path);
        let parent = match parent_path {
            Some(parent_path) => self
                .section_at_mut(parent_path)
                .ok_or_else(|| CfgError::missing_key(parent_path))?,
            None => &mut self.root,
        };
        parent.put(key, value);
        Ok(())
    }

    pub fn remove(&mut self, path: &str) -> Option<Value> {
        let (parent_path, key) = split_path(path);
        match parent_path {
            Some(parent_path) => self.section_at_mut(parent_path)?.remove(key),
            None => self.root.remove(key),
        }
    }

    fn resolve_parent<'a, 'p>(&'a self, path: &'p str) -> Result<(&'a Node, &'p str), CfgError> {
        let (parent_path, key) = split_path(path);
        let parent = match parent_path {
            Some(parent_path) => match self.root.lookup(parent_path) {
                Some(Value::Node(node)) => node,
                _ => return Err(CfgError::missing_key(path)),
            },
            None => &self.root,
        };
        Ok((parent, key))
    }

    fn section_at_mut(&mut self, path: &str) -> Option<&mut Node> {
        let mut node = &mut self.root;
        for segment in path.split('.') {
            node = node.section_mut(segment)?;
        }
        Some(node)
    }
}

fn split_path(path: &str) -> (Option<&str>, &str) {
    match path.rsplit_once('.') {
        Some((parent, key)) => (Some(parent), key),
        None => (None, path),
    }
}
