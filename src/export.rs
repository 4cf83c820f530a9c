// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::ast::{Node, Scalar, Value};
use crate::config::helpers::resolve_path;
use crate::parser::Parser;
use crate::CfgError;

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Integer(n) => serializer.serialize_i64(*n),
            Scalar::Float(f) => serializer.serialize_f64(*f),
            Scalar::Boolean(b) => serializer.serialize_bool(*b),
            Scalar::String(s) => serializer.serialize_str(s),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Scalar(s) => s.serialize(serializer),
            Value::List(items) => items.serialize(serializer),
            Value::Node(node) => node.serialize(serializer),
            Value::Components(nodes) => nodes.serialize(serializer),
        }
    }
}

/// A node serializes as its entries, in document order.
impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    label: Option<&'a str>,
    entries: &'a Node,
}

/// Export a parsed tree to pretty-printed JSON.
///
/// Scalars map directly, lists become arrays and sections become objects.
/// The root label is kept next to the entries:
/// `{"label": "Warrior", "entries": {...}}`.
pub fn export_node_to_json(node: &Node) -> Result<String, CfgError> {
    let document = JsonDocument {
        label: node.label(),
        entries: node,
    };

    serde_json::to_string_pretty(&document).map_err(|e| CfgError::ExportError {
        message: format!("Failed to encode JSON: {}", e),
        hint: None,
        code: Some(501),
    })
}

/// Read, parse and export a document file in one call. A leading `~/` is
/// expanded to the home directory.
///
/// # Errors
/// Returns error if the file cannot be read.
pub fn export_file_to_json<P: AsRef<Path>>(path: P) -> Result<String, CfgError> {
    let path = resolve_path(path.as_ref())?;
    let input = fs::read_to_string(&path).map_err(|e| CfgError::FileError {
        message: format!("Failed to read file: {}", e),
        path: path.to_string_lossy().to_string(),
        hint: None,
        code: Some(500),
    })?;

    let root = Parser::new(&input).parse_document();
    export_node_to_json(&root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;
    use std::io::Write;

    #[test]
    fn test_export_class_document() {
        let root = parse_document(
            "Warrior:\n  type: 'class'\n  level: 5\n  scale: 1.5\n  tags:\n  - 'tank'\n  stats:\n    health: 20\n",
        );

        let json_output = export_node_to_json(&root).expect("Failed to export document to JSON");
        let v: serde_json::Value = serde_json::from_str(&json_output).unwrap();

        assert_eq!(v["label"], "Warrior");
        assert_eq!(v["entries"]["type"], "class");
        assert_eq!(v["entries"]["level"], 5);
        assert_eq!(v["entries"]["scale"], 1.5);
        assert_eq!(v["entries"]["tags"][0], "tank");
        assert_eq!(v["entries"]["stats"]["health"], 20);
    }

    #[test]
    fn test_export_preserves_entry_order() {
        let root = parse_document("zeta: 1\nalpha: 2\nmid: 3\n");
        let json_output = export_node_to_json(&root).unwrap();

        let zeta = json_output.find("\"zeta\"").unwrap();
        let alpha = json_output.find("\"alpha\"").unwrap();
        let mid = json_output.find("\"mid\"").unwrap();
        assert!(zeta < alpha && alpha < mid);
    }

    #[test]
    fn test_export_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Mage:\n  level: 3").unwrap();

        let json_output = export_file_to_json(file.path()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json_output).unwrap();
        assert_eq!(v["entries"]["level"], 3);
    }

    #[test]
    fn test_export_missing_file() {
        let err = export_file_to_json("/definitely/not/here.yml").unwrap_err();
        assert!(matches!(err, CfgError::FileError { code: Some(500), .. }));
    }

    #[test]
    fn test_export_file_expands_home() {
        if let Some(home) = dirs::home_dir() {
            let err = export_file_to_json("~/definitely-not-here-skill-cfg.yml").unwrap_err();
            match err {
                CfgError::FileError { path, code, .. } => {
                    assert_eq!(code, Some(500));
                    assert_eq!(
                        path,
                        home.join("definitely-not-here-skill-cfg.yml").to_string_lossy()
                    );
                }
                other => panic!("Expected FileError, got {:?}", other),
            }
        }
    }
}
