// Author: Dustin Pilgrim
// License: MIT

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::DataFile;
use crate::ast::{Node, Value};
use crate::CfgError;

/// The category named by a section's `type` entry. The collaborator that
/// builds concrete game objects dispatches on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Trigger,
    Target,
    Condition,
    Mechanic,
}

impl ComponentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Trigger => "trigger",
            ComponentKind::Target => "target",
            ComponentKind::Condition => "condition",
            ComponentKind::Mechanic => "mechanic",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = CfgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trigger" => Ok(ComponentKind::Trigger),
            "target" => Ok(ComponentKind::Target),
            "condition" => Ok(ComponentKind::Condition),
            "mechanic" => Ok(ComponentKind::Mechanic),
            _ => Err(CfgError::TypeError {
                message: format!("Unknown component type '{}'", s),
                key: "type".into(),
                hint: Some("Expected one of: trigger, target, condition, mechanic".into()),
                code: Some(410),
            }),
        }
    }
}

impl DataFile {
    /// Top-level sections whose `type` names a known component kind, in
    /// document order. Sections without one are left out.
    pub fn components(&self) -> Vec<(&str, ComponentKind, &Node)> {
        self.root
            .iter()
            .filter_map(|(key, value)| {
                let Value::Node(section) = value else {
                    return None;
                };
                let kind: ComponentKind = self.root.component_type(key)?.parse().ok()?;
                Some((key.as_str(), kind, section))
            })
            .collect()
    }
}
