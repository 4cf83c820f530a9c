// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::ast::Node;
use crate::parser::Parser;
use crate::serializer;
use crate::CfgError;

mod access;
mod components;
mod conversion;
pub(crate) mod helpers;

pub use components::ComponentKind;

/// A parsed data document plus where it came from.
///
/// This is the only place raw text crosses into or out of the codec.
pub struct DataFile {
    root: Node,
    origin: Option<PathBuf>,
}

impl DataFile {
    /// Load a document file. A leading `~/` is expanded to the home directory.
    ///
    /// # Example
    /// ```ignore
    /// let data = DataFile::from_file("~/skills/fireball.yml")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CfgError> {
        let path = helpers::resolve_path(path.as_ref())?;

        let content = fs::read_to_string(&path).map_err(|e| CfgError::FileError {
            message: format!("Failed to read file: {}", e),
            path: path.to_string_lossy().to_string(),
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(301),
        })?;

        debug!(path = %path.display(), bytes = content.len(), "loaded data file");
        let mut file = Self::from_str(&content);
        file.origin = Some(path);
        Ok(file)
    }

    /// Load from the primary path, falling back to the second one if the
    /// primary cannot be read.
    pub fn from_file_with_fallback<P: AsRef<Path>>(primary: P, fallback: P) -> Result<Self, CfgError> {
        match Self::from_file(&primary) {
            Ok(file) => Ok(file),
            Err(CfgError::FileError { message: first, .. }) => {
                warn!(path = %primary.as_ref().display(), "primary data file unavailable, trying fallback");
                Self::from_file(&fallback).map_err(|e| match e {
                    CfgError::FileError { message, .. } => CfgError::FileError {
                        message: format!("{}; fallback: {}", first, message),
                        path: format!(
                            "{} (fallback: {})",
                            primary.as_ref().display(),
                            fallback.as_ref().display()
                        ),
                        hint: Some("Check that at least one of the files exists".into()),
                        code: Some(301),
                    },
                    other => other,
                })
            }
            Err(other) => Err(other),
        }
    }

    /// Parse a document from text. Never fails; unreadable lines are dropped.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Self {
        Self {
            root: Parser::new(content).parse_document(),
            origin: None,
        }
    }

    pub fn from_node(root: Node) -> Self {
        Self { root, origin: None }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    pub fn to_text(&self) -> String {
        serializer::serialize(&self.root)
    }

    /// Serialize and write to `path`, creating parent directories as needed.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), CfgError> {
        let path = helpers::resolve_path(path.as_ref())?;
        let file_error = |e: std::io::Error| CfgError::FileError {
            message: format!("Failed to write file: {}", e),
            path: path.to_string_lossy().to_string(),
            hint: Some("Check that the directory is writable".into()),
            code: Some(302),
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(file_error)?;
        }
        let text = self.to_text();
        fs::write(&path, &text).map_err(file_error)?;

        debug!(path = %path.display(), bytes = text.len(), "saved data file");
        Ok(())
    }

    /// Write back to the file this document was loaded from.
    pub fn save_to_origin(&self) -> Result<(), CfgError> {
        match &self.origin {
            Some(path) => self.save(path),
            None => Err(CfgError::FileError {
                message: "Document was not loaded from a file".into(),
                path: String::new(),
                hint: Some("Use save(path) instead".into()),
                code: Some(303),
            }),
        }
    }
}
