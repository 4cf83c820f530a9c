// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

/// The main error type for skill-cfg access, I/O and export.
///
/// Document content never produces one of these: malformed lines are dropped
/// by the parser. Errors only come from consumer misuse (asking for the wrong
/// type), missing keys on strict lookups, and the file/export helpers.
#[derive(Debug, Clone, PartialEq)]
pub enum CfgError {
    /// Raised when a stored value cannot be converted to the requested type.
    TypeError {
        message: String,
        key: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    MissingKey {
        key: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    ExportError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl CfgError {
    pub(crate) fn type_error(key: &str, expected: &str, found: &str) -> Self {
        CfgError::TypeError {
            message: format!("Expected {}, got {}", expected, found),
            key: key.to_string(),
            hint: Some(format!("Store a {} value under this key", expected)),
            code: Some(401),
        }
    }

    pub(crate) fn missing_key(key: &str) -> Self {
        CfgError::MissingKey {
            key: key.to_string(),
            hint: Some("Check that the key exists in the document".into()),
            code: Some(304),
        }
    }

    /// Attach the key the failed conversion was made for.
    pub(crate) fn with_key(self, key: &str) -> Self {
        match self {
            CfgError::TypeError { message, hint, code, .. } => CfgError::TypeError {
                message,
                key: key.to_string(),
                hint,
                code,
            },
            other => other,
        }
    }
}

fn suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

impl fmt::Display for CfgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CfgError::TypeError { message, key, hint, code } => write!(
                f,
                "[skill-cfg] Type Error for '{}': {}{}",
                key,
                message,
                suffix(hint, code)
            ),
            CfgError::MissingKey { key, hint, code } => write!(
                f,
                "[skill-cfg] Key '{}' not found{}",
                key,
                suffix(hint, code)
            ),
            CfgError::FileError { message, path, hint, code } => write!(
                f,
                "[skill-cfg] File Error '{}': {}{}",
                path,
                message,
                suffix(hint, code)
            ),
            CfgError::ExportError { message, hint, code } => write!(
                f,
                "[skill-cfg] Export Error: {}{}",
                message,
                suffix(hint, code)
            ),
        }
    }
}

impl std::error::Error for CfgError {}
