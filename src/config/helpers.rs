use std::path::{Path, PathBuf};

use crate::CfgError;

/// Expand a leading `~/` to the home directory.
pub(crate) fn resolve_path(raw: &Path) -> Result<PathBuf, CfgError> {
    let Ok(rest) = raw.strip_prefix("~") else {
        return Ok(raw.to_path_buf());
    };

    let home = dirs::home_dir().ok_or_else(|| CfgError::FileError {
        message: "Could not determine home directory for ~ expansion".into(),
        path: raw.to_string_lossy().to_string(),
        hint: Some("Set HOME or use an absolute path".into()),
        code: Some(300),
    })?;
    Ok(home.join(rest))
}
