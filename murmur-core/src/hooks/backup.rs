//! Timestamped backups taken before corrective writes

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::info;

use crate::error::HookError;

/// Copy the file at `path` to `<path>.bak.<timestamp>-<kind>`.
///
/// Returns `None` when there is no file to back up. Backups are never
/// overwritten; a numeric suffix is appended on collision.
pub fn backup_file(path: &Path, kind: &str) -> Result<Option<PathBuf>, HookError> {
    if !path.is_file() {
        return Ok(None);
    }

    let timestamp = Utc::now().format("%Y%m%dT%H%M%S%.3fZ");
    let base = backup_name(path, &format!(".bak.{timestamp}-{kind}"));
    let mut backup = base.clone();
    let mut attempt = 1;
    while backup.exists() {
        backup = backup_name(&base, &format!(".{attempt}"));
        attempt += 1;
    }

    fs::copy(path, &backup).map_err(|source| HookError::Backup {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Backed up {:?} to {:?}", path, backup);
    Ok(Some(backup))
}

fn backup_name(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}
