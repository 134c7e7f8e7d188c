//! Installed script files
//!
//! Drift is detected by comparing SHA-256 digests of the installed bytes and
//! the embedded reference, never by timestamps or sizes.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

use sha2::{Digest, Sha256};
use tracing::debug;

use super::types::{ScriptInfo, ScriptStatus};
use crate::error::HookError;

/// SHA-256 digest of a script's content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash(pub [u8; 32]);

impl ContentHash {
    /// Compute hash from content
    pub fn of(content: &[u8]) -> Self {
        Self(Sha256::digest(content).into())
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

/// Whether anything exists at `path`
pub fn exists(path: &Path) -> bool {
    path.exists()
}

/// Whether the file at `path` differs from `reference`.
///
/// An absent file is not modified.
pub fn is_modified(path: &Path, reference: &[u8]) -> Result<bool, HookError> {
    let installed = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(source) => {
            return Err(HookError::ReadScript {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let installed = ContentHash::of(&installed);
    let expected = ContentHash::of(reference);
    if installed != expected {
        debug!(
            "Script {:?} drifted: {} != {}",
            path,
            installed.to_hex(),
            expected.to_hex()
        );
    }
    Ok(installed != expected)
}

/// Compare the file at `path` against `reference`
pub fn status(path: &Path, reference: &[u8]) -> Result<ScriptStatus, HookError> {
    if !exists(path) {
        return Ok(ScriptStatus::Missing);
    }
    if is_modified(path, reference)? {
        Ok(ScriptStatus::Modified)
    } else {
        Ok(ScriptStatus::Ok)
    }
}

/// Full [`ScriptInfo`] for the file at `path`
pub fn info(path: &Path, reference: &[u8]) -> Result<ScriptInfo, HookError> {
    let status = status(path, reference)?;
    Ok(ScriptInfo {
        path: path.to_path_buf(),
        exists: status != ScriptStatus::Missing,
        modified: status == ScriptStatus::Modified,
        status,
    })
}

/// Write `content` to `path` as an executable script, replacing whatever was
/// there. Creates the parent directory if needed.
pub fn write(path: &Path, content: &[u8]) -> Result<(), HookError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| HookError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, content).map_err(|source| HookError::WriteScript {
        path: path.to_path_buf(),
        source,
    })?;

    // Make executable (Unix only)
    #[cfg(unix)]
    {
        let set_permissions = || -> std::io::Result<()> {
            let mut perms = fs::metadata(path)?.permissions();
            perms.set_mode(0o755);
            fs::set_permissions(path, perms)
        };
        set_permissions().map_err(|source| HookError::SetPermissions {
            path: path.to_path_buf(),
            source,
        })?;
    }

    debug!("Wrote hook script: {:?}", path);
    Ok(())
}

/// Delete the script at `path`. Returns whether a file was removed; an absent
/// file is not an error.
pub fn remove(path: &Path) -> Result<bool, HookError> {
    match fs::remove_file(path) {
        Ok(()) => {
            debug!("Removed hook script: {:?}", path);
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(source) => Err(HookError::RemoveScript {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const REFERENCE: &[u8] = b"#!/bin/bash\necho hi\n";

    #[test]
    fn test_content_hash_is_sha256() {
        assert_eq!(
            ContentHash::of(b"").to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_missing_file_is_not_modified() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.sh");

        assert!(!exists(&path));
        assert!(!is_modified(&path, REFERENCE).unwrap());
        assert_eq!(status(&path, REFERENCE).unwrap(), ScriptStatus::Missing);
    }

    #[test]
    fn test_write_then_status_ok() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("hook.sh");

        write(&path, REFERENCE).unwrap();

        assert_eq!(fs::read(&path).unwrap(), REFERENCE);
        assert_eq!(status(&path, REFERENCE).unwrap(), ScriptStatus::Ok);

        #[cfg(unix)]
        {
            let perms = fs::metadata(&path).unwrap().permissions();
            assert!(perms.mode() & 0o111 != 0, "script should be executable");
        }
    }

    #[test]
    fn test_edited_file_is_modified() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("hook.sh");
        write(&path, REFERENCE).unwrap();

        fs::write(&path, b"#!/bin/bash\necho tampered\n").unwrap();

        assert!(is_modified(&path, REFERENCE).unwrap());
        let info = info(&path, REFERENCE).unwrap();
        assert_eq!(info.status, ScriptStatus::Modified);
        assert!(info.exists);
        assert!(info.modified);
    }

    #[test]
    fn test_write_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("hook.sh");
        fs::write(&path, b"old").unwrap();

        write(&path, REFERENCE).unwrap();

        assert_eq!(status(&path, REFERENCE).unwrap(), ScriptStatus::Ok);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("hook.sh");
        write(&path, REFERENCE).unwrap();

        assert!(remove(&path).unwrap());
        assert!(!remove(&path).unwrap());
        assert!(!path.exists());
    }
}
