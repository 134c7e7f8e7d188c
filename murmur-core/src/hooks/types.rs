//! Hook integration types
//!
//! Everything here is derived on demand from the filesystem; nothing is
//! persisted by murmur itself.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Claude Code lifecycle events murmur registers hooks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HookEvent {
    /// Claude finished responding
    Stop,
    /// A tool call completed
    PostToolUse,
}

impl HookEvent {
    /// Get the event name as it appears in settings.json
    pub fn as_str(&self) -> &'static str {
        match self {
            HookEvent::Stop => "Stop",
            HookEvent::PostToolUse => "PostToolUse",
        }
    }
}

impl fmt::Display for HookEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of one installed script compared to its embedded reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptStatus {
    Ok,
    Missing,
    Modified,
}

impl fmt::Display for ScriptStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptStatus::Ok => write!(f, "OK"),
            ScriptStatus::Missing => write!(f, "missing"),
            ScriptStatus::Modified => write!(f, "modified"),
        }
    }
}

/// Runtime facts about one hook script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptInfo {
    pub path: PathBuf,
    pub exists: bool,
    pub modified: bool,
    pub status: ScriptStatus,
}

/// Overall installation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallState {
    NotInstalled,
    Installed,
    Modified,
    PartiallyInstalled,
}

impl fmt::Display for InstallState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallState::NotInstalled => write!(f, "Not installed"),
            InstallState::Installed => write!(f, "Installed"),
            InstallState::Modified => write!(f, "Modified"),
            InstallState::PartiallyInstalled => write!(f, "Partially installed"),
        }
    }
}

/// Aggregate status report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookStatus {
    pub state: InstallState,
    /// Script name to script facts
    pub scripts: BTreeMap<String, ScriptInfo>,
    /// Event name to whether settings.json registers murmur's hook for it
    pub settings: BTreeMap<String, bool>,
}

/// Options for [`HookInstaller::install`](super::HookInstaller::install)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstallOptions {
    /// Overwrite scripts that were edited after install
    pub force: bool,
}

/// What an install run did
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InstallReport {
    /// Scripts written to disk
    pub written: Vec<PathBuf>,
    /// Modified scripts that were overwritten under `force`
    pub repaired: Vec<String>,
    /// Backups of modified scripts taken before overwriting
    pub script_backups: Vec<PathBuf>,
    /// Backup of a corrupt settings.json, if one was replaced
    pub settings_backup: Option<PathBuf>,
    /// Whether settings.json was rewritten
    pub settings_updated: bool,
    /// Events left unregistered because settings.json holds something other
    /// than an entry array there
    pub unregistered: Vec<String>,
}

/// What an uninstall run did
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UninstallReport {
    /// Script files that were deleted
    pub removed: Vec<PathBuf>,
    /// Whether settings.json was rewritten
    pub settings_updated: bool,
    /// settings.json could not be parsed and was left alone
    pub settings_skipped: bool,
}
