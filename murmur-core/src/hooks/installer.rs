//! Hook installer - installs murmur hooks into Claude Code configuration
//!
//! This module handles:
//! - Writing hook scripts to `<claude_dir>/hooks/murmur/`
//! - Registering them in `<claude_dir>/settings.json`
//! - Reporting and undoing both
//!
//! Install follows a two-phase protocol: every script is checked before any
//! file is written, so a tampered script aborts the run with nothing changed.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::backup::backup_file;
use super::patch;
use super::script_file;
use super::scripts::{HookScript, SCRIPTS};
use super::settings::{Settings, SettingsStore};
use super::status;
use super::types::{
    HookStatus, InstallOptions, InstallReport, ScriptStatus, UninstallReport,
};
use crate::error::HookError;

/// Where the installer reads and writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookInstallerConfig {
    /// Claude config directory (usually `~/.claude`)
    pub claude_dir: PathBuf,
    /// murmur state directory; hooks keep per-session markers under it
    pub state_dir: PathBuf,
}

impl HookInstallerConfig {
    /// Resolve the default locations from the environment
    pub fn from_env() -> Result<Self, HookError> {
        Ok(Self {
            claude_dir: murmur_paths::claude_dir().ok_or(HookError::NoHomeDir)?,
            state_dir: murmur_paths::state_dir(),
        })
    }
}

/// Installs murmur hooks into Claude Code
#[derive(Debug, Clone)]
pub struct HookInstaller {
    config: HookInstallerConfig,
    settings: SettingsStore,
}

impl HookInstaller {
    /// Create a new hook installer
    pub fn new(config: HookInstallerConfig) -> Self {
        let settings = SettingsStore::new(config.claude_dir.join("settings.json"));
        Self { config, settings }
    }

    /// The script catalog
    pub fn scripts(&self) -> &'static [HookScript] {
        SCRIPTS
    }

    /// Get the Claude config directory
    pub fn claude_dir(&self) -> &Path {
        &self.config.claude_dir
    }

    /// Get the hooks directory
    pub fn scripts_dir(&self) -> PathBuf {
        self.config.claude_dir.join("hooks").join("murmur")
    }

    /// Installed location of a script
    pub fn script_path(&self, script: &HookScript) -> PathBuf {
        self.scripts_dir().join(script.name)
    }

    pub fn settings_path(&self) -> &Path {
        self.settings.path()
    }

    /// Per-session marker directory the hook scripts create
    pub fn session_state_dir(&self) -> PathBuf {
        self.config.state_dir.join("sessions")
    }

    /// Read settings.json the way install and uninstall see it
    pub fn read_settings(&self) -> Result<Settings, HookError> {
        self.settings.read()
    }

    /// Current installation status. Never writes.
    pub fn status(&self) -> Result<HookStatus, HookError> {
        let mut scripts = BTreeMap::new();
        for script in SCRIPTS {
            let path = self.script_path(script);
            let info = script_file::info(&path, script.content.as_bytes())?;
            scripts.insert(script.name.to_string(), info);
        }

        let settings = match self.settings.read() {
            Ok(settings) => Some(settings),
            Err(e) if e.is_invalid_settings() => {
                debug!("Ignoring unreadable settings for status: {}", e);
                None
            }
            Err(e) => return Err(e),
        };

        Ok(HookStatus {
            state: status::aggregate(scripts.values()),
            scripts,
            settings: status::configured_events(settings.as_ref()),
        })
    }

    /// Install scripts and register them in settings.json
    pub fn install(&self, options: &InstallOptions) -> Result<InstallReport, HookError> {
        let mut report = InstallReport::default();

        // Phase 1: check every script before touching anything
        let mut statuses = Vec::with_capacity(SCRIPTS.len());
        for script in SCRIPTS {
            let path = self.script_path(script);
            let status = script_file::status(&path, script.content.as_bytes())?;
            statuses.push((script, path, status));
        }

        let modified: Vec<String> = statuses
            .iter()
            .filter(|(_, _, status)| *status == ScriptStatus::Modified)
            .map(|(script, _, _)| script.name.to_string())
            .collect();
        if !modified.is_empty() && !options.force {
            return Err(HookError::ScriptsModified { names: modified });
        }

        // Phase 2: write
        for (script, path, status) in &statuses {
            if *status == ScriptStatus::Modified {
                if let Some(backup) = backup_file(path, "modified")? {
                    report.script_backups.push(backup);
                }
                report.repaired.push(script.name.to_string());
            }
            script_file::write(path, script.content.as_bytes())?;
            report.written.push(path.clone());
        }
        info!(
            "Installed {} hook scripts to {:?}",
            SCRIPTS.len(),
            self.scripts_dir()
        );

        let mut settings = match self.settings.read() {
            Ok(settings) => settings,
            Err(e) if e.is_invalid_settings() => {
                warn!("{}; backing it up and starting fresh", e);
                report.settings_backup = self.settings.backup("invalid")?;
                Settings::default()
            }
            Err(e) => return Err(e),
        };

        let mut changed = report.settings_backup.is_some() || !self.settings.path().exists();
        for script in SCRIPTS {
            if !patch::is_editable(&settings, script.event) {
                report.unregistered.push(script.event.as_str().to_string());
                continue;
            }
            let command = self.script_path(script).to_string_lossy().to_string();
            changed |= patch::upsert(&mut settings, script.event, &command);
        }

        if changed {
            self.settings.write(&settings)?;
            info!("Updated {:?} with murmur hooks", self.settings.path());
        } else {
            debug!("Settings already up to date");
        }
        report.settings_updated = changed;

        Ok(report)
    }

    /// Remove murmur's settings entries, scripts and hook state
    pub fn uninstall(&self) -> Result<UninstallReport, HookError> {
        let mut report = UninstallReport::default();

        match self.settings.read() {
            Ok(mut settings) => {
                let mut changed = false;
                for script in SCRIPTS {
                    changed |= patch::remove(&mut settings, script.event);
                }
                if changed {
                    self.settings.write(&settings)?;
                    info!("Removed murmur hooks from {:?}", self.settings.path());
                }
                report.settings_updated = changed;
            }
            Err(e) if e.is_invalid_settings() => {
                warn!("{}; leaving it untouched", e);
                report.settings_skipped = true;
            }
            Err(e) => return Err(e),
        }

        for script in SCRIPTS {
            let path = self.script_path(script);
            if script_file::remove(&path)? {
                report.removed.push(path);
            }
        }

        // Only succeeds once the directory is empty
        let scripts_dir = self.scripts_dir();
        if fs::remove_dir(&scripts_dir).is_ok() {
            debug!("Removed {:?}", scripts_dir);
        }

        let state_dir = self.session_state_dir();
        if let Err(e) = fs::remove_dir_all(&state_dir) {
            debug!("Skipping hook state cleanup for {:?}: {}", state_dir, e);
        }

        Ok(report)
    }
}
