//! Read-only diagnostics for `murmur doctor`

use std::fmt;

use serde::Serialize;

use crate::feed::{FeedFilter, FeedStore};
use crate::hooks::{HookInstaller, InstallState};

/// How bad a finding is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Ok,
    Warn,
    Fail,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Ok => write!(f, "ok"),
            Severity::Warn => write!(f, "warn"),
            Severity::Fail => write!(f, "FAIL"),
        }
    }
}

/// One diagnostic finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Check {
    pub name: String,
    pub severity: Severity,
    pub detail: String,
}

impl Check {
    fn new(name: &str, severity: Severity, detail: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            severity,
            detail: detail.into(),
        }
    }
}

/// Run every check. Never writes.
pub fn run_checks(installer: &HookInstaller, feed: &FeedStore) -> Vec<Check> {
    let mut checks = Vec::new();

    let claude_dir = installer.claude_dir();
    checks.push(if claude_dir.is_dir() {
        Check::new("claude dir", Severity::Ok, claude_dir.display().to_string())
    } else {
        Check::new(
            "claude dir",
            Severity::Warn,
            format!("{} does not exist; is Claude Code installed?", claude_dir.display()),
        )
    });

    let settings_path = installer.settings_path();
    let settings_check = if !settings_path.exists() {
        Check::new("settings", Severity::Warn, "settings.json not found")
    } else {
        match installer.read_settings() {
            Ok(_) => Check::new("settings", Severity::Ok, settings_path.display().to_string()),
            Err(e) => Check::new("settings", Severity::Fail, e.to_string()),
        }
    };
    checks.push(settings_check);

    match installer.status() {
        Ok(status) => {
            let severity = match status.state {
                InstallState::Installed => Severity::Ok,
                InstallState::NotInstalled => Severity::Warn,
                InstallState::Modified | InstallState::PartiallyInstalled => Severity::Fail,
            };
            let detail = match status.state {
                InstallState::Modified => "scripts modified; run `murmur install --force`".to_string(),
                InstallState::PartiallyInstalled => {
                    "scripts missing; run `murmur install`".to_string()
                }
                InstallState::NotInstalled => "run `murmur install`".to_string(),
                InstallState::Installed => status.state.to_string(),
            };
            checks.push(Check::new("hook scripts", severity, detail));

            for (event, configured) in &status.settings {
                checks.push(if *configured {
                    Check::new(event, Severity::Ok, "registered")
                } else {
                    Check::new(event, Severity::Warn, "not registered in settings.json")
                });
            }
        }
        Err(e) => checks.push(Check::new("hook scripts", Severity::Fail, e.to_string())),
    }

    checks.push(match feed.read(&FeedFilter::default()) {
        Ok(messages) => Check::new(
            "feed",
            Severity::Ok,
            format!("{} messages in {}", messages.len(), feed.path().display()),
        ),
        Err(e) => Check::new("feed", Severity::Fail, e.to_string()),
    });

    checks
}
