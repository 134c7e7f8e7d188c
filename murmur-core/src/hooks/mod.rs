//! Claude Code hooks integration
//!
//! murmur registers small shell scripts under Claude Code's hook events so
//! agents see new feed messages as they work. This module owns that wiring:
//! installing the scripts, registering them in `settings.json`, reporting
//! drift, and removing both again.
//!
//! ## Hook Types
//!
//! - **Stop** - shows messages posted since the session last stopped
//! - **PostToolUse** - surfaces new messages between tool calls
//!
//! ## Architecture
//!
//! ```text
//!                    ┌──────────────> script_file ──> ~/.claude/hooks/murmur/*.sh
//! HookInstaller ─────┤
//!                    └──> patch ──> SettingsStore ──> ~/.claude/settings.json
//! ```
//!
//! ## Concurrency
//!
//! Every individual file write is atomic, but there is no inter-process
//! lock: two murmur processes installing at the same moment can interleave
//! their read-patch-write cycles on `settings.json`. Re-running install or
//! uninstall always converges to the same end state.

mod backup;
mod installer;
pub mod patch;
pub mod script_file;
pub mod scripts;
mod settings;
pub mod status;
mod types;

pub use backup::backup_file;
pub use installer::{HookInstaller, HookInstallerConfig};
pub use scripts::HookScript;
pub use settings::{EventEntry, HookCommand, HookEntry, HookSlot, Settings, SettingsStore};
pub use types::{
    HookEvent, HookStatus, InstallOptions, InstallReport, InstallState, ScriptInfo, ScriptStatus,
    UninstallReport,
};
