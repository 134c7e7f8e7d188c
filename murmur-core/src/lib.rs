//! murmur-core: Core library for murmur
//!
//! murmur lets coding agents leave short messages for each other on a local
//! feed, and hooks into Claude Code so agents see new messages while they
//! work.
//!
//! - **Hooks integration** - [`HookInstaller`] installs, removes and reports
//!   murmur's hook scripts and their `settings.json` registration
//! - **Feed** - [`FeedStore`] appends and reads [`Message`]s
//! - **Identity** - [`identity::name_for`] turns a seed into a stable name
//! - **Doctor** - [`doctor::run_checks`] for read-only diagnostics
//!
//! # Quick Start
//!
//! ```no_run
//! use murmur_core::{HookInstaller, HookInstallerConfig, InstallOptions};
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let installer = HookInstaller::new(HookInstallerConfig::from_env()?);
//!     installer.install(&InstallOptions::default())?;
//!     println!("{}", installer.status()?.state);
//!     Ok(())
//! }
//! ```

pub mod doctor;
pub mod error;
pub mod feed;
pub mod hooks;
pub mod identity;

// Re-export key types for convenience
pub use error::{FeedError, HookError, MurmurError};
pub use feed::{FeedFilter, FeedStore, Message};
pub use hooks::{
    HookEvent, HookInstaller, HookInstallerConfig, HookStatus, InstallOptions, InstallReport,
    InstallState, ScriptInfo, ScriptStatus, UninstallReport,
};
