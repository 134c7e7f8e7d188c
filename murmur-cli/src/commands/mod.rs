pub mod config;
pub mod doctor;
pub mod install;
pub mod post;
pub mod read;
pub mod status;
pub mod uninstall;
pub mod whoami;

use anyhow::{Context, Result};
use murmur_core::{FeedStore, HookInstaller, HookInstallerConfig, identity};

use crate::config::MurmurConfig;

/// Build the hook installer, honoring `[hooks] claude_dir`
pub fn installer(config: &MurmurConfig) -> Result<HookInstaller> {
    let claude_dir = match &config.hooks.claude_dir {
        Some(dir) => dir.clone(),
        None => murmur_paths::claude_dir()
            .context("Could not locate the Claude config directory; set CLAUDE_CONFIG_DIR")?,
    };
    Ok(HookInstaller::new(HookInstallerConfig {
        claude_dir,
        state_dir: murmur_paths::state_dir(),
    }))
}

pub fn feed(config: &MurmurConfig) -> FeedStore {
    FeedStore::new(config.feed.path.clone())
}

/// Author name: explicit flag, then `[identity] name`, then derived from the session
pub fn author(config: &MurmurConfig, explicit: Option<String>) -> String {
    explicit
        .filter(|name| !name.trim().is_empty())
        .or_else(|| config.identity.name.clone())
        .unwrap_or_else(|| identity::name_for(&identity::default_seed()))
}
