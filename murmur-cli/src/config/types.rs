use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration as stored in TOML files (with optional fields for merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawMurmurConfig {
    #[serde(default)]
    pub feed: RawFeedConfig,

    #[serde(default)]
    pub hooks: HooksConfig,

    #[serde(default)]
    pub identity: IdentityConfig,
}

/// Feed config as stored in TOML
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawFeedConfig {
    /// Feed file location
    pub path: Option<PathBuf>,
}

/// Final configuration with defaults applied
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MurmurConfig {
    pub feed: FeedConfig,

    #[serde(default)]
    pub hooks: HooksConfig,

    #[serde(default)]
    pub identity: IdentityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Feed file location
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HooksConfig {
    /// Claude config directory; `$CLAUDE_CONFIG_DIR` or `~/.claude` when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claude_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IdentityConfig {
    /// Fixed author name; derived from the session when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
