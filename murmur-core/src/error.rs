//! Error types for murmur-core

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for murmur-core
#[derive(Error, Debug)]
pub enum MurmurError {
    #[error("Hook error: {0}")]
    Hook(#[from] HookError),

    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),
}

/// Errors from installing, removing or inspecting Claude Code hooks
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Failed to determine home directory")]
    NoHomeDir,

    #[error("Hook scripts were modified after install: {}", .names.join(", "))]
    ScriptsModified { names: Vec<String> },

    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read script {}: {source}", .path.display())]
    ReadScript {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write script {}: {source}", .path.display())]
    WriteScript {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to set permissions on {}: {source}", .path.display())]
    SetPermissions {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove script {}: {source}", .path.display())]
    RemoveScript {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read settings {}: {source}", .path.display())]
    ReadSettings {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Settings file {} is not valid: {source}", .path.display())]
    InvalidSettings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize settings: {0}")]
    SerializeSettings(#[source] serde_json::Error),

    #[error("Failed to write settings {} ({step}): {source}", .path.display())]
    WriteSettings {
        path: PathBuf,
        step: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to back up {}: {source}", .path.display())]
    Backup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HookError {
    /// Whether this is the recoverable invalid-settings condition
    pub fn is_invalid_settings(&self) -> bool {
        matches!(self, HookError::InvalidSettings { .. })
    }
}

/// Errors from the message feed
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Message is empty")]
    EmptyMessage,

    #[error("Message is too long: {len} characters (max {max})")]
    MessageTooLong { len: usize, max: usize },

    #[error("Feed I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize message: {0}")]
    Serialize(#[from] serde_json::Error),
}
