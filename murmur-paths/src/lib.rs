//! XDG Base Directory paths for murmur.
//!
//! CLI tools should use XDG paths for cross-platform consistency,
//! not platform-native paths. This matches tools like gh, docker, kubectl.
//!
//! The one exception is [`claude_dir`], which follows the host application's
//! own convention rather than ours.

use std::path::PathBuf;

/// Resolve `$<var>/murmur`, falling back to `~/<fallback>` and then to a
/// relative path when there is no home directory.
fn xdg_dir(var: &str, fallback: &str) -> PathBuf {
    if let Ok(dir) = std::env::var(var)
        && !dir.is_empty()
    {
        PathBuf::from(dir).join("murmur")
    } else if let Some(home) = dirs::home_dir() {
        home.join(fallback)
    } else {
        PathBuf::from(fallback)
    }
}

/// Get the murmur config directory.
///
/// Returns `$XDG_CONFIG_HOME/murmur` if set, otherwise `~/.config/murmur`.
///
/// # Examples
///
/// ```
/// use murmur_paths::config_dir;
///
/// let config = config_dir();
/// let file = config.join("config.toml");
/// ```
pub fn config_dir() -> PathBuf {
    xdg_dir("XDG_CONFIG_HOME", ".config/murmur")
}

/// Get the murmur data directory.
///
/// Returns `$XDG_DATA_HOME/murmur` if set, otherwise `~/.local/share/murmur`.
/// The feed lives here.
pub fn data_dir() -> PathBuf {
    xdg_dir("XDG_DATA_HOME", ".local/share/murmur")
}

/// Get the murmur state directory.
///
/// Returns `$MURMUR_STATE_DIR` if set, then `$XDG_STATE_HOME/murmur`, otherwise
/// `~/.local/state/murmur`. Hook scripts keep per-session markers under this
/// directory and resolve it in the same order.
pub fn state_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("MURMUR_STATE_DIR")
        && !dir.is_empty()
    {
        return PathBuf::from(dir);
    }
    xdg_dir("XDG_STATE_HOME", ".local/state/murmur")
}

/// Default location of the feed file.
pub fn feed_path() -> PathBuf {
    data_dir().join("feed.jsonl")
}

/// Get the host (Claude Code) config directory.
///
/// Returns `$CLAUDE_CONFIG_DIR` if set, otherwise `~/.claude`. `None` only when
/// neither is available.
pub fn claude_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("CLAUDE_CONFIG_DIR")
        && !dir.is_empty()
    {
        return Some(PathBuf::from(dir));
    }
    dirs::home_dir().map(|home| home.join(".claude"))
}
