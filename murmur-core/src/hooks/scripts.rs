//! Embedded hook scripts
//!
//! These scripts are embedded in the binary and installed to
//! `~/.claude/hooks/murmur/` by `murmur install`.

use super::types::HookEvent;

/// Stop hook script
pub const STOP: &str = include_str!("scripts/murmur-stop.sh");

/// Post-tool-use hook script
pub const POST_TOOL_USE: &str = include_str!("scripts/murmur-post-tool-use.sh");

/// A hook script bound to one Claude Code event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookScript {
    /// File name under the scripts directory
    pub name: &'static str,
    /// Event the script is registered under
    pub event: HookEvent,
    /// Reference content
    pub content: &'static str,
}

/// All scripts murmur installs
pub const SCRIPTS: &[HookScript] = &[
    HookScript {
        name: "murmur-stop.sh",
        event: HookEvent::Stop,
        content: STOP,
    },
    HookScript {
        name: "murmur-post-tool-use.sh",
        event: HookEvent::PostToolUse,
        content: POST_TOOL_USE,
    },
];

/// Look up a script by file name
pub fn find(name: &str) -> Option<&'static HookScript> {
    SCRIPTS.iter().find(|script| script.name == name)
}

/// The script registered for an event
pub fn for_event(event: HookEvent) -> Option<&'static HookScript> {
    SCRIPTS.iter().find(|script| script.event == event)
}

/// Whether a settings `command` string belongs to murmur.
///
/// Matches on any registered script name appearing in the command, so an
/// unrelated command that happens to contain one of these names is treated
/// as ours.
pub fn is_owned_command(command: &str) -> bool {
    SCRIPTS.iter().any(|script| command.contains(script.name))
}
