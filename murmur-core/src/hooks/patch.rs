//! Scoped edits to the `hooks` sub-tree of [`Settings`]
//!
//! Both operations touch exactly murmur's slice of the document: foreign
//! entries and foreign hooks inside shared entries are never edited,
//! reordered or deleted, and other events' values are never visited. An
//! event whose value is not an array is left alone entirely.

use tracing::{debug, warn};

use super::settings::{EventEntry, HookEntry, HookSlot, Settings};
use super::types::HookEvent;

/// Register `command` under `event`.
///
/// If an entry for the event already holds one of murmur's hooks, that hook
/// is repointed in place; otherwise a minimal entry is appended. Returns
/// whether the document changed, which is never the case when the event
/// cannot be edited (see [`is_editable`]).
pub fn upsert(settings: &mut Settings, event: HookEvent, command: &str) -> bool {
    let Some(mut entries) = settings.event_entries(event.as_str()) else {
        warn!(
            "Not registering {} hook: settings.json has an unexpected shape there",
            event
        );
        return false;
    };

    let existing = entries.iter_mut().find_map(|entry| match entry {
        EventEntry::Owned(entry) => entry.hooks.iter_mut().find_map(|hook| match hook {
            HookSlot::Owned(hook) => Some(hook),
            HookSlot::Foreign(_) => None,
        }),
        EventEntry::Foreign(_) => None,
    });

    match existing {
        Some(hook) => {
            if !hook.set(command) {
                return false;
            }
            debug!("Updating {} hook command to {}", event, command);
        }
        None => {
            debug!("Adding {} hook entry for {}", event, command);
            entries.push(EventEntry::Owned(HookEntry::command(command)));
        }
    }
    settings.set_event_entries(event.as_str(), entries)
}

/// Remove murmur's hooks from `event`.
///
/// Entries left with no hooks are dropped, entries that still hold foreign
/// hooks are kept, and the event key is deleted once its array is empty. A
/// `hooks` object emptied by this removal is dropped as well, so a document
/// that had no `hooks` before murmur was installed gets none back. Returns
/// whether anything was removed.
pub fn remove(settings: &mut Settings, event: HookEvent) -> bool {
    let Some(mut entries) = settings.event_entries(event.as_str()) else {
        return false;
    };

    let mut removed = false;
    entries.retain_mut(|entry| {
        let EventEntry::Owned(entry) = entry else {
            return true;
        };
        let before = entry.hooks.len();
        entry.hooks.retain(|hook| !hook.is_owned());
        if entry.hooks.len() == before {
            return true;
        }
        removed = true;
        !entry.hooks.is_empty()
    });

    if !removed {
        return false;
    }
    settings.set_event_entries(event.as_str(), entries);
    if settings.hooks_is_empty() {
        settings.hooks = None;
    }
    debug!("Removed {} hook entries", event);
    true
}

/// Whether murmur can register itself under `event` without discarding
/// foreign data
pub fn is_editable(settings: &Settings, event: HookEvent) -> bool {
    settings.event_entries(event.as_str()).is_some()
}

/// Whether `event` has a complete entry running a command that names
/// `script_name`
pub fn is_configured(settings: &Settings, event: HookEvent, script_name: &str) -> bool {
    let Some(entries) = settings.event_entries(event.as_str()) else {
        return false;
    };

    entries.iter().any(|entry| match entry {
        EventEntry::Owned(entry) => entry.hooks.iter().any(|hook| match hook {
            HookSlot::Owned(hook) => {
                hook.kind() == Some("command") && hook.command().contains(script_name)
            }
            HookSlot::Foreign(_) => false,
        }),
        EventEntry::Foreign(_) => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    const STOP_CMD: &str = "/home/me/.claude/hooks/murmur/murmur-stop.sh";

    fn settings_from(value: Value) -> Settings {
        serde_json::from_value(value).unwrap()
    }

    fn to_value(settings: &Settings) -> Value {
        serde_json::to_value(settings).unwrap()
    }

    #[test]
    fn test_upsert_into_empty_document() {
        let mut settings = Settings::default();

        assert!(upsert(&mut settings, HookEvent::Stop, STOP_CMD));

        assert_eq!(
            to_value(&settings),
            json!({
                "hooks": {
                    "Stop": [{
                        "matcher": "",
                        "hooks": [{"type": "command", "command": STOP_CMD}]
                    }]
                }
            })
        );
    }

    #[test]
    fn test_upsert_is_idempotent() {
        let mut settings = Settings::default();
        upsert(&mut settings, HookEvent::Stop, STOP_CMD);
        let once = to_value(&settings);

        assert!(!upsert(&mut settings, HookEvent::Stop, STOP_CMD));
        assert_eq!(to_value(&settings), once);
    }

    #[test]
    fn test_upsert_replaces_stale_command_in_place() {
        let mut settings = settings_from(json!({
            "hooks": {"Stop": [
                {"matcher": "", "hooks": [{"type": "command", "command": "notify-send done"}]},
                {"matcher": "*", "hooks": [{"type": "command", "command": "/old/path/murmur-stop.sh"}]}
            ]}
        }));

        assert!(upsert(&mut settings, HookEvent::Stop, STOP_CMD));

        let value = to_value(&settings);
        let entries = value["hooks"]["Stop"].as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["hooks"][0]["command"], "notify-send done");
        assert_eq!(entries[1]["matcher"], "*");
        assert_eq!(entries[1]["hooks"][0]["command"], STOP_CMD);
    }

    #[test]
    fn test_upsert_appends_after_foreign_entry() {
        let foreign = json!({"matcher": "", "hooks": [{"type": "command", "command": "say done"}]});
        let mut settings = settings_from(json!({"hooks": {"Stop": [foreign.clone()]}}));

        upsert(&mut settings, HookEvent::Stop, STOP_CMD);

        let value = to_value(&settings);
        assert_eq!(value["hooks"]["Stop"][0], foreign);
        assert_eq!(value["hooks"]["Stop"][1]["hooks"][0]["command"], STOP_CMD);
    }

    #[test]
    fn test_upsert_leaves_other_events_alone() {
        let other = json!([{"hooks": [{"type": "command", "command": "lint"}]}]);
        let mut settings = settings_from(json!({"hooks": {"PreToolUse": other.clone()}}));

        upsert(&mut settings, HookEvent::Stop, STOP_CMD);

        assert_eq!(to_value(&settings)["hooks"]["PreToolUse"], other);
    }

    #[test]
    fn test_remove_drops_owned_entry_and_empty_event() {
        let mut settings = Settings::default();
        upsert(&mut settings, HookEvent::Stop, STOP_CMD);

        assert!(remove(&mut settings, HookEvent::Stop));

        assert!(settings.hooks.is_none());
        assert_eq!(to_value(&settings), json!({}));
    }

    #[test]
    fn test_remove_keeps_shared_entry_with_foreign_hooks() {
        let mut settings = settings_from(json!({
            "hooks": {"Stop": [{
                "matcher": "",
                "hooks": [
                    {"type": "command", "command": "say done"},
                    {"type": "command", "command": STOP_CMD}
                ]
            }]}
        }));

        assert!(remove(&mut settings, HookEvent::Stop));

        assert_eq!(
            to_value(&settings),
            json!({"hooks": {"Stop": [{
                "matcher": "",
                "hooks": [{"type": "command", "command": "say done"}]
            }]}})
        );
    }

    #[test]
    fn test_remove_keeps_foreign_entries_and_event_key() {
        let foreign = json!({"matcher": "", "hooks": [{"type": "command", "command": "say done"}]});
        let mut settings = settings_from(json!({"hooks": {"Stop": [foreign.clone()]}}));
        upsert(&mut settings, HookEvent::Stop, STOP_CMD);

        assert!(remove(&mut settings, HookEvent::Stop));

        assert_eq!(to_value(&settings), json!({"hooks": {"Stop": [foreign]}}));
    }

    #[test]
    fn test_remove_without_owned_hooks_changes_nothing() {
        let original = json!({"hooks": {"Stop": []}, "theme": "dark"});
        let mut settings = settings_from(original.clone());

        assert!(!remove(&mut settings, HookEvent::Stop));
        assert!(!remove(&mut settings, HookEvent::PostToolUse));
        assert_eq!(to_value(&settings), original);
    }

    #[test]
    fn test_is_configured_requires_command_type() {
        let mut settings = settings_from(json!({
            "hooks": {"Stop": [{"hooks": [{"type": "prompt", "command": STOP_CMD}]}]}
        }));
        assert!(!is_configured(&settings, HookEvent::Stop, "murmur-stop.sh"));

        upsert(&mut settings, HookEvent::PostToolUse, "/x/murmur-post-tool-use.sh");
        assert!(is_configured(
            &settings,
            HookEvent::PostToolUse,
            "murmur-post-tool-use.sh"
        ));
        assert!(!is_configured(
            &settings,
            HookEvent::PostToolUse,
            "murmur-stop.sh"
        ));
    }

    #[test]
    fn test_shared_entry_with_odd_hooks_is_updated_in_place() {
        let mut settings = settings_from(json!({
            "hooks": {"Stop": [{
                "matcher": "",
                "hooks": ["legacy-string", {"type": "command", "command": "/old/murmur-stop.sh"}]
            }]}
        }));

        assert!(upsert(&mut settings, HookEvent::Stop, STOP_CMD));

        assert_eq!(
            to_value(&settings),
            json!({"hooks": {"Stop": [{
                "matcher": "",
                "hooks": ["legacy-string", {"type": "command", "command": STOP_CMD}]
            }]}})
        );
    }

    #[test]
    fn test_remove_strips_only_owned_hook_beside_odd_hooks() {
        let mut settings = settings_from(json!({
            "hooks": {"Stop": [{
                "matcher": "",
                "hooks": ["legacy-string", {"type": "command", "command": STOP_CMD}]
            }]}
        }));

        assert!(remove(&mut settings, HookEvent::Stop));

        assert_eq!(
            to_value(&settings),
            json!({"hooks": {"Stop": [{"matcher": "", "hooks": ["legacy-string"]}]}})
        );
    }

    #[test]
    fn test_foreign_hook_objects_keep_their_field_order() {
        let raw = r#"{"hooks":{"Stop":[{"hooks":[{"command":"say done","type":"command"},{"type":"command","command":"/x/murmur-stop.sh"}],"matcher":null}]}}"#;
        let mut settings: Settings = serde_json::from_str(raw).unwrap();

        assert!(remove(&mut settings, HookEvent::Stop));

        assert_eq!(
            serde_json::to_string(&settings).unwrap(),
            r#"{"hooks":{"Stop":[{"hooks":[{"command":"say done","type":"command"}],"matcher":null}]}}"#
        );
    }

    #[test]
    fn test_non_array_event_is_left_alone() {
        let original = json!({"hooks": {"Stop": {"command": "say done"}}});
        let mut settings = settings_from(original.clone());

        assert!(!is_editable(&settings, HookEvent::Stop));
        assert!(!upsert(&mut settings, HookEvent::Stop, STOP_CMD));
        assert!(!remove(&mut settings, HookEvent::Stop));
        assert_eq!(to_value(&settings), original);

        let command = "/x/murmur-post-tool-use.sh";
        assert!(upsert(&mut settings, HookEvent::PostToolUse, command));
        assert_eq!(
            to_value(&settings)["hooks"]["Stop"],
            original["hooks"]["Stop"]
        );
    }

    #[test]
    fn test_null_hooks_accepts_registration() {
        let mut settings = settings_from(json!({"model": "opus", "hooks": null}));

        assert!(upsert(&mut settings, HookEvent::Stop, STOP_CMD));

        let value = to_value(&settings);
        assert_eq!(value["model"], "opus");
        assert_eq!(value["hooks"]["Stop"][0]["hooks"][0]["command"], STOP_CMD);
    }

    #[test]
    fn test_foreign_event_order_is_kept() {
        let raw = r#"{"hooks":{"UserPromptSubmit":[],"Notification":[]}}"#;
        let mut settings: Settings = serde_json::from_str(raw).unwrap();

        upsert(&mut settings, HookEvent::Stop, STOP_CMD);
        remove(&mut settings, HookEvent::Stop);

        assert_eq!(serde_json::to_string(&settings).unwrap(), raw);
    }

    #[test]
    fn test_already_empty_hooks_object_is_kept() {
        let original = json!({"hooks": {}, "theme": "dark"});
        let mut settings = settings_from(original.clone());

        assert!(!remove(&mut settings, HookEvent::Stop));
        assert_eq!(to_value(&settings), original);
    }
}
