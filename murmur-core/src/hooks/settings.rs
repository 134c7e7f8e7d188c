//! Claude Code settings.json model and store
//!
//! Only murmur's own hook objects are decoded. Every other top-level key is
//! kept in [`Settings::extra`], the `hooks` value is kept as raw JSON, and
//! each event array is decoded on demand into [`EventEntry`]s whose foreign
//! parts stay [`Value`]s. Foreign configuration of any shape therefore
//! survives a decode/patch/encode cycle unchanged.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use super::backup::backup_file;
use super::scripts;
use crate::error::HookError;

/// The host settings document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// The `hooks` value exactly as read. `None` when the key is absent;
    /// an explicit `null` is kept and treated as empty.
    #[serde(
        default,
        deserialize_with = "keep_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub hooks: Option<Value>,

    /// Every other top-level key, untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn keep_null<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl Settings {
    /// Decoded entries registered under `event`.
    ///
    /// Absent or `null` values read as no entries. `None` means the `hooks`
    /// value or the event's value has a shape murmur will not edit (say a
    /// string where an array belongs).
    pub fn event_entries(&self, event: &str) -> Option<Vec<EventEntry>> {
        let hooks = match &self.hooks {
            None | Some(Value::Null) => return Some(Vec::new()),
            Some(Value::Object(hooks)) => hooks,
            Some(_) => return None,
        };
        match hooks.get(event) {
            None | Some(Value::Null) => Some(Vec::new()),
            Some(Value::Array(entries)) => Some(
                entries
                    .iter()
                    .cloned()
                    .map(EventEntry::from_value)
                    .collect(),
            ),
            Some(_) => None,
        }
    }

    /// Store `entries` under `event`, deleting the key when there are none.
    ///
    /// Creates the `hooks` object if it is absent or `null`. Returns `false`
    /// and changes nothing when `hooks` holds something other than an object.
    pub fn set_event_entries(&mut self, event: &str, entries: Vec<EventEntry>) -> bool {
        if matches!(self.hooks, None | Some(Value::Null)) {
            self.hooks = Some(Value::Object(Map::new()));
        }
        let Some(Value::Object(hooks)) = &mut self.hooks else {
            return false;
        };
        if entries.is_empty() {
            hooks.shift_remove(event);
        } else {
            let entries = entries.into_iter().map(EventEntry::into_value).collect();
            hooks.insert(event.to_string(), Value::Array(entries));
        }
        true
    }

    /// Whether `hooks` is an object with no events left
    pub fn hooks_is_empty(&self) -> bool {
        matches!(&self.hooks, Some(Value::Object(hooks)) if hooks.is_empty())
    }
}

/// One element of an event's entry array
#[derive(Debug, Clone, PartialEq)]
pub enum EventEntry {
    /// An entry whose `hooks` array holds at least one murmur hook (or one
    /// murmur created)
    Owned(HookEntry),
    /// Anything else, preserved exactly
    Foreign(Value),
}

impl EventEntry {
    /// Classify a raw entry by ownership
    pub fn from_value(value: Value) -> Self {
        let Value::Object(fields) = value else {
            return EventEntry::Foreign(value);
        };
        let hooks: Vec<HookSlot> = match fields.get("hooks") {
            Some(Value::Array(hooks)) => {
                hooks.iter().cloned().map(HookSlot::from_value).collect()
            }
            _ => return EventEntry::Foreign(Value::Object(fields)),
        };
        if hooks.iter().any(HookSlot::is_owned) {
            EventEntry::Owned(HookEntry { fields, hooks })
        } else {
            EventEntry::Foreign(Value::Object(fields))
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            EventEntry::Owned(entry) => entry.into_value(),
            EventEntry::Foreign(value) => value,
        }
    }
}

/// `{ "matcher": ..., "hooks": [...] }` holding at least one murmur hook.
///
/// Fields other than `hooks` keep their values and positions.
#[derive(Debug, Clone, PartialEq)]
pub struct HookEntry {
    fields: Map<String, Value>,
    pub hooks: Vec<HookSlot>,
}

impl HookEntry {
    /// Minimal entry running a single command
    pub fn command(command: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("matcher".to_string(), Value::String(String::new()));
        fields.insert("hooks".to_string(), Value::Array(Vec::new()));
        Self {
            fields,
            hooks: vec![HookSlot::Owned(HookCommand::new(command))],
        }
    }

    pub fn matcher(&self) -> Option<&Value> {
        self.fields.get("matcher")
    }

    /// Whether any hook in this entry is murmur's
    pub fn has_owned_hook(&self) -> bool {
        self.hooks.iter().any(HookSlot::is_owned)
    }

    pub fn into_value(mut self) -> Value {
        let hooks = self.hooks.into_iter().map(HookSlot::into_value).collect();
        self.fields.insert("hooks".to_string(), Value::Array(hooks));
        Value::Object(self.fields)
    }
}

/// One element of an entry's `hooks` array
#[derive(Debug, Clone, PartialEq)]
pub enum HookSlot {
    /// A hook object whose `command` runs one of murmur's scripts
    Owned(HookCommand),
    /// Any other hook, whatever its shape, preserved exactly
    Foreign(Value),
}

impl HookSlot {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields)
                if fields
                    .get("command")
                    .and_then(Value::as_str)
                    .is_some_and(scripts::is_owned_command) =>
            {
                HookSlot::Owned(HookCommand { fields })
            }
            other => HookSlot::Foreign(other),
        }
    }

    pub fn is_owned(&self) -> bool {
        matches!(self, HookSlot::Owned(_))
    }

    pub fn into_value(self) -> Value {
        match self {
            HookSlot::Owned(hook) => Value::Object(hook.fields),
            HookSlot::Foreign(value) => value,
        }
    }
}

/// `{ "type": "command", "command": ... }` running a murmur script
#[derive(Debug, Clone, PartialEq)]
pub struct HookCommand {
    fields: Map<String, Value>,
}

impl HookCommand {
    pub fn new(command: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("type".to_string(), Value::String("command".to_string()));
        fields.insert("command".to_string(), Value::String(command.to_string()));
        Self { fields }
    }

    pub fn command(&self) -> &str {
        self.fields
            .get("command")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// The `type` field, when it is a string
    pub fn kind(&self) -> Option<&str> {
        self.fields.get("type").and_then(Value::as_str)
    }

    /// Point this hook at `command` with `type: "command"`. Returns whether
    /// anything changed.
    pub fn set(&mut self, command: &str) -> bool {
        if self.kind() == Some("command") && self.command() == command {
            return false;
        }
        self.fields
            .insert("type".to_string(), Value::String("command".to_string()));
        self.fields
            .insert("command".to_string(), Value::String(command.to_string()));
        true
    }
}

/// Reads, writes and backs up settings.json
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document.
    ///
    /// A missing (or blank) file is an empty document. Unparsable content is
    /// reported as [`HookError::InvalidSettings`] so callers can pick a
    /// recovery strategy.
    pub fn read(&self) -> Result<Settings, HookError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Settings::default()),
            Err(source) => {
                return Err(HookError::ReadSettings {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        if content.trim().is_empty() {
            return Ok(Settings::default());
        }

        serde_json::from_str(&content).map_err(|source| HookError::InvalidSettings {
            path: self.path.clone(),
            source,
        })
    }

    /// Atomically replace the document on disk
    pub fn write(&self, settings: &Settings) -> Result<(), HookError> {
        let mut content =
            serde_json::to_string_pretty(settings).map_err(HookError::SerializeSettings)?;
        content.push('\n');
        atomic_write(&self.path, content.as_bytes())?;
        debug!("Wrote settings: {:?}", self.path);
        Ok(())
    }

    /// Copy the current file aside. `None` if there is no file.
    pub fn backup(&self, kind: &str) -> Result<Option<PathBuf>, HookError> {
        backup_file(&self.path, kind)
    }
}

/// Write to a sibling temporary file, then rename it over `path`.
///
/// Readers see either the old document or the new one, never a partial
/// write.
fn atomic_write(path: &Path, content: &[u8]) -> Result<(), HookError> {
    let write_error = |step: &'static str| {
        let path = path.to_path_buf();
        move |source| HookError::WriteSettings { path, step, source }
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| HookError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let tmp_path = temp_sibling(path);
    if let Err(e) = fs::write(&tmp_path, content) {
        let _ = fs::remove_file(&tmp_path);
        return Err(write_error("write temporary file")(e));
    }

    // Windows refuses to rename over an existing file.
    #[cfg(windows)]
    {
        if path.exists()
            && let Err(e) = fs::remove_file(path)
        {
            let _ = fs::remove_file(&tmp_path);
            return Err(write_error("remove previous file")(e));
        }
    }

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(write_error("rename")(e));
    }

    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or(OsStr::new("settings.json")));
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}
