//! Overall installation state from per-script and per-event facts

use std::collections::BTreeMap;

use super::patch;
use super::scripts::SCRIPTS;
use super::settings::Settings;
use super::types::{InstallState, ScriptInfo};

/// Derive the overall state. First match wins:
///
/// 1. nothing installed and nothing modified: `NotInstalled`
/// 2. any script modified: `Modified`, even if others are missing
/// 3. any script missing: `PartiallyInstalled`
/// 4. otherwise: `Installed`
pub fn aggregate<'a>(scripts: impl IntoIterator<Item = &'a ScriptInfo>) -> InstallState {
    let mut any_installed = false;
    let mut any_modified = false;
    let mut any_missing = false;

    for info in scripts {
        any_installed |= info.exists;
        any_modified |= info.modified;
        any_missing |= !info.exists;
    }

    if !any_installed && !any_modified {
        InstallState::NotInstalled
    } else if any_modified {
        InstallState::Modified
    } else if any_missing {
        InstallState::PartiallyInstalled
    } else {
        InstallState::Installed
    }
}

/// Per-event "configured" flags. An unreadable document counts as nothing
/// configured.
pub fn configured_events(settings: Option<&Settings>) -> BTreeMap<String, bool> {
    SCRIPTS
        .iter()
        .map(|script| {
            let configured = settings
                .is_some_and(|settings| patch::is_configured(settings, script.event, script.name));
            (script.event.as_str().to_string(), configured)
        })
        .collect()
}
