use super::types::{
    FeedConfig, HooksConfig, IdentityConfig, MurmurConfig, RawFeedConfig, RawMurmurConfig,
};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load merged configuration (user + project)
    pub fn load() -> Result<MurmurConfig> {
        Self::load_from(&Self::user_config_path(), &Self::project_config_path())
    }

    /// Load and merge the two layers from explicit paths; missing files are skipped
    pub fn load_from(user_path: &Path, project_path: &Path) -> Result<MurmurConfig> {
        let mut raw = RawMurmurConfig::default();

        // Layer 1: User config
        if let Some(user_config) = Self::read_layer(user_path)? {
            raw = Self::merge_raw(raw, user_config);
        }

        // Layer 2: Project config
        if let Some(project_config) = Self::read_layer(project_path)? {
            raw = Self::merge_raw(raw, project_config);
        }

        Ok(Self::finalize(raw))
    }

    fn read_layer(path: &Path) -> Result<Option<RawMurmurConfig>> {
        if !path.exists() {
            return Ok(None);
        }
        debug!(path = %path.display(), "Loading config layer");
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        Ok(Some(config))
    }

    /// Get user config path (`$XDG_CONFIG_HOME/murmur/config.toml`)
    pub fn user_config_path() -> PathBuf {
        murmur_paths::config_dir().join("config.toml")
    }

    /// Get project config path
    /// Can be overridden with MURMUR_PROJECT_CONFIG_DIR env var (useful for isolated e2e tests)
    pub fn project_config_path() -> PathBuf {
        if let Ok(dir) = std::env::var("MURMUR_PROJECT_CONFIG_DIR") {
            PathBuf::from(dir).join("config.toml")
        } else {
            PathBuf::from(".murmur/config.toml")
        }
    }

    /// Merge two raw configs (overlay values override base only if explicitly set)
    fn merge_raw(base: RawMurmurConfig, overlay: RawMurmurConfig) -> RawMurmurConfig {
        RawMurmurConfig {
            feed: RawFeedConfig {
                path: overlay.feed.path.or(base.feed.path),
            },
            hooks: HooksConfig {
                claude_dir: overlay.hooks.claude_dir.or(base.hooks.claude_dir),
            },
            identity: IdentityConfig {
                name: overlay.identity.name.or(base.identity.name),
            },
        }
    }

    /// Convert raw config to final config with defaults applied
    fn finalize(raw: RawMurmurConfig) -> MurmurConfig {
        MurmurConfig {
            feed: FeedConfig {
                path: raw.feed.path.unwrap_or_else(murmur_paths::feed_path),
            },
            hooks: raw.hooks,
            identity: IdentityConfig {
                name: raw.identity.name.filter(|name| !name.trim().is_empty()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn raw(feed: Option<&str>, claude_dir: Option<&str>, name: Option<&str>) -> RawMurmurConfig {
        RawMurmurConfig {
            feed: RawFeedConfig {
                path: feed.map(PathBuf::from),
            },
            hooks: HooksConfig {
                claude_dir: claude_dir.map(PathBuf::from),
            },
            identity: IdentityConfig {
                name: name.map(String::from),
            },
        }
    }

    #[test]
    fn test_merge_raw_overlay_overrides_base() {
        let base = raw(Some("/base/feed.jsonl"), Some("/base/.claude"), Some("base"));
        let overlay = raw(Some("/overlay/feed.jsonl"), None, Some("overlay"));

        let merged = ConfigLoader::merge_raw(base, overlay);

        assert_eq!(merged.feed.path, Some(PathBuf::from("/overlay/feed.jsonl")));
        // overlay's None falls through to base value via .or()
        assert_eq!(merged.hooks.claude_dir, Some(PathBuf::from("/base/.claude")));
        assert_eq!(merged.identity.name, Some("overlay".to_string()));
    }

    #[test]
    fn test_load_from_missing_files_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();

        let config = ConfigLoader::load_from(
            &temp_dir.path().join("user.toml"),
            &temp_dir.path().join("project.toml"),
        )
        .unwrap();

        assert_eq!(config.feed.path, murmur_paths::feed_path());
        assert!(config.hooks.claude_dir.is_none());
        assert!(config.identity.name.is_none());
    }

    #[test]
    fn test_project_layer_wins() {
        let temp_dir = TempDir::new().unwrap();
        let user = temp_dir.path().join("user.toml");
        let project = temp_dir.path().join("project.toml");
        std::fs::write(
            &user,
            "[feed]\npath = \"/user/feed.jsonl\"\n\n[identity]\nname = \"user-name\"\n",
        )
        .unwrap();
        std::fs::write(&project, "[identity]\nname = \"project-name\"\n").unwrap();

        let config = ConfigLoader::load_from(&user, &project).unwrap();

        assert_eq!(config.feed.path, PathBuf::from("/user/feed.jsonl"));
        assert_eq!(config.identity.name, Some("project-name".to_string()));
    }

    #[test]
    fn test_blank_identity_name_is_unset() {
        let temp_dir = TempDir::new().unwrap();
        let user = temp_dir.path().join("user.toml");
        std::fs::write(&user, "[identity]\nname = \"  \"\n").unwrap();

        let config = ConfigLoader::load_from(&user, &temp_dir.path().join("none.toml")).unwrap();

        assert!(config.identity.name.is_none());
    }

    #[test]
    fn test_invalid_toml_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let user = temp_dir.path().join("user.toml");
        std::fs::write(&user, "this is not valid toml {{{{").unwrap();

        let err = ConfigLoader::load_from(&user, &temp_dir.path().join("none.toml")).unwrap_err();

        assert!(err.to_string().contains("Invalid config"));
    }

    #[test]
    #[serial]
    fn test_project_config_path_env_override() {
        unsafe { std::env::remove_var("MURMUR_PROJECT_CONFIG_DIR") };
        assert_eq!(
            ConfigLoader::project_config_path(),
            PathBuf::from(".murmur/config.toml")
        );

        unsafe { std::env::set_var("MURMUR_PROJECT_CONFIG_DIR", "/tmp/murmur-project") };
        assert_eq!(
            ConfigLoader::project_config_path(),
            PathBuf::from("/tmp/murmur-project/config.toml")
        );
        unsafe { std::env::remove_var("MURMUR_PROJECT_CONFIG_DIR") };
    }

    #[test]
    #[serial]
    fn test_user_config_path_follows_xdg() {
        unsafe { std::env::set_var("XDG_CONFIG_HOME", "/tmp/xdg-config") };
        assert_eq!(
            ConfigLoader::user_config_path(),
            PathBuf::from("/tmp/xdg-config/murmur/config.toml")
        );
        unsafe { std::env::remove_var("XDG_CONFIG_HOME") };
    }
}
