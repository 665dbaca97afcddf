//! Configuration for the `mochi-sgr` tool

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::{Resolver, UnknownCodePolicy};
use crate::error::Result;

/// Tool configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Handling of attribute codes outside every known category
    pub unknown_codes: UnknownCodePolicy,
    /// Leave the current list sorted after resolving it
    pub sort_in_place: bool,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from default location or return default config
    pub fn load_or_default() -> Self {
        // Try to load from ~/.config/mochi-ansi/config.json
        if let Some(config_dir) = dirs_config_path() {
            let config_path = config_dir.join("config.json");
            if config_path.exists() {
                match Self::load(&config_path) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Ignoring {}: {}", config_path.display(), e);
                    }
                }
            }
        }
        Self::default()
    }

    /// Resolver honoring this configuration
    pub fn resolver(&self) -> Resolver {
        Resolver::new(self.unknown_codes)
    }

    pub fn is_strict(&self) -> bool {
        self.unknown_codes == UnknownCodePolicy::Reject
    }
}

/// Get the configuration directory path
fn dirs_config_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config").join("mochi-ansi"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.unknown_codes, UnknownCodePolicy::Ignore);
        assert!(!config.sort_in_place);
        assert!(!config.is_strict());
    }

    #[test]
    fn test_config_partial_json() {
        let config: Config = serde_json::from_str(r#"{"unknown_codes": "reject"}"#).unwrap();
        assert!(config.is_strict());
        assert!(!config.sort_in_place);
        assert_eq!(config.resolver().policy(), UnknownCodePolicy::Reject);
    }

    #[test]
    fn test_config_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config {
            unknown_codes: UnknownCodePolicy::Warn,
            sort_in_place: true,
        };
        config.save(&path).unwrap();

        let restored = Config::load(&path).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn test_config_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(Config::load(&missing), Err(crate::Error::Io(_))));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(Config::load(&broken), Err(crate::Error::Json(_))));
    }
}
