use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use twinverse_ipc::LayoutMode;

use super::DEFAULT_MANAGED_CLASS;

/// Application configuration settings.
/// Every field is optional in the file; CLI flags override what it sets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub mode: LayoutMode,
    pub managed_class: String,
    pub manage_panels: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: LayoutMode::default(),
            managed_class: DEFAULT_MANAGED_CLASS.to_string(),
            manage_panels: true,
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("twinverse").join("config.json"))
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid config: {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(text)?;
        if config.managed_class.is_empty() {
            anyhow::bail!("managed_class must not be empty");
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.mode, LayoutMode::Horizontal);
        assert_eq!(config.managed_class, "gamescope");
        assert!(config.manage_panels);
    }

    #[test]
    fn test_parse_partial() {
        let config = Config::parse(r#"{"mode": "fullscreen"}"#).unwrap();
        assert_eq!(config.mode, LayoutMode::Fullscreen);
        assert_eq!(config.managed_class, "gamescope");
        assert!(config.manage_panels);
    }

    #[test]
    fn test_parse_full() {
        let config = Config::parse(
            r#"{"mode": "vertical", "managed_class": "gamescope-x", "manage_panels": false}"#,
        )
        .unwrap();
        assert_eq!(
            config,
            Config {
                mode: LayoutMode::Vertical,
                managed_class: "gamescope-x".to_string(),
                manage_panels: false,
            }
        );
    }

    #[test]
    fn test_parse_rejects_unknown_mode() {
        assert!(Config::parse(r#"{"mode": "diagonal"}"#).is_err());
    }

    #[test]
    fn test_parse_rejects_empty_class() {
        assert!(Config::parse(r#"{"managed_class": ""}"#).is_err());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("twinverse-test-missing/config.json");
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("twinverse-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(&path, r#"{"manage_panels": false}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert!(!config.manage_panels);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
