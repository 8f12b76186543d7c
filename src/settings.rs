//! Armory settings with persistence
//!
//! Settings are saved to `~/.config/armory/settings.toml`

use std::fs;
use std::path::{Path, PathBuf};

use armory_core::PrintSettings;
use armory_integration::ApiConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// All settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub print: PrintSettings,
}

impl Settings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("armory"))
    }

    /// Get the settings file path
    pub fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load settings from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            warn!("Could not determine config directory");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load settings from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No settings file found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => {
                    info!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse settings: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read settings file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        let Some(path) = Self::settings_path() else {
            anyhow::bail!("Could not determine config directory");
        };
        self.save_to(&path)
    }

    /// Save settings to `path`, creating its directory if needed
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use armory_core::{PaperSize, PrintLayout};
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("settings.toml"));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.api.armor_page_size, 500);
        assert_eq!(settings.api.magic_item_page_size, 5000);
    }

    #[test]
    fn test_partial_toml() {
        let toml = r#"
            [api]
            base_url = "http://localhost:8000/v1"

            [print]
            layout = "grid"
        "#;
        let settings: Settings = toml::from_str(toml).unwrap();
        assert_eq!(settings.api.base_url, "http://localhost:8000/v1");
        assert_eq!(settings.api.timeout_secs, 30);
        assert_eq!(settings.print.layout, PrintLayout::Grid);
        assert_eq!(settings.print.paper_size, PaperSize::Letter);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        // Nested so save_to has to create the directory
        let path = dir.path().join("armory").join("settings.toml");
        let mut settings = Settings::default();
        settings.print.paper_size = PaperSize::A4;
        settings.api.magic_item_page_size = 100;

        settings.save_to(&path).unwrap();
        assert!(path.exists());
        assert_eq!(Settings::load_from(&path), settings);
    }

    #[test]
    fn test_unparsable_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "[api\nbase_url = ").unwrap();

        assert_eq!(Settings::load_from(&path), Settings::default());
    }
}
