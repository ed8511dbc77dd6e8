//! JSON file storage for [`InterpConfig`].

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult, Validate};
use crate::settings::InterpConfig;

const APP_DIR: &str = "fxinterp";
const FILE_NAME: &str = "config.json";

/// Location of a settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store at `<config dir>/fxinterp/config.json`, falling back to the
    /// home directory when the platform has no config directory.
    pub fn default_location() -> ConfigResult<Self> {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::at(base.join(APP_DIR).join(FILE_NAME)))
    }

    /// Store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the settings file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the settings file has been written.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads settings, returning defaults if the file does not exist.
    pub fn load(&self) -> ConfigResult<InterpConfig> {
        if !self.exists() {
            return Ok(InterpConfig::default());
        }
        let content = fs::read_to_string(&self.path)?;
        let config: InterpConfig = serde_json::from_str(&content)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Validates and writes settings, creating parent directories.
    pub fn save(&self, config: &InterpConfig) -> ConfigResult<()> {
        config.validate_or_error()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Deletes the settings file. A missing file is not an error.
    pub fn reset(&self) -> ConfigResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{ConfigKey, DisplayFormat};

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::at(dir.path().join("config.json"));
        assert!(!store.exists());
        assert_eq!(store.load().unwrap(), InterpConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::at(dir.path().join("nested").join("config.json"));

        let mut config = InterpConfig::default();
        config.set(ConfigKey::Format, "csv").unwrap();
        config.set(ConfigKey::Epoch, "reference:2002-01-01").unwrap();
        store.save(&config).unwrap();

        assert!(store.exists());
        let loaded = store.load().unwrap();
        assert_eq!(loaded.format, DisplayFormat::Csv);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        fs::write(&path, "{ not json").unwrap();
        let store = ConfigStore::at(&path);
        assert!(matches!(store.load(), Err(ConfigError::Deserialization(_))));

        fs::write(&path, r#"{"precision": 42}"#).unwrap();
        assert!(matches!(store.load(), Err(ConfigError::Validation { .. })));
    }

    #[test]
    fn test_save_rejects_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::at(dir.path().join("config.json"));

        let config = InterpConfig {
            precision: 0,
            ..InterpConfig::default()
        };
        assert!(store.save(&config).is_err());
        assert!(!store.exists());
    }

    #[test]
    fn test_reset_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::at(dir.path().join("config.json"));

        store.reset().unwrap();
        store.save(&InterpConfig::default()).unwrap();
        store.reset().unwrap();
        assert!(!store.exists());
    }
}
