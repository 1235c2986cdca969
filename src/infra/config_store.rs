// ============================================================
// Layer 5 — Config Store
// ============================================================
// Reads and writes ProcessConfig as pretty-printed JSON.
//
// Example file:
//   {
//     "append_suffix": "\n[Appended by processing script]",
//     "show_encapsulation": true
//   }
//
// Fields missing from the file fall back to their defaults.

use anyhow::{Context, Result};
use std::{fs, io, path::PathBuf};

use crate::application::process_use_case::ProcessConfig;

pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Write the config, creating parent directories as needed.
    pub fn save(&self, cfg: &ProcessConfig) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(cfg)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Cannot write config to '{}'", self.path.display()))?;

        tracing::debug!("Saved config to '{}'", self.path.display());
        Ok(())
    }

    pub fn load(&self) -> Result<ProcessConfig> {
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read config from '{}'", self.path.display()))?;
        self.parse(&json)
    }

    /// Load the config, or use the defaults if the file doesn't exist.
    /// Any other read failure is still an error.
    pub fn load_or_default(&self) -> Result<ProcessConfig> {
        match fs::read_to_string(&self.path) {
            Ok(json) => self.parse(&json),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(
                    "Config '{}' does not exist, using defaults",
                    self.path.display()
                );
                Ok(ProcessConfig::default())
            }
            Err(e) => Err(e)
                .with_context(|| format!("Cannot read config from '{}'", self.path.display())),
        }
    }

    fn parse(&self, json: &str) -> Result<ProcessConfig> {
        serde_json::from_str(json)
            .with_context(|| format!("Invalid config in '{}'", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load() {
        let dir   = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("nested/config.json"));
        let cfg   = ProcessConfig { append_suffix: "!".into(), show_encapsulation: false };

        store.save(&cfg).unwrap();
        assert_eq!(store.load().unwrap(), cfg);
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let dir   = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("absent.json"));

        assert_eq!(store.load_or_default().unwrap(), ProcessConfig::default());
        assert!(store.load().is_err());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();

        let err = ConfigStore::new(&path).load_or_default().unwrap_err();
        assert!(err.to_string().contains("Invalid config"));
    }

    #[test]
    fn test_unreadable_path_is_not_treated_as_missing() {
        // A directory exists but can't be read as a file:
        // only NotFound may fall back to the defaults
        let dir = tempfile::tempdir().unwrap();
        let err = ConfigStore::new(dir.path()).load_or_default().unwrap_err();
        assert!(err.to_string().contains("Cannot read config"));
    }
}
