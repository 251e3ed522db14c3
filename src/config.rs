//! Persona configuration persistence.
//!
//! [`ConfigStore`] loads and saves a [`PersonaConfig`] as a single
//! pretty-printed JSON file. Loading fails soft: a missing file applies
//! the defaults and a malformed file is reported and ignored.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde_json::{from_reader, to_writer_pretty};

use crate::error::{Error, Result};
use crate::persona::{PersonaConfig, PersonaOverrides};

/// Default path of the persisted persona configuration.
pub const DEFAULT_CONFIG_PATH: &str = "anime_ai_config.json";

/// Loads and saves [`PersonaConfig`] records at a fixed path.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Creates a store at the default config path.
    pub fn new() -> Self {
        Self::at_path(DEFAULT_CONFIG_PATH)
    }

    /// Creates a store at a custom path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolves the effective configuration.
    ///
    /// Starts from the built-in defaults. When `overrides` is empty, any
    /// stored file is merged over the defaults; when it is non-empty the
    /// stored file is ignored entirely and the overrides win. A missing
    /// file is not an error; a malformed one is reported and ignored.
    pub fn load(&self, overrides: &PersonaOverrides) -> PersonaConfig {
        let mut config = PersonaConfig::default();
        if overrides.is_empty() {
            match self.read_stored() {
                Ok(Some(stored)) => stored.apply(&mut config),
                Ok(None) => {}
                Err(err) => {
                    log::warn!(
                        "failed to load config from {}: {err}",
                        self.path.display()
                    );
                }
            }
        } else {
            overrides.apply(&mut config);
        }
        config
    }

    /// Serializes the full record to the store path as pretty JSON.
    pub fn save(&self, config: &PersonaConfig) -> Result<()> {
        let file = File::create(&self.path)
            .map_err(|err| Error::io("failed to create config file", err))?;
        let writer = BufWriter::new(file);
        to_writer_pretty(writer, config)
            .map_err(|err| Error::serialization("failed to serialize config", Some(Box::new(err))))
    }

    /// Merges `overrides` into `config` and persists the result.
    ///
    /// The merge always takes effect in memory; only the write can fail.
    pub fn update(&self, config: &mut PersonaConfig, overrides: &PersonaOverrides) -> Result<()> {
        overrides.apply(config);
        self.save(config)
    }

    fn read_stored(&self) -> Result<Option<PersonaOverrides>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let file =
            File::open(&self.path).map_err(|err| Error::io("failed to open config file", err))?;
        let reader = BufReader::new(file);
        let stored: PersonaOverrides = from_reader(reader)
            .map_err(|err| Error::serialization("failed to parse config file", Some(Box::new(err))))?;
        Ok(Some(stored))
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(tag: &str) -> ConfigStore {
        let path = std::env::temp_dir().join(format!(
            "animechat-config-{tag}-{}.json",
            uuid::Uuid::new_v4().simple()
        ));
        ConfigStore::at_path(path)
    }

    #[test]
    fn load_missing_file_yields_defaults() {
        let store = temp_store("missing");
        let config = store.load(&PersonaOverrides::default());
        assert_eq!(config, PersonaConfig::default());
    }

    #[test]
    fn update_then_load_round_trips() {
        let store = temp_store("roundtrip");
        let mut config = store.load(&PersonaOverrides::default());
        let overrides = PersonaOverrides {
            name: Some("Asuka".to_string()),
            tone: Some("galak tapi peduli".to_string()),
            ..PersonaOverrides::default()
        };
        store.update(&mut config, &overrides).unwrap();

        let reloaded = store.load(&PersonaOverrides::default());
        assert_eq!(reloaded, config);
        assert_eq!(reloaded.name, "Asuka");

        let _ = std::fs::remove_file(store.path());
    }

    #[test]
    fn caller_overrides_win_over_stored_file() {
        let store = temp_store("precedence");
        let mut stored = PersonaConfig::default();
        stored.name = "Stored".to_string();
        store.save(&stored).unwrap();

        let overrides = PersonaOverrides {
            personality: Some("dandere".to_string()),
            ..PersonaOverrides::default()
        };
        let config = store.load(&overrides);
        // Non-empty overrides cause the stored file to be skipped.
        assert_eq!(config.name, PersonaConfig::default().name);
        assert_eq!(config.personality, "dandere");

        let _ = std::fs::remove_file(store.path());
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let store = temp_store("malformed");
        std::fs::write(store.path(), "{not json").unwrap();
        let config = store.load(&PersonaOverrides::default());
        assert_eq!(config, PersonaConfig::default());
        let _ = std::fs::remove_file(store.path());
    }

    #[test]
    fn save_to_missing_directory_is_an_io_error() {
        let path = std::env::temp_dir()
            .join(format!("animechat-absent-{}", uuid::Uuid::new_v4().simple()))
            .join("config.json");
        let store = ConfigStore::at_path(path);
        let err = store.save(&PersonaConfig::default()).unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn partial_stored_file_merges_over_defaults() {
        let store = temp_store("partial");
        std::fs::write(store.path(), r#"{"name": "Miku"}"#).unwrap();
        let config = store.load(&PersonaOverrides::default());
        assert_eq!(config.name, "Miku");
        assert_eq!(config.role, PersonaConfig::default().role);
        let _ = std::fs::remove_file(store.path());
    }
}
