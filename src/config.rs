use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::history::HISTORY_FILE_NAME;
use crate::password::GenerationOptions;

const APP_DIR: &str = "passforge";
const CONFIG_FILE_NAME: &str = "config.json";

/// User defaults, read from `config.json`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub length: usize,
    pub uppercase: bool,
    pub numbers: bool,
    pub symbols: bool,
    pub exclude: String,
    pub history_file: Option<PathBuf>,
    pub save_history: bool,
    pub copy_to_clipboard: bool,
    pub mask: bool,
}

impl Default for Config {
    fn default() -> Self {
        let options = GenerationOptions::default();
        Self {
            length: options.length,
            uppercase: options.include_uppercase,
            numbers: options.include_numbers,
            symbols: options.include_symbols,
            exclude: String::new(),
            history_file: None,
            save_history: true,
            copy_to_clipboard: false,
            mask: false,
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE_NAME))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Loads `path`, or the platform default when `None`. A missing file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        debug!("loading config from {}", path.display());
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            length: self.length,
            include_uppercase: self.uppercase,
            include_numbers: self.numbers,
            include_symbols: self.symbols,
            excluded: self.exclude.chars().collect(),
        }
    }

    /// Configured history file, else `password_memory.txt` in the user data directory.
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file.clone().or_else(|| {
            dirs::data_dir().map(|dir| dir.join(APP_DIR).join(HISTORY_FILE_NAME))
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::io::Write;

    use tempfile::{NamedTempFile, tempdir};

    use super::*;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        write!(file, "{}", content).expect("Failed to write");
        file
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load(Some(dir.path().join("absent.json").as_path())).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let file = config_file(r#"{ "length": 24, "symbols": false, "exclude": "O0l1" }"#);
        let config = Config::load(Some(file.path())).unwrap();

        assert_eq!(config.length, 24);
        assert!(!config.symbols);
        assert!(config.uppercase);
        assert!(config.save_history);
        assert_eq!(config.exclude, "O0l1");
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let file = config_file("{ length: ");
        let result = Config::load(Some(file.path()));

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn generation_options_from_config() {
        let config = Config {
            length: 10,
            numbers: false,
            exclude: "xyz".to_string(),
            ..Config::default()
        };
        let options = config.generation_options();

        assert_eq!(options.length, 10);
        assert!(options.include_uppercase);
        assert!(!options.include_numbers);
        assert_eq!(options.excluded, BTreeSet::from(['x', 'y', 'z']));
    }

    #[test]
    fn printed_config_loads_back() {
        let config = Config { length: 30, mask: true, ..Config::default() };
        let file = config_file(&config.to_json().unwrap());

        assert_eq!(Config::load(Some(file.path())).unwrap(), config);
    }

    #[test]
    fn explicit_history_file_wins() {
        let config = Config {
            history_file: Some(PathBuf::from("/tmp/pw.txt")),
            ..Config::default()
        };

        assert_eq!(config.history_path(), Some(PathBuf::from("/tmp/pw.txt")));
    }
}
