use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or saving the preferences file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read preferences file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse preferences file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize preferences: {source}")]
    SerializeError {
        #[source]
        source: toml::ser::Error,
    },

    #[error("Failed to write preferences file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// On-disk layout of the preferences file.
///
/// Preference values live under `[prefs]`. Any other top-level section is
/// kept as-is and written back on save.
#[derive(Debug, Default, Deserialize)]
pub struct PrefsFile {
    #[serde(default)]
    pub prefs: toml::Table,
    #[serde(flatten)]
    pub other: toml::Table,
}

impl PrefsFile {
    /// Returns the path to the preferences file.
    ///
    /// Uses `~/.config/neo-launcher/prefs.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("neo-launcher").join("prefs.toml")
    }

    /// Load from `path`. A missing file yields an empty `PrefsFile`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Write to `path`, creating parent directories as needed.
    ///
    /// The content goes to a sibling temp file first and is renamed over the
    /// target, so readers never see a half-written file.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let mut root = self.other.clone();
        root.insert("prefs".to_string(), toml::Value::Table(self.prefs.clone()));
        let content =
            toml::to_string(&root).map_err(|e| ConfigError::SerializeError { source: e })?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                    path: path.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let tmp = path.with_extension("toml.tmp");
        fs::write(&tmp, content).map_err(|e| ConfigError::WriteError {
            path: tmp.clone(),
            source: e,
        })?;
        fs::rename(&tmp, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let file = PrefsFile::load_from(&dir.path().join("absent.toml")).unwrap();
        assert!(file.prefs.is_empty());
        assert!(file.other.is_empty());
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.toml");
        fs::write(&path, "[prefs\ndock_hide = ").unwrap();
        let err = PrefsFile::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn default_path_ends_with_launcher_dir() {
        let path = PrefsFile::default_path();
        assert!(path.ends_with("neo-launcher/prefs.toml"));
    }
}
