//! Runtime configuration
//!
//! Every field has a default, so a config file only needs the keys it
//! overrides:
//!
//! ```json
//! { "review": { "cap": 20 }, "suggest": { "limit": 5 }, "max_guesses": 6 }
//! ```

use crate::review::ReviewConfig;
use crate::round::DEFAULT_MAX_GUESSES;
use crate::suggest::SuggestConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub suggest: SuggestConfig,
    pub review: ReviewConfig,
    pub max_guesses: usize,
    /// Directory for persisted state; `None` means `.wordquest` in the
    /// working directory. State stays in memory if it cannot be opened.
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            suggest: SuggestConfig::default(),
            review: ReviewConfig::default(),
            max_guesses: DEFAULT_MAX_GUESSES,
            data_dir: None,
        }
    }
}

impl Config {
    /// Load a JSON config file
    ///
    /// # Errors
    /// `ConfigError::Read` if the file cannot be read, `ConfigError::Parse`
    /// if it is not a valid config.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a config from JSON text
    ///
    /// # Errors
    /// Returns the `serde_json` error for malformed input.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config =
            Config::from_json(r#"{"review": {"cap": 10}, "suggest": {"limit": 3}}"#).unwrap();

        assert_eq!(config.review.cap, 10);
        assert_eq!(config.review.slow_threshold_secs, 90);
        assert_eq!(config.suggest.limit, 3);
        assert_eq!(config.suggest.min_strict_results, 3);
        assert_eq!(config.max_guesses, 6);
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"max_guesses": 8, "data_dir": "/tmp/wq"}}"#).unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.max_guesses, 8);
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/wq")));
    }

    #[test]
    fn missing_file_is_read_error() {
        let result = Config::load("/definitely/not/here.json");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ max_guesses: }}").unwrap();

        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }
}
