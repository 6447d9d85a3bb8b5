//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `APA_DATA_DIR` - Directory holding the persisted document (default: `data`)
//! - `APA_DATA_FILE` - File name of the persisted document (default: `app_data.json`)
//! - `APA_SEED_PATH` - Seed template to use instead of the bundled one
//! - `APA_IMAGE_DIR` - Directory searched for local product images

use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_DATA_FILE: &str = "app_data.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Where the store keeps its document and finds its seed and images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding the persisted document
    pub data_dir: PathBuf,
    /// Persisted document file name (no directory components)
    pub data_file: String,
    /// Seed template file; `None` uses the bundled template
    pub seed_path: Option<PathBuf>,
    /// Directory for resolving local image names; `None` disables resolution
    pub image_dir: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            data_file: DEFAULT_DATA_FILE.to_string(),
            seed_path: None,
            image_dir: None,
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `APA_DATA_FILE` is blank or contains a path
    /// separator.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`StoreConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get_optional = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let data_dir = get_optional("APA_DATA_DIR")
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);

        let data_file = match lookup("APA_DATA_FILE") {
            None => DEFAULT_DATA_FILE.to_string(),
            Some(name) => validate_file_name(&name)?,
        };

        Ok(Self {
            data_dir,
            data_file,
            seed_path: get_optional("APA_SEED_PATH").map(PathBuf::from),
            image_dir: get_optional("APA_IMAGE_DIR").map(PathBuf::from),
        })
    }

    /// Full path of the persisted document.
    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        self.data_dir.join(&self.data_file)
    }
}

fn validate_file_name(name: &str) -> Result<String, ConfigError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            "APA_DATA_FILE".to_string(),
            "must not be empty".to_string(),
        ));
    }
    if name.contains(['/', '\\']) {
        return Err(ConfigError::InvalidEnvVar(
            "APA_DATA_FILE".to_string(),
            "must be a file name, not a path (use APA_DATA_DIR)".to_string(),
        ));
    }
    Ok(name.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StoreConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.data_path(), PathBuf::from("data/app_data.json"));
    }

    #[test]
    fn test_overrides() {
        let config = StoreConfig::from_lookup(lookup(&[
            ("APA_DATA_DIR", "/var/lib/apa"),
            ("APA_DATA_FILE", "store.json"),
            ("APA_SEED_PATH", "/etc/apa/seed.json"),
            ("APA_IMAGE_DIR", "/usr/share/apa/img"),
        ]))
        .unwrap();

        assert_eq!(config.data_path(), PathBuf::from("/var/lib/apa/store.json"));
        assert_eq!(config.seed_path, Some(PathBuf::from("/etc/apa/seed.json")));
        assert_eq!(config.image_dir, Some(PathBuf::from("/usr/share/apa/img")));
    }

    #[test]
    fn test_blank_optionals_ignored() {
        let config =
            StoreConfig::from_lookup(lookup(&[("APA_SEED_PATH", "  "), ("APA_DATA_DIR", "")]))
                .unwrap();
        assert!(config.seed_path.is_none());
        assert_eq!(config.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_invalid_data_file() {
        let err = StoreConfig::from_lookup(lookup(&[("APA_DATA_FILE", "a/b.json")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "APA_DATA_FILE"));

        assert!(StoreConfig::from_lookup(lookup(&[("APA_DATA_FILE", " ")])).is_err());
    }
}
