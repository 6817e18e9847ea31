/// User configuration
///
/// Read once at startup from an optional JSON file:
/// - Linux: ~/.config/product-catalog/config.json
/// - macOS: ~/Library/Application Support/product-catalog/config.json
/// - Windows: %APPDATA%\product-catalog\config.json
///
/// Every key is optional; anything missing falls back to the default.
/// On first run the defaults are written out so there is a file to edit.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Endpoint serving `{ "products": [...] }`
pub const DEFAULT_ENDPOINT: &str = "https://dummyjson.com/products";

/// Edge length of card thumbnails, in logical pixels
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 100;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize config: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Catalog URL
    pub endpoint: String,
    /// Thumbnails are scaled to fit a square of this size
    pub thumbnail_size: u32,
    /// Download product images (off = placeholders only)
    pub load_images: bool,
    pub dark_theme: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            thumbnail_size: DEFAULT_THUMBNAIL_SIZE,
            load_images: true,
            dark_theme: true,
        }
    }
}

impl Config {
    /// Load the user's config, falling back to defaults on any problem.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            warn!("Could not determine config directory, using defaults");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(Some(config)) => {
                info!("⚙️  Loaded config from {}", path.display());
                config
            }
            Ok(None) => {
                let config = Self::default();
                match config.save_to(&path) {
                    Ok(()) => info!("⚙️  Wrote default config to {}", path.display()),
                    Err(err) => warn!("⚠️  {}", err),
                }
                config
            }
            Err(err) => {
                warn!("⚠️  {}, using defaults", err);
                Self::default()
            }
        }
    }

    /// Read a config file. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        Self::from_json(&json)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Write the config as pretty JSON, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let json = self.to_json()?;
        let write = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write)?;
        }
        std::fs::write(path, json).map_err(write)
    }

    /// Get the path where the config file is expected
    pub fn path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("product-catalog");
        path.push("config.json");
        Some(path)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "product-catalog-test-{}-{}.json",
            std::process::id(),
            name
        ))
    }

    #[test]
    fn test_default_points_at_dummyjson() {
        let config = Config::default();
        assert_eq!(config.endpoint, "https://dummyjson.com/products");
        assert_eq!(config.thumbnail_size, 100);
        assert!(config.load_images);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_json(r#"{ "load_images": false }"#).unwrap();

        assert!(!config.load_images);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.thumbnail_size, DEFAULT_THUMBNAIL_SIZE);
    }

    #[test]
    fn test_serialization() {
        let mut config = Config::default();
        config.endpoint = "http://localhost:8080/products".to_string();
        config.dark_theme = false;

        let json = config.to_json().unwrap();
        let restored = Config::from_json(&json).unwrap();

        assert_eq!(config, restored);
    }

    #[test]
    fn test_missing_file_is_none() {
        let path = scratch_path("missing");
        assert!(Config::load_from(&path).unwrap().is_none());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let path = scratch_path("malformed");
        std::fs::write(&path, "{ endpoint: ").unwrap();

        let result = Config::load_from(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_saved_file_loads_back() {
        let dir = std::env::temp_dir().join(format!(
            "product-catalog-test-{}-nested",
            std::process::id()
        ));
        let path = dir.join("config.json");
        let mut config = Config::default();
        config.thumbnail_size = 72;

        config.save_to(&path).unwrap();
        let result = Config::load_from(&path);
        std::fs::remove_dir_all(&dir).ok();

        assert_eq!(result.unwrap(), Some(config));
    }

    #[test]
    fn test_file_is_read() {
        let path = scratch_path("valid");
        std::fs::write(&path, r#"{ "thumbnail_size": 64 }"#).unwrap();

        let result = Config::load_from(&path);
        std::fs::remove_file(&path).ok();

        assert_eq!(result.unwrap().unwrap().thumbnail_size, 64);
    }
}
