//! Config loading for tripdeck.
//!
//! Loads and validates YAML config files with path expansion. Discovery is
//! closest-wins: a `tripdeck.yaml` in the working directory beats the
//! global `~/.config/tripdeck/config.yaml`; with neither, defaults apply.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::error::ConfigError;
use crate::config::types::{Config, RawConfig, KNOWN_FIELDS};
use crate::store::Catalog;
use crate::theme::Theme;

/// Project config file name looked up in the working directory.
pub const PROJECT_CONFIG_NAME: &str = "tripdeck.yaml";

/// The config file locations considered, in priority order.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryResult {
    pub project_config: Option<PathBuf>,
    pub global_config: Option<PathBuf>,
}

impl DiscoveryResult {
    /// The winning config path, if any config file exists.
    pub fn effective(&self) -> Option<&Path> {
        self.project_config
            .as_deref()
            .or(self.global_config.as_deref())
    }
}

/// Find config files on disk.
pub fn discover() -> DiscoveryResult {
    let project_config = std::env::current_dir()
        .ok()
        .map(|cwd| cwd.join(PROJECT_CONFIG_NAME))
        .filter(|p| p.exists());
    let global_config = dirs::config_dir()
        .map(|p| p.join("tripdeck").join("config.yaml"))
        .filter(|p| p.exists());
    DiscoveryResult {
        project_config,
        global_config,
    }
}

/// Expand tilde in path to home directory.
pub fn expand_path(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();

    if let Some(rest) = path_str.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    } else if path_str == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }

    path.to_path_buf()
}

/// Load and parse a YAML config file.
fn load_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_saphyr::from_str(&content)
        .map_err(|e| ConfigError::from_saphyr_error(path.to_path_buf(), e, KNOWN_FIELDS))
}

/// Validate a raw config into the resolved form.
fn resolve(path: &Path, raw: RawConfig) -> Result<Config, ConfigError> {
    let theme = match raw.theme.as_deref() {
        Some(name) => Theme::named(name).map_err(|message| ConfigError::Validation {
            path: path.to_path_buf(),
            message,
        })?,
        None => Theme::default(),
    };

    Ok(Config {
        catalog_path: raw.catalog.as_deref().map(expand_path),
        latency: Duration::from_millis(raw.latency_ms.unwrap_or(0)),
        theme,
    })
}

/// Load the effective configuration, or defaults when no config file
/// exists (graceful degradation).
pub fn load(discovery: &DiscoveryResult) -> Result<Config, ConfigError> {
    match discovery.effective() {
        Some(path) => {
            let raw = load_file(path)?;
            resolve(path, raw)
        }
        None => Ok(Config::default()),
    }
}

/// Load the catalog named by the config, or the built-in dataset.
pub fn load_catalog(config: &Config) -> Result<Catalog, ConfigError> {
    match &config.catalog_path {
        None => Ok(Catalog::builtin()),
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;
            serde_saphyr::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.clone(),
                message: e.to_string(),
                suggestion: None,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join(PROJECT_CONFIG_NAME);
        fs::write(&path, content).unwrap();
        path
    }

    fn discovery_for(path: PathBuf) -> DiscoveryResult {
        DiscoveryResult {
            project_config: Some(path),
            global_config: None,
        }
    }

    #[test]
    fn test_load_defaults_without_config() {
        let config = load(&DiscoveryResult::default()).unwrap();
        assert!(config.catalog_path.is_none());
        assert_eq!(config.latency, Duration::ZERO);
        assert_eq!(config.theme.name, "dark");
        assert!(!config.has_catalog_override());
    }

    #[test]
    fn test_load_full_config() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            "catalog: /data/catalog.yaml\nlatency_ms: 1000\ntheme: light\n",
        );

        let config = load(&discovery_for(path)).unwrap();
        assert_eq!(config.catalog_path, Some(PathBuf::from("/data/catalog.yaml")));
        assert_eq!(config.latency, Duration::from_millis(1000));
        assert_eq!(config.theme.name, "light");
    }

    #[test]
    fn test_load_empty_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "# nothing configured\n");

        let config = load(&discovery_for(path)).unwrap();
        assert!(config.catalog_path.is_none());
        assert_eq!(config.latency, Duration::ZERO);
    }

    #[test]
    fn test_unknown_field_gets_suggestion() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "latencyms: 500\n");

        let err = load(&discovery_for(path)).unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.contains("latencyms"));
        assert!(rendered.contains("latency_ms"));
    }

    #[test]
    fn test_unknown_theme_is_validation_error() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "theme: drak\n");

        let err = load(&discovery_for(path)).unwrap_err();
        match &err {
            ConfigError::Validation { message, .. } => {
                assert!(message.contains("dark"));
            }
            other => panic!("expected Validation error, got: {:?}", other),
        }
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join(PROJECT_CONFIG_NAME);

        let result = load(&discovery_for(missing.clone()));
        match result.unwrap_err() {
            ConfigError::Io { path, .. } => assert_eq!(path, missing),
            other => panic!("expected Io error, got: {:?}", other),
        }
    }

    #[test]
    fn test_expand_path_tilde() {
        let expanded = expand_path(Path::new("~/catalog.yaml"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expanded, home.join("catalog.yaml"));
        }
    }

    #[test]
    fn test_expand_path_absolute_unchanged() {
        let expanded = expand_path(Path::new("/data/catalog.yaml"));
        assert_eq!(expanded, PathBuf::from("/data/catalog.yaml"));
    }

    #[test]
    fn test_load_catalog_builtin_by_default() {
        let catalog = load_catalog(&Config::default()).unwrap();
        assert!(!catalog.flights.is_empty());
    }

    #[test]
    fn test_load_catalog_from_file() {
        let temp = TempDir::new().unwrap();
        let catalog_path = temp.path().join("catalog.yaml");
        fs::write(
            &catalog_path,
            r#"
hotels:
  - id: h1
    name: "Test Hotel"
    location: "Testville"
    price: 120.0
    rating: 4.2
    description: "A hotel"
    amenities: ["Wi-Fi"]
"#,
        )
        .unwrap();

        let config = Config {
            catalog_path: Some(catalog_path),
            ..Config::default()
        };
        let catalog = load_catalog(&config).unwrap();
        assert_eq!(catalog.hotels.len(), 1);
        assert!(catalog.flights.is_empty());
    }

    #[test]
    fn test_load_catalog_bad_yaml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let catalog_path = temp.path().join("catalog.yaml");
        fs::write(&catalog_path, "hotels: [\nbroken").unwrap();

        let config = Config {
            catalog_path: Some(catalog_path),
            ..Config::default()
        };
        assert!(matches!(
            load_catalog(&config).unwrap_err(),
            ConfigError::Parse { .. }
        ));
    }
}
