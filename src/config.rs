use crate::error::AppError;
use masonry_layout::LayoutConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for the gallery list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LibrarySettings {
    /// Title given to a freshly created gallery
    pub default_title: String,
    /// JSON file the library is loaded from and written back to
    pub snapshot_path: Option<String>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            default_title: "Untitled 1".to_string(),
            snapshot_path: None,
        }
    }
}

/// Application configuration, read from a TOML file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub layout: LayoutConfig,
    pub library: LibrarySettings,
}

impl AppConfig {
    pub fn from_toml(s: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(s)?)
    }

    #[allow(dead_code)]
    pub fn to_toml(&self) -> Result<String, AppError> {
        toml::to_string_pretty(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Reads the config file, or the defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let Some(path) = path else {
            log::debug!("No config file given, using defaults");
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml(&content)?;

        log::debug!("Loaded config from {}: {:?}", path.display(), config);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use masonry_layout::ColumnStrategy;

    #[test]
    fn test_empty_config_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.layout.columns, 2);
        assert_eq!(config.layout.padding, 6.0);
        assert_eq!(config.library.default_title, "Untitled 1");
    }

    #[test]
    fn test_partial_config() {
        let config = AppConfig::from_toml(
            r#"
            [layout]
            columns = 3
            strategy = "shortest_column"

            [library]
            snapshot_path = "library.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.layout.columns, 3);
        assert_eq!(config.layout.strategy, ColumnStrategy::ShortestColumn);
        assert_eq!(config.layout.padding, 6.0);
        assert_eq!(config.library.default_title, "Untitled 1");
        assert_eq!(
            config.library.snapshot_path.as_deref(),
            Some("library.json")
        );
    }

    #[test]
    fn test_unknown_strategy_fails() {
        let result = AppConfig::from_toml("[layout]\nstrategy = \"diagonal\"");
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = AppConfig::default();
        config.layout.content_width = 768.0;
        let text = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_load_without_path() {
        assert_eq!(AppConfig::load(None).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let result = AppConfig::load(Some(Path::new("/nonexistent/gallery.toml")));
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
