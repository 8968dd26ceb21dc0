use markdown_hawk_engine::RenderOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Persistent rendering defaults, read from a TOML file such as:
///
/// ```toml
/// [render]
/// breaks_enabled = true
/// internal_link_base_url = "$WIKI_ROOT/pages/"
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderOptions,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Environment variables in the base url are expanded; unknown ones leave it as written
        let base_url = &config.render.internal_link_base_url;
        if let Some(expanded) = Self::expand_env(base_url) {
            config.render.internal_link_base_url = expanded;
        }

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markdown-hawk");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_env(value: &str) -> Option<String> {
        match shellexpand::env(value) {
            Ok(expanded) => Some(expanded.into_owned()),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/markdown-hawk/config.toml"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            render: RenderOptions::default()
                .with_breaks_enabled(true)
                .with_internal_link_base_url("/wiki/"),
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_partial_table_keeps_defaults() {
        let config: Config = toml::from_str("[render]\nurls_linked = false\n").unwrap();

        assert!(!config.render.urls_linked);
        assert!(config.render.raw_html_allowed);
        assert_eq!(
            config.render.max_nesting_depth,
            RenderOptions::DEFAULT_MAX_NESTING_DEPTH
        );
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_expand_env_with_env_var() {
        unsafe {
            env::set_var("HAWK_TEST_WIKI", "https://example.org/wiki");
        }

        let expanded = Config::expand_env("$HAWK_TEST_WIKI/pages/");
        assert_eq!(expanded.as_deref(), Some("https://example.org/wiki/pages/"));

        unsafe {
            env::remove_var("HAWK_TEST_WIKI");
        }
    }

    #[test]
    fn test_expand_env_with_unknown_var() {
        assert_eq!(Config::expand_env("$HAWK_TEST_UNSET_VARIABLE/"), None);
    }

    #[test]
    fn test_expand_env_with_plain_url() {
        assert_eq!(Config::expand_env("/wiki/").as_deref(), Some("/wiki/"));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_toml_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[render\nbreaks_enabled = ").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = Config {
            render: RenderOptions::default()
                .with_raw_html_allowed(false)
                .with_max_nesting_depth(8),
        };

        // Parent directories are created on save
        test_config.save_to_path(&config_file).unwrap();
        assert!(config_file.exists(), "Config file should exist");

        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_base_url_env_var_in_toml() {
        unsafe {
            env::set_var("HAWK_TEST_BASE", "/docs");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            "[render]\ninternal_link_base_url = \"$HAWK_TEST_BASE/wiki/\"\n",
        )
        .unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(config.render.internal_link_base_url, "/docs/wiki/");

        unsafe {
            env::remove_var("HAWK_TEST_BASE");
        }
    }
}
