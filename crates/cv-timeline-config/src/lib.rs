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

/// Settings file contents.
///
/// Paths are kept as written (`~/cv/mileStone.md`, `$CV_ROOT/t.json`) so saving
/// never rewrites them; use the `resolved_*` accessors to get usable paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base milestone document; per-language variants sit next to it.
    pub document_path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translations_path: Option<PathBuf>,
    /// Last language chosen in the viewer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Config {
    pub fn new(document_path: impl Into<PathBuf>) -> Self {
        Self {
            document_path: document_path.into(),
            translations_path: None,
            language: None,
        }
    }

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

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    /// The document path with shell variables and tilde expanded.
    pub fn resolved_document_path(&self) -> PathBuf {
        Self::expand_path(&self.document_path).unwrap_or_else(|| self.document_path.clone())
    }

    /// The translations path with shell variables and tilde expanded.
    pub fn resolved_translations_path(&self) -> Option<PathBuf> {
        self.translations_path
            .as_ref()
            .map(|path| Self::expand_path(path).unwrap_or_else(|| path.clone()))
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

    /// Records `language` as the preferred language and writes the file.
    pub fn save_language_to_path<P: AsRef<Path>>(
        &mut self,
        language: &str,
        config_path: P,
    ) -> anyhow::Result<()> {
        self.language = Some(language.to_string());
        self.save_to_path(config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/cv-timeline");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
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
        // Should contain the expected config file name
        assert!(path_str.ends_with(".config/cv-timeline/config.toml"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            document_path: PathBuf::from("/tmp/cv/mileStone.md"),
            translations_path: Some(PathBuf::from("/tmp/cv/translations.json")),
            language: Some("fr".to_string()),
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let config: Config = toml::from_str(r#"document_path = "/cv/mileStone.md""#).unwrap();

        assert_eq!(config.translations_path, None);
        assert_eq!(config.language, None);
    }

    #[test]
    fn test_unset_optional_fields_are_not_written() {
        let toml_str = toml::to_string(&Config::new("/cv/mileStone.md")).unwrap();

        assert!(!toml_str.contains("language"));
        assert!(!toml_str.contains("translations_path"));
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("CV_TIMELINE_TEST_VAR", "/test/env/path");
        }

        let path = PathBuf::from("$CV_TIMELINE_TEST_VAR/subdir");
        let expanded = Config::expand_path(&path);

        assert_eq!(expanded, Some(PathBuf::from("/test/env/path/subdir")));

        unsafe {
            env::remove_var("CV_TIMELINE_TEST_VAR");
        }
    }

    #[test]
    fn test_expand_path_with_relative_path() {
        let path = PathBuf::from("relative/mileStone.md");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_reports_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "language = ").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = Config::new("/tmp/cv/mileStone.md");

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_save_language_persists_preference() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        let mut config = Config::new("/tmp/cv/mileStone.md");

        config.save_language_to_path("zh", &config_file).unwrap();

        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(loaded_config.language.as_deref(), Some("zh"));
    }

    #[test]
    fn test_save_language_keeps_paths_as_written() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            "document_path = \"~/cv/mileStone.md\"\ntranslations_path = \"$HOME/cv/t.json\"\n",
        )
        .unwrap();

        let mut config = Config::load_from_path(&config_file).unwrap().unwrap();
        config.save_language_to_path("fr", &config_file).unwrap();

        let saved = std::fs::read_to_string(&config_file).unwrap();
        assert!(saved.contains("document_path = \"~/cv/mileStone.md\""));
        assert!(saved.contains("translations_path = \"$HOME/cv/t.json\""));
        assert!(saved.contains("language = \"fr\""));
    }

    #[test]
    fn test_config_with_env_var_in_toml() {
        unsafe {
            env::set_var("CV_ROOT", "/custom/cv");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            "document_path = \"$CV_ROOT/mileStone.md\"\ntranslations_path = \"$CV_ROOT/t.json\"\n",
        )
        .unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(
            config.resolved_document_path(),
            PathBuf::from("/custom/cv/mileStone.md")
        );
        assert_eq!(
            config.resolved_translations_path(),
            Some(PathBuf::from("/custom/cv/t.json"))
        );

        unsafe {
            env::remove_var("CV_ROOT");
        }
    }
}
