//! Settings for sitemap generation.
//!
//! Parses a TOML settings document with serde. The sections are meant to be
//! embedded in a host application's configuration, so every field has a
//! default and an empty document is valid:
//!
//! ```toml
//! [sitemap]
//! compression_level = 6
//!
//! [index]
//! file_name = "sitemap_index.xml"
//! base_url = "${SITE_URL:-https://example.com}/sitemaps/"
//! ```
//!
//! ## Environment Variable Expansion
//!
//! `index.base_url` supports environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! A bare `$` is not a reference and is kept as written.

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Suffix of the compressed sitemap files an index lists.
const SITEMAP_SUFFIX: &str = ".xml.gz";

/// Default gzip compression level.
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;

/// Highest gzip compression level.
pub const MAX_COMPRESSION_LEVEL: u32 = 9;

/// Default sitemap index file name.
pub const DEFAULT_INDEX_FILE_NAME: &str = "sitemap_index.xml";

/// Sitemap generation settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sitemap file settings.
    pub sitemap: SitemapSettings,
    /// Sitemap index settings.
    pub index: IndexSettings,
}

/// Settings for compressed sitemap files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SitemapSettings {
    /// Gzip compression level (0-9).
    pub compression_level: u32,
}

impl Default for SitemapSettings {
    fn default() -> Self {
        Self {
            compression_level: DEFAULT_COMPRESSION_LEVEL,
        }
    }
}

impl SitemapSettings {
    /// Validate the compression level.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.compression_level > MAX_COMPRESSION_LEVEL {
            return Err(ConfigError::Validation(format!(
                "sitemap.compression_level cannot exceed {MAX_COMPRESSION_LEVEL}"
            )));
        }
        Ok(())
    }
}

/// Settings for the sitemap index document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IndexSettings {
    /// Index file name, created inside the scanned directory.
    pub file_name: String,
    /// Prefix joined verbatim with each sitemap file name.
    pub base_url: String,
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_INDEX_FILE_NAME.to_owned(),
            base_url: String::new(),
        }
    }
}

impl IndexSettings {
    /// Validate that the index file name is a plain, non-sitemap file name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.file_name.is_empty() {
            return Err(ConfigError::Validation(
                "index.file_name cannot be empty".to_owned(),
            ));
        }
        if self.file_name.contains(['/', '\\']) {
            return Err(ConfigError::Validation(format!(
                "index.file_name must be a plain file name, got {}",
                self.file_name
            )));
        }
        // A gzip-suffixed index would be picked up by the next index run.
        if self.file_name.ends_with(SITEMAP_SUFFIX) {
            return Err(ConfigError::Validation(format!(
                "index.file_name cannot end with {SITEMAP_SUFFIX}"
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`index.base_url`").
        field: String,
        /// Error message (e.g., "${`SITE_URL`} not set").
        message: String,
    },
}

impl Config {
    /// Load settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, parsing fails, an environment
    /// variable is missing, or validation fails.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse settings from a TOML string, expanding and validating them.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sitemap.validate()?;
        self.index.validate()?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.index.base_url = expand::expand_env(&self.index.base_url, "index.base_url")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.sitemap.compression_level, 6);
        assert_eq!(config.index.file_name, "sitemap_index.xml");
        assert_eq!(config.index.base_url, "");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_empty_config() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.sitemap, SitemapSettings::default());
        assert_eq!(config.index, IndexSettings::default());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[sitemap]
compression_level = 9

[index]
file_name = "index.xml"
base_url = "https://example.com/sitemaps/"
"#;
        let config = Config::from_toml_str(toml).unwrap();
        assert_eq!(config.sitemap.compression_level, 9);
        assert_eq!(config.index.file_name, "index.xml");
        assert_eq!(config.index.base_url, "https://example.com/sitemaps/");
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config = Config::from_toml_str("[index]\nbase_url = \"/maps/\"\n").unwrap();
        assert_eq!(config.index.file_name, "sitemap_index.xml");
        assert_eq!(config.index.base_url, "/maps/");
        assert_eq!(config.sitemap.compression_level, 6);
    }

    #[test]
    fn test_invalid_toml() {
        let result = Config::from_toml_str("[sitemap\ncompression_level = 1");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_compression_level_too_high() {
        let result = Config::from_toml_str("[sitemap]\ncompression_level = 10\n");
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: sitemap.compression_level cannot exceed 9"
        );
    }

    #[test]
    fn test_compression_level_zero_is_valid() {
        let config = Config::from_toml_str("[sitemap]\ncompression_level = 0\n").unwrap();
        assert_eq!(config.sitemap.compression_level, 0);
    }

    #[test]
    fn test_empty_index_file_name() {
        let result = Config::from_toml_str("[index]\nfile_name = \"\"\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_index_file_name_with_separator() {
        for name in ["maps/index.xml", "maps\\\\index.xml"] {
            let toml = format!("[index]\nfile_name = \"{name}\"\n");
            let result = Config::from_toml_str(&toml);
            assert!(
                matches!(result, Err(ConfigError::Validation(_))),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn test_index_file_name_with_sitemap_suffix() {
        let result = Config::from_toml_str("[index]\nfile_name = \"index.xml.gz\"\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_base_url_env_default() {
        let toml = r#"
[index]
base_url = "${SITEMAP_CONFIG_TEST_UNSET_URL:-https://fallback.example}/sitemaps/"
"#;
        let config = Config::from_toml_str(toml).unwrap();
        assert_eq!(config.index.base_url, "https://fallback.example/sitemaps/");
    }

    #[test]
    fn test_base_url_keeps_literal_dollar() {
        let config =
            Config::from_toml_str("[index]\nbase_url = \"https://example.com/$maps/\"\n").unwrap();
        assert_eq!(config.index.base_url, "https://example.com/$maps/");
    }

    #[test]
    fn test_base_url_env_missing() {
        let toml = "[index]\nbase_url = \"${SITEMAP_CONFIG_TEST_UNSET_URL}/\"\n";
        let err = Config::from_toml_str(toml).unwrap_err();
        match err {
            ConfigError::EnvVar { field, message } => {
                assert_eq!(field, "index.base_url");
                assert!(message.contains("SITEMAP_CONFIG_TEST_UNSET_URL"));
            }
            other => panic!("expected EnvVar error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("sitemap.toml");
        std::fs::write(&path, "[index]\nbase_url = \"/sitemaps/\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.index.base_url, "/sitemaps/");
    }

    #[test]
    fn test_load_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing.toml");

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(ref p) if *p == path));
    }
}
