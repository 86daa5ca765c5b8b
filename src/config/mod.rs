use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use user_prompts::prompt_for_api_key;
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// API key for the web-search collaborator (Serper-style service).
    pub search_api_key: String,
    /// Search endpoint URL. Should include https:// prefix.
    #[serde(default = "default_search_endpoint")]
    pub search_endpoint: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for search requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

/// Default search endpoint URL
fn default_search_endpoint() -> String {
    crate::constants::DEFAULT_SEARCH_ENDPOINT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            search_api_key: String::new(),
            search_endpoint: default_search_endpoint(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, prompts user for a search API key and creates one.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `FANTASY_SEARCH_API_KEY` - Override search API key
    /// - `FANTASY_SEARCH_ENDPOINT` - Override search endpoint URL
    /// - `FANTASY_LOG_FILE` - Override log file path
    /// - `FANTASY_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded or created configuration
    /// * `Err(AppError)` - Error occurred during load/create
    ///
    /// # Notes
    /// - Config file is stored in platform-specific config directory
    /// - Handles first-time setup with user prompts
    /// - Environment variables take precedence over config file
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path).await?;
            toml::from_str(&content)?
        } else {
            // Check if the API key is provided via environment variable
            if let Ok(search_api_key) = std::env::var("FANTASY_SEARCH_API_KEY") {
                Config {
                    search_api_key,
                    ..Config::default()
                }
            } else {
                let search_api_key = prompt_for_api_key().await?;

                let config = Config {
                    search_api_key,
                    ..Config::default()
                };

                config.save().await?;
                config
            }
        };

        // Override with environment variables if present
        if let Ok(search_api_key) = std::env::var("FANTASY_SEARCH_API_KEY") {
            config.search_api_key = search_api_key;
        }

        if let Ok(search_endpoint) = std::env::var("FANTASY_SEARCH_ENDPOINT") {
            config.search_endpoint = search_endpoint;
        }

        if let Ok(log_file_path) = std::env::var("FANTASY_LOG_FILE") {
            config.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var("FANTASY_HTTP_TIMEOUT")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.http_timeout_seconds = timeout;
        }

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration settings
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is valid
    /// * `Err(AppError)` - Configuration validation failed
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.search_api_key,
            &self.search_endpoint,
            self.http_timeout_seconds,
            &self.log_file_path,
        )
    }

    /// Saves current configuration to the default config file location.
    ///
    /// # Returns
    /// * `Ok(())` - Successfully saved configuration
    /// * `Err(AppError)` - Error occurred during save
    ///
    /// # Notes
    /// - Creates config directory if it doesn't exist
    /// - Ensures the search endpoint has an https:// prefix
    /// - Uses TOML format for storage
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - The API key is masked; only the last four characters are shown
    /// - Handles case when no config file exists
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("Search API Key:");
            println!("{}", mask_api_key(&config.search_api_key));
            println!("────────────────────────────────────");
            println!("Search Endpoint:");
            println!("{}", config.search_endpoint);
            println!("────────────────────────────────────");
            println!("HTTP Timeout:");
            println!("{} seconds", config.http_timeout_seconds);
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/fantasy_expert.log");
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and normalizes the
    /// search endpoint to use https://.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let search_endpoint = if !self.search_endpoint.starts_with("https://") {
            format!(
                "https://{}",
                self.search_endpoint.trim_start_matches("http://")
            )
        } else {
            self.search_endpoint.clone()
        };
        let content = toml::to_string_pretty(&Config {
            search_api_key: self.search_api_key.clone(),
            search_endpoint,
            log_file_path: self.log_file_path.clone(),
            http_timeout_seconds: self.http_timeout_seconds,
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path (for testing).
    #[allow(dead_code)] // Used in tests
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Masks an API key for display, keeping only the last four characters.
fn mask_api_key(key: &str) -> String {
    if key.len() <= 4 {
        "****".to_string()
    } else {
        format!("****{}", &key[key.len() - 4..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[tokio::test]
    #[serial]
    async fn test_env_overrides_take_precedence() {
        // Environment variables are process-global, hence #[serial]
        unsafe {
            std::env::set_var("FANTASY_SEARCH_API_KEY", "env-key-123");
            std::env::set_var("FANTASY_SEARCH_ENDPOINT", "https://env.example.com/search");
            std::env::set_var("FANTASY_HTTP_TIMEOUT", "7");
        }

        let config = Config::load().await.unwrap();
        assert_eq!(config.search_api_key, "env-key-123");
        assert_eq!(config.search_endpoint, "https://env.example.com/search");
        assert_eq!(config.http_timeout_seconds, 7);

        unsafe {
            std::env::remove_var("FANTASY_SEARCH_API_KEY");
            std::env::remove_var("FANTASY_SEARCH_ENDPOINT");
            std::env::remove_var("FANTASY_HTTP_TIMEOUT");
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_invalid_timeout_env_var_is_ignored() {
        unsafe {
            std::env::set_var("FANTASY_SEARCH_API_KEY", "env-key-123");
            std::env::set_var("FANTASY_HTTP_TIMEOUT", "not-a-number");
        }

        let config = Config::load().await.unwrap();
        assert_eq!(
            config.http_timeout_seconds,
            crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS
        );

        unsafe {
            std::env::remove_var("FANTASY_SEARCH_API_KEY");
            std::env::remove_var("FANTASY_HTTP_TIMEOUT");
        }
    }

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
search_api_key = "abc123def456"
log_file_path = "/custom/log/path"
"#;
        tokio::fs::write(&config_path, config_content)
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.search_api_key, "abc123def456");
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
        // Defaults kick in for fields the file omits
        assert_eq!(
            config.search_endpoint,
            crate::constants::DEFAULT_SEARCH_ENDPOINT
        );
        assert_eq!(
            config.http_timeout_seconds,
            crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS
        );
    }

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let original_config = Config {
            search_api_key: "abc123def456".to_string(),
            search_endpoint: "https://search.example.com/search".to_string(),
            log_file_path: Some("/custom/log/path".to_string()),
            http_timeout_seconds: default_http_timeout(),
        };
        original_config
            .save_to_path(&config_path_str)
            .await
            .unwrap();
        let loaded_config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(original_config.search_api_key, loaded_config.search_api_key);
        assert_eq!(
            original_config.search_endpoint,
            loaded_config.search_endpoint
        );
        assert_eq!(original_config.log_file_path, loaded_config.log_file_path);
    }

    #[tokio::test]
    async fn test_config_save_normalizes_endpoint_to_https() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let config = Config {
            search_api_key: "abc123def456".to_string(),
            search_endpoint: "http://search.example.com/search".to_string(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        };
        config.save_to_path(&config_path_str).await.unwrap();
        let loaded_config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(
            loaded_config.search_endpoint,
            "https://search.example.com/search"
        );
    }

    #[tokio::test]
    async fn test_config_save_creates_nested_directories() {
        let temp_dir = tempdir().unwrap();
        let nested_path = temp_dir
            .path()
            .join("level1")
            .join("level2")
            .join("config.toml");
        let nested_path_str = nested_path.to_string_lossy();

        let config = Config {
            search_api_key: "abc123def456".to_string(),
            ..Config::default()
        };

        config.save_to_path(&nested_path_str).await.unwrap();
        assert!(nested_path.exists());

        let loaded_config = Config::load_from_path(&nested_path_str).await.unwrap();
        assert_eq!(loaded_config.search_api_key, "abc123def456");
    }

    #[tokio::test]
    async fn test_config_missing_required_field() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("incomplete_config.toml");
        let config_path_str = config_path.to_string_lossy();

        let incomplete_content = r#"
# Missing search_api_key
log_file_path = "/some/path"
"#;
        tokio::fs::write(&config_path, incomplete_content)
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path_str).await;
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AppError::TomlDeserialize(_)));
    }

    #[tokio::test]
    async fn test_config_malformed_toml_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("malformed_config.toml");
        let config_path_str = config_path.to_string_lossy();

        let malformed_content = r#"
search_api_key = "abc123"
[invalid_section
malformed = "data
"#;
        tokio::fs::write(&config_path, malformed_content)
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path_str).await;
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AppError::TomlDeserialize(_)));
    }

    #[test]
    fn test_config_serialization_skips_absent_log_path() {
        let config = Config {
            search_api_key: "abc123def456".to_string(),
            ..Config::default()
        };

        let toml_string = toml::to_string_pretty(&config).unwrap();
        assert!(toml_string.contains("search_api_key = \"abc123def456\""));
        // log_file_path should not appear in TOML when it's None due to skip_serializing_if
        assert!(!toml_string.contains("log_file_path"));
    }

    #[test]
    fn test_get_config_path() {
        let config_path = Config::get_config_path();
        assert!(config_path.contains("fantasy_expert"));
        assert!(config_path.ends_with("config.toml"));
    }

    #[test]
    fn test_get_log_dir_path() {
        let log_dir_path = Config::get_log_dir_path();
        assert!(log_dir_path.contains("fantasy_expert"));
        assert!(log_dir_path.ends_with("logs"));
    }

    #[test]
    fn test_mask_api_key() {
        assert_eq!(mask_api_key("abc123def456"), "****f456");
        assert_eq!(mask_api_key("abcd"), "****");
        assert_eq!(mask_api_key(""), "****");
    }

    #[test]
    fn test_config_validation_valid_configs() {
        let valid_configs = vec![
            Config {
                search_api_key: "abc123def456".to_string(),
                ..Config::default()
            },
            Config {
                search_api_key: "abc123def456".to_string(),
                search_endpoint: "http://localhost:8080/search".to_string(),
                log_file_path: Some("/tmp/test.log".to_string()),
                http_timeout_seconds: default_http_timeout(),
            },
        ];

        for config in valid_configs {
            assert!(
                config.validate().is_ok(),
                "Config should be valid: {config:?}"
            );
        }
    }

    #[test]
    fn test_config_validation_invalid_configs() {
        let invalid_configs = vec![
            // Empty API key
            Config {
                search_api_key: "".to_string(),
                ..Config::default()
            },
            // Endpoint without a scheme or domain shape
            Config {
                search_api_key: "abc123def456".to_string(),
                search_endpoint: "not_a_url".to_string(),
                log_file_path: None,
                http_timeout_seconds: default_http_timeout(),
            },
            // Zero timeout
            Config {
                search_api_key: "abc123def456".to_string(),
                search_endpoint: default_search_endpoint(),
                log_file_path: None,
                http_timeout_seconds: 0,
            },
            // Empty log file path
            Config {
                search_api_key: "abc123def456".to_string(),
                search_endpoint: default_search_endpoint(),
                log_file_path: Some("".to_string()),
                http_timeout_seconds: default_http_timeout(),
            },
        ];

        for config in invalid_configs {
            assert!(
                config.validate().is_err(),
                "Config should be invalid: {config:?}"
            );
        }
    }
}
