use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Root URL of the recipe API
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// API key sent as the `key` query parameter (required only for uploads)
    #[serde(default)]
    pub api_key: Option<String>,
    /// Number of search results shown per page
    #[serde(default = "default_results_per_page")]
    pub results_per_page: usize,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Path of the persisted bookmarks file
    #[serde(default = "default_bookmarks_path")]
    pub bookmarks_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            api_key: None,
            results_per_page: default_results_per_page(),
            timeout_secs: default_timeout_secs(),
            bookmarks_path: default_bookmarks_path(),
        }
    }
}

// Default value functions
fn default_api_base() -> String {
    "https://forkify-api.herokuapp.com/api/v2/recipes".to_string()
}

fn default_results_per_page() -> usize {
    10
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_bookmarks_path() -> String {
    "bookmarks.json".to_string()
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with FORKFUL__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: FORKFUL__RESULTS_PER_PAGE
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("FORKFUL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        assert_eq!(default_results_per_page(), 10);
        assert_eq!(default_timeout_secs(), 10);
        assert_eq!(default_bookmarks_path(), "bookmarks.json");
        assert!(default_api_base().starts_with("https://"));
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.results_per_page, 10);
        assert_eq!(config.timeout(), std::time::Duration::from_secs(10));
    }

    #[test]
    fn test_deserialize_partial() {
        // Missing fields fall back to defaults
        let config: AppConfig =
            serde_json::from_str(r#"{"results_per_page": 5, "api_key": "k-123"}"#).unwrap();
        assert_eq!(config.results_per_page, 5);
        assert_eq!(config.api_key.as_deref(), Some("k-123"));
        assert_eq!(config.timeout_secs, 10);
    }
}
