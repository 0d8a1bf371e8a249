//! Application configuration
//!
//! Configuration is env-driven with sensible defaults; nothing here touches
//! the network or the filesystem until the owning component does.

use std::path::PathBuf;

/// Default assistant model
const DEFAULT_ASSISTANT_MODEL: &str = "gemini-2.5-flash";

/// Default assistant API base URL
const DEFAULT_ASSISTANT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Where the durable state slot lives.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    data_dir: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        let data_dir = std::env::var("FUNGUYS_DATA_DIR").ok().map(PathBuf::from);
        Self { data_dir }
    }
}

impl StoreConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the data directory (used by tests and embedders)
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Resolved path of the local database file holding the state slot
    pub fn db_path(&self) -> PathBuf {
        let dir = self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("funguys")
        });
        dir.join("local.db")
    }
}

/// Connection settings for the chat assistant collaborator.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    api_key: Option<String>,
    model: String,
    api_base: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var("GEMINI_API_KEY").ok(),
            model: DEFAULT_ASSISTANT_MODEL.to_string(),
            api_base: DEFAULT_ASSISTANT_API_BASE.to_string(),
        }
    }
}

impl AssistantConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key explicitly instead of reading `GEMINI_API_KEY`
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model name
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API base URL (used by tests against a local server)
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_path_honors_override() {
        let config = StoreConfig::new().with_data_dir("/tmp/funguys-test");
        assert_eq!(config.db_path(), PathBuf::from("/tmp/funguys-test/local.db"));
    }

    #[test]
    fn test_assistant_defaults() {
        let config = AssistantConfig {
            api_key: None,
            model: DEFAULT_ASSISTANT_MODEL.to_string(),
            api_base: DEFAULT_ASSISTANT_API_BASE.to_string(),
        };
        assert_eq!(config.model(), "gemini-2.5-flash");
        assert!(config.api_base().starts_with("https://generativelanguage"));
    }

    #[test]
    fn test_assistant_builder_overrides() {
        let config = AssistantConfig::new()
            .with_api_key("k")
            .with_model("gemini-x")
            .with_api_base("http://127.0.0.1:9");

        assert_eq!(config.api_key(), Some("k"));
        assert_eq!(config.model(), "gemini-x");
        assert_eq!(config.api_base(), "http://127.0.0.1:9");
    }
}
