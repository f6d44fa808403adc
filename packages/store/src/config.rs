//! # Console configuration — `console.toml`
//!
//! Build-time settings for the admin console, bundled with the web binary.
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080/api/v1"
//!
//! [dashboard]
//! count_up_duration_ms = 1000
//! count_up_steps = 60
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ConsoleConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`ApiConfig`] | Base address of the remote REST API. Paths such as `/users` are appended to it. |
//! | [`DashboardConfig`] | Timing of the dashboard count-up animation. |
//!
//! Every section is `#[serde(default)]`, so a missing or empty file equals
//! [`ConsoleConfig::default`].

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `console.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Remote API settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base address, e.g. `https://example.com/api/v1`. No trailing slash needed.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8080/api/v1".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Dashboard animation settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_count_up_duration_ms")]
    pub count_up_duration_ms: u32,
    /// Number of frames in the animation. 0 shows the final value at once.
    #[serde(default = "default_count_up_steps")]
    pub count_up_steps: u32,
}

fn default_count_up_duration_ms() -> u32 {
    1000
}

fn default_count_up_steps() -> u32 {
    60
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            count_up_duration_ms: default_count_up_duration_ms(),
            count_up_steps: default_count_up_steps(),
        }
    }
}

impl ConsoleConfig {
    /// Builder method to point the console at another API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "console.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = ConsoleConfig::from_toml("").unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:8080/api/v1");
        assert_eq!(config.dashboard.count_up_duration_ms, 1000);
        assert_eq!(config.dashboard.count_up_steps, 60);
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = ConsoleConfig::from_toml(
            r#"
            [api]
            base_url = "https://admin.example.com/api/v1"

            [dashboard]
            count_up_steps = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://admin.example.com/api/v1");
        assert_eq!(config.dashboard.count_up_steps, 10);
        assert_eq!(config.dashboard.count_up_duration_ms, 1000);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ConsoleConfig::default().with_base_url("https://api.test/v1");
        let text = config.to_toml().unwrap();
        assert_eq!(ConsoleConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_document_is_an_error() {
        assert!(ConsoleConfig::from_toml("[api]\nbase_url = 3").is_err());
    }
}
