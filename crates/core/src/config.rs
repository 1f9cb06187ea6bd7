//! Application configuration
//!
//! The same type serves native tests and the wasm bundle. The bundle has no
//! process environment, so values are fed in as key/value pairs captured at
//! build time.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment key for the chat endpoint
pub const API_URL_KEY: &str = "AGUI_API_URL";
/// Environment key for the log level filter
pub const LOG_LEVEL_KEY: &str = "AGUI_LOG_LEVEL";
/// Environment key for the chat request timeout in seconds
pub const REQUEST_TIMEOUT_KEY: &str = "AGUI_REQUEST_TIMEOUT";

/// Front-end configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Chat endpoint the session posts to
    pub api_url: String,
    /// Log level filter (e.g., "info", "debug", "trace")
    pub log_level: String,
    /// Prefix of the per-mode context snapshot keys
    pub feature_prefix: String,
    /// Number of accent colours offered by the picker
    pub palette_size: usize,
    /// Follow-up suggestions shown under an answer
    pub max_follow_ups: usize,
    /// Chat round-trip limit in seconds, enforced by native clients
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: "/api/chat".to_string(),
            log_level: "info".to_string(),
            feature_prefix: "hr-faq".to_string(),
            palette_size: 12,
            max_follow_ups: 2,
            request_timeout_secs: 60,
        }
    }
}

impl AppConfig {
    /// Build a config from key/value pairs, keeping defaults for missing or
    /// blank keys.
    pub fn from_env_map<'a, I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();
        for (key, value) in vars {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key {
                API_URL_KEY => config.api_url = value.to_string(),
                LOG_LEVEL_KEY => config.log_level = value.to_lowercase(),
                REQUEST_TIMEOUT_KEY => match value.parse() {
                    Ok(secs) => config.request_timeout_secs = secs,
                    Err(e) => tracing::warn!(error = %e, value, "Ignoring invalid request timeout"),
                },
                _ => {}
            }
        }
        config
    }

    /// Reject settings the front-end cannot run with
    pub fn validate(&self) -> CoreResult<()> {
        if self.api_url.trim().is_empty() {
            return Err(CoreError::invalid_config("api_url must not be empty"));
        }
        if self.palette_size == 0 {
            return Err(CoreError::invalid_config("palette_size must be at least 1"));
        }
        if self.request_timeout_secs == 0 {
            return Err(CoreError::invalid_config("request_timeout_secs must be at least 1"));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Storage key of the context snapshot for a mode name
    pub fn context_key(&self, mode: &str) -> String {
        format!("{}-context-{mode}", self.feature_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_url, "/api/chat");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.context_key("hr"), "hr-faq-context-hr");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_env_map_overrides_known_keys() {
        let config = AppConfig::from_env_map([
            (API_URL_KEY, "https://agent.example/chat"),
            (LOG_LEVEL_KEY, "DEBUG"),
            (REQUEST_TIMEOUT_KEY, "15"),
            ("UNRELATED", "x"),
        ]);
        assert_eq!(config.api_url, "https://agent.example/chat");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
        assert_eq!(config.palette_size, 12);
    }

    #[test]
    fn test_invalid_timeout_keeps_default() {
        let config = AppConfig::from_env_map([(REQUEST_TIMEOUT_KEY, "soon")]);
        assert_eq!(config.request_timeout_secs, 60);

        let config = AppConfig {
            request_timeout_secs: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = AppConfig::from_env_map([(API_URL_KEY, "  ")]);
        assert_eq!(config.api_url, "/api/chat");
    }

    #[test]
    fn test_validate_rejects_unusable_values() {
        let config = AppConfig {
            api_url: String::new(),
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CoreError::InvalidConfig { .. })
        ));

        let config = AppConfig {
            palette_size: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"api_url": "/chat"}"#).unwrap();
        assert_eq!(config.api_url, "/chat");
        assert_eq!(config.max_follow_ups, 2);
    }
}
