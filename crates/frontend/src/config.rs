//! Build-time configuration

use agui_core::AppConfig;
use agui_core::config::{API_URL_KEY, LOG_LEVEL_KEY, REQUEST_TIMEOUT_KEY};

/// Config baked into the bundle from the build environment
pub fn load() -> AppConfig {
    let vars = [
        (API_URL_KEY, option_env!("AGUI_API_URL")),
        (LOG_LEVEL_KEY, option_env!("AGUI_LOG_LEVEL")),
        (REQUEST_TIMEOUT_KEY, option_env!("AGUI_REQUEST_TIMEOUT")),
    ];

    AppConfig::from_env_map(
        vars.into_iter()
            .filter_map(|(key, value)| value.map(|value| (key, value))),
    )
}
