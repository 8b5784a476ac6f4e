//! Frontend configuration module
//!
//! Values are fixed at build time through environment variables, falling back
//! to defaults suited to a same-origin deployment.

use log::LevelFilter;
use shared::config::timing::NOTIFICATION_MS;

/// Frontend configuration for API access, logging and UI behaviour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Origin of the backend API; empty means the page's own origin.
    pub api_base_url: String,
    /// Maximum level forwarded to the browser console.
    pub log_level: LevelFilter,
    /// Lifetime of client-side notifications.
    pub notification_ms: u32,
    /// Language used when the page does not specify one.
    pub default_language: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self::from_values(
            option_env!("STOREFRONT_API_BASE_URL"),
            option_env!("STOREFRONT_LOG_LEVEL"),
            option_env!("STOREFRONT_NOTIFICATION_MS"),
            option_env!("STOREFRONT_LANGUAGE"),
        )
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    fn from_values(
        api_base_url: Option<&str>,
        log_level: Option<&str>,
        notification_ms: Option<&str>,
        language: Option<&str>,
    ) -> Self {
        Self {
            api_base_url: api_base_url
                .unwrap_or_default()
                .trim_end_matches('/')
                .to_string(),
            log_level: log_level
                .and_then(|level| level.parse().ok())
                .unwrap_or(LevelFilter::Info),
            notification_ms: notification_ms
                .and_then(|ms| ms.parse().ok())
                .unwrap_or(NOTIFICATION_MS),
            default_language: language
                .filter(|code| crate::language::get_language_info(code).is_some())
                .unwrap_or("es")
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        let config = FrontendConfig::from_values(None, None, None, None);
        assert_eq!(config.api_base_url, "");
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.notification_ms, 5_000);
        assert_eq!(config.default_language, "es");
    }

    #[test]
    fn test_values_are_parsed() {
        let config = FrontendConfig::from_values(
            Some("https://tienda.example.com/"),
            Some("debug"),
            Some("2500"),
            Some("en"),
        );
        assert_eq!(config.api_base_url, "https://tienda.example.com");
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.notification_ms, 2_500);
        assert_eq!(config.default_language, "en");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = FrontendConfig::from_values(None, Some("loud"), Some("soon"), Some("xx"));
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.notification_ms, 5_000);
        assert_eq!(config.default_language, "es");
    }
}
