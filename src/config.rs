//! Application Configuration
//!
//! Build-time settings read through `option_env!`, with defaults.

use log::LevelFilter;
use reqwest::Url;

/// Front end settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL every REST path is appended to (no trailing slash)
    pub api_base_url: String,
    /// localStorage key holding the bearer token
    pub token_storage_key: String,
    /// How long a success message stays up before navigating away
    pub redirect_delay_ms: u32,
    /// Minimum level recorded by the logger
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "/api".to_string(),
            token_storage_key: "token".to_string(),
            redirect_delay_ms: 1500,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Configuration baked in at compile time, with a relative base URL
    /// resolved against the page origin
    pub fn from_build_env() -> Self {
        let origin = web_sys::window().and_then(|window| window.location().origin().ok());
        Self::from_values(
            option_env!("CARE_API_BASE_URL"),
            option_env!("CARE_TOKEN_KEY"),
            option_env!("CARE_REDIRECT_DELAY_MS"),
            option_env!("CARE_LOG_LEVEL"),
        )
        .with_origin(origin.as_deref())
    }

    /// Make `api_base_url` absolute. The HTTP client only accepts absolute
    /// URLs, so `/api` becomes `{origin}/api`. Absolute bases are kept.
    pub fn with_origin(mut self, origin: Option<&str>) -> Self {
        if Url::parse(&self.api_base_url).is_ok() {
            return self;
        }
        let Some(origin) = origin else {
            log::warn!("relative api base {} with no page origin", self.api_base_url);
            return self;
        };
        match Url::parse(origin).and_then(|origin| origin.join(&self.api_base_url)) {
            Ok(url) => self.api_base_url = url.as_str().trim_end_matches('/').to_string(),
            Err(err) => log::warn!("could not resolve api base against {}: {}", origin, err),
        }
        self
    }

    fn from_values(
        base_url: Option<&str>,
        token_key: Option<&str>,
        redirect_delay_ms: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_base_url),
            token_storage_key: token_key
                .filter(|key| !key.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.token_storage_key),
            redirect_delay_ms: redirect_delay_ms
                .and_then(|ms| ms.parse().ok())
                .unwrap_or(defaults.redirect_delay_ms),
            log_level: log_level
                .and_then(|level| level.parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::RecordingTransport;
    use crate::api::{ApiClient, ApiRequest};

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(AppConfig::from_values(None, None, None, None), AppConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(
            Some("https://care.example.org/api/"),
            Some("careToken"),
            Some("250"),
            Some("debug"),
        );
        assert_eq!(config.api_base_url, "https://care.example.org/api");
        assert_eq!(config.token_storage_key, "careToken");
        assert_eq!(config.redirect_delay_ms, 250);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_relative_base_resolved_against_origin() {
        let config = AppConfig::default().with_origin(Some("http://localhost:8080"));
        assert_eq!(config.api_base_url, "http://localhost:8080/api");

        let nested = AppConfig::from_values(Some("care/api/"), None, None, None)
            .with_origin(Some("https://portal.test"));
        assert_eq!(nested.api_base_url, "https://portal.test/care/api");
    }

    #[test]
    fn test_absolute_base_kept() {
        let config = AppConfig::from_values(Some("https://care.example.org/api"), None, None, None)
            .with_origin(Some("http://localhost:8080"));
        assert_eq!(config.api_base_url, "https://care.example.org/api");
    }

    #[test]
    fn test_no_origin_leaves_base_alone() {
        assert_eq!(AppConfig::default().with_origin(None), AppConfig::default());
        assert_eq!(AppConfig::default().with_origin(Some("not a url")), AppConfig::default());
    }

    #[test]
    fn test_default_base_builds_a_sendable_request() {
        let config = AppConfig::default().with_origin(Some("http://localhost:8080"));
        let api = ApiClient::new(config.api_base_url, "t", RecordingTransport::new());
        let prepared = api.prepare(ApiRequest::get("/visits"));

        assert_eq!(prepared.url, "http://localhost:8080/api/visits");
        let built = reqwest::Client::new().request(prepared.method.into(), prepared.url.as_str()).build();
        assert!(built.is_ok());
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = AppConfig::from_values(Some(""), Some(""), Some("soon"), Some("loud"));
        assert_eq!(config, AppConfig::default());
    }
}
