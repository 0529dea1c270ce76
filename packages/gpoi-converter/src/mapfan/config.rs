use std::time::Duration;

use crate::config::{
    HTTP_CONNECT_TIMEOUT_SECS, HTTP_TIMEOUT_SECS, MAPFAN_ADDRESS_URL, MAPFAN_AUTH_URL,
    MAPFAN_BOOKMARK_URL,
};

/// Endpoints and timeouts of the MapFan API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapfanConfig {
    pub auth_url: String,
    pub address_url: String,
    pub bookmark_url: String,
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl Default for MapfanConfig {
    fn default() -> Self {
        Self {
            auth_url: MAPFAN_AUTH_URL.into(),
            address_url: MAPFAN_ADDRESS_URL.into(),
            bookmark_url: MAPFAN_BOOKMARK_URL.into(),
            connect_timeout: Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS),
            timeout: Duration::from_secs(HTTP_TIMEOUT_SECS),
        }
    }
}

impl MapfanConfig {
    /// Load configuration from environment variables, falling back to the
    /// public MapFan endpoints.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let auth_url = std::env::var("MAPFAN_AUTH_URL").unwrap_or(defaults.auth_url);
        let address_url = std::env::var("MAPFAN_ADDRESS_URL").unwrap_or(defaults.address_url);
        let bookmark_url = std::env::var("MAPFAN_BOOKMARK_URL").unwrap_or(defaults.bookmark_url);

        let timeout = std::env::var("MAPFAN_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map_or(defaults.timeout, Duration::from_secs);

        Self {
            auth_url,
            address_url,
            bookmark_url,
            connect_timeout: defaults.connect_timeout,
            timeout,
        }
    }

    /// Point all endpoints at another host, keeping the MapFan paths.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        self.auth_url = format!("{base}/api/authorization/v1/local");
        self.address_url = format!("{base}/api/addresses/centers/");
        self.bookmark_url = format!("{base}/api/bookmarks/v1/spots");
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let config = MapfanConfig::default();
        assert_eq!(
            config.auth_url,
            "https://auth.mapfan.com/api/authorization/v1/local"
        );
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_with_base_url() {
        let config = MapfanConfig::default().with_base_url("http://127.0.0.1:9000/");
        assert_eq!(
            config.auth_url,
            "http://127.0.0.1:9000/api/authorization/v1/local"
        );
        assert_eq!(
            config.address_url,
            "http://127.0.0.1:9000/api/addresses/centers/"
        );
        assert_eq!(
            config.bookmark_url,
            "http://127.0.0.1:9000/api/bookmarks/v1/spots"
        );
    }
}
