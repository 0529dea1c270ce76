//! Configuration constants and validation functions for the converter.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{ConverterError, Result};

/// Header line of the `--csv` output.
pub const CSV_HEADER: &str = "Category,Latitude,Longitude,Name";

/// Header line of each NaviCon CSV entry (Title, Memo, URL, Comment).
pub const NAVICON_HEADER: &str = "タイトル,メモ,URL,コメント";

/// Base URL for map links written into NaviCon entries.
pub const GOOGLE_MAPS_URL: &str = "https://www.google.com/maps";

/// Zoom level used by the `@` URL style.
pub const GOOGLE_MAPS_ZOOM: u8 = 17;

/// MapFan authorization endpoint.
pub const MAPFAN_AUTH_URL: &str = "https://auth.mapfan.com/api/authorization/v1/local";

/// MapFan reverse geocoding endpoint (coordinates are appended).
pub const MAPFAN_ADDRESS_URL: &str = "https://mapfan.com/api/addresses/centers/";

/// MapFan bookmark endpoint.
pub const MAPFAN_BOOKMARK_URL: &str = "https://api.mapfan.com/api/bookmarks/v1/spots";

/// Origin header sent with MapFan requests.
pub const MAPFAN_ORIGIN: &str = "https://mapfan.com";

/// Default referer for MapFan requests.
pub const MAPFAN_REFERER: &str = "https://mapfan.com/";

/// Referer sent with address lookups.
pub const MAPFAN_ADDRESS_REFERER: &str = "https://mapfan.com/map/bookmarks/view-map";

/// Browser user agent expected by MapFan.
pub const MAPFAN_USER_AGENT: &str = "Mozilla/5.0 (Linux; Android 6.0; AppleWebKit/537.36 (KHTML, like Gecko) Chrome/103.0.0.0 Mobile Safari/537.36";

/// Connect timeout for MapFan requests, in seconds.
pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Read timeout for MapFan requests, in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 5;

/// Category prefix pattern: leading digits, a colon, then the label.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub(crate) static CATEGORY_PREFIX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+:(.+)$").expect("valid regex"));

/// MapFan login credentials.
///
/// NOTE: `Debug` is implemented by hand so the password never ends up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub login_id: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("login_id", &self.login_id)
            .field("password", &"***")
            .finish()
    }
}

/// Parse a `LOGINID,PASSWORD` argument.
///
/// # Returns
/// * `Ok(Credentials)` if there are exactly two non-empty fields
/// * `Err(ConverterError::InvalidCredentials)` otherwise
///
/// # Examples
/// ```
/// use gpoi_converter::config::parse_credentials;
///
/// assert!(parse_credentials("user,secret").is_ok());
/// assert!(parse_credentials("user").is_err());
/// assert!(parse_credentials("user,").is_err());
/// ```
pub fn parse_credentials(value: &str) -> Result<Credentials> {
    let parts: Vec<&str> = value.split(',').collect();
    match parts.as_slice() {
        [login_id, password] if !login_id.is_empty() && !password.is_empty() => Ok(Credentials {
            login_id: (*login_id).to_string(),
            password: (*password).to_string(),
        }),
        _ => Err(ConverterError::InvalidCredentials),
    }
}
