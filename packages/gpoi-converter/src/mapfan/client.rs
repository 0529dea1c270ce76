//! Blocking HTTP session against the MapFan API.

use std::sync::LazyLock;

use regex::Regex;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCESS_CONTROL_ALLOW_ORIGIN, AUTHORIZATION, CACHE_CONTROL,
    CONTENT_TYPE, ORIGIN, REFERER,
};
use serde::de::DeserializeOwned;

use super::config::MapfanConfig;
use super::types::{AddressResponse, AuthRequest, AuthResponse, Bookmark, BookmarkRequest};
use crate::config::{
    Credentials, MAPFAN_ADDRESS_REFERER, MAPFAN_ORIGIN, MAPFAN_REFERER, MAPFAN_USER_AGENT,
};
use crate::datum::Wgs84Coordinate;
use crate::error::{ConverterError, Result};

/// Characters MapFan rejects inside JSON string fields.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PAYLOAD_STRIP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\r\t\n\x00"]"#).expect("valid regex"));

/// Remove control characters and double quotes from a payload field.
#[must_use]
pub fn clean_payload_text(text: &str) -> String {
    PAYLOAD_STRIP_PATTERN.replace_all(text, "").into_owned()
}

/// Remote operations needed to publish bookmarks.
///
/// Implemented by [`MapfanClient`]; tests substitute a fake.
pub trait BookmarkService {
    /// Log in and keep the access token for later calls.
    fn authorize(&mut self, credentials: &Credentials) -> Result<()>;

    /// Postal address at a WGS84 point.
    fn lookup_address(&self, point: Wgs84Coordinate) -> Result<String>;

    /// Create one bookmark in the user's account.
    fn create_bookmark(&self, request: &BookmarkRequest) -> Result<Bookmark>;
}

/// MapFan API session.
///
/// Holds the bearer token obtained by [`BookmarkService::authorize`] and
/// reuses it for every following request.
///
/// NOTE: Do NOT derive `Debug` on this struct: the token would be exposed.
pub struct MapfanClient {
    http: Client,
    config: MapfanConfig,
    access_token: Option<String>,
}

impl MapfanClient {
    pub fn new(config: MapfanConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));

        let http = Client::builder()
            .default_headers(headers)
            .user_agent(MAPFAN_USER_AGENT)
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            config,
            access_token: None,
        })
    }

    /// Whether a token has been obtained.
    #[must_use]
    pub fn is_authorized(&self) -> bool {
        self.access_token.is_some()
    }

    fn bearer(&self, operation: &'static str) -> Result<String> {
        self.access_token
            .as_ref()
            .map(|token| format!("Bearer {token}"))
            .ok_or(ConverterError::NotAuthorized(operation))
    }

    fn post_json<T: serde::Serialize>(&self, url: &str, payload: &T) -> Result<RequestBuilder> {
        Ok(self
            .http
            .post(url)
            .header(CACHE_CONTROL, "no-cache")
            .header(ORIGIN, MAPFAN_ORIGIN)
            .header(REFERER, MAPFAN_REFERER)
            .body(serde_json::to_string(payload)?))
    }
}

impl BookmarkService for MapfanClient {
    fn authorize(&mut self, credentials: &Credentials) -> Result<()> {
        let login_id = clean_payload_text(&credentials.login_id);
        let password = clean_payload_text(&credentials.password);
        let payload = AuthRequest {
            loginid: &login_id,
            password: &password,
        };

        tracing::debug!(url = %self.config.auth_url, "Authorizing");
        let response = self.post_json(&self.config.auth_url, &payload)?.send()?;
        let auth: AuthResponse = read_json(response, "authorization")?;

        // refresh_token is ignored
        let token = auth.access_token.ok_or(ConverterError::MissingField {
            operation: "authorization",
            field: "access_token",
        })?;
        self.access_token = Some(token);
        Ok(())
    }

    fn lookup_address(&self, point: Wgs84Coordinate) -> Result<String> {
        let url = format!("{}{:.12},{:.12}", self.config.address_url, point.lat, point.lon);

        tracing::debug!(%url, "Looking up address");
        let response = self
            .http
            .get(&url)
            .header(REFERER, MAPFAN_ADDRESS_REFERER)
            .header(AUTHORIZATION, self.bearer("address lookup")?)
            .send()?;
        let address: AddressResponse = read_json(response, "address lookup")?;

        address.address.ok_or(ConverterError::MissingField {
            operation: "address lookup",
            field: "address",
        })
    }

    fn create_bookmark(&self, request: &BookmarkRequest) -> Result<Bookmark> {
        let payload = BookmarkRequest {
            name: clean_payload_text(&request.name),
            address: clean_payload_text(&request.address),
            ..request.clone()
        };

        tracing::debug!(name = %payload.name, "Creating bookmark");
        let response = self
            .post_json(&self.config.bookmark_url, &payload)?
            .header(AUTHORIZATION, self.bearer("bookmark")?)
            .send()?;
        read_json(response, "bookmark")
    }
}

/// Check the status and decode the JSON body of a response.
fn read_json<T: DeserializeOwned>(response: Response, operation: &'static str) -> Result<T> {
    let status = response.status();
    let body = response.text()?;

    if !status.is_success() {
        tracing::warn!(%status, operation, "MapFan request failed");
        return Err(ConverterError::Api {
            operation,
            status: status.as_u16(),
            body,
        });
    }

    Ok(serde_json::from_str(&body)?)
}
