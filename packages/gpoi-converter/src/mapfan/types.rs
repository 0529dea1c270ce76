use serde::{Deserialize, Serialize};

/// Genre fields MapFan expects for an address bookmark.
const GENRE_CODE_L: u32 = 6;
const GENRE_CODE_M: u32 = 10001;
const GENRE_NAME: &str = "住所";

#[derive(Serialize)]
pub(crate) struct AuthRequest<'a> {
    pub loginid: &'a str,
    pub password: &'a str,
}

#[derive(Deserialize)]
pub(crate) struct AuthResponse {
    pub access_token: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct AddressResponse {
    pub address: Option<String>,
}

/// Bookmark creation payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkRequest {
    pub lat: f64,
    pub lon: f64,
    pub name: String,
    pub address: String,
    pub genre_code_l: u32,
    pub genre_code_m: u32,
    pub genre_name: &'static str,
}

impl BookmarkRequest {
    pub fn new(lat: f64, lon: f64, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            lat,
            lon,
            name: name.into(),
            address: address.into(),
            genre_code_l: GENRE_CODE_L,
            genre_code_m: GENRE_CODE_M,
            genre_name: GENRE_NAME,
        }
    }
}

/// Bookmark as echoed back by MapFan.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Bookmark {
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}
