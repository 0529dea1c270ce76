//! MapFan client tests against a mock HTTP server.
//!
//! The client is blocking, so each scenario runs on a blocking task while
//! the mock server lives on the async runtime.

use gpoi_converter::config::{parse_credentials, MAPFAN_ADDRESS_REFERER};
use gpoi_converter::mapfan::{
    publish_bookmarks, BookmarkRequest, BookmarkService, MapfanClient, MapfanConfig,
};
use gpoi_converter::{ConverterError, PoiCollection, PoiRecord, Result};
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const AUTH_PATH: &str = "/api/authorization/v1/local";
const BOOKMARK_PATH: &str = "/api/bookmarks/v1/spots";

/// Tokyo Station, converted to WGS84 and printed with 12 decimals.
const TOKYO_STATION_ADDRESS_PATH: &str = "/api/addresses/centers/35.684462484881,139.763915625896";

fn tokyo_station() -> PoiCollection {
    let mut pois = PoiCollection::new();
    pois.bucket_mut("駅")
        .push(PoiRecord::new(35.681236, 139.767125, "東京駅"));
    pois
}

async fn mount_auth(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(AUTH_PATH))
        .and(body_json(json!({"loginid": "taro", "password": "secret"})))
        .and(header("origin", "https://mapfan.com"))
        .and(header("cache-control", "no-cache"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access_token": "tok-123", "refresh_token": "ignored"})),
        )
        .expect(1)
        .mount(server)
        .await;
}

/// Run a blocking publish against the mock server.
async fn publish(server: &MockServer, pois: PoiCollection) -> Result<usize> {
    let base_url = server.uri();
    tokio::task::spawn_blocking(move || {
        let credentials = parse_credentials("taro,secret")?;
        let mut client = MapfanClient::new(MapfanConfig::default().with_base_url(&base_url))?;
        publish_bookmarks(&mut client, &credentials, &pois, |_| {})
    })
    .await
    .expect("blocking task panicked")
}

#[tokio::test(flavor = "multi_thread")]
async fn test_publish_single_bookmark() {
    let server = MockServer::start().await;
    mount_auth(&server).await;

    Mock::given(method("GET"))
        .and(path(TOKYO_STATION_ADDRESS_PATH))
        .and(header("authorization", "Bearer tok-123"))
        .and(header("referer", MAPFAN_ADDRESS_REFERER))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"address": "東京都 千代田区\t丸の内１丁目", "code": "13101"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(BOOKMARK_PATH))
        .and(header("authorization", "Bearer tok-123"))
        .and(header("content-type", "application/json; charset=utf-8"))
        .and(body_partial_json(json!({
            "name": "東京駅",
            "address": "東京都千代田区丸の内１丁目",
            "genreCodeL": 6,
            "genreCodeM": 10001,
            "genreName": "住所"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 7, "name": "東京駅"})))
        .expect(1)
        .mount(&server)
        .await;

    let posted = publish(&server, tokyo_station()).await.expect("publish should succeed");
    assert_eq!(posted, 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_token_is_reused_for_all_records() {
    let server = MockServer::start().await;
    mount_auth(&server).await;

    Mock::given(method("GET"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"address": "大阪府"})))
        .expect(3)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(BOOKMARK_PATH))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "ok"})))
        .expect(3)
        .mount(&server)
        .await;

    let mut pois = PoiCollection::new();
    for (i, category) in ["B", "A", "B"].iter().enumerate() {
        pois.bucket_mut(category)
            .push(PoiRecord::new(34.7, 135.5, format!("poi {i}")));
    }

    let posted = publish(&server, pois).await.expect("publish should succeed");
    assert_eq!(posted, 3);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failed_bookmark_aborts_run() {
    let server = MockServer::start().await;
    mount_auth(&server).await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"address": "大阪府"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(BOOKMARK_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(1)
        .mount(&server)
        .await;

    let mut pois = PoiCollection::new();
    pois.bucket_mut("A").push(PoiRecord::new(34.7, 135.5, "first"));
    pois.bucket_mut("A").push(PoiRecord::new(34.8, 135.6, "second"));

    let err = publish(&server, pois).await.expect_err("publish should fail");
    match err {
        ConverterError::Api {
            operation,
            status,
            body,
        } => {
            assert_eq!(operation, "bookmark");
            assert_eq!(status, 503);
            assert_eq!(body, "maintenance");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_login() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(AUTH_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "invalid_grant"})))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = publish(&server, tokyo_station()).await.expect_err("login should fail");
    assert!(matches!(err, ConverterError::Api { status: 401, .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_access_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(AUTH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token_type": "bearer"})))
        .mount(&server)
        .await;

    let err = publish(&server, tokyo_station()).await.expect_err("login should fail");
    assert!(matches!(
        err,
        ConverterError::MissingField {
            field: "access_token",
            ..
        }
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_malformed_address_json() {
    let server = MockServer::start().await;
    mount_auth(&server).await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = publish(&server, tokyo_station()).await.expect_err("lookup should fail");
    assert!(matches!(err, ConverterError::Json(_)));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_payload_fields_are_cleaned() {
    let server = MockServer::start().await;
    mount_auth(&server).await;

    Mock::given(method("POST"))
        .and(path(BOOKMARK_PATH))
        .and(body_partial_json(json!({"name": "Joes Bar", "address": "Kyoto"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Joes Bar"})))
        .expect(1)
        .mount(&server)
        .await;

    let base_url = server.uri();
    let bookmark = tokio::task::spawn_blocking(move || {
        let credentials = parse_credentials("taro,secret")?;
        let mut client = MapfanClient::new(MapfanConfig::default().with_base_url(&base_url))?;
        client.authorize(&credentials)?;
        client.create_bookmark(&BookmarkRequest::new(35.0, 135.0, "Joe\"s Bar\r", "Kyo\nto\0"))
    })
    .await
    .expect("blocking task panicked")
    .expect("bookmark should be created");

    assert_eq!(bookmark.name.as_deref(), Some("Joes Bar"));
}
