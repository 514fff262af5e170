//! Host client behavior against a local mock endpoint.

use std::io::Write;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use tubeferry::core::AppError;
use tubeferry::hosting::HostClient;

fn temp_upload_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"fake media bytes").unwrap();
    file
}

#[tokio::test]
async fn test_upload_success_returns_link() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "link": "https://file.io/abc" })))
        .mount(&server)
        .await;

    let client = HostClient::new(server.uri()).unwrap();
    let file = temp_upload_file();

    let link = client.upload(file.path()).await.unwrap();
    assert_eq!(link, "https://file.io/abc");
}

#[tokio::test]
async fn test_upload_non_success_status_is_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({ "link": "ignored" })))
        .mount(&server)
        .await;

    let client = HostClient::new(server.uri()).unwrap();
    let file = temp_upload_file();

    let err = client.upload(file.path()).await.unwrap_err();
    match err {
        AppError::HttpStatus(status) => assert_eq!(status.as_u16(), 404),
        other => panic!("expected HttpStatus error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_upload_body_without_link_is_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })))
        .mount(&server)
        .await;

    let client = HostClient::new(server.uri()).unwrap();
    let file = temp_upload_file();

    let err = client.upload(file.path()).await.unwrap_err();
    assert!(matches!(err, AppError::Upload(_)));
}

#[tokio::test]
async fn test_upload_missing_file_is_io_error() {
    let server = MockServer::start().await;
    let client = HostClient::new(server.uri()).unwrap();

    let err = client.upload(std::path::Path::new("does/not/exist.mp4")).await.unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
}
