mod support;

use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dreamcanvas::Error;

use support::{build_client, build_keyless_client, mount_inline_image, GENERATE_PATH};

#[tokio::test]
async fn test_generate_returns_data_uri() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_string_contains("a red fox"))
        .and(body_string_contains("\"aspectRatio\":\"1:1\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(support::inline_image_body()))
        .mount(&mock_server)
        .await;

    let client = build_client(&mock_server.uri());
    let url = client.images().generate("a red fox").await.unwrap();
    assert_eq!(url, "data:image/png;base64,aGk=");
}

#[tokio::test]
async fn test_generate_uses_first_of_multiple_image_parts() {
    let mock_server = MockServer::start().await;
    let body = json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [
                    {"text": "two options"},
                    {"inlineData": {"mimeType": "image/png", "data": "aGk="}},
                    {"inlineData": {"mimeType": "image/jpeg", "data": "eW8="}}
                ]
            }
        }]
    });
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = build_client(&mock_server.uri());
    let url = client.images().generate("a red fox").await.unwrap();
    assert_eq!(url, "data:image/png;base64,aGk=");
}

#[tokio::test]
async fn test_text_only_response_is_empty_response_error() {
    let mock_server = MockServer::start().await;
    let body = json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": "I cannot draw that"}]}
        }]
    });
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = build_client(&mock_server.uri());
    let err = client.images().generate("a red fox").await.unwrap_err();
    assert!(matches!(err, Error::EmptyResponse { .. }));
    assert!(err.user_message().contains("did not return any image data"));
}

#[tokio::test]
async fn test_provider_error_message_is_forwarded_verbatim() {
    let mock_server = MockServer::start().await;
    let body = json!({"error": {"code": 429, "message": "rate limited"}});
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = build_client(&mock_server.uri());
    let err = client.images().generate("x").await.unwrap_err();
    match &err {
        Error::ApiError { status, message } => {
            assert_eq!(*status, 429);
            assert_eq!(message, "rate limited");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.user_message(), "rate limited");
}

#[tokio::test]
async fn test_unparseable_error_body_is_forwarded_raw() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&mock_server)
        .await;

    let client = build_client(&mock_server.uri());
    let err = client.images().generate("x").await.unwrap_err();
    assert!(matches!(err, Error::ApiError { status: 500, .. }));
    assert_eq!(err.user_message(), "upstream exploded");
}

#[tokio::test]
async fn test_missing_api_key_fails_without_network() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(support::inline_image_body()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = build_keyless_client(&mock_server.uri());
    let err = client.images().generate("a red fox").await.unwrap_err();
    assert!(matches!(err, Error::InvalidConfig { .. }));
    assert!(err.user_message().contains("environment is configured"));
}

#[tokio::test]
async fn test_generate_with_model_overrides_path() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/custom-image-model:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(support::inline_image_body()))
        .mount(&mock_server)
        .await;

    let client = build_client(&mock_server.uri());
    let url = client
        .images()
        .generate_with_model("custom-image-model", "a red fox")
        .await
        .unwrap();
    assert_eq!(url, "data:image/png;base64,aGk=");
}

#[tokio::test]
async fn test_success_path_mounts_shared_mock() {
    let mock_server = MockServer::start().await;
    mount_inline_image(&mock_server).await;

    let client = build_client(&mock_server.uri());
    assert!(client.images().generate("anything").await.is_ok());
}
