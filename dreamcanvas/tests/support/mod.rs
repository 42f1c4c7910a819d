#![allow(dead_code)]

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dreamcanvas::Client;

pub const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash-image:generateContent";

pub fn build_client(base_url: &str) -> Client {
    Client::builder()
        .api_key("test-key")
        .base_url(base_url)
        .build()
        .unwrap()
}

pub fn build_keyless_client(base_url: &str) -> Client {
    Client::builder().base_url(base_url).build().unwrap()
}

/// A 2xx body whose first candidate carries one inline PNG part
/// (base64 of `hi`).
pub fn inline_image_body() -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [
                    {"inlineData": {"mimeType": "image/png", "data": "aGk="}}
                ]
            }
        }]
    })
}

pub async fn mount_inline_image(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(inline_image_body()))
        .mount(server)
        .await;
}
