//! Image-generation API surface.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use dreamcanvas_types::request::GenerateContentRequest;
use dreamcanvas_types::response::GenerateContentResponse;
use tracing::debug;

use crate::client::ClientInner;
use crate::error::{Error, Result};

/// Default generation model. Fast image output, square by default.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

#[derive(Clone)]
pub struct Images {
    pub(crate) inner: Arc<ClientInner>,
}

impl Images {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Generate one image from a prompt with the default model. Returns a
    /// `data:` URI combining the declared MIME type and base64 payload.
    ///
    /// Single attempt, no retry. The caller is responsible for rejecting
    /// empty prompts.
    ///
    /// # Errors
    /// `InvalidConfig` when no API key is configured (checked before any
    /// network activity), `ApiError` on a non-2xx response, `EmptyResponse`
    /// when no candidate part carries inline image data, `HttpClient` on
    /// transport failure.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        self.generate_with_model(DEFAULT_IMAGE_MODEL, prompt).await
    }

    /// Generate one image with an explicit model.
    ///
    /// # Errors
    /// See [`Images::generate`].
    pub async fn generate_with_model(&self, model: &str, prompt: &str) -> Result<String> {
        if self.inner.config.api_key.is_none() {
            return Err(Error::InvalidConfig {
                message: "AI API key is missing. Please ensure your environment is configured."
                    .into(),
            });
        }

        let body = GenerateContentRequest::square_image(prompt);
        let url = self.inner.api.model_method_url(model, "generateContent");
        debug!(model, "sending image generation request");

        let request = self.inner.http.post(url).json(&body);
        let response = self.inner.send(request).await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::ApiError {
                status,
                message: extract_api_message(&body),
            });
        }

        let response = response.json::<GenerateContentResponse>().await?;
        let blob = response
            .first_inline_image()
            .ok_or_else(|| Error::EmptyResponse {
                message: "The model did not return any image data. Try a different prompt."
                    .into(),
            })?;
        Ok(data_uri(&blob.mime_type, &blob.data))
    }
}

/// Assemble a `data:` URI from a MIME type and raw bytes.
fn data_uri(mime_type: &str, data: &[u8]) -> String {
    let encoded = STANDARD.encode(data);
    format!("data:{mime_type};base64,{encoded}")
}

/// Pull the provider's own message out of an error body. Falls back to the
/// raw body, then to a generic line when the body is empty.
fn extract_api_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value
            .get("error")
            .and_then(|error| error.get("message"))
            .and_then(|message| message.as_str())
        {
            return message.to_string();
        }
    }
    if body.trim().is_empty() {
        "Failed to generate your image.".to_string()
    } else {
        body.to_string()
    }
}
