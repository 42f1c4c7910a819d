//! Client configuration and transport layer.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client as HttpClient;

use crate::error::{Error, Result};

/// Gemini client. Cheap to clone; all state lives behind an `Arc`.
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub http: HttpClient,
    pub config: ClientConfig,
    pub api: ApiEndpoint,
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Provider API key. Absence is not a build error: the key is
    /// presence-checked at request time so the process can keep running
    /// unconfigured (the request fails, not the startup).
    pub api_key: Option<String>,
    /// HTTP options.
    pub http_options: HttpOptions,
}

/// HTTP options.
#[derive(Debug, Clone, Default)]
pub struct HttpOptions {
    pub timeout: Option<u64>,
    pub headers: HashMap<String, String>,
    pub base_url: Option<String>,
    pub api_version: Option<String>,
}

impl Client {
    /// Create a client with an API key.
    ///
    /// # Errors
    /// Returns an error when the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a client from the environment. Reads `API_KEY`, falling back
    /// to `GEMINI_API_KEY`. A missing key yields a keyless client rather
    /// than an error; generation requests will then fail with a
    /// configuration message.
    ///
    /// # Errors
    /// Returns an error when the HTTP client cannot be built.
    pub fn from_env() -> Result<Self> {
        let mut builder = Self::builder();
        if let Ok(api_key) = std::env::var("API_KEY").or_else(|_| std::env::var("GEMINI_API_KEY"))
        {
            if !api_key.trim().is_empty() {
                builder = builder.api_key(api_key);
            }
        }
        builder.build()
    }

    /// Create a builder.
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Access the image-generation API.
    #[must_use]
    pub fn images(&self) -> crate::images::Images {
        crate::images::Images::new(self.inner.clone())
    }
}

/// Client builder.
#[derive(Default)]
pub struct ClientBuilder {
    api_key: Option<String>,
    http_options: HttpOptions,
}

impl ClientBuilder {
    /// Set the API key.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout in seconds.
    #[must_use]
    pub const fn timeout(mut self, secs: u64) -> Self {
        self.http_options.timeout = Some(secs);
        self
    }

    /// Add a default HTTP header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.http_options.headers.insert(key.into(), value.into());
        self
    }

    /// Override the base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.http_options.base_url = Some(base_url.into());
        self
    }

    /// Override the API version path segment.
    #[must_use]
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.http_options.api_version = Some(api_version.into());
        self
    }

    /// Build the client.
    ///
    /// # Errors
    /// Returns an error when a header is invalid or the HTTP client cannot
    /// be built.
    pub fn build(self) -> Result<Client> {
        let Self {
            api_key,
            http_options,
        } = self;

        let headers = Self::build_headers(&http_options, api_key.as_deref())?;
        let http = Self::build_http_client(&http_options, headers)?;

        let config = ClientConfig {
            api_key,
            http_options,
        };
        let api = ApiEndpoint::new(&config);

        Ok(Client {
            inner: Arc::new(ClientInner { http, config, api }),
        })
    }

    fn build_headers(http_options: &HttpOptions, api_key: Option<&str>) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        for (key, value) in &http_options.headers {
            let name =
                HeaderName::from_bytes(key.as_bytes()).map_err(|_| Error::InvalidConfig {
                    message: format!("Invalid header name: {key}"),
                })?;
            let value = HeaderValue::from_str(value).map_err(|_| Error::InvalidConfig {
                message: format!("Invalid header value for {key}"),
            })?;
            headers.insert(name, value);
        }

        let header_name = HeaderName::from_static("x-goog-api-key");
        if let Some(api_key) = api_key {
            if !api_key.is_empty() && !headers.contains_key(&header_name) {
                let mut header_value =
                    HeaderValue::from_str(api_key).map_err(|_| Error::InvalidConfig {
                        message: "Invalid API key value".into(),
                    })?;
                header_value.set_sensitive(true);
                headers.insert(header_name, header_value);
            }
        }

        Ok(headers)
    }

    fn build_http_client(http_options: &HttpOptions, headers: HeaderMap) -> Result<HttpClient> {
        let mut http_builder = HttpClient::builder();
        if let Some(timeout) = http_options.timeout {
            http_builder = http_builder.timeout(Duration::from_secs(timeout));
        }
        if !headers.is_empty() {
            http_builder = http_builder.default_headers(headers);
        }
        Ok(http_builder.build()?)
    }
}

impl ClientInner {
    pub async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let request = request.build()?;
        Ok(self.http.execute(request).await?)
    }
}

pub(crate) struct ApiEndpoint {
    pub base_url: String,
    pub api_version: String,
}

impl ApiEndpoint {
    pub fn new(config: &ClientConfig) -> Self {
        let base_url = config
            .http_options
            .base_url
            .as_deref()
            .map_or_else(default_base_url, normalize_base_url);
        let api_version = config
            .http_options
            .api_version
            .clone()
            .unwrap_or_else(|| "v1beta".to_string());
        Self {
            base_url,
            api_version,
        }
    }

    /// URL for a model method, e.g. `models/gemini-2.5-flash-image:generateContent`.
    pub fn model_method_url(&self, model: &str, method: &str) -> String {
        let base = &self.base_url;
        let version = &self.api_version;
        format!("{base}{version}/models/{model}:{method}")
    }
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/".to_string()
}

fn normalize_base_url(base_url: &str) -> String {
    let mut value = base_url.trim().to_string();
    if !value.ends_with('/') {
        value.push('/');
    }
    value
}
