//! HTTP client for BigCommerce API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the API with automatic throttle handling.

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::clients::errors::{ApiError, HttpResponseError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::{AccessToken, Connection, HostUrl};

/// Default API base URI.
pub const DEFAULT_API_BASE: &str = "https://api.bigcommerce.com";

/// Extra seconds added to the `X-Retry-After` value before retrying.
pub const RETRY_WAIT_PADDING: u64 = 5;

/// Client version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the BigCommerce API.
///
/// The client handles:
/// - Base URI selection (`https://api.bigcommerce.com` or a configured override)
/// - Default headers, including the connection mode's auth headers
/// - Throttle handling driven by the `X-Retry-After` response header
/// - BigCommerce-specific header parsing
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Throttling
///
/// When a response carries a positive `X-Retry-After` value, the client
/// sleeps for that many seconds plus [`RETRY_WAIT_PADDING`] and reissues the
/// same request. There is no retry cap: the loop continues for as long as
/// the API keeps returning the header. The wait blocks only the calling
/// task, via `tokio::time::sleep`.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.bigcommerce.com`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given connection.
    ///
    /// # Arguments
    ///
    /// * `connection` - The active connection, providing the auth headers
    /// * `access_token` - Token attached as `X-Auth-Token` (OAuth mode)
    /// * `api_host` - Optional base URI override (proxy or mock server)
    /// * `user_agent_prefix` - Optional prefix for the User-Agent header
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(
        connection: &Connection,
        access_token: Option<&AccessToken>,
        api_host: Option<&HostUrl>,
        user_agent_prefix: Option<&str>,
    ) -> Self {
        let base_uri = api_host.map_or_else(|| DEFAULT_API_BASE.to_string(), HostUrl::origin);

        // Build User-Agent header
        let user_agent_prefix =
            user_agent_prefix.map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}BigCommerce API Library v{CLIENT_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        // Auth headers depend on the connection mode
        match connection {
            Connection::OAuth(credentials) => {
                default_headers.insert(
                    "X-Auth-Client".to_string(),
                    credentials.client_id().as_ref().to_string(),
                );
                if let Some(token) = access_token {
                    default_headers
                        .insert("X-Auth-Token".to_string(), token.as_ref().to_string());
                }
            }
            Connection::BasicAuth(credentials) => {
                let raw = format!(
                    "{}:{}",
                    credentials.username(),
                    credentials.api_key().as_ref()
                );
                default_headers.insert(
                    "Authorization".to_string(),
                    format!("Basic {}", BASE64.encode(raw)),
                );
            }
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Replaces the `X-Auth-Token` default header with a new token.
    ///
    /// This is the only mutation the client supports after construction.
    pub fn set_access_token(&mut self, token: &AccessToken) {
        self.default_headers
            .insert("X-Auth-Token".to_string(), token.as_ref().to_string());
    }

    /// Sends an HTTP request to the API.
    ///
    /// This method handles:
    /// - Request validation
    /// - URL construction and header merging
    /// - Response parsing
    /// - Throttle waits driven by `X-Retry-After`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs (`Network`)
    /// - A non-2xx response is received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        request.verify()?;

        let url = format!("{}/{}", self.base_uri, request.path);

        // Merge headers
        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        loop {
            let mut req_builder = match request.http_method {
                crate::clients::http_request::HttpMethod::Get => self.client.get(&url),
                crate::clients::http_request::HttpMethod::Post => self.client.post(&url),
                crate::clients::http_request::HttpMethod::Put => self.client.put(&url),
                crate::clients::http_request::HttpMethod::Delete => self.client.delete(&url),
            };

            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }

            if let Some(query) = &request.query {
                req_builder = req_builder.query(query);
            }

            if let Some(body) = &request.body {
                req_builder = req_builder.body(body.to_string());
            }

            let res = req_builder.send().await?;

            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body_text = res.text().await.unwrap_or_default();

            let body = if body_text.is_empty() {
                serde_json::json!({})
            } else {
                serde_json::from_str(&body_text).unwrap_or_else(|_| {
                    // Keep non-JSON error bodies so the message survives
                    // into the response error.
                    if (200..=299).contains(&code) {
                        serde_json::json!({})
                    } else {
                        serde_json::json!({ "raw_body": body_text })
                    }
                })
            };

            let response = HttpResponse::new(code, res_headers, body);

            // A positive X-Retry-After means the store is throttled: wait
            // for the advertised window plus padding and reissue the same
            // request. No cap and no counter, matching the upstream
            // behavior this client mirrors.
            if let Some(retry_after) = response.retry_after {
                if retry_after > 0.0 {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    let wait = retry_after.ceil() as u64 + RETRY_WAIT_PADDING;
                    tracing::warn!(
                        "Request to {} throttled, waiting {}s before retrying",
                        request.path,
                        wait
                    );
                    tokio::time::sleep(std::time::Duration::from_secs(wait)).await;
                    continue;
                }
            }

            if response.is_ok() {
                return Ok(response);
            }

            return Err(ApiError::Response(HttpResponseError {
                code,
                message: Self::serialize_error(&response),
                request_id: response.request_id().map(String::from),
            }));
        }
    }

    /// Parses response headers into a `HashMap` keyed by lowercase name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Serializes an error response body to a JSON message string.
    ///
    /// v3 errors carry `title`/`errors` fields; v2 errors are a bare array
    /// of `{status, message}` objects. Known fields are kept; anything else
    /// falls back to the whole body.
    fn serialize_error(response: &HttpResponse) -> String {
        let picked = match &response.body {
            serde_json::Value::Object(map) => {
                let mut error_body = serde_json::Map::new();
                for field in ["title", "errors", "error", "raw_body"] {
                    if let Some(value) = map.get(field) {
                        error_body.insert(field.to_string(), value.clone());
                    }
                }
                if error_body.is_empty() {
                    response.body.clone()
                } else {
                    serde_json::Value::Object(error_body)
                }
            }
            other => other.clone(),
        };

        serde_json::to_string(&picked).unwrap_or_else(|_| "{}".to_string())
    }
}
