//! Legacy v2 collection client implementation.

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::clients::errors::{ApiError, HttpResponseError};
use crate::clients::http_request::HttpMethod;
use crate::config::{AccessToken, Connection, HostUrl, StoreHash};

/// Client for the legacy v2 collection API.
///
/// Unlike [`HttpClient`](crate::clients::HttpClient), this client is pinned
/// to the v2 surface and returns the raw JSON payload rather than a parsed
/// response wrapper. The base URL depends on the connection mode:
///
/// - OAuth: `https://api.bigcommerce.com/stores/{hash}/v2`, with the
///   `X-Auth-Client` and `X-Auth-Token` headers
/// - Basic auth: `{store_url}/api/v2`, with an `Authorization: Basic` header
#[derive(Debug)]
pub struct LegacyClient {
    client: reqwest::Client,
    base_url: String,
    headers: HashMap<String, String>,
}

// Verify LegacyClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LegacyClient>();
};

impl LegacyClient {
    /// Creates a legacy client for the active connection.
    ///
    /// # Arguments
    ///
    /// * `connection` - The active connection, selecting base URL and headers
    /// * `store_hash` - The store to address (OAuth mode)
    /// * `access_token` - Token for the `X-Auth-Token` header (OAuth mode)
    /// * `api_host` - Optional base URI override for the OAuth form
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created.
    #[must_use]
    pub fn new(
        connection: &Connection,
        store_hash: &StoreHash,
        access_token: Option<&AccessToken>,
        api_host: Option<&HostUrl>,
    ) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        let base_url = match connection {
            Connection::OAuth(credentials) => {
                headers.insert(
                    "X-Auth-Client".to_string(),
                    credentials.client_id().as_ref().to_string(),
                );
                if let Some(token) = access_token {
                    headers.insert("X-Auth-Token".to_string(), token.as_ref().to_string());
                }
                let api_base = api_host.map_or_else(
                    || crate::clients::http_client::DEFAULT_API_BASE.to_string(),
                    HostUrl::origin,
                );
                format!("{api_base}/stores/{store_hash}/v2")
            }
            Connection::BasicAuth(credentials) => {
                let raw = format!(
                    "{}:{}",
                    credentials.username(),
                    credentials.api_key().as_ref()
                );
                headers.insert(
                    "Authorization".to_string(),
                    format!("Basic {}", BASE64.encode(raw)),
                );
                format!("{}/api/v2", credentials.store_url().origin())
            }
        };

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends a request to a v2 collection resource and returns the raw payload.
    ///
    /// The resource path is relative to the v2 base (e.g., `"products"`,
    /// `"orders/123"`). Bodies are not supported here; the collection API
    /// is consumed read-mostly and writes go through the facade's verb
    /// methods instead.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] for transport failures and
    /// [`ApiError::Response`] for non-2xx responses.
    pub async fn request(
        &self,
        method: HttpMethod,
        resource: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<serde_json::Value, ApiError> {
        let resource = resource.trim_start_matches('/');
        let url = format!("{}/{}", self.base_url, resource);

        let mut req_builder = match method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &query {
            req_builder = req_builder.query(query);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let request_id = res
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body_text = res.text().await.unwrap_or_default();

        let body = if body_text.is_empty() {
            serde_json::json!(null)
        } else {
            serde_json::from_str(&body_text).unwrap_or(serde_json::Value::Null)
        };

        if (200..=299).contains(&code) {
            Ok(body)
        } else {
            Err(ApiError::Response(HttpResponseError {
                code,
                message: serde_json::to_string(&body).unwrap_or_else(|_| "{}".to_string()),
                request_id,
            }))
        }
    }
}
