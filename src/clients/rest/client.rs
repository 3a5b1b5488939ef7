//! High-level BigCommerce API client implementation.

use std::collections::HashMap;

use crate::clients::errors::{ApiError, InvalidHttpRequestError};
use crate::clients::legacy::LegacyClient;
use crate::clients::{DataType, HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{AccessToken, ApiVersion, BigcommerceConfig, Connection, HostUrl, StoreHash};

/// Default number of items requested per page when paginating.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Options for [`BigcommerceClient::paginate`].
///
/// `pages` is the page budget: the walk stops before the page counter
/// reaches it (defaults to the configured pagination limit, which itself
/// defaults to 1); `limit` is the page size sent to the API (defaults to
/// [`DEFAULT_PAGE_SIZE`]).
#[derive(Clone, Copy, Debug, Default)]
pub struct PageOptions {
    /// Maximum number of pages to fetch.
    pub pages: Option<u32>,
    /// Items requested per page.
    pub limit: Option<u32>,
}

/// High-level client for the BigCommerce REST API.
///
/// Built from a [`BigcommerceConfig`], the client holds exactly one active
/// connection mode, builds request URIs of the form
/// `{base}/stores/{store_hash}/{version}/{resource}`, and delegates the
/// HTTP calls to an internal [`HttpClient`]. It is immutable after
/// construction except for the setter methods, which mirror the token
/// refresh and version/store switching the API requires in practice.
///
/// # Example
///
/// ```rust,ignore
/// use bigcommerce_api::{
///     AccessToken, BigcommerceClient, BigcommerceConfig, ClientId, ClientSecret,
///     Connection, OAuthCredentials, StoreHash,
/// };
///
/// let config = BigcommerceConfig::builder()
///     .connection(Connection::OAuth(OAuthCredentials::new(
///         ClientId::new("client-id")?,
///         ClientSecret::new("client-secret")?,
///     )))
///     .store_hash(StoreHash::new("abc123")?)
///     .access_token(AccessToken::new("access-token")?)
///     .build()?;
///
/// let client = BigcommerceClient::new(&config);
///
/// // GET stores/abc123/v3/catalog/products
/// let response = client.get("catalog/products", None).await?;
/// println!("{}", response.body);
/// ```
#[derive(Debug)]
pub struct BigcommerceClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// The active connection, kept for legacy client construction.
    connection: Connection,
    store_hash: StoreHash,
    api_version: ApiVersion,
    access_token: Option<AccessToken>,
    pagination_limit: u32,
    api_host: Option<HostUrl>,
}

// Verify BigcommerceClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BigcommerceClient>();
};

impl BigcommerceClient {
    /// Creates a new client from the given configuration.
    #[must_use]
    pub fn new(config: &BigcommerceConfig) -> Self {
        let http_client = HttpClient::new(
            config.connection(),
            config.access_token(),
            config.api_host(),
            config.user_agent_prefix(),
        );

        Self {
            http_client,
            connection: config.connection().clone(),
            store_hash: config.store_hash().clone(),
            api_version: config.api_version(),
            access_token: config.access_token().cloned(),
            pagination_limit: config.pagination_limit(),
            api_host: config.api_host().cloned(),
        }
    }

    /// Returns the store hash this client addresses.
    #[must_use]
    pub const fn store_hash(&self) -> &StoreHash {
        &self.store_hash
    }

    /// Returns the API version used for requests.
    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Replaces the store hash, applying the last-segment normalization.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`](crate::ConfigError) if the input leaves no
    /// identifier segment.
    pub fn set_store_hash(&mut self, raw: &str) -> Result<(), crate::ConfigError> {
        self.store_hash = StoreHash::new(raw)?;
        Ok(())
    }

    /// Switches the API version used for subsequent requests.
    pub fn set_api_version(&mut self, version: ApiVersion) {
        if version != self.api_version {
            tracing::debug!(
                "Switching API version from {} to {}",
                self.api_version,
                version
            );
        }
        self.api_version = version;
    }

    /// Stores a new access token and attaches it to the underlying client.
    ///
    /// This is the only state the connection mutates after construction.
    pub fn set_access_token(&mut self, token: AccessToken) {
        self.http_client.set_access_token(&token);
        self.access_token = Some(token);
    }

    /// Returns the absolute URI a resource path resolves to.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// assert_eq!(
    ///     client.resource_url("catalog/products"),
    ///     "https://api.bigcommerce.com/stores/abc123/v3/catalog/products"
    /// );
    /// ```
    #[must_use]
    pub fn resource_url(&self, resource: &str) -> String {
        format!(
            "{}/{}",
            self.http_client.base_uri(),
            self.resource_path(resource, self.api_version)
        )
    }

    /// Sends a GET request to the given resource.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for validation, transport, and response errors.
    pub async fn get(
        &self,
        resource: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, ApiError> {
        self.request(HttpMethod::Get, resource, None, query).await
    }

    /// Sends a POST request with a JSON body to the given resource.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for validation, transport, and response errors.
    pub async fn post(
        &self,
        resource: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, ApiError> {
        self.request(HttpMethod::Post, resource, Some(body), query)
            .await
    }

    /// Sends a PUT request with a JSON body to the given resource.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for validation, transport, and response errors.
    pub async fn put(
        &self,
        resource: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, ApiError> {
        self.request(HttpMethod::Put, resource, Some(body), query)
            .await
    }

    /// Sends a DELETE request to the given resource.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for validation, transport, and response errors.
    pub async fn delete(
        &self,
        resource: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, ApiError> {
        self.request(HttpMethod::Delete, resource, None, query)
            .await
    }

    /// Builds and sends a request for the given verb and resource.
    ///
    /// The request URI is `{base}/stores/{store_hash}/{version}/{resource}`.
    /// Throttle handling lives in the underlying [`HttpClient`]: a positive
    /// `X-Retry-After` response header causes a wait and a reissue before
    /// this method returns.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for validation, transport, and response errors.
    pub async fn request(
        &self,
        method: HttpMethod,
        resource: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, ApiError> {
        self.request_at_version(method, resource, self.api_version, body, query)
            .await
    }

    /// Pages through a list endpoint, accumulating each page's items.
    ///
    /// Issues repeated GETs with `limit` and `page` query parameters,
    /// starting at page 1. Stops as soon as a page comes back empty, or
    /// once the next page number would reach the page budget: a budget of
    /// 1 fetches exactly one page, and a budget of `n` fetches at most
    /// `n - 1` pages.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if any page request fails.
    pub async fn paginate(
        &self,
        resource: &str,
        version: ApiVersion,
        options: PageOptions,
    ) -> Result<Vec<serde_json::Value>, ApiError> {
        let pages = options.pages.unwrap_or(self.pagination_limit).max(1);
        let limit = options.limit.unwrap_or(DEFAULT_PAGE_SIZE);

        let mut results = Vec::new();
        let mut current_page: u32 = 1;

        loop {
            let mut query = HashMap::new();
            query.insert("limit".to_string(), limit.to_string());
            query.insert("page".to_string(), current_page.to_string());

            let response = self
                .request_at_version(HttpMethod::Get, resource, version, None, Some(query))
                .await?;

            let items = response.data_items();
            if items.is_empty() {
                break;
            }
            results.extend_from_slice(items);

            // Exclusive bound: the walk ends once the next page number
            // reaches the budget, so page `pages` itself is never fetched.
            if current_page + 1 >= pages {
                break;
            }
            current_page += 1;
        }

        Ok(results)
    }

    /// Forwards a request to the legacy v2 collection API.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnsupportedVersion`] when the client is set to
    /// v3, which the collection API predates; otherwise any transport or
    /// response error from the legacy client.
    pub async fn collection_request(
        &self,
        method: HttpMethod,
        resource: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<serde_json::Value, ApiError> {
        if !self.api_version.supports_collection_api() {
            return Err(ApiError::UnsupportedVersion {
                version: self.api_version,
            });
        }

        let legacy = LegacyClient::new(
            &self.connection,
            &self.store_hash,
            self.access_token.as_ref(),
            self.api_host.as_ref(),
        );

        legacy.request(method, resource, query).await
    }

    /// Sends a request addressed at an explicit API version.
    async fn request_at_version(
        &self,
        method: HttpMethod,
        resource: &str,
        version: ApiVersion,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, ApiError> {
        let resource = resource.trim_start_matches('/');
        if resource.is_empty() {
            return Err(ApiError::InvalidRequest(
                InvalidHttpRequestError::InvalidPath {
                    path: String::new(),
                },
            ));
        }

        let path = self.resource_path(resource, version);
        let mut builder = HttpRequest::builder(method, path);

        if let Some(body_value) = body {
            builder = builder.body(body_value).body_type(DataType::Json);
        }
        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }

        let request = builder.build()?;
        self.http_client.request(request).await
    }

    /// Builds the relative path for a resource at the given version.
    fn resource_path(&self, resource: &str, version: ApiVersion) -> String {
        let resource = resource.trim_start_matches('/');
        format!("stores/{}/{}/{}", self.store_hash, version, resource)
    }
}
