//! # BigCommerce API Rust Client
//!
//! A Rust client for the BigCommerce REST API, providing type-safe
//! configuration, two authentication modes, and an async HTTP facade with
//! throttle handling and pagination.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`BigcommerceConfig`] and [`BigcommerceConfigBuilder`]
//! - Validated newtypes for credentials, store hashes, and host URLs
//! - A tagged [`Connection`] enum selecting OAuth or legacy basic auth
//! - OAuth authorization-code exchange via [`auth::oauth`]
//! - An async [`BigcommerceClient`] facade forwarding HTTP verbs to the API
//! - Throttle handling driven by the `X-Retry-After` response header
//! - A pagination helper and a legacy v2 collection request path
//!
//! ## Quick Start
//!
//! ```rust
//! use bigcommerce_api::{
//!     BigcommerceClient, BigcommerceConfig, ClientId, ClientSecret, Connection,
//!     OAuthCredentials, StoreHash,
//! };
//!
//! let config = BigcommerceConfig::builder()
//!     .connection(Connection::OAuth(OAuthCredentials::new(
//!         ClientId::new("your-client-id").unwrap(),
//!         ClientSecret::new("your-client-secret").unwrap(),
//!     )))
//!     .store_hash(StoreHash::new("abc123").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = BigcommerceClient::new(&config);
//! assert_eq!(
//!     client.resource_url("catalog/products"),
//!     "https://api.bigcommerce.com/stores/abc123/v3/catalog/products"
//! );
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use std::collections::HashMap;
//!
//! // GET stores/abc123/v3/catalog/products?limit=50
//! let mut query = HashMap::new();
//! query.insert("limit".to_string(), "50".to_string());
//! let response = client.get("catalog/products", Some(query)).await?;
//!
//! // POST with a JSON body
//! let body = serde_json::json!({"name": "New Product", "type": "physical"});
//! let response = client.post("catalog/products", body, None).await?;
//! ```
//!
//! ## Pagination
//!
//! ```rust,ignore
//! use bigcommerce_api::{ApiVersion, PageOptions};
//!
//! // Fetch up to 5 pages of 250 products each
//! let products = client
//!     .paginate(
//!         "catalog/products",
//!         ApiVersion::V3,
//!         PageOptions { pages: Some(5), limit: Some(250) },
//!     )
//!     .await?;
//! ```
//!
//! ## OAuth Token Exchange
//!
//! ```rust,ignore
//! use bigcommerce_api::auth::oauth::exchange_code;
//!
//! // Exchange the install-callback code for a permanent token
//! let token = exchange_code(&credentials, &code, &scope, &context, None).await?;
//! client.set_access_token(AccessToken::new(token.access_token)?);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **One connection mode per instance**: The mode is a tagged enum, never a string
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use config::{
    AccessToken, ApiKey, ApiVersion, BasicCredentials, BigcommerceConfig,
    BigcommerceConfigBuilder, ClientId, ClientSecret, Connection, ConnectionMode, HostUrl,
    OAuthCredentials, StoreHash,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiError, DataType, HttpClient, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, RateLimitStatus,
};
pub use clients::legacy::LegacyClient;
pub use clients::rest::{BigcommerceClient, PageOptions};

// Re-export OAuth types for convenience
pub use auth::oauth::{
    exchange_code, exchange_code_with_config, AccessTokenResponse, OAuthError, TokenUser,
};
