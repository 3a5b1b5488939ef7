//! Configuration types for the BigCommerce API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`BigcommerceConfig`]: The main configuration struct holding all client settings
//! - [`BigcommerceConfigBuilder`]: A builder for constructing [`BigcommerceConfig`] instances
//! - [`Connection`]: The active connection mode and its credentials
//! - [`StoreHash`], [`ClientId`], [`ClientSecret`], [`AccessToken`], [`ApiKey`],
//!   [`HostUrl`]: validated newtypes
//! - [`ApiVersion`]: The API version to address (`v2` or `v3`)
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::{
//!     BigcommerceConfig, ClientId, ClientSecret, Connection, OAuthCredentials, StoreHash,
//! };
//!
//! let config = BigcommerceConfig::builder()
//!     .connection(Connection::OAuth(OAuthCredentials::new(
//!         ClientId::new("my-client-id").unwrap(),
//!         ClientSecret::new("my-secret").unwrap(),
//!     )))
//!     .store_hash(StoreHash::new("abc123").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod connection;
mod newtypes;
mod version;

pub use connection::{BasicCredentials, Connection, ConnectionMode, OAuthCredentials};
pub use newtypes::{AccessToken, ApiKey, ClientId, ClientSecret, HostUrl, StoreHash};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Configuration for the BigCommerce API client.
///
/// Holds the connection (mode plus credentials), the store hash, and the
/// request defaults. Immutable once built; the only post-construction
/// mutation the client allows is replacing the access token.
///
/// # Thread Safety
///
/// `BigcommerceConfig` is `Clone`, `Send`, and `Sync`, making it safe to
/// share across threads and async tasks.
#[derive(Clone, Debug)]
pub struct BigcommerceConfig {
    connection: Connection,
    store_hash: StoreHash,
    access_token: Option<AccessToken>,
    api_version: ApiVersion,
    pagination_limit: u32,
    api_host: Option<HostUrl>,
    auth_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl BigcommerceConfig {
    /// Creates a new builder for constructing a `BigcommerceConfig`.
    #[must_use]
    pub fn builder() -> BigcommerceConfigBuilder {
        BigcommerceConfigBuilder::new()
    }

    /// Returns the active connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Returns the store hash.
    #[must_use]
    pub const fn store_hash(&self) -> &StoreHash {
        &self.store_hash
    }

    /// Returns the access token, if configured.
    #[must_use]
    pub const fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Returns the default page budget for [`paginate`](crate::BigcommerceClient::paginate).
    #[must_use]
    pub const fn pagination_limit(&self) -> u32 {
        self.pagination_limit
    }

    /// Returns the API host override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the auth service host override, if configured.
    #[must_use]
    pub const fn auth_host(&self) -> Option<&HostUrl> {
        self.auth_host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify BigcommerceConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BigcommerceConfig>();
};

/// Builder for constructing [`BigcommerceConfig`] instances.
///
/// Required fields are `connection` and `store_hash`. All other fields
/// have defaults.
///
/// # Defaults
///
/// - `api_version`: [`ApiVersion::V3`]
/// - `pagination_limit`: 1 (single page)
/// - `access_token`, `api_host`, `auth_host`, `user_agent_prefix`: unset
#[derive(Debug, Default)]
pub struct BigcommerceConfigBuilder {
    connection: Option<Connection>,
    store_hash: Option<StoreHash>,
    access_token: Option<AccessToken>,
    api_version: Option<ApiVersion>,
    pagination_limit: Option<u32>,
    api_host: Option<HostUrl>,
    auth_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl BigcommerceConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the connection mode and credentials (required).
    #[must_use]
    pub fn connection(mut self, connection: Connection) -> Self {
        self.connection = Some(connection);
        self
    }

    /// Sets the store hash (required).
    #[must_use]
    pub fn store_hash(mut self, store_hash: StoreHash) -> Self {
        self.store_hash = Some(store_hash);
        self
    }

    /// Sets the OAuth access token.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub const fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the default page budget for pagination.
    #[must_use]
    pub const fn pagination_limit(mut self, limit: u32) -> Self {
        self.pagination_limit = Some(limit);
        self
    }

    /// Overrides the API host (`https://api.bigcommerce.com` by default).
    ///
    /// Useful for proxies and mock servers.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Overrides the auth service host (`https://login.bigcommerce.com` by default).
    ///
    /// Consumed by [`exchange_code_with_config`](crate::auth::oauth::exchange_code_with_config).
    #[must_use]
    pub fn auth_host(mut self, host: HostUrl) -> Self {
        self.auth_host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`BigcommerceConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `connection` or
    /// `store_hash` are not set.
    pub fn build(self) -> Result<BigcommerceConfig, ConfigError> {
        let connection = self.connection.ok_or(ConfigError::MissingRequiredField {
            field: "connection",
        })?;
        let store_hash = self.store_hash.ok_or(ConfigError::MissingRequiredField {
            field: "store_hash",
        })?;

        Ok(BigcommerceConfig {
            connection,
            store_hash,
            access_token: self.access_token,
            api_version: self.api_version.unwrap_or_default(),
            pagination_limit: self.pagination_limit.unwrap_or(1),
            api_host: self.api_host,
            auth_host: self.auth_host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
