//! Connection modes and their credentials.
//!
//! BigCommerce supports two ways of authenticating API calls: OAuth
//! (token-based, the default) and legacy basic auth against a store's own
//! URL. Exactly one mode is active per client instance. The mode is a
//! tagged enum carrying its credentials, so a client can never hold a
//! half-configured mix of the two credential sets.

use crate::config::newtypes::{ApiKey, ClientId, ClientSecret, HostUrl};
use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// The recognized connection mode names.
///
/// Parsed from the configuration strings `"oAuth"` and `"basicAuth"`
/// (case-insensitively). Any other string is rejected.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::{ConfigError, ConnectionMode};
///
/// let mode: ConnectionMode = "oAuth".parse().unwrap();
/// assert_eq!(mode, ConnectionMode::OAuth);
///
/// let result = "tokenAuth".parse::<ConnectionMode>();
/// assert!(matches!(result, Err(ConfigError::UnknownConnectionMode { .. })));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionMode {
    /// OAuth connection using a client ID and access token.
    OAuth,
    /// Legacy basic-auth connection using a store URL, username, and API key.
    BasicAuth,
}

impl fmt::Display for ConnectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OAuth => f.write_str("oAuth"),
            Self::BasicAuth => f.write_str("basicAuth"),
        }
    }
}

impl FromStr for ConnectionMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "oauth" => Ok(Self::OAuth),
            "basicauth" => Ok(Self::BasicAuth),
            _ => Err(ConfigError::UnknownConnectionMode {
                mode: s.to_string(),
            }),
        }
    }
}

/// Credentials for an OAuth connection.
///
/// The redirect URL is only needed when exchanging an authorization code
/// via [`auth::oauth`](crate::auth::oauth).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OAuthCredentials {
    client_id: ClientId,
    client_secret: ClientSecret,
    redirect_url: Option<HostUrl>,
}

impl OAuthCredentials {
    /// Creates OAuth credentials from a client ID and secret.
    #[must_use]
    pub const fn new(client_id: ClientId, client_secret: ClientSecret) -> Self {
        Self {
            client_id,
            client_secret,
            redirect_url: None,
        }
    }

    /// Sets the redirect URL used during the authorization-code exchange.
    #[must_use]
    pub fn with_redirect_url(mut self, redirect_url: HostUrl) -> Self {
        self.redirect_url = Some(redirect_url);
        self
    }

    /// Returns the client ID.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the client secret.
    #[must_use]
    pub const fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }

    /// Returns the redirect URL, if configured.
    #[must_use]
    pub const fn redirect_url(&self) -> Option<&HostUrl> {
        self.redirect_url.as_ref()
    }
}

/// Credentials for a legacy basic-auth connection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BasicCredentials {
    store_url: HostUrl,
    username: String,
    api_key: ApiKey,
}

impl BasicCredentials {
    /// Creates basic-auth credentials.
    #[must_use]
    pub const fn new(store_url: HostUrl, username: String, api_key: ApiKey) -> Self {
        Self {
            store_url,
            username,
            api_key,
        }
    }

    /// Returns the store URL.
    #[must_use]
    pub const fn store_url(&self) -> &HostUrl {
        &self.store_url
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }
}

/// The active connection: a mode together with its credentials.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::{ClientId, ClientSecret, Connection, ConnectionMode, OAuthCredentials};
///
/// let connection = Connection::OAuth(OAuthCredentials::new(
///     ClientId::new("id").unwrap(),
///     ClientSecret::new("secret").unwrap(),
/// ));
/// assert_eq!(connection.mode(), ConnectionMode::OAuth);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Connection {
    /// OAuth connection.
    OAuth(OAuthCredentials),
    /// Legacy basic-auth connection.
    BasicAuth(BasicCredentials),
}

impl Connection {
    /// Returns the mode tag for this connection.
    #[must_use]
    pub const fn mode(&self) -> ConnectionMode {
        match self {
            Self::OAuth(_) => ConnectionMode::OAuth,
            Self::BasicAuth(_) => ConnectionMode::BasicAuth,
        }
    }

    /// Returns the OAuth credentials if this is an OAuth connection.
    #[must_use]
    pub const fn oauth_credentials(&self) -> Option<&OAuthCredentials> {
        match self {
            Self::OAuth(credentials) => Some(credentials),
            Self::BasicAuth(_) => None,
        }
    }

    /// Returns the basic-auth credentials if this is a basic-auth connection.
    #[must_use]
    pub const fn basic_credentials(&self) -> Option<&BasicCredentials> {
        match self {
            Self::BasicAuth(credentials) => Some(credentials),
            Self::OAuth(_) => None,
        }
    }
}
