//! OAuth authorization-code exchange.
//!
//! After a merchant installs an app, BigCommerce redirects to the app's
//! callback with a temporary `code`, the granted `scope`, and a `context`
//! identifying the store. This module exchanges that code for a permanent
//! access token at the auth service (`https://login.bigcommerce.com`).
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::{ClientId, ClientSecret, HostUrl, OAuthCredentials};
//! use bigcommerce_api::auth::oauth::exchange_code;
//!
//! let credentials = OAuthCredentials::new(
//!     ClientId::new("client-id")?,
//!     ClientSecret::new("client-secret")?,
//! )
//! .with_redirect_url(HostUrl::new("https://app.example.com/auth/callback")?);
//!
//! let token = exchange_code(
//!     &credentials,
//!     "temporary-code",
//!     "store_v2_products",
//!     "stores/abc123",
//!     None,
//! )
//! .await?;
//! println!("Access token: {}", token.access_token);
//! ```

use crate::config::{BigcommerceConfig, HostUrl, OAuthCredentials};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default auth service base URI.
pub const DEFAULT_AUTH_BASE: &str = "https://login.bigcommerce.com";

/// Grant type for the authorization-code exchange.
const AUTHORIZATION_CODE_GRANT_TYPE: &str = "authorization_code";

/// Errors that can occur during the token exchange.
#[derive(Debug, Error)]
pub enum OAuthError {
    /// The OAuth credentials have no redirect URL configured.
    #[error("OAuth credentials have no redirect URL. The token exchange requires the redirect URL the authorization flow was started with.")]
    MissingRedirectUrl,

    /// The active connection does not carry OAuth credentials.
    #[error("The active connection is basic auth. The token exchange requires OAuth credentials.")]
    MissingOAuthCredentials,

    /// The auth service rejected the exchange or could not be reached.
    ///
    /// Network errors carry status 0; HTTP errors carry the response status.
    #[error("Token exchange failed with status {status}: {message}")]
    TokenExchangeFailed {
        /// HTTP status of the failed exchange, or 0 for network errors.
        status: u16,
        /// The error body or network error description.
        message: String,
    },
}

/// Request body for the authorization-code exchange.
#[derive(Debug, Serialize)]
struct TokenExchangeRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    redirect_uri: &'a str,
    grant_type: &'a str,
    code: &'a str,
    scope: &'a str,
    context: &'a str,
}

/// The store user the token was granted for.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct TokenUser {
    /// BigCommerce user ID.
    pub id: u64,
    /// The user's login name.
    pub username: String,
    /// The user's email address.
    pub email: String,
}

/// A successful token exchange response.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct AccessTokenResponse {
    /// The permanent access token.
    pub access_token: String,
    /// The scopes the token was granted.
    pub scope: String,
    /// The store context the token applies to (e.g., `stores/abc123`).
    pub context: String,
    /// The user who authorized the app, if reported.
    #[serde(default)]
    pub user: Option<TokenUser>,
}

/// Exchanges a temporary authorization code for a permanent access token.
///
/// # Arguments
///
/// * `credentials` - OAuth credentials including the redirect URL
/// * `code` - The temporary code from the install callback
/// * `scope` - The granted scopes from the callback
/// * `context` - The store context from the callback (e.g., `stores/abc123`)
/// * `auth_host` - Optional auth service override (proxy or mock server)
///
/// # Errors
///
/// - [`OAuthError::MissingRedirectUrl`] if the credentials carry no redirect URL
/// - [`OAuthError::TokenExchangeFailed`] if the request fails or the auth
///   service rejects the code
pub async fn exchange_code(
    credentials: &OAuthCredentials,
    code: &str,
    scope: &str,
    context: &str,
    auth_host: Option<&HostUrl>,
) -> Result<AccessTokenResponse, OAuthError> {
    let redirect_url = credentials
        .redirect_url()
        .ok_or(OAuthError::MissingRedirectUrl)?;

    let auth_base = auth_host.map_or_else(|| DEFAULT_AUTH_BASE.to_string(), HostUrl::origin);
    let token_url = format!("{auth_base}/oauth2/token");

    let request_body = TokenExchangeRequest {
        client_id: credentials.client_id().as_ref(),
        client_secret: credentials.client_secret().as_ref(),
        redirect_uri: redirect_url.as_ref(),
        grant_type: AUTHORIZATION_CODE_GRANT_TYPE,
        code,
        scope,
        context,
    };

    let client = reqwest::Client::new();
    let response = client
        .post(&token_url)
        .json(&request_body)
        .send()
        .await
        .map_err(|e| OAuthError::TokenExchangeFailed {
            status: 0,
            message: format!("Network error: {e}"),
        })?;

    let status = response.status().as_u16();

    if !response.status().is_success() {
        let error_body = response.text().await.unwrap_or_default();
        return Err(OAuthError::TokenExchangeFailed {
            status,
            message: error_body,
        });
    }

    response
        .json()
        .await
        .map_err(|e| OAuthError::TokenExchangeFailed {
            status,
            message: format!("Failed to parse token response: {e}"),
        })
}

/// Exchanges an authorization code using a client configuration.
///
/// Pulls the OAuth credentials and the auth-host override out of the
/// configuration, so callers that already hold a [`BigcommerceConfig`]
/// do not need to unpack it before the exchange.
///
/// # Errors
///
/// - [`OAuthError::MissingOAuthCredentials`] if the configured connection
///   is basic auth
/// - Otherwise, the same errors as [`exchange_code`]
pub async fn exchange_code_with_config(
    config: &BigcommerceConfig,
    code: &str,
    scope: &str,
    context: &str,
) -> Result<AccessTokenResponse, OAuthError> {
    let credentials = config
        .connection()
        .oauth_credentials()
        .ok_or(OAuthError::MissingOAuthCredentials)?;

    exchange_code(credentials, code, scope, context, config.auth_host()).await
}
