//! Authentication flows for the BigCommerce API.
//!
//! OAuth credentials and the connection modes themselves live in
//! [`config`](crate::config); this module holds the network-facing flow:
//! exchanging a temporary authorization code for an access token via the
//! BigCommerce auth service.

pub mod oauth;

pub use oauth::{
    exchange_code, exchange_code_with_config, AccessTokenResponse, OAuthError, TokenUser,
};
