//! Error types for client configuration.
//!
//! This module contains the error type used by configuration constructors
//! and validated newtypes.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::{ClientId, ConfigError};
//!
//! let result = ClientId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyClientId)));
//! ```

use thiserror::Error;

/// Errors that can occur while building or validating client configuration.
///
/// Each variant provides a clear, actionable error message. This is the
/// configuration-error kind; transport failures are reported separately as
/// [`ApiError`](crate::ApiError).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The connection mode string is not one of the recognized values.
    #[error("Unknown connection mode '{mode}'. Expected 'oAuth' or 'basicAuth'.")]
    UnknownConnectionMode {
        /// The unrecognized mode string that was provided.
        mode: String,
    },

    /// Client ID cannot be empty.
    #[error("Client ID cannot be empty. Please provide a valid BigCommerce client ID.")]
    EmptyClientId,

    /// Client secret cannot be empty.
    #[error("Client secret cannot be empty. Please provide a valid BigCommerce client secret.")]
    EmptyClientSecret,

    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid BigCommerce access token.")]
    EmptyAccessToken,

    /// Legacy API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid legacy API key.")]
    EmptyApiKey,

    /// The store hash is empty or reduces to nothing after normalization.
    #[error("Invalid store hash '{raw}'. Expected a hash such as 'abc123' or a path ending in one.")]
    InvalidStoreHash {
        /// The raw input that was provided.
        raw: String,
    },

    /// The API version string is not recognized.
    #[error("Invalid API version '{version}'. Expected 'v2' or 'v3'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.bigcommerce.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
