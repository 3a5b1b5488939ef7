//! Error types for API requests.
//!
//! This module contains [`ApiError`], the unified error type for everything
//! that can go wrong once a request leaves the client: validation failures,
//! network errors, non-2xx responses, and legacy collection calls made
//! against an incompatible API version.
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::ApiError;
//!
//! match client.get("catalog/products", None).await {
//!     Ok(response) => println!("Products: {}", response.body),
//!     Err(ApiError::Response(e)) => {
//!         println!("API error {}: {}", e.code, e.message);
//!     }
//!     Err(ApiError::Network(e)) => {
//!         println!("Network error: {}", e);
//!     }
//!     Err(e) => println!("Request failed: {}", e),
//! }
//! ```

use crate::config::ApiVersion;
use thiserror::Error;

/// Error returned when a request receives a non-successful response.
///
/// The original status code and response message are preserved, along with
/// the `X-Request-Id` header when the API supplies one.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"title":"Not found"}"#.to_string(),
///     request_id: Some("abc-123".to_string()),
/// };
///
/// println!("Status {}: {}", error.code, error.message);
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message from the response body.
    pub message: String,
    /// Reference ID for error reporting (from the `X-Request-Id` header).
    pub request_id: Option<String>,
}

/// Error returned when a request fails validation before being sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The resource path is empty after normalization.
    #[error("Invalid resource path '{path}'.")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },
}

/// Unified error type for API operations.
///
/// Every failure a request can produce surfaces through this enum, so
/// callers have a single type to match on at API boundaries.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A non-2xx response from the API.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed before sending.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The legacy collection API was called with an incompatible version.
    #[error("The collection API does not support API version {version}.")]
    UnsupportedVersion {
        /// The incompatible version that was requested.
        version: ApiVersion,
    },

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ApiError {
    /// Returns the HTTP status code carried by this error, if any.
    ///
    /// `Response` errors always carry one; network errors carry the code of
    /// the failed response when reqwest preserved it.
    #[must_use]
    pub fn code(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidRequest(_) | Self::UnsupportedVersion { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_preserves_message() {
        let error = HttpResponseError {
            code: 404,
            message: r#"{"title":"Not Found"}"#.to_string(),
            request_id: None,
        };
        assert_eq!(error.to_string(), r#"{"title":"Not Found"}"#);
    }

    #[test]
    fn test_api_error_exposes_response_code() {
        let error = ApiError::Response(HttpResponseError {
            code: 429,
            message: "too many requests".to_string(),
            request_id: None,
        });
        assert_eq!(error.code(), Some(429));
    }

    #[test]
    fn test_unsupported_version_error_message() {
        let error = ApiError::UnsupportedVersion {
            version: ApiVersion::V3,
        };
        let message = error.to_string();
        assert!(message.contains("collection API"));
        assert!(message.contains("v3"));
        assert_eq!(error.code(), None);
    }

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use post without specifying data.");
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let response_error: &dyn std::error::Error = &HttpResponseError {
            code: 400,
            message: "test".to_string(),
            request_id: None,
        };
        let _ = response_error;

        let invalid_error: &dyn std::error::Error = &InvalidHttpRequestError::MissingBodyType;
        let _ = invalid_error;
    }
}
