//! HTTP client types for BigCommerce API communication.
//!
//! This module provides the HTTP layers of the crate:
//!
//! - [`HttpClient`]: The async HTTP client, including throttle handling
//! - [`HttpRequest`] / [`HttpResponse`]: Request and response types
//! - [`HttpMethod`] / [`DataType`]: Supported methods and body content types
//! - [`RateLimitStatus`]: Parsed `X-Rate-Limit-*` header group
//! - [`rest::BigcommerceClient`]: The high-level API facade
//! - [`legacy::LegacyClient`]: The older v2 collection client
//! - [`ApiError`]: Unified error type for API operations
//!
//! # Throttle Behavior
//!
//! When a response carries a positive `X-Retry-After` header value, the
//! client waits for that many seconds plus [`http_client::RETRY_WAIT_PADDING`]
//! and reissues the request. The wait is unbounded: the loop continues for
//! as long as the API keeps asking for a backoff. Other non-2xx responses
//! are returned immediately as [`ApiError::Response`].

mod errors;
pub mod http_client;
mod http_request;
mod http_response;

pub mod legacy;
pub mod rest;

pub use errors::{ApiError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::HttpClient;
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RateLimitStatus};
