//! HTTP response types.
//!
//! This module provides the [`HttpResponse`] type for parsing and accessing
//! API response data, with automatic extraction of the BigCommerce rate-limit
//! and throttling headers.

use std::collections::HashMap;

/// Rate limit status parsed from the `X-Rate-Limit-*` response headers.
///
/// BigCommerce reports quota usage on every response through four headers:
/// the total quota per window, the requests left in the window, the window
/// length, and the time until the window resets.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::clients::RateLimitStatus;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-rate-limit-requests-quota".to_string(), vec!["150".to_string()]);
/// headers.insert("x-rate-limit-requests-left".to_string(), vec!["34".to_string()]);
/// headers.insert("x-rate-limit-time-window-ms".to_string(), vec!["30000".to_string()]);
/// headers.insert("x-rate-limit-time-reset-ms".to_string(), vec!["12000".to_string()]);
///
/// let status = RateLimitStatus::parse(&headers).unwrap();
/// assert_eq!(status.requests_left, 34);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimitStatus {
    /// Total number of requests allowed per window.
    pub requests_quota: u32,
    /// Requests remaining in the current window.
    pub requests_left: u32,
    /// Length of the rate-limiting window, in milliseconds.
    pub time_window_ms: u64,
    /// Time until the current window resets, in milliseconds.
    pub time_reset_ms: u64,
}

impl RateLimitStatus {
    /// Parses the rate-limit status from a lowercase header map.
    ///
    /// Returns `None` unless all four headers are present and numeric.
    #[must_use]
    pub fn parse(headers: &HashMap<String, Vec<String>>) -> Option<Self> {
        fn first<T: std::str::FromStr>(
            headers: &HashMap<String, Vec<String>>,
            name: &str,
        ) -> Option<T> {
            headers.get(name)?.first()?.parse().ok()
        }

        Some(Self {
            requests_quota: first(headers, "x-rate-limit-requests-quota")?,
            requests_left: first(headers, "x-rate-limit-requests-left")?,
            time_window_ms: first(headers, "x-rate-limit-time-window-ms")?,
            time_reset_ms: first(headers, "x-rate-limit-time-reset-ms")?,
        })
    }
}

/// An HTTP response from the BigCommerce API.
///
/// Contains the response status code, headers, and parsed JSON body, plus
/// the throttling and rate-limit values extracted from the headers.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Seconds to wait before retrying (from the `X-Retry-After` header).
    pub retry_after: Option<f64>,
    /// Rate limit status (from the `X-Rate-Limit-*` headers).
    pub rate_limit: Option<RateLimitStatus>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse` with automatic header parsing.
    ///
    /// The header map must be keyed by lowercase header name. The
    /// BigCommerce-specific headers are extracted automatically:
    /// `X-Retry-After` into `retry_after` and the `X-Rate-Limit-*` group
    /// into `rate_limit`.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let retry_after = headers
            .get("x-retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.parse::<f64>().ok());

        let rate_limit = RateLimitStatus::parse(&headers);

        Self {
            code,
            headers,
            body,
            retry_after,
            rate_limit,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` if the response asks the caller to back off.
    ///
    /// The API signals throttling with a positive `X-Retry-After` value.
    #[must_use]
    pub fn is_throttled(&self) -> bool {
        self.retry_after.is_some_and(|seconds| seconds > 0.0)
    }

    /// Returns the first value of the named header, if present.
    ///
    /// Header names are matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// This ID is useful for debugging and should be included in error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the items of a list response.
    ///
    /// v3 endpoints wrap collections in a `data` key; v2 endpoints return a
    /// bare JSON array. Both shapes are handled; any other shape yields an
    /// empty slice.
    #[must_use]
    pub fn data_items(&self) -> &[serde_json::Value] {
        self.body
            .get("data")
            .unwrap_or(&self.body)
            .as_array()
            .map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rate_limit_headers() -> HashMap<String, Vec<String>> {
        let mut headers = HashMap::new();
        headers.insert(
            "x-rate-limit-requests-quota".to_string(),
            vec!["150".to_string()],
        );
        headers.insert(
            "x-rate-limit-requests-left".to_string(),
            vec!["34".to_string()],
        );
        headers.insert(
            "x-rate-limit-time-window-ms".to_string(),
            vec!["30000".to_string()],
        );
        headers.insert(
            "x-rate-limit-time-reset-ms".to_string(),
            vec!["12000".to_string()],
        );
        headers
    }

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in [200, 201, 204, 299] {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(response.is_ok(), "expected is_ok() for code {code}");
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [400, 404, 429, 500] {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(!response.is_ok(), "expected !is_ok() for code {code}");
        }
    }

    #[test]
    fn test_retry_after_parsing() {
        let mut headers = HashMap::new();
        headers.insert("x-retry-after".to_string(), vec!["15".to_string()]);

        let response = HttpResponse::new(429, headers, json!({}));
        assert!((response.retry_after.unwrap() - 15.0).abs() < f64::EPSILON);
        assert!(response.is_throttled());
    }

    #[test]
    fn test_zero_retry_after_is_not_throttled() {
        let mut headers = HashMap::new();
        headers.insert("x-retry-after".to_string(), vec!["0".to_string()]);

        let response = HttpResponse::new(200, headers, json!({}));
        assert!(!response.is_throttled());
    }

    #[test]
    fn test_missing_retry_after_is_not_throttled() {
        let response = HttpResponse::new(200, HashMap::new(), json!({}));
        assert!(response.retry_after.is_none());
        assert!(!response.is_throttled());
    }

    #[test]
    fn test_rate_limit_parsing() {
        let status = RateLimitStatus::parse(&rate_limit_headers()).unwrap();
        assert_eq!(status.requests_quota, 150);
        assert_eq!(status.requests_left, 34);
        assert_eq!(status.time_window_ms, 30000);
        assert_eq!(status.time_reset_ms, 12000);
    }

    #[test]
    fn test_rate_limit_requires_all_headers() {
        let mut headers = rate_limit_headers();
        headers.remove("x-rate-limit-requests-left");
        assert!(RateLimitStatus::parse(&headers).is_none());
    }

    #[test]
    fn test_response_extracts_rate_limit() {
        let response = HttpResponse::new(200, rate_limit_headers(), json!({}));
        assert_eq!(response.rate_limit.unwrap().requests_left, 34);
    }

    #[test]
    fn test_request_id_extraction() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["abc-123-xyz".to_string()]);

        let response = HttpResponse::new(200, headers, json!({}));
        assert_eq!(response.request_id(), Some("abc-123-xyz"));
    }

    #[test]
    fn test_data_items_v3_shape() {
        let body = json!({"data": [{"id": 1}, {"id": 2}], "meta": {}});
        let response = HttpResponse::new(200, HashMap::new(), body);
        assert_eq!(response.data_items().len(), 2);
    }

    #[test]
    fn test_data_items_v2_shape() {
        let body = json!([{"id": 1}, {"id": 2}, {"id": 3}]);
        let response = HttpResponse::new(200, HashMap::new(), body);
        assert_eq!(response.data_items().len(), 3);
    }

    #[test]
    fn test_data_items_empty_for_other_shapes() {
        let response = HttpResponse::new(200, HashMap::new(), json!({"id": 1}));
        assert!(response.data_items().is_empty());
    }
}
