//! Integration tests for the HTTP client layer.
//!
//! These tests run against a wiremock server and exercise request
//! dispatching, header handling, error mapping, and the throttle wait
//! driven by the `X-Retry-After` response header.

use bigcommerce_api::{
    AccessToken, ApiError, ClientId, ClientSecret, Connection, HostUrl, HttpClient, HttpMethod,
    HttpRequest, OAuthCredentials,
};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_client(mock_server: &MockServer) -> HttpClient {
    let connection = Connection::OAuth(OAuthCredentials::new(
        ClientId::new("test-client-id").unwrap(),
        ClientSecret::new("test-secret").unwrap(),
    ));
    let token = AccessToken::new("test-token").unwrap();
    let host = HostUrl::new(mock_server.uri()).unwrap();

    HttpClient::new(&connection, Some(&token), Some(&host), None)
}

#[tokio::test]
async fn test_get_request_sends_auth_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/catalog/products"))
        .and(header("X-Auth-Client", "test-client-id"))
        .and(header("X-Auth-Token", "test-token"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let request = HttpRequest::builder(HttpMethod::Get, "stores/abc123/v3/catalog/products")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.code, 200);
}

#[tokio::test]
async fn test_post_request_sends_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/stores/abc123/v3/catalog/products"))
        .and(header("Content-Type", "application/json"))
        .and(body_string_contains("Widget"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"data": {"id": 77, "name": "Widget"}})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let request = HttpRequest::builder(HttpMethod::Post, "stores/abc123/v3/catalog/products")
        .body(json!({"name": "Widget"}))
        .body_type(bigcommerce_api::DataType::Json)
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.code, 201);
    assert_eq!(response.body["data"]["id"], 77);
}

#[tokio::test]
async fn test_query_parameters_are_forwarded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/orders"))
        .and(query_param("status_id", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let request = HttpRequest::builder(HttpMethod::Get, "stores/abc123/v3/orders")
        .query_param("status_id", "5")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert!(response.is_ok());
}

#[tokio::test]
async fn test_rate_limit_headers_are_parsed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/orders"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": []}))
                .insert_header("X-Rate-Limit-Requests-Quota", "150")
                .insert_header("X-Rate-Limit-Requests-Left", "34")
                .insert_header("X-Rate-Limit-Time-Window-Ms", "30000")
                .insert_header("X-Rate-Limit-Time-Reset-Ms", "12000"),
        )
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let request = HttpRequest::builder(HttpMethod::Get, "stores/abc123/v3/orders")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    let rate_limit = response.rate_limit.unwrap();
    assert_eq!(rate_limit.requests_quota, 150);
    assert_eq!(rate_limit.requests_left, 34);
}

#[tokio::test]
async fn test_error_response_maps_to_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/catalog/products/999"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"title": "Resource not found", "errors": {}}))
                .insert_header("X-Request-Id", "req-404-id"),
        )
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let request = HttpRequest::builder(HttpMethod::Get, "stores/abc123/v3/catalog/products/999")
        .build()
        .unwrap();

    let error = client.request(request).await.unwrap_err();
    match error {
        ApiError::Response(response_error) => {
            assert_eq!(response_error.code, 404);
            assert!(response_error.message.contains("Resource not found"));
            assert_eq!(response_error.request_id.as_deref(), Some("req-404-id"));
        }
        other => panic!("expected response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_with_non_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/orders"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let request = HttpRequest::builder(HttpMethod::Get, "stores/abc123/v3/orders")
        .build()
        .unwrap();

    let error = client.request(request).await.unwrap_err();
    match error {
        ApiError::Response(response_error) => {
            assert_eq!(response_error.code, 502);
            assert!(response_error.message.contains("Bad Gateway"));
        }
        other => panic!("expected response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_client_error_with_non_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/orders/1"))
        .respond_with(ResponseTemplate::new(404).set_body_string("No such order"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let request = HttpRequest::builder(HttpMethod::Get, "stores/abc123/v3/orders/1")
        .build()
        .unwrap();

    let error = client.request(request).await.unwrap_err();
    match error {
        ApiError::Response(response_error) => {
            assert_eq!(response_error.code, 404);
            // The plain-text body is preserved, not collapsed to {}
            assert!(response_error.message.contains("No such order"));
        }
        other => panic!("expected response error, got {other:?}"),
    }
}

// Slow test: the throttle wait is the advertised window plus five seconds,
// so an `X-Retry-After: 1` response sleeps for six real seconds.
#[tokio::test]
async fn test_positive_retry_after_reissues_the_request() {
    let mock_server = MockServer::start().await;

    // First call is throttled; wiremock matches mounted mocks in order, so
    // the one-shot throttle mock absorbs the first request only.
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/orders"))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(json!({}))
                .insert_header("X-Retry-After", "1"),
        )
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [{"id": 1}]})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let request = HttpRequest::builder(HttpMethod::Get, "stores/abc123/v3/orders")
        .build()
        .unwrap();

    // The throttled first response never surfaces to the caller.
    let response = client.request(request).await.unwrap();
    assert_eq!(response.code, 200);
    assert_eq!(response.body["data"][0]["id"], 1);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
}

#[tokio::test]
async fn test_zero_retry_after_does_not_retry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/orders"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": []}))
                .insert_header("X-Retry-After", "0"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let request = HttpRequest::builder(HttpMethod::Get, "stores/abc123/v3/orders")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert!(response.is_ok());

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_network_error_maps_to_api_error() {
    // Point the client at a server that is no longer listening. A
    // non-pooled server is required: pooled `MockServer::start` servers
    // keep their listener alive after drop.
    let mock_server = MockServer::builder().start().await;
    let client = create_test_client(&mock_server);
    drop(mock_server);

    let request = HttpRequest::builder(HttpMethod::Get, "stores/abc123/v3/orders")
        .build()
        .unwrap();

    let error = client.request(request).await.unwrap_err();
    assert!(matches!(error, ApiError::Network(_)));
}
