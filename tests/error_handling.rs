use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use trading212_api_client::Trading212Error;
use trading212_api_client::equity::rest::EquityRestClient;
use trading212_api_client::types::Environment;

fn build_client(server: &MockServer) -> EquityRestClient {
    EquityRestClient::builder()
        .base_url(server.uri())
        .api_key("test_key")
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_unauthorized_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v0/equity/account/cash"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({ "errorMessage": "Bad API key" })),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let error = client.get_account_cash().await.unwrap_err();

    match error {
        Trading212Error::Api(api_error) => {
            assert_eq!(api_error.status, 401);
            assert!(api_error.is_unauthorized());
            assert_eq!(api_error.message().as_deref(), Some("Bad API key"));
        }
        other => panic!("Expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let server = MockServer::start().await;

    // expect(1) fails the test on drop if the client retries the request.
    Mock::given(method("GET"))
        .and(path("/api/v0/equity/portfolio"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let error = client.get_portfolio().await.unwrap_err();

    match error {
        Trading212Error::Api(api_error) => {
            assert!(api_error.is_server_error());
            assert_eq!(api_error.body, "Internal Server Error");
        }
        other => panic!("Expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limited_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v0/equity/orders"))
        .respond_with(ResponseTemplate::new(429).set_body_string(""))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let error = client.get_orders().await.unwrap_err();

    match error {
        Trading212Error::Api(api_error) => assert!(api_error.is_rate_limited()),
        other => panic!("Expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v0/equity/account/info"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let error = client.get_account_info().await.unwrap_err();

    assert!(matches!(error, Trading212Error::Decode(_)));
}

#[tokio::test]
async fn test_connection_failure_is_network_error() {
    // Nothing listens on this port.
    let client = EquityRestClient::builder()
        .base_url("http://127.0.0.1:9")
        .api_key("test_key")
        .build()
        .unwrap();

    let error = client.get_account_cash().await.unwrap_err();

    assert!(error.is_network());
    assert!(!error.is_timeout());
}

#[tokio::test]
async fn test_timeout_is_reported_without_retry() {
    let server = MockServer::start().await;

    // expect(1) fails the test on drop if the client retries after the
    // timeout.
    Mock::given(method("GET"))
        .and(path("/api/v0/equity/account/cash"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({}))
                .set_delay(std::time::Duration::from_secs(5)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = EquityRestClient::builder()
        .base_url(server.uri())
        .api_key("test_key")
        .timeout(std::time::Duration::from_millis(100))
        .build()
        .unwrap();

    let error = client.get_account_cash().await.unwrap_err();

    assert!(error.is_network());
    assert!(error.is_timeout());
}

#[tokio::test]
async fn test_empty_api_key_fails_before_any_request() {
    let error = EquityRestClient::new("", Environment::Demo).unwrap_err();
    assert!(matches!(error, Trading212Error::Config(_)));
}

#[tokio::test]
async fn test_delete_error_propagates_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v0/equity/orders/99"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({ "errorMessage": "Order not found" })),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let error = client.cancel_order(99).await.unwrap_err();

    match error {
        Trading212Error::Api(api_error) => {
            assert!(api_error.is_not_found());
            assert_eq!(api_error.message().as_deref(), Some("Order not found"));
        }
        other => panic!("Expected Api error, got: {other:?}"),
    }
}
