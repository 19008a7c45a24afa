use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use trading212_api_client::equity::rest::EquityRestClient;

fn build_client(server: &MockServer) -> EquityRestClient {
    EquityRestClient::builder()
        .base_url(server.uri())
        .api_key("test_key")
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_get_account_cash() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "blocked": 0,
        "free": 1024.50,
        "invested": 8000.25,
        "pieCash": 12.00,
        "ppl": -53.17,
        "result": 110.40,
        "total": 9036.75
    });

    Mock::given(method("GET"))
        .and(path("/api/v0/equity/account/cash"))
        .and(header("Authorization", "test_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let cash = client.get_account_cash().await.unwrap();

    assert_eq!(cash.free, "1024.50".parse().unwrap());
    assert_eq!(cash.invested, "8000.25".parse().unwrap());
    assert_eq!(cash.blocked, Some("0".parse().unwrap()));
}

#[tokio::test]
async fn test_get_account_info() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "currencyCode": "EUR",
        "id": 20451
    });

    Mock::given(method("GET"))
        .and(path("/api/v0/equity/account/info"))
        .and(header("Authorization", "test_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let info = client.get_account_info().await.unwrap();

    assert_eq!(info.currency_code, "EUR");
    assert_eq!(info.id, 20451);
}

#[tokio::test]
async fn test_get_exchanges() {
    let server = MockServer::start().await;
    let response = serde_json::json!([{
        "id": 44,
        "name": "NASDAQ",
        "workingSchedules": [{
            "id": 53,
            "timeEvents": [
                { "date": "2024-01-15T14:30:00Z", "type": "OPEN" },
                { "date": "2024-01-15T21:00:00Z", "type": "CLOSE" }
            ]
        }]
    }]);

    Mock::given(method("GET"))
        .and(path("/api/v0/equity/metadata/exchanges"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let exchanges = client.get_exchanges().await.unwrap();

    assert_eq!(exchanges.len(), 1);
    assert_eq!(exchanges[0].name, "NASDAQ");
    let schedules = exchanges[0].working_schedules.as_ref().unwrap();
    assert_eq!(schedules[0].time_events.len(), 2);
    assert_eq!(schedules[0].time_events[0].event_type, "OPEN");
}

#[tokio::test]
async fn test_get_instruments() {
    let server = MockServer::start().await;
    let response = serde_json::json!([{
        "addedOn": "2018-06-21T19:59:51.000+03:00",
        "currencyCode": "USD",
        "isin": "US0378331005",
        "maxOpenQuantity": 26316,
        "minTradeQuantity": 0.01,
        "name": "Apple",
        "shortName": "AAPL",
        "ticker": "AAPL_US_EQ",
        "type": "STOCK",
        "workingScheduleId": 53
    }]);

    Mock::given(method("GET"))
        .and(path("/api/v0/equity/metadata/instruments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let instruments = client.get_instruments().await.unwrap();

    assert_eq!(instruments.len(), 1);
    assert_eq!(instruments[0].isin, "US0378331005");
    assert_eq!(instruments[0].instrument_type, "STOCK");
}

#[tokio::test]
async fn test_get_portfolio() {
    let server = MockServer::start().await;
    let response = serde_json::json!([{
        "averagePrice": 187.33,
        "currentPrice": 192.10,
        "frontend": "API",
        "fxPpl": -0.42,
        "initialFillDate": "2023-11-02T15:45:12.000+02:00",
        "maxBuy": 132.5,
        "maxSell": 2.5,
        "pieQuantity": 0,
        "ppl": 11.92,
        "quantity": 2.5,
        "ticker": "AAPL_US_EQ"
    }]);

    Mock::given(method("GET"))
        .and(path("/api/v0/equity/portfolio"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let portfolio = client.get_portfolio().await.unwrap();

    assert_eq!(portfolio.len(), 1);
    assert_eq!(portfolio[0].quantity, "2.5".parse().unwrap());
    assert_eq!(portfolio[0].frontend.as_deref(), Some("API"));
}

#[tokio::test]
async fn test_get_position_by_ticker() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "averagePrice": 402.12,
        "currentPrice": 410.88,
        "initialFillDate": "2024-01-04T10:01:00.000+02:00",
        "ppl": 8.76,
        "quantity": 1,
        "ticker": "MSFT_US_EQ"
    });

    Mock::given(method("GET"))
        .and(path("/api/v0/equity/portfolio/MSFT_US_EQ"))
        .and(header("Authorization", "test_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let position = client.get_position("MSFT_US_EQ").await.unwrap();

    assert_eq!(position.ticker, "MSFT_US_EQ");
    assert!(position.fx_ppl.is_none());
}
