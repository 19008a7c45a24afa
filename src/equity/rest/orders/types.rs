//! Types for pending order endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::types::{OrderStatus, OrderType, TimeValidity};

/// A pending equity order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// When the order was created
    #[serde(with = "time::serde::rfc3339")]
    pub creation_time: OffsetDateTime,
    /// Quantity executed so far
    #[serde(default)]
    pub filled_quantity: Option<Decimal>,
    /// Value executed so far
    #[serde(default)]
    pub filled_value: Option<Decimal>,
    /// Order identifier
    pub id: i64,
    /// Limit price, for limit and stop-limit orders
    #[serde(default)]
    pub limit_price: Option<Decimal>,
    /// Ordered quantity, for quantity-based orders
    #[serde(default)]
    pub quantity: Option<Decimal>,
    /// Current order status
    pub status: OrderStatus,
    /// Stop price, for stop and stop-limit orders
    #[serde(default)]
    pub stop_price: Option<Decimal>,
    /// Execution strategy (e.g. "QUANTITY", "VALUE")
    #[serde(default)]
    pub strategy: Option<String>,
    /// Trading212 ticker symbol
    pub ticker: String,
    /// Order kind
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// How long the order stays active
    #[serde(default)]
    pub time_validity: Option<TimeValidity>,
    /// Ordered value, for value-based orders
    #[serde(default)]
    pub value: Option<Decimal>,
}

/// Request to place a limit order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitOrderRequest {
    /// Limit price
    pub limit_price: Decimal,
    /// Quantity to buy (positive) or sell (negative)
    pub quantity: Decimal,
    /// Trading212 ticker symbol
    pub ticker: String,
    /// How long the order stays active
    pub time_validity: TimeValidity,
}

impl LimitOrderRequest {
    /// Create a new limit order request.
    pub fn new(
        ticker: impl Into<String>,
        quantity: Decimal,
        limit_price: Decimal,
        time_validity: TimeValidity,
    ) -> Self {
        Self {
            limit_price,
            quantity,
            ticker: ticker.into(),
            time_validity,
        }
    }
}

/// Request to place a market order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOrderRequest {
    /// Quantity to buy (positive) or sell (negative)
    pub quantity: Decimal,
    /// Trading212 ticker symbol
    pub ticker: String,
}

impl MarketOrderRequest {
    /// Create a new market order request.
    pub fn new(ticker: impl Into<String>, quantity: Decimal) -> Self {
        Self {
            quantity,
            ticker: ticker.into(),
        }
    }
}

/// Request to place a stop order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StopOrderRequest {
    /// Quantity to buy (positive) or sell (negative)
    pub quantity: Decimal,
    /// Stop price that triggers the order
    pub stop_price: Decimal,
    /// Trading212 ticker symbol
    pub ticker: String,
    /// How long the order stays active
    pub time_validity: TimeValidity,
}

impl StopOrderRequest {
    /// Create a new stop order request.
    pub fn new(
        ticker: impl Into<String>,
        quantity: Decimal,
        stop_price: Decimal,
        time_validity: TimeValidity,
    ) -> Self {
        Self {
            quantity,
            stop_price,
            ticker: ticker.into(),
            time_validity,
        }
    }
}

/// Request to place a stop-limit order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StopLimitOrderRequest {
    /// Limit price of the triggered order
    pub limit_price: Decimal,
    /// Quantity to buy (positive) or sell (negative)
    pub quantity: Decimal,
    /// Stop price that triggers the order
    pub stop_price: Decimal,
    /// Trading212 ticker symbol
    pub ticker: String,
    /// How long the order stays active
    pub time_validity: TimeValidity,
}

impl StopLimitOrderRequest {
    /// Create a new stop-limit order request.
    pub fn new(
        ticker: impl Into<String>,
        quantity: Decimal,
        stop_price: Decimal,
        limit_price: Decimal,
        time_validity: TimeValidity,
    ) -> Self {
        Self {
            limit_price,
            quantity,
            stop_price,
            ticker: ticker.into(),
            time_validity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_order_request_serialization() {
        let request = LimitOrderRequest::new(
            "AAPL_US_EQ",
            Decimal::new(5, 1),
            Decimal::new(15000, 2),
            TimeValidity::Day,
        );
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["ticker"], "AAPL_US_EQ");
        assert_eq!(json["timeValidity"], "DAY");
        assert!(json.get("limitPrice").is_some());
        assert!(json.get("stopPrice").is_none());
    }

    #[test]
    fn test_order_deserialization() {
        let json = r#"{
            "creationTime": "2024-01-09T14:30:00.000+02:00",
            "filledQuantity": 0,
            "filledValue": null,
            "id": 12345,
            "limitPrice": 150.00,
            "quantity": 0.5,
            "status": "NEW",
            "stopPrice": null,
            "strategy": "QUANTITY",
            "ticker": "AAPL_US_EQ",
            "type": "LIMIT",
            "value": null
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, 12345);
        assert_eq!(order.order_type, OrderType::Limit);
        assert_eq!(order.status, OrderStatus::New);
        assert!(order.stop_price.is_none());
    }
}
