//! Common domain types for the Trading212 API.

use serde::{Deserialize, Serialize};

/// Trading212 API environment.
///
/// The live and demo (practice) environments use distinct hosts and distinct
/// API key scopes: a demo key is not valid against the live host and vice
/// versa.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    /// Real-money environment (default)
    #[default]
    Live,
    /// Practice environment
    Demo,
}

impl Environment {
    /// The base URL of this environment.
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Live => "https://live.trading212.com",
            Environment::Demo => "https://demo.trading212.com",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Live => write!(f, "live"),
            Environment::Demo => write!(f, "demo"),
        }
    }
}

/// How long a pending order stays active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeValidity {
    /// Valid until the end of the trading day
    #[serde(rename = "DAY")]
    Day,
    /// Valid until explicitly cancelled (default)
    #[default]
    #[serde(rename = "GTC")]
    GoodTillCancel,
}

impl std::fmt::Display for TimeValidity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeValidity::Day => write!(f, "DAY"),
            TimeValidity::GoodTillCancel => write!(f, "GTC"),
        }
    }
}

/// Order type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Execute immediately at the best available price
    Market,
    /// Execute at the limit price or better
    Limit,
    /// Trigger a market order when the price reaches the stop price
    Stop,
    /// Trigger a limit order when the price reaches the stop price
    StopLimit,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderType::Market => "MARKET",
            OrderType::Limit => "LIMIT",
            OrderType::Stop => "STOP",
            OrderType::StopLimit => "STOP_LIMIT",
        };
        write!(f, "{}", s)
    }
}

/// Status of an equity order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Created locally, not yet submitted to the exchange
    Local,
    /// Submitted, awaiting confirmation
    Unconfirmed,
    /// Confirmed by the exchange
    Confirmed,
    /// Active on the exchange
    New,
    /// Cancellation requested
    Cancelling,
    /// Cancelled
    Cancelled,
    /// Partially executed
    PartiallyFilled,
    /// Fully executed
    Filled,
    /// Rejected by the exchange
    Rejected,
    /// Replacement requested
    Replacing,
    /// Replaced by another order
    Replaced,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderStatus::Local => "LOCAL",
            OrderStatus::Unconfirmed => "UNCONFIRMED",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::New => "NEW",
            OrderStatus::Cancelling => "CANCELLING",
            OrderStatus::Cancelled => "CANCELLED",
            OrderStatus::PartiallyFilled => "PARTIALLY_FILLED",
            OrderStatus::Filled => "FILLED",
            OrderStatus::Rejected => "REJECTED",
            OrderStatus::Replacing => "REPLACING",
            OrderStatus::Replaced => "REPLACED",
        };
        write!(f, "{}", s)
    }
}

/// What a pie does with dividends it receives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DividendCashAction {
    /// Buy more of the pie's holdings (default)
    #[default]
    Reinvest,
    /// Move the cash to the account balance
    ToAccountCash,
}

impl std::fmt::Display for DividendCashAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DividendCashAction::Reinvest => write!(f, "REINVEST"),
            DividendCashAction::ToAccountCash => write!(f, "TO_ACCOUNT_CASH"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_base_urls() {
        assert_eq!(Environment::Live.base_url(), "https://live.trading212.com");
        assert_eq!(Environment::Demo.base_url(), "https://demo.trading212.com");
        assert_eq!(Environment::default(), Environment::Live);
    }

    #[test]
    fn test_time_validity_serialization() {
        assert_eq!(
            serde_json::to_string(&TimeValidity::Day).unwrap(),
            r#""DAY""#
        );
        assert_eq!(
            serde_json::to_string(&TimeValidity::GoodTillCancel).unwrap(),
            r#""GTC""#
        );
    }

    #[test]
    fn test_order_type_serialization() {
        assert_eq!(
            serde_json::to_string(&OrderType::StopLimit).unwrap(),
            r#""STOP_LIMIT""#
        );
        let parsed: OrderType = serde_json::from_str(r#""MARKET""#).unwrap();
        assert_eq!(parsed, OrderType::Market);
    }

    #[test]
    fn test_order_status_deserialization() {
        let parsed: OrderStatus = serde_json::from_str(r#""PARTIALLY_FILLED""#).unwrap();
        assert_eq!(parsed, OrderStatus::PartiallyFilled);
        assert_eq!(parsed.to_string(), "PARTIALLY_FILLED");
    }

    #[test]
    fn test_dividend_cash_action_serialization() {
        assert_eq!(
            serde_json::to_string(&DividendCashAction::ToAccountCash).unwrap(),
            r#""TO_ACCOUNT_CASH""#
        );
    }
}
