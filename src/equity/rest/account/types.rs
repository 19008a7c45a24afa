//! Types for account data endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Account cash breakdown.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountCash {
    /// Cash blocked by pending orders
    #[serde(default)]
    pub blocked: Option<Decimal>,
    /// Cash available for trading
    pub free: Decimal,
    /// Value currently invested
    pub invested: Decimal,
    /// Cash held inside pies
    pub pie_cash: Decimal,
    /// Unrealized profit/loss
    pub ppl: Decimal,
    /// Realized result
    pub result: Decimal,
    /// Total account value
    pub total: Decimal,
}

/// Account metadata.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    /// ISO 4217 code of the account base currency
    pub currency_code: String,
    /// Account identifier
    pub id: i64,
}
