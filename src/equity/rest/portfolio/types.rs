//! Types for open position endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;
use time::OffsetDateTime;

/// An open position.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Average entry price
    pub average_price: Decimal,
    /// Latest market price
    pub current_price: Decimal,
    /// Origin of the position (e.g. "API", "IOS", "WEB")
    #[serde(default)]
    pub frontend: Option<String>,
    /// Profit/loss from currency conversion
    #[serde(default)]
    pub fx_ppl: Option<Decimal>,
    /// When the first fill of the position happened
    #[serde(with = "time::serde::rfc3339")]
    pub initial_fill_date: OffsetDateTime,
    /// Maximum quantity that can still be bought
    #[serde(default)]
    pub max_buy: Option<Decimal>,
    /// Maximum quantity that can be sold
    #[serde(default)]
    pub max_sell: Option<Decimal>,
    /// Quantity held through pies
    #[serde(default)]
    pub pie_quantity: Option<Decimal>,
    /// Unrealized profit/loss
    pub ppl: Decimal,
    /// Quantity held
    pub quantity: Decimal,
    /// Trading212 ticker symbol
    pub ticker: String,
}
