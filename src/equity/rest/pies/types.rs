//! Types for pie endpoints.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{TimestampSecondsWithFrac, serde_as};
use time::OffsetDateTime;

use crate::types::DividendCashAction;

/// Summary of a pie, as returned by the pie listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSummary {
    /// Cash balance held inside the pie
    pub cash: Decimal,
    /// Dividends received by the pie
    pub dividend_details: DividendDetails,
    /// Pie identifier
    pub id: i64,
    /// Progress towards the goal, as a fraction
    #[serde(default)]
    pub progress: Option<f64>,
    /// Aggregate performance of the pie
    #[serde(default)]
    pub result: Option<InvestmentResult>,
    /// Pie status (e.g. "AHEAD", "BEHIND")
    #[serde(default)]
    pub status: Option<String>,
}

/// Dividends received by a pie, split by what happened to them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividendDetails {
    /// Total dividends gained
    pub gained: Decimal,
    /// Amount kept as cash
    pub in_cash: Decimal,
    /// Amount reinvested
    pub reinvested: Decimal,
}

/// Performance of a pie or of a single holding.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentResult {
    /// Invested value at average price
    pub price_avg_invested_value: Decimal,
    /// Profit/loss against the average price
    pub price_avg_result: Decimal,
    /// Profit/loss as a coefficient of the invested value
    pub price_avg_result_coef: Decimal,
    /// Current value at average price
    pub price_avg_value: Decimal,
}

/// A pie with its current holdings and settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pie {
    /// Instruments currently held by the pie
    pub instruments: Vec<PieInstrument>,
    /// Pie configuration
    pub settings: PieSettings,
}

/// A single holding inside a pie.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieInstrument {
    /// Actual share of the pie's value, as a fraction
    pub current_share: f64,
    /// Target share of the pie's value, as a fraction
    pub expected_share: f64,
    /// Known issues for this instrument (trading halts, delistings)
    #[serde(default)]
    pub issues: Vec<InstrumentIssue>,
    /// Quantity owned through this pie
    pub owned_quantity: Decimal,
    /// Performance of this holding
    #[serde(default)]
    pub result: Option<InvestmentResult>,
    /// Trading212 ticker symbol
    pub ticker: String,
}

/// An issue flagged on a pie holding.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentIssue {
    /// Issue name (e.g. "DELISTED")
    pub name: String,
    /// Issue severity (e.g. "IRREVERSIBLE")
    pub severity: String,
}

/// Pie configuration and user settings.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSettings {
    /// When the pie was created (fractional unix timestamp on the wire)
    #[serde_as(as = "TimestampSecondsWithFrac<f64>")]
    pub creation_date: OffsetDateTime,
    /// What the pie does with dividends
    pub dividend_cash_action: DividendCashAction,
    /// Target end date for the goal
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub end_date: Option<OffsetDateTime>,
    /// Target amount in the account currency
    #[serde(default)]
    pub goal: Option<Decimal>,
    /// Icon shown in the UI
    #[serde(default)]
    pub icon: Option<String>,
    /// Pie identifier
    pub id: i64,
    /// Initial investment when the pie was created
    #[serde(default)]
    pub initial_investment: Option<Decimal>,
    /// Target weights keyed by ticker; absent in detailed responses
    #[serde(default)]
    pub instrument_shares: Option<HashMap<String, Decimal>>,
    /// User-defined pie name
    pub name: String,
    /// Sharing URL when the pie is public
    #[serde(default)]
    pub public_url: Option<String>,
}

/// Request to create or update a pie.
///
/// The same payload shape serves both operations; an update fully replaces
/// the pie's settings and target weights.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieRequest {
    /// What the pie does with dividends
    pub dividend_cash_action: DividendCashAction,
    /// Target end date for the goal
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<OffsetDateTime>,
    /// Target amount in the account currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<Decimal>,
    /// Icon shown in the UI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Target weights keyed by ticker; weights must sum to 1
    pub instrument_shares: HashMap<String, Decimal>,
    /// User-defined pie name
    pub name: String,
}

impl PieRequest {
    /// Create a new pie request with the given name and target weights.
    pub fn new(name: impl Into<String>, instrument_shares: HashMap<String, Decimal>) -> Self {
        Self {
            dividend_cash_action: DividendCashAction::default(),
            end_date: None,
            goal: None,
            icon: None,
            instrument_shares,
            name: name.into(),
        }
    }

    /// Set the dividend handling preference.
    pub fn dividend_cash_action(mut self, action: DividendCashAction) -> Self {
        self.dividend_cash_action = action;
        self
    }

    /// Set the target end date.
    pub fn end_date(mut self, end_date: OffsetDateTime) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Set the target amount.
    pub fn goal(mut self, goal: Decimal) -> Self {
        self.goal = Some(goal);
        self
    }

    /// Set the icon.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pie_settings_deserialization() {
        let json = r#"{
            "creationDate": 1674654235.122,
            "dividendCashAction": "REINVEST",
            "endDate": "2026-12-31T00:00:00.000Z",
            "goal": 5000,
            "icon": "Coins",
            "id": 1842,
            "initialInvestment": 1000,
            "instrumentShares": {"AAPL_US_EQ": 0.6, "MSFT_US_EQ": 0.4},
            "name": "Tech",
            "publicUrl": null
        }"#;
        let settings: PieSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.id, 1842);
        assert_eq!(settings.creation_date.year(), 2023);
        assert_eq!(settings.dividend_cash_action, DividendCashAction::Reinvest);
        let shares = settings.instrument_shares.unwrap();
        assert_eq!(shares.len(), 2);
    }

    #[test]
    fn test_pie_request_serialization() {
        let shares = HashMap::from([("AAPL_US_EQ".to_string(), Decimal::new(1, 0))]);
        let request = PieRequest::new("Single", shares).goal(Decimal::new(1000, 0));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["name"], "Single");
        assert_eq!(json["dividendCashAction"], "REINVEST");
        assert!(json.get("endDate").is_none());
        assert!(json.get("icon").is_none());
        assert!(json.get("goal").is_some());
    }
}
