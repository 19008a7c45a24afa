//! Types for instrument metadata endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;
use time::OffsetDateTime;

/// An exchange and its trading schedule.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exchange {
    /// Exchange identifier
    pub id: i64,
    /// Exchange name (e.g. "NASDAQ")
    pub name: String,
    /// Trading schedules attached to this exchange
    #[serde(default)]
    pub working_schedules: Option<Vec<WorkingSchedule>>,
}

/// A named trading schedule referenced by instruments.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingSchedule {
    /// Schedule identifier
    pub id: i64,
    /// Open/close events making up the schedule
    #[serde(default)]
    pub time_events: Vec<TimeEvent>,
}

/// A single market open or close event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEvent {
    /// When the event occurs
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    /// Event kind (e.g. "OPEN", "CLOSE", "PRE_MARKET_OPEN")
    #[serde(rename = "type")]
    pub event_type: String,
}

/// A tradeable instrument.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    /// When the instrument was added to the platform
    #[serde(with = "time::serde::rfc3339")]
    pub added_on: OffsetDateTime,
    /// ISO 4217 code of the instrument's trading currency
    pub currency_code: String,
    /// International Securities Identification Number
    pub isin: String,
    /// Maximum quantity that can be held in open positions
    pub max_open_quantity: Decimal,
    /// Smallest tradeable quantity
    #[serde(default)]
    pub min_trade_quantity: Option<Decimal>,
    /// Full instrument name
    pub name: String,
    /// Abbreviated name
    #[serde(default)]
    pub short_name: Option<String>,
    /// Trading212 ticker symbol (e.g. "AAPL_US_EQ")
    pub ticker: String,
    /// Instrument kind (e.g. "STOCK", "ETF")
    #[serde(rename = "type")]
    pub instrument_type: String,
    /// Working schedule identifier for trading hours
    pub working_schedule_id: i64,
}
