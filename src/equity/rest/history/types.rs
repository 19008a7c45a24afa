//! Types for historical data endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::types::{OrderStatus, OrderType, TimeValidity};

/// One page of a paginated history endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    /// Entries on this page
    pub items: Vec<T>,
    /// Server-relative path of the next page, absent on the last page
    #[serde(default)]
    pub next_page_path: Option<String>,
}

/// Query for the order and dividend history endpoints.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HistoryRequest {
    /// Pagination cursor, passed through verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<i64>,
    /// Maximum number of entries per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Restrict to a single ticker
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
}

impl HistoryRequest {
    /// Create an empty query (server defaults apply).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pagination cursor.
    pub fn cursor(mut self, cursor: i64) -> Self {
        self.cursor = Some(cursor);
        self
    }

    /// Set the page size.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Restrict to a single ticker.
    pub fn ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = Some(ticker.into());
        self
    }
}

/// Query for the transaction history endpoint.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransactionsRequest {
    /// Pagination cursor, passed through verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    /// Maximum number of entries per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl TransactionsRequest {
    /// Create an empty query (server defaults apply).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pagination cursor.
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Set the page size.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// An executed or cancelled order from the account history.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalOrder {
    /// When the order was created
    #[serde(with = "time::serde::rfc3339")]
    pub date_created: OffsetDateTime,
    /// When the order was executed
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date_executed: Option<OffsetDateTime>,
    /// When the order was last modified
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date_modified: Option<OffsetDateTime>,
    /// Who triggered the execution (e.g. "API", "AUTOINVEST")
    #[serde(default)]
    pub executor: Option<String>,
    /// Total cost of the fills
    #[serde(default)]
    pub fill_cost: Option<Decimal>,
    /// Fill identifier
    #[serde(default)]
    pub fill_id: Option<i64>,
    /// Average fill price
    #[serde(default)]
    pub fill_price: Option<Decimal>,
    /// Realized result of the fills
    #[serde(default)]
    pub fill_result: Option<Decimal>,
    /// Fill kind (e.g. "TOTV", "OTC")
    #[serde(default)]
    pub fill_type: Option<String>,
    /// Quantity executed
    #[serde(default)]
    pub filled_quantity: Option<Decimal>,
    /// Value executed
    #[serde(default)]
    pub filled_value: Option<Decimal>,
    /// Order identifier
    pub id: i64,
    /// Limit price, for limit and stop-limit orders
    #[serde(default)]
    pub limit_price: Option<Decimal>,
    /// Quantity ordered
    #[serde(default)]
    pub ordered_quantity: Option<Decimal>,
    /// Value ordered
    #[serde(default)]
    pub ordered_value: Option<Decimal>,
    /// Identifier of the parent order, for modified orders
    #[serde(default)]
    pub parent_order: Option<i64>,
    /// Terminal status of the order
    pub status: OrderStatus,
    /// Stop price, for stop and stop-limit orders
    #[serde(default)]
    pub stop_price: Option<Decimal>,
    /// Taxes charged on the fills
    #[serde(default)]
    pub taxes: Vec<Tax>,
    /// Trading212 ticker symbol
    pub ticker: String,
    /// How long the order stayed active
    #[serde(default)]
    pub time_validity: Option<TimeValidity>,
    /// Order kind
    #[serde(rename = "type")]
    pub order_type: OrderType,
}

/// A tax charged on an order fill.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tax {
    /// Fill the tax applies to
    #[serde(default)]
    pub fill_id: Option<String>,
    /// Tax name (e.g. "STAMP_DUTY", "FRENCH_TRANSACTION_TAX")
    pub name: String,
    /// Amount charged
    pub quantity: Decimal,
    /// When the tax was charged
    #[serde(with = "time::serde::rfc3339")]
    pub time_charged: OffsetDateTime,
}

/// A dividend paid out to the account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dividend {
    /// Net amount received, in the account currency
    pub amount: Decimal,
    /// Net amount in euro
    #[serde(default)]
    pub amount_in_euro: Option<Decimal>,
    /// Gross amount per share
    #[serde(default)]
    pub gross_amount_per_share: Option<Decimal>,
    /// When the dividend was paid
    #[serde(with = "time::serde::rfc3339")]
    pub paid_on: OffsetDateTime,
    /// Quantity held at the ex-dividend date
    pub quantity: Decimal,
    /// Payment reference
    #[serde(default)]
    pub reference: Option<String>,
    /// Trading212 ticker symbol
    pub ticker: String,
    /// Dividend kind (e.g. "ORDINARY")
    #[serde(default, rename = "type")]
    pub dividend_type: Option<String>,
}

/// A cash movement on the account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Signed amount in the account currency
    pub amount: Decimal,
    /// When the transaction happened
    #[serde(with = "time::serde::rfc3339")]
    pub date_time: OffsetDateTime,
    /// Transaction reference
    #[serde(default)]
    pub reference: Option<String>,
    /// Transaction kind (e.g. "DEPOSIT", "WITHDRAW", "FEE")
    #[serde(default, rename = "type")]
    pub transaction_type: Option<String>,
}

/// Which record types a CSV export covers.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDataIncluded {
    /// Include dividend records
    pub include_dividends: bool,
    /// Include interest records
    pub include_interest: bool,
    /// Include order records
    pub include_orders: bool,
    /// Include cash transaction records
    pub include_transactions: bool,
}

impl ExportDataIncluded {
    /// Include every record type.
    pub fn all() -> Self {
        Self {
            include_dividends: true,
            include_interest: true,
            include_orders: true,
            include_transactions: true,
        }
    }
}

/// A requested CSV export.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Export {
    /// Record types the export covers
    pub data_included: ExportDataIncluded,
    /// Download link, present once the export is finished
    #[serde(default)]
    pub download_link: Option<String>,
    /// Export identifier
    pub report_id: i64,
    /// Export status (e.g. "Queued", "Processing", "Finished")
    #[serde(default)]
    pub status: Option<String>,
    /// Start of the covered period
    #[serde(with = "time::serde::rfc3339")]
    pub time_from: OffsetDateTime,
    /// End of the covered period
    #[serde(with = "time::serde::rfc3339")]
    pub time_to: OffsetDateTime,
}

/// Request for a CSV export of account history.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    /// Record types to include
    pub data_included: ExportDataIncluded,
    /// Start of the period to export
    #[serde(with = "time::serde::rfc3339")]
    pub time_from: OffsetDateTime,
    /// End of the period to export
    #[serde(with = "time::serde::rfc3339")]
    pub time_to: OffsetDateTime,
}

impl ExportRequest {
    /// Create a new export request for the given period.
    pub fn new(
        data_included: ExportDataIncluded,
        time_from: OffsetDateTime,
        time_to: OffsetDateTime,
    ) -> Self {
        Self {
            data_included,
            time_from,
            time_to,
        }
    }
}

/// Confirmation of a requested export.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportReport {
    /// Identifier to look for in the export listing
    pub report_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_response_deserialization() {
        let json = r#"{
            "items": [{
                "amount": 0.23,
                "amountInEuro": 0.21,
                "grossAmountPerShare": 0.24,
                "paidOn": "2024-01-10T07:30:00.000+02:00",
                "quantity": 1.0,
                "reference": "ref-1",
                "ticker": "AAPL_US_EQ",
                "type": "ORDINARY"
            }],
            "nextPagePath": "/api/v0/history/dividends?cursor=123&limit=20"
        }"#;
        let page: PageResponse<Dividend> = serde_json::from_str(json).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].ticker, "AAPL_US_EQ");
        assert!(page.next_page_path.is_some());
    }

    #[test]
    fn test_page_response_last_page() {
        let json = r#"{"items": []}"#;
        let page: PageResponse<Transaction> = serde_json::from_str(json).unwrap();
        assert!(page.items.is_empty());
        assert!(page.next_page_path.is_none());
    }

    #[test]
    fn test_history_request_query_encoding() {
        let request = HistoryRequest::new().cursor(0).ticker("MSFT_US_EQ").limit(50);
        let query = serde_urlencoded::to_string(&request).unwrap();
        assert_eq!(query, "cursor=0&limit=50&ticker=MSFT_US_EQ");
    }

    #[test]
    fn test_history_request_empty_query() {
        let query = serde_urlencoded::to_string(HistoryRequest::new()).unwrap();
        assert!(query.is_empty());
    }

    #[test]
    fn test_export_request_serialization() {
        let request = ExportRequest::new(
            ExportDataIncluded::all(),
            time::macros::datetime!(2024-01-01 00:00:00 UTC),
            time::macros::datetime!(2024-02-01 00:00:00 UTC),
        );
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["dataIncluded"]["includeOrders"], true);
        assert_eq!(json["timeFrom"], "2024-01-01T00:00:00Z");
    }
}
