//! Trait definition for the Trading212 REST API client.
//!
//! This module provides the `Trading212Client` trait which abstracts all REST
//! API operations. This enables:
//! - Mock implementations for testing
//! - Decorator pattern (e.g., instrumentation wrapper)
//! - Alternative implementations
//!
//! # Example
//!
//! ```rust,ignore
//! use trading212_api_client::equity::rest::{EquityRestClient, Trading212Client};
//!
//! async fn check_cash<C: Trading212Client>(client: &C) -> Result<(), trading212_api_client::Trading212Error> {
//!     let cash = client.get_account_cash().await?;
//!     println!("Free cash: {}", cash.free);
//!     Ok(())
//! }
//! ```

use std::future::Future;

use crate::equity::rest::EquityRestClient;
use crate::equity::rest::account::{AccountCash, AccountInfo};
use crate::equity::rest::history::{
    Dividend, Export, ExportReport, ExportRequest, HistoricalOrder, HistoryRequest, PageResponse,
    Transaction, TransactionsRequest,
};
use crate::equity::rest::metadata::{Exchange, Instrument};
use crate::equity::rest::orders::{
    LimitOrderRequest, MarketOrderRequest, Order, StopLimitOrderRequest, StopOrderRequest,
};
use crate::equity::rest::pies::{Pie, PieRequest, PieSummary};
use crate::equity::rest::portfolio::Position;
use crate::error::Trading212Error;

/// Trait defining all Trading212 REST API operations.
///
/// All methods are async and return `Result<T, Trading212Error>`.
pub trait Trading212Client: Send + Sync {
    // ========== Account ==========

    /// Get the account cash balance.
    fn get_account_cash(&self)
    -> impl Future<Output = Result<AccountCash, Trading212Error>> + Send;

    /// Get account metadata.
    fn get_account_info(&self)
    -> impl Future<Output = Result<AccountInfo, Trading212Error>> + Send;

    // ========== Metadata ==========

    /// List the exchanges available on the platform.
    fn get_exchanges(&self) -> impl Future<Output = Result<Vec<Exchange>, Trading212Error>> + Send;

    /// List all tradeable instruments.
    fn get_instruments(
        &self,
    ) -> impl Future<Output = Result<Vec<Instrument>, Trading212Error>> + Send;

    // ========== Portfolio ==========

    /// List all open positions.
    fn get_portfolio(&self) -> impl Future<Output = Result<Vec<Position>, Trading212Error>> + Send;

    /// Get the open position for a single ticker.
    fn get_position(
        &self,
        ticker: &str,
    ) -> impl Future<Output = Result<Position, Trading212Error>> + Send;

    // ========== Orders ==========

    /// List all pending equity orders.
    fn get_orders(&self) -> impl Future<Output = Result<Vec<Order>, Trading212Error>> + Send;

    /// Get a single pending order by its identifier.
    fn get_order(&self, id: i64) -> impl Future<Output = Result<Order, Trading212Error>> + Send;

    /// Cancel a pending order.
    fn cancel_order(&self, id: i64) -> impl Future<Output = Result<(), Trading212Error>> + Send;

    /// Place a limit order.
    fn place_limit_order(
        &self,
        request: &LimitOrderRequest,
    ) -> impl Future<Output = Result<Order, Trading212Error>> + Send;

    /// Place a market order.
    fn place_market_order(
        &self,
        request: &MarketOrderRequest,
    ) -> impl Future<Output = Result<Order, Trading212Error>> + Send;

    /// Place a stop order.
    fn place_stop_order(
        &self,
        request: &StopOrderRequest,
    ) -> impl Future<Output = Result<Order, Trading212Error>> + Send;

    /// Place a stop-limit order.
    fn place_stop_limit_order(
        &self,
        request: &StopLimitOrderRequest,
    ) -> impl Future<Output = Result<Order, Trading212Error>> + Send;

    // ========== Pies ==========

    /// List all pies in the account.
    fn get_pies(&self) -> impl Future<Output = Result<Vec<PieSummary>, Trading212Error>> + Send;

    /// Create a new pie.
    fn create_pie(
        &self,
        request: &PieRequest,
    ) -> impl Future<Output = Result<Pie, Trading212Error>> + Send;

    /// Get a single pie with its holdings and settings.
    fn get_pie(&self, id: i64) -> impl Future<Output = Result<Pie, Trading212Error>> + Send;

    /// Update an existing pie.
    fn update_pie(
        &self,
        id: i64,
        request: &PieRequest,
    ) -> impl Future<Output = Result<Pie, Trading212Error>> + Send;

    /// Delete a pie.
    fn delete_pie(&self, id: i64) -> impl Future<Output = Result<(), Trading212Error>> + Send;

    // ========== History ==========

    /// Get one page of historical order data.
    fn get_order_history(
        &self,
        request: Option<&HistoryRequest>,
    ) -> impl Future<Output = Result<PageResponse<HistoricalOrder>, Trading212Error>> + Send;

    /// Get one page of dividends paid out to the account.
    fn get_dividends(
        &self,
        request: Option<&HistoryRequest>,
    ) -> impl Future<Output = Result<PageResponse<Dividend>, Trading212Error>> + Send;

    /// Get one page of account transactions.
    fn get_transactions(
        &self,
        request: Option<&TransactionsRequest>,
    ) -> impl Future<Output = Result<PageResponse<Transaction>, Trading212Error>> + Send;

    /// List the CSV exports requested on this account.
    fn get_exports(&self) -> impl Future<Output = Result<Vec<Export>, Trading212Error>> + Send;

    /// Request a CSV export of account history.
    fn request_export(
        &self,
        request: &ExportRequest,
    ) -> impl Future<Output = Result<ExportReport, Trading212Error>> + Send;
}

// Trading212Client trait implementation.

impl Trading212Client for EquityRestClient {
    // ========== Account ==========

    async fn get_account_cash(&self) -> Result<AccountCash, Trading212Error> {
        EquityRestClient::get_account_cash(self).await
    }

    async fn get_account_info(&self) -> Result<AccountInfo, Trading212Error> {
        EquityRestClient::get_account_info(self).await
    }

    // ========== Metadata ==========

    async fn get_exchanges(&self) -> Result<Vec<Exchange>, Trading212Error> {
        EquityRestClient::get_exchanges(self).await
    }

    async fn get_instruments(&self) -> Result<Vec<Instrument>, Trading212Error> {
        EquityRestClient::get_instruments(self).await
    }

    // ========== Portfolio ==========

    async fn get_portfolio(&self) -> Result<Vec<Position>, Trading212Error> {
        EquityRestClient::get_portfolio(self).await
    }

    async fn get_position(&self, ticker: &str) -> Result<Position, Trading212Error> {
        EquityRestClient::get_position(self, ticker).await
    }

    // ========== Orders ==========

    async fn get_orders(&self) -> Result<Vec<Order>, Trading212Error> {
        EquityRestClient::get_orders(self).await
    }

    async fn get_order(&self, id: i64) -> Result<Order, Trading212Error> {
        EquityRestClient::get_order(self, id).await
    }

    async fn cancel_order(&self, id: i64) -> Result<(), Trading212Error> {
        EquityRestClient::cancel_order(self, id).await
    }

    async fn place_limit_order(&self, request: &LimitOrderRequest) -> Result<Order, Trading212Error> {
        EquityRestClient::place_limit_order(self, request).await
    }

    async fn place_market_order(
        &self,
        request: &MarketOrderRequest,
    ) -> Result<Order, Trading212Error> {
        EquityRestClient::place_market_order(self, request).await
    }

    async fn place_stop_order(&self, request: &StopOrderRequest) -> Result<Order, Trading212Error> {
        EquityRestClient::place_stop_order(self, request).await
    }

    async fn place_stop_limit_order(
        &self,
        request: &StopLimitOrderRequest,
    ) -> Result<Order, Trading212Error> {
        EquityRestClient::place_stop_limit_order(self, request).await
    }

    // ========== Pies ==========

    async fn get_pies(&self) -> Result<Vec<PieSummary>, Trading212Error> {
        EquityRestClient::get_pies(self).await
    }

    async fn create_pie(&self, request: &PieRequest) -> Result<Pie, Trading212Error> {
        EquityRestClient::create_pie(self, request).await
    }

    async fn get_pie(&self, id: i64) -> Result<Pie, Trading212Error> {
        EquityRestClient::get_pie(self, id).await
    }

    async fn update_pie(&self, id: i64, request: &PieRequest) -> Result<Pie, Trading212Error> {
        EquityRestClient::update_pie(self, id, request).await
    }

    async fn delete_pie(&self, id: i64) -> Result<(), Trading212Error> {
        EquityRestClient::delete_pie(self, id).await
    }

    // ========== History ==========

    async fn get_order_history(
        &self,
        request: Option<&HistoryRequest>,
    ) -> Result<PageResponse<HistoricalOrder>, Trading212Error> {
        EquityRestClient::get_order_history(self, request).await
    }

    async fn get_dividends(
        &self,
        request: Option<&HistoryRequest>,
    ) -> Result<PageResponse<Dividend>, Trading212Error> {
        EquityRestClient::get_dividends(self, request).await
    }

    async fn get_transactions(
        &self,
        request: Option<&TransactionsRequest>,
    ) -> Result<PageResponse<Transaction>, Trading212Error> {
        EquityRestClient::get_transactions(self, request).await
    }

    async fn get_exports(&self) -> Result<Vec<Export>, Trading212Error> {
        EquityRestClient::get_exports(self).await
    }

    async fn request_export(&self, request: &ExportRequest) -> Result<ExportReport, Trading212Error> {
        EquityRestClient::request_export(self, request).await
    }
}
