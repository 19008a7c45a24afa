//! Pending order endpoints.
//!
//! Order placement is only available to API keys with the trading scope;
//! keys without it receive a 403 response.

mod types;

pub use types::*;

use crate::equity::rest::EquityRestClient;
use crate::equity::rest::endpoints::orders;
use crate::error::Trading212Error;

impl EquityRestClient {
    /// List all pending equity orders.
    pub async fn get_orders(&self) -> Result<Vec<Order>, Trading212Error> {
        self.get(orders::ORDERS).await
    }

    /// Get a single pending order by its identifier.
    pub async fn get_order(&self, id: i64) -> Result<Order, Trading212Error> {
        self.get(&orders::order(id)).await
    }

    /// Cancel a pending order.
    pub async fn cancel_order(&self, id: i64) -> Result<(), Trading212Error> {
        self.delete(&orders::order(id)).await
    }

    /// Place a limit order.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use trading212_api_client::equity::rest::EquityRestClient;
    /// use trading212_api_client::equity::rest::orders::LimitOrderRequest;
    /// use trading212_api_client::types::{Environment, TimeValidity};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = EquityRestClient::new("api_key", Environment::Demo)?;
    ///     let request = LimitOrderRequest::new(
    ///         "AAPL_US_EQ",
    ///         "0.5".parse()?,
    ///         "150.00".parse()?,
    ///         TimeValidity::Day,
    ///     );
    ///     let order = client.place_limit_order(&request).await?;
    ///     println!("Placed order {}", order.id);
    ///     Ok(())
    /// }
    /// ```
    pub async fn place_limit_order(
        &self,
        request: &LimitOrderRequest,
    ) -> Result<Order, Trading212Error> {
        self.post(orders::LIMIT, request).await
    }

    /// Place a market order.
    pub async fn place_market_order(
        &self,
        request: &MarketOrderRequest,
    ) -> Result<Order, Trading212Error> {
        self.post(orders::MARKET, request).await
    }

    /// Place a stop order.
    pub async fn place_stop_order(
        &self,
        request: &StopOrderRequest,
    ) -> Result<Order, Trading212Error> {
        self.post(orders::STOP, request).await
    }

    /// Place a stop-limit order.
    pub async fn place_stop_limit_order(
        &self,
        request: &StopLimitOrderRequest,
    ) -> Result<Order, Trading212Error> {
        self.post(orders::STOP_LIMIT, request).await
    }
}
