//! Open position endpoints.

mod types;

pub use types::*;

use crate::equity::rest::EquityRestClient;
use crate::equity::rest::endpoints::portfolio;
use crate::error::Trading212Error;

impl EquityRestClient {
    /// List all open positions.
    pub async fn get_portfolio(&self) -> Result<Vec<Position>, Trading212Error> {
        self.get(portfolio::PORTFOLIO).await
    }

    /// Get the open position for a single ticker.
    ///
    /// Returns a 404 [`ApiError`](crate::error::ApiError) when there is no
    /// open position for the ticker.
    pub async fn get_position(&self, ticker: &str) -> Result<Position, Trading212Error> {
        self.get(&portfolio::position(ticker)).await
    }
}
