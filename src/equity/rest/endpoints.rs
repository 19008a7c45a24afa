//! Trading212 REST API endpoint constants.
//!
//! All endpoints live under the `/api/v0` prefix on either the live or demo
//! host (see [`Environment`](crate::types::Environment)).

/// Base URL for the live (real money) environment.
pub const LIVE_BASE_URL: &str = "https://live.trading212.com";

/// Base URL for the demo (practice) environment.
pub const DEMO_BASE_URL: &str = "https://demo.trading212.com";

/// Account data endpoints.
pub mod account {
    /// Get the account cash balance.
    pub const CASH: &str = "/api/v0/equity/account/cash";
    /// Get account metadata.
    pub const INFO: &str = "/api/v0/equity/account/info";
}

/// Instrument metadata endpoints.
pub mod metadata {
    /// List the exchanges and their working schedules.
    pub const EXCHANGES: &str = "/api/v0/equity/metadata/exchanges";
    /// List the tradeable instruments.
    pub const INSTRUMENTS: &str = "/api/v0/equity/metadata/instruments";
}

/// Open position endpoints.
pub mod portfolio {
    /// List all open positions.
    pub const PORTFOLIO: &str = "/api/v0/equity/portfolio";

    /// Get the open position for a single ticker.
    pub fn position(ticker: &str) -> String {
        format!("{PORTFOLIO}/{ticker}")
    }
}

/// Pending order endpoints.
pub mod orders {
    /// List all pending orders.
    pub const ORDERS: &str = "/api/v0/equity/orders";
    /// Place a limit order.
    pub const LIMIT: &str = "/api/v0/equity/orders/limit";
    /// Place a market order.
    pub const MARKET: &str = "/api/v0/equity/orders/market";
    /// Place a stop order.
    pub const STOP: &str = "/api/v0/equity/orders/stop";
    /// Place a stop-limit order.
    pub const STOP_LIMIT: &str = "/api/v0/equity/orders/stop_limit";

    /// Get or cancel a single pending order.
    pub fn order(id: i64) -> String {
        format!("{ORDERS}/{id}")
    }
}

/// Pie endpoints.
pub mod pies {
    /// List or create pies.
    pub const PIES: &str = "/api/v0/equity/pies";

    /// Fetch, update or delete a single pie.
    pub fn pie(id: i64) -> String {
        format!("{PIES}/{id}")
    }
}

/// Historical data endpoints.
pub mod history {
    /// Paginated order history.
    pub const ORDERS: &str = "/api/v0/equity/history/orders";
    /// Paginated dividend history.
    pub const DIVIDENDS: &str = "/api/v0/history/dividends";
    /// Paginated transaction history.
    pub const TRANSACTIONS: &str = "/api/v0/history/transactions";
    /// List or request CSV exports.
    pub const EXPORTS: &str = "/api/v0/history/exports";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameterized_paths() {
        assert_eq!(orders::order(42), "/api/v0/equity/orders/42");
        assert_eq!(pies::pie(7), "/api/v0/equity/pies/7");
        assert_eq!(
            portfolio::position("AAPL_US_EQ"),
            "/api/v0/equity/portfolio/AAPL_US_EQ"
        );
    }
}
