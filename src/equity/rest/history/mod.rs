//! Historical data endpoints.
//!
//! The order, dividend and transaction histories are paginated: each call
//! returns one page together with the `nextPagePath` the server supplied.
//! The client does not follow cursors on its own; callers pass them through
//! in the next request.

mod types;

pub use types::*;

use crate::equity::rest::EquityRestClient;
use crate::equity::rest::endpoints::history;
use crate::error::Trading212Error;

impl EquityRestClient {
    /// Get one page of historical order data.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use trading212_api_client::equity::rest::EquityRestClient;
    /// use trading212_api_client::equity::rest::history::HistoryRequest;
    /// use trading212_api_client::types::Environment;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = EquityRestClient::new("api_key", Environment::Demo)?;
    ///     let request = HistoryRequest::new().ticker("AAPL_US_EQ").limit(20);
    ///     let page = client.get_order_history(Some(&request)).await?;
    ///     println!("{} orders, next page: {:?}", page.items.len(), page.next_page_path);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_order_history(
        &self,
        request: Option<&HistoryRequest>,
    ) -> Result<PageResponse<HistoricalOrder>, Trading212Error> {
        match request {
            Some(req) => self.get_with_params(history::ORDERS, req).await,
            None => self.get(history::ORDERS).await,
        }
    }

    /// Get one page of dividends paid out to the account.
    pub async fn get_dividends(
        &self,
        request: Option<&HistoryRequest>,
    ) -> Result<PageResponse<Dividend>, Trading212Error> {
        match request {
            Some(req) => self.get_with_params(history::DIVIDENDS, req).await,
            None => self.get(history::DIVIDENDS).await,
        }
    }

    /// Get one page of account transactions (deposits, withdrawals, fees).
    pub async fn get_transactions(
        &self,
        request: Option<&TransactionsRequest>,
    ) -> Result<PageResponse<Transaction>, Trading212Error> {
        match request {
            Some(req) => self.get_with_params(history::TRANSACTIONS, req).await,
            None => self.get(history::TRANSACTIONS).await,
        }
    }

    /// List the CSV exports requested on this account.
    pub async fn get_exports(&self) -> Result<Vec<Export>, Trading212Error> {
        self.get(history::EXPORTS).await
    }

    /// Request a CSV export of account history.
    ///
    /// The export is generated asynchronously on Trading212's side; poll
    /// [`get_exports`](Self::get_exports) for the download link.
    pub async fn request_export(
        &self,
        request: &ExportRequest,
    ) -> Result<ExportReport, Trading212Error> {
        self.post(history::EXPORTS, request).await
    }
}
