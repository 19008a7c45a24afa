//! Account data endpoints.

mod types;

pub use types::*;

use crate::equity::rest::EquityRestClient;
use crate::equity::rest::endpoints::account;
use crate::error::Trading212Error;

impl EquityRestClient {
    /// Get the account cash balance.
    ///
    /// Returns the free, invested and blocked amounts in the account
    /// currency.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use trading212_api_client::equity::rest::EquityRestClient;
    /// use trading212_api_client::types::Environment;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = EquityRestClient::new("api_key", Environment::Demo)?;
    ///     let cash = client.get_account_cash().await?;
    ///     println!("Free: {} Invested: {}", cash.free, cash.invested);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_account_cash(&self) -> Result<AccountCash, Trading212Error> {
        self.get(account::CASH).await
    }

    /// Get account metadata.
    ///
    /// Returns the account identifier and its base currency.
    pub async fn get_account_info(&self) -> Result<AccountInfo, Trading212Error> {
        self.get(account::INFO).await
    }
}
