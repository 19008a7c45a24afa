//! Pie endpoints.
//!
//! A pie is a basket of instruments with target weights that Trading212
//! rebalances automatically.

mod types;

pub use types::*;

use crate::equity::rest::EquityRestClient;
use crate::equity::rest::endpoints::pies;
use crate::error::Trading212Error;

impl EquityRestClient {
    /// List all pies in the account.
    ///
    /// Returns summary data only; use [`get_pie`](Self::get_pie) for the
    /// holdings and settings of a single pie.
    pub async fn get_pies(&self) -> Result<Vec<PieSummary>, Trading212Error> {
        self.get(pies::PIES).await
    }

    /// Create a new pie.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::collections::HashMap;
    /// use trading212_api_client::equity::rest::EquityRestClient;
    /// use trading212_api_client::equity::rest::pies::PieRequest;
    /// use trading212_api_client::types::Environment;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = EquityRestClient::new("api_key", Environment::Demo)?;
    ///     let shares = HashMap::from([
    ///         ("AAPL_US_EQ".to_string(), "0.6".parse()?),
    ///         ("MSFT_US_EQ".to_string(), "0.4".parse()?),
    ///     ]);
    ///     let pie = client
    ///         .create_pie(&PieRequest::new("Tech", shares).icon("Coins"))
    ///         .await?;
    ///     println!("Created pie {}", pie.settings.id);
    ///     Ok(())
    /// }
    /// ```
    pub async fn create_pie(&self, request: &PieRequest) -> Result<Pie, Trading212Error> {
        self.post(pies::PIES, request).await
    }

    /// Get a single pie with its holdings and settings.
    pub async fn get_pie(&self, id: i64) -> Result<Pie, Trading212Error> {
        self.get(&pies::pie(id)).await
    }

    /// Update an existing pie.
    ///
    /// The request fully replaces the pie's settings and target weights.
    pub async fn update_pie(&self, id: i64, request: &PieRequest) -> Result<Pie, Trading212Error> {
        self.post(&pies::pie(id), request).await
    }

    /// Delete a pie.
    ///
    /// The pie's holdings are released back to the account.
    pub async fn delete_pie(&self, id: i64) -> Result<(), Trading212Error> {
        self.delete(&pies::pie(id)).await
    }
}
