//! Instrument metadata endpoints.

mod types;

pub use types::*;

use crate::equity::rest::EquityRestClient;
use crate::equity::rest::endpoints::metadata;
use crate::error::Trading212Error;

impl EquityRestClient {
    /// List the exchanges available on the platform with their working
    /// schedules.
    pub async fn get_exchanges(&self) -> Result<Vec<Exchange>, Trading212Error> {
        self.get(metadata::EXCHANGES).await
    }

    /// List all tradeable instruments.
    ///
    /// The full list is large (tens of thousands of entries); the API returns
    /// it in one response.
    pub async fn get_instruments(&self) -> Result<Vec<Instrument>, Trading212Error> {
        self.get(metadata::INSTRUMENTS).await
    }
}
