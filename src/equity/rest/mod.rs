//! Trading212 Equity REST API client.
//!
//! Provides access to all documented Trading212 Equity REST endpoints.
//!
//! # Trait-based API
//!
//! The [`Trading212Client`] trait abstracts all REST API operations, enabling:
//! - Mock implementations for testing
//! - Decorator pattern (e.g., instrumentation wrapper)
//! - Alternative implementations
//!
//! ```rust,ignore
//! use trading212_api_client::equity::rest::{EquityRestClient, Trading212Client};
//!
//! async fn print_cash<C: Trading212Client>(client: &C) -> Result<(), trading212_api_client::Trading212Error> {
//!     let cash = client.get_account_cash().await?;
//!     println!("Free cash: {}", cash.free);
//!     Ok(())
//! }
//! ```

pub mod account;
mod client;
mod endpoints;
pub mod history;
pub mod metadata;
pub mod orders;
pub mod pies;
pub mod portfolio;
mod traits;

pub use client::{EquityRestClient, EquityRestClientBuilder};
pub use endpoints::*;
pub use traits::Trading212Client;
