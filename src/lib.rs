//! # Trading212 Client
//!
//! An async Rust client library for the Trading212 Equity REST API.
//!
//! ## Features
//!
//! - Full coverage of the documented Equity REST endpoints (account,
//!   metadata, portfolio, orders, pies, history and exports)
//! - Live and demo environments with distinct hosts
//! - Strong typing for all request/response types
//! - Financial precision with `rust_decimal`
//! - One HTTP exchange per call: no retries, no caching, no rate limiting
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use trading212_api_client::equity::rest::EquityRestClient;
//! use trading212_api_client::types::Environment;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EquityRestClient::new("my_api_key", Environment::Demo)?;
//!     let cash = client.get_account_cash().await?;
//!     println!("Free cash: {}", cash.free);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod equity;
pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ApiError, Trading212Error};
pub use types::common::{DividendCashAction, Environment, OrderStatus, OrderType, TimeValidity};

/// Result type alias using Trading212Error
pub type Result<T> = std::result::Result<T, Trading212Error>;
