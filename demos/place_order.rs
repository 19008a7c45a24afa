//! Example: Placing and cancelling an equity order.
//!
//! Uses the demo environment so no real money moves. The API key must have
//! the trading scope enabled.
//!
//! Run with: cargo run --example place_order

use std::sync::Arc;

use trading212_api_client::auth::EnvCredentials;
use trading212_api_client::equity::rest::EquityRestClient;
use trading212_api_client::equity::rest::orders::LimitOrderRequest;
use trading212_api_client::types::{Environment, TimeValidity};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();

    let client = EquityRestClient::builder()
        .environment(Environment::Demo)
        .credentials(Arc::new(EnvCredentials::from_env()))
        .build()?;

    // Place a limit order far below the market so it stays pending.
    let request = LimitOrderRequest::new(
        "AAPL_US_EQ",
        "0.1".parse()?,
        "50.00".parse()?,
        TimeValidity::GoodTillCancel,
    );
    let order = client.place_limit_order(&request).await?;
    println!(
        "Placed order {}: {:?} {} @ {:?}",
        order.id, order.quantity, order.ticker, order.limit_price
    );

    // List pending orders
    let pending = client.get_orders().await?;
    println!("{} pending orders", pending.len());

    // Cancel it again
    client.cancel_order(order.id).await?;
    println!("Cancelled order {}", order.id);

    Ok(())
}
