//! Example: Fetching account and portfolio data from Trading212.
//!
//! Reads the API key from `TRADING212_API_KEY` (a `.env` file works too) and
//! talks to the demo environment.
//!
//! Run with: cargo run --example portfolio

use std::sync::Arc;

use trading212_api_client::auth::EnvCredentials;
use trading212_api_client::equity::rest::EquityRestClient;
use trading212_api_client::types::Environment;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = EquityRestClient::builder()
        .environment(Environment::Demo)
        .credentials(Arc::new(EnvCredentials::from_env()))
        .build()?;

    // Account overview
    println!("=== Account ===");
    let info = client.get_account_info().await?;
    println!("Account {} ({})", info.id, info.currency_code);

    let cash = client.get_account_cash().await?;
    println!("Free: {}", cash.free);
    println!("Invested: {}", cash.invested);
    println!("Total: {}", cash.total);

    // Open positions
    println!("\n=== Portfolio ===");
    let portfolio = client.get_portfolio().await?;
    for position in &portfolio {
        println!(
            "{}: {} @ {} (P/L: {})",
            position.ticker, position.quantity, position.average_price, position.ppl
        );
    }

    // Single position lookup for the first holding
    if let Some(first) = portfolio.first() {
        println!("\n=== Position {} ===", first.ticker);
        let position = client.get_position(&first.ticker).await?;
        println!("Current price: {}", position.current_price);
        println!("Initial fill: {}", position.initial_fill_date);
    }

    Ok(())
}
