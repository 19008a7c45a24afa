//! Example: Creating, inspecting and deleting a pie.
//!
//! Run with: cargo run --example pies

use std::collections::HashMap;
use std::sync::Arc;

use trading212_api_client::auth::EnvCredentials;
use trading212_api_client::equity::rest::EquityRestClient;
use trading212_api_client::equity::rest::pies::PieRequest;
use trading212_api_client::types::{DividendCashAction, Environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();

    let client = EquityRestClient::builder()
        .environment(Environment::Demo)
        .credentials(Arc::new(EnvCredentials::from_env()))
        .build()?;

    // Existing pies
    println!("=== Pies ===");
    for pie in client.get_pies().await? {
        println!("Pie {}: cash={} status={:?}", pie.id, pie.cash, pie.status);
    }

    // Create a two-instrument pie
    let shares = HashMap::from([
        ("AAPL_US_EQ".to_string(), "0.6".parse()?),
        ("MSFT_US_EQ".to_string(), "0.4".parse()?),
    ]);
    let request = PieRequest::new("Example pie", shares)
        .icon("Coins")
        .goal("1000".parse()?)
        .dividend_cash_action(DividendCashAction::Reinvest);
    let created = client.create_pie(&request).await?;
    println!("\nCreated pie {} ({})", created.settings.id, created.settings.name);

    // Fetch it back with holdings
    let pie = client.get_pie(created.settings.id).await?;
    for instrument in &pie.instruments {
        println!(
            "  {}: target {:.0}%, current {:.0}%",
            instrument.ticker,
            instrument.expected_share * 100.0,
            instrument.current_share * 100.0
        );
    }

    // Clean up
    client.delete_pie(created.settings.id).await?;
    println!("Deleted pie {}", created.settings.id);

    Ok(())
}
