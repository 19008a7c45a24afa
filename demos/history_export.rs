//! Example: Walking paginated history and requesting a CSV export.
//!
//! Run with: cargo run --example history_export

use std::sync::Arc;

use trading212_api_client::auth::EnvCredentials;
use trading212_api_client::equity::rest::EquityRestClient;
use trading212_api_client::equity::rest::history::{
    ExportDataIncluded, ExportRequest, HistoryRequest,
};
use trading212_api_client::types::Environment;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();

    let client = EquityRestClient::builder()
        .environment(Environment::Demo)
        .credentials(Arc::new(EnvCredentials::from_env()))
        .build()?;

    // One page of order history; the cursor for the next page comes back in
    // nextPagePath and is passed through explicitly.
    println!("=== Order history ===");
    let page = client
        .get_order_history(Some(&HistoryRequest::new().limit(20)))
        .await?;
    for order in &page.items {
        println!(
            "{} {} {} ({})",
            order.date_created, order.ticker, order.status, order.id
        );
    }
    println!("Next page: {:?}", page.next_page_path);

    // Recent dividends
    println!("\n=== Dividends ===");
    let dividends = client.get_dividends(Some(&HistoryRequest::new().limit(10))).await?;
    for dividend in &dividends.items {
        println!("{} {} {}", dividend.paid_on, dividend.ticker, dividend.amount);
    }

    // Request a CSV export for January 2024
    println!("\n=== Export ===");
    let request = ExportRequest::new(
        ExportDataIncluded::all(),
        time::macros::datetime!(2024-01-01 00:00:00 UTC),
        time::macros::datetime!(2024-02-01 00:00:00 UTC),
    );
    let report = client.request_export(&request).await?;
    println!("Requested export {}", report.report_id);

    // Poll the listing until the download link shows up
    for export in client.get_exports().await? {
        println!(
            "Export {}: {:?} {:?}",
            export.report_id, export.status, export.download_link
        );
    }

    Ok(())
}
