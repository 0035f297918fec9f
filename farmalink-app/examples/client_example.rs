//! Client example demonstrating the payment flow against a running server.
//!
//! Run with: cargo run -p farmalink-app --example client_example

use farmalink_client::FarmaLinkClient;
use farmalink_hex::{PaymentService, inbound::HttpServer};
use farmalink_repo::build_repo;
use std::net::SocketAddr;
use tempfile::tempdir;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Bind first so the server is reachable as soon as the client starts
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;

    // Use a temp file-backed SQLite DB
    let tmp = tempdir()?;
    let db_path = tmp.path().join("farmalink.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    println!("🚀 Starting server on {addr}...");
    println!("   Database: {db_url}");

    // Build repository (handles connection and migration)
    let repo = build_repo(Some(&db_url)).await?;

    // Start server in background
    let router = HttpServer::new(PaymentService::new(repo)).router();
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router.into_make_service()).await {
            eprintln!("server error: {e}");
        }
    });

    let client = FarmaLinkClient::new(format!("http://{addr}"));

    // ─────────────────────────────────────────────────────────────────────────
    // Demo: register and list payments
    // ─────────────────────────────────────────────────────────────────────────

    let info = client.info().await?;
    println!("✅ {} v{} (storage: {})", info.name, info.version, info.storage);

    let health = client.health().await?;
    println!("✅ Server health: {health}");

    let ana = client.create_payment("Ana Pérez", "12345678-9", 50000.0).await?;
    println!(
        "✅ Paid {} to {} ({}) on {}",
        ana.amount, ana.holder_name, ana.holder_id, ana.payment_date
    );

    let luis = client.create_payment("Luis Soto", "9876543-2", 32500.0).await?;
    println!(
        "✅ Paid {} to {} ({}) on {}",
        luis.amount, luis.holder_name, luis.holder_id, luis.payment_date
    );

    let payments = client.list_payments().await?;
    println!("\n📋 Payment history ({} records):", payments.len());
    for p in &payments {
        println!(
            "   {}  {:<12} {:<20} {:>12.2}",
            p.payment_date, p.holder_id, p.holder_name, p.amount
        );
    }

    Ok(())
}
