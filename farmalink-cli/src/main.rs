//! FarmaLink CLI
//!
//! Command-line interface for the FarmaLink payments API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use farmalink_client::FarmaLinkClient;

#[derive(Parser)]
#[command(name = "farmalink")]
#[command(author, version, about = "FarmaLink payments API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the FarmaLink API
    #[arg(
        long,
        env = "FARMALINK_API_URL",
        default_value = "http://localhost:8000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Payment operations
    Payment {
        #[command(subcommand)]
        action: PaymentCommands,
    },
    /// Show the service banner
    Info,
    /// Check API health
    Health,
}

#[derive(Subcommand)]
enum PaymentCommands {
    /// Register a payment dated today
    Create {
        /// Holder name
        #[arg(long)]
        name: String,
        /// Holder national id (RUT)
        #[arg(long)]
        id: String,
        /// Amount to pay
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,
    },
    /// List all registered payments
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = FarmaLinkClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let report = client.health_report().await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            if report.storage != "healthy" {
                std::process::exit(1);
            }
        }

        Commands::Info => {
            let info = client.info().await?;
            println!("{}", serde_json::to_string_pretty(&info)?);
        }

        Commands::Payment { action } => match action {
            PaymentCommands::Create { name, id, amount } => {
                let payment = client.create_payment(&name, &id, amount).await?;
                println!("{}", serde_json::to_string_pretty(&payment)?);
            }
            PaymentCommands::List => {
                let payments = client.list_payments().await?;
                println!("{}", serde_json::to_string_pretty(&payments)?);
            }
        },
    }

    Ok(())
}
