//! Valet CLI - Terminal front end for the parking API.
//!
//! # Usage
//!
//! ```bash
//! # Management dashboard: owners, parking spaces, bookings
//! valet dashboard
//!
//! # Booking screen: detailed bookings with car, space, payment status
//! valet booking
//!
//! # Point at a different API
//! valet --api-url http://localhost:8080/api dashboard
//! ```
//!
//! # Commands
//!
//! - `dashboard` - Render the parking management view
//! - `booking` - Render the booking view
//!
//! # Environment Variables
//!
//! - `VALET_API_URL` - Base URL of the parking API (overridden by `--api-url`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use valet_client::{ApiClient, ClientConfig, Session};

mod commands;

#[derive(Parser)]
#[command(name = "valet")]
#[command(author, version, about = "Valet parking management tools")]
struct Cli {
    /// Base URL of the parking API (overrides VALET_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the parking management view
    Dashboard,
    /// Render the booking view
    Booking,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match cli.api_url {
        Some(url) => ClientConfig::new(&url)?,
        None => ClientConfig::from_env()?,
    };
    let session = Session::new(ApiClient::new(&config)?);

    match cli.command {
        Commands::Dashboard => commands::dashboard::render(&session).await?,
        Commands::Booking => commands::booking::render(&session).await?,
    }
    Ok(())
}
