//! Rental admin CLI.
//!
//! # Usage
//!
//! ```bash
//! # List customers against the backend from RENTAL_API_BASE_URL
//! ra-cli customers list
//!
//! # Point at another backend
//! ra-cli --base-url http://localhost:8080/api employees list
//!
//! # Update one field
//! ra-cli customers update 12 nic 199012345678
//!
//! # Dashboard for the last month
//! ra-cli dashboard --period month
//! ```
//!
//! # Commands
//!
//! - `customers` - list, search, show, add, update, delete
//! - `employees` - list, search, show, add, update, delete
//! - `dashboard` - totals, city breakdown and activity charts
//!
//! Logs go to stderr. Set `RUST_LOG` to adjust the filter and `RA_LOG_JSON`
//! for JSON lines.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use rental_admin::dashboard::Period;
use rental_admin::{AdminConfig, AppState};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;
mod output;

use commands::customers::CustomerAction;
use commands::employees::EmployeeAction;

#[derive(Parser)]
#[command(name = "ra-cli")]
#[command(author, version, about = "Rental admin command-line client")]
struct Cli {
    /// Backend base URL; overrides RENTAL_API_BASE_URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage customers
    Customers {
        #[command(subcommand)]
        action: CustomerAction,
    },
    /// Manage employees
    Employees {
        #[command(subcommand)]
        action: EmployeeAction,
    },
    /// Show dashboard figures
    Dashboard {
        /// today, week, month, year or all-time
        #[arg(long, default_value = "week")]
        period: Period,
    },
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "rental_admin=info,ra_cli=info".into());

    let json = std::env::var("RA_LOG_JSON").is_ok();
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

fn load_config(base_url: Option<&str>) -> Result<AdminConfig, rental_admin::config::ConfigError> {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();
    match base_url {
        Some(url) => AdminConfig::from_lookup(|key| match key {
            "RENTAL_API_BASE_URL" => Some(url.to_owned()),
            _ => std::env::var(key).ok(),
        }),
        None => AdminConfig::from_env(),
    }
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(cli.base_url.as_deref())?;
    tracing::debug!(base_url = %config.backend.base_url, "configuration loaded");
    let state = AppState::new(config)?;

    match cli.command {
        Commands::Customers { action } => commands::customers::run(&state, action).await?,
        Commands::Employees { action } => commands::employees::run(&state, action).await?,
        Commands::Dashboard { period } => commands::dashboard::run(&state, period).await?,
    }
    Ok(())
}
