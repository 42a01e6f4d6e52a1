//! Know Your Representatives - congress dashboard server
//!
//! Serves a single interactive page where a visitor picks a legislator and
//! sees four independent display regions:
//!
//! - Biography table and portrait
//! - Voting-similarity scatter plot
//! - Sponsored bills table
//! - Keyword importance bar chart
//!
//! ## Architecture
//!
//! The legislator roster is read once at startup. Every other lookup is a
//! parameterized query re-run per request; nothing is cached.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod error;
mod handlers;
mod routes;
mod state;

use state::AppState;

/// Command-line arguments for the congress dashboard
#[derive(Parser, Debug)]
#[command(name = "congress-dashboard")]
#[command(about = "Legislator lookup dashboard: biography, votes, bills and keywords")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "8050")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Database connection string
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite:congress.db")]
    database_url: String,

    /// Maximum pooled database connections
    #[arg(long, default_value = "5")]
    max_connections: u32,

    /// Bioguide id selected when the page first loads
    #[arg(long, default_value = "N000188")]
    default_member: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Initializing congress dashboard...");
    let state = AppState::connect(
        &args.database_url,
        args.max_connections,
        args.default_member,
    )
    .await?;
    let state = Arc::new(state);

    let app = routes::router(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Dashboard listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
