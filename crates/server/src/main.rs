// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! issuebox-server: WebSocket front end for the in-memory issue tracker.
//!
//! Holds every issue in process memory. Nothing is persisted; a restart
//! starts over from the sample issues (or an empty store with `--no-seed`).

mod config;
mod server;
mod state;

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use config::{Config, Overrides};

/// issuebox-server: In-memory issue tracker server
#[derive(Parser, Debug)]
#[command(name = "issuebox-server")]
#[command(about = "WebSocket server for the in-memory issuebox tracker")]
struct Args {
    /// Address to bind the server to [default: 0.0.0.0:8000]
    #[arg(short, long)]
    bind: Option<SocketAddr>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start with an empty store instead of the sample issues
    #[arg(long)]
    no_seed: bool,

    /// Reject status and priority values outside the documented vocabularies
    #[arg(long)]
    strict: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize logging; RUST_LOG wins over --verbose
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let overrides = Overrides {
        bind: args.bind,
        no_seed: args.no_seed,
        strict: args.strict,
    };
    let config = Config::load_or_default(args.config.as_deref())?.with_overrides(&overrides);

    info!("Starting issuebox-server");
    info!("  Bind address: {}", config.bind);
    if let Some(ref path) = args.config {
        info!("  Config file: {}", path.display());
    }
    info!("  Strict fields: {}", config.fields.strict);

    let state = state::ServerState::new(config.service_config(), config.seed);
    info!("  Seeded issues: {}", state.issue_count().await);

    server::run(config.bind, state).await?;

    Ok(())
}
