//! Scenewright Daemon - Main entry point
//!
//! Serves the scene editor page and its REST API.

mod api;
mod config;
mod server;
mod state;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scenewright")]
#[command(about = "Interactive A-Frame scene builder")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "scenewright.toml")]
    config: PathBuf,

    /// Bind address for web server
    #[arg(short, long)]
    bind: Option<String>,

    /// Log filter, e.g. "info" or "scenewright_core=debug"
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Write a default configuration file to the config path and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&args.log_level)?)
        .init();

    if args.init_config {
        config::save_default_config(&args.config)?;
        println!("Wrote default configuration to {}", args.config.display());
        return Ok(());
    }

    let mut config = config::load_config(&args.config)?;
    if let Some(bind) = args.bind {
        config.daemon.bind = bind;
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        escape_attributes = config.markup.escape_attributes,
        export_dir = ?config.export.dir,
        "Starting Scenewright"
    );

    server::run(state::AppState::new(config)).await
}
