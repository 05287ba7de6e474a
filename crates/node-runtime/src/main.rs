//! # Node Runtime
//!
//! Entry point for the node.
//!
//! ## Startup Sequence
//!
//! 1. Install the tracing subscriber (`RUST_LOG`, default `info`)
//! 2. Load configuration from defaults and `NODE_*` environment variables
//! 3. Validate cache budgets
//! 4. Size the verification caches (fatal on failure)
//! 5. Start the periodic cache report
//! 6. Wait for Ctrl+C, then stop the report task and release the caches

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use node_runtime::{NodeConfig, NodeRuntime};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load configuration
    let config = NodeConfig::from_env().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    let mut runtime = NodeRuntime::new(&config)?;
    runtime.start();

    info!("Node is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c().await?;

    runtime.shutdown().await;

    Ok(())
}
