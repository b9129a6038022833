//! voloxide: Volatility 3 plugin dispatch MCP server.
//!
//! This binary serves as an MCP (Model Context Protocol) server that exposes
//! the Volatility 3 plugin catalogue as remotely invocable tools. It does not
//! parse memory images itself; every analysis runs as an external `vol.py`
//! subprocess whose output is returned to the caller as text. It communicates
//! via stdio transport.

mod bind;
mod config;
mod dispatch;
mod error;
mod plugins;
mod registry;
mod runner;
mod server;

use anyhow::Context;
use rmcp::transport::stdio;
use rmcp::ServiceExt;
use server::tools::VoloxideServer;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (logs to stderr so stdout stays clean for MCP)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("voloxide MCP server starting...");

    let config = config::VolConfig::from_env()?;
    config
        .validate()
        .context("Volatility installation is not usable; refusing to serve")?;

    tracing::info!("Using Python: {}", config.python.display());
    tracing::info!("Using Volatility script: {}", config.script.display());
    tracing::info!("Volatility directory: {}", config.install_dir.display());
    tracing::info!("Memory dumps directory: {}", config.dumps_dir.display());

    let registry = registry::PluginRegistry::with_all_families()?;
    tracing::info!("Registered {} plugins", registry.len());

    let runner = runner::VolRunner::new(&config);
    let dispatcher = dispatch::Dispatcher::new(registry, runner, config.dumps_dir.clone());

    let service = VoloxideServer::new(dispatcher, Arc::new(config))
        .serve(stdio())
        .await
        .inspect_err(|e| tracing::error!("Server error: {}", e))?;

    tracing::info!("voloxide MCP server running on stdio");
    service.waiting().await?;

    tracing::info!("voloxide MCP server shutting down");
    Ok(())
}
