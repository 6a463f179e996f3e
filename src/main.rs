//! host-router gateway
//!
//! Answers `GET /` with the route the request's `Host` maps to and `GET /health`
//! with a liveness stamp.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ net::Listener ──▶ http::HttpServer ──▶ routing::HostRouter
//!                      (limits,          (middleware,          (canonicalize +
//!                       header timeout)   handlers)             RouteTable lookup)
//!     Client Response
//!     ◀────────────── {"host": .., "route": ..} | 404
//! ```

use std::path::PathBuf;

use clap::Parser;

use host_router::config::{load_config, GatewayConfig};
use host_router::lifecycle::{run_gateway, Shutdown};
use host_router::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "host-router")]
#[command(about = "Virtual-host routing gateway", long_about = None)]
struct Cli {
    /// TOML configuration file; built-in routes are used when omitted.
    #[arg(short, long, env = "HOST_ROUTER_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => load_config(path),
        None => Ok(GatewayConfig::default()),
    };

    let level = loaded
        .as_ref()
        .map(|c| c.observability.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    init_logging(&level);

    tracing::info!("host-router v{} starting", env!("CARGO_PKG_VERSION"));

    let mut config = loaded.inspect_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
    })?;
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();

    if let Err(e) = run_gateway(config, &shutdown).await {
        tracing::error!(error = %e, "Gateway failed");
        return Err(e.into());
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
