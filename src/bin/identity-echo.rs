//! Identity echo backend: `GET /` → "This is the {APP} application".

use std::time::Duration;

use clap::Parser;

use host_router::echo::{app_name, run_echo};
use host_router::lifecycle::Shutdown;
use host_router::net::Listener;
use host_router::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "identity-echo")]
#[command(about = "Backend that reports its configured name", long_about = None)]
struct Cli {
    /// Name to report; blank or missing means "unknown".
    #[arg(long, env = "APP")]
    name: Option<String>,

    #[arg(short, long, default_value = "0.0.0.0:5000")]
    bind: String,

    /// Seconds a client has to send its request headers.
    #[arg(long, default_value_t = 5)]
    header_read_secs: u64,

    #[arg(long, default_value_t = 1024)]
    max_connections: usize,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging("info");

    let name = app_name(cli.name.as_deref());

    let listener = Listener::bind(&cli.bind, cli.max_connections)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Failed to start echo server"))?;

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();

    run_echo(
        &name,
        listener,
        Duration::from_secs(cli.header_read_secs),
        shutdown.subscribe(),
    )
    .await?;

    Ok(())
}
