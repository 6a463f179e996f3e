//! Identity echo backend.
//!
//! A minimal service that answers every `GET /` with
//! `This is the {name} application`. It stands in for the named backends a
//! gateway host maps to when checking routing end to end.

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::net::{self, Listener, ListenerError};

/// Environment variable holding the service name.
pub const APP_ENV: &str = "APP";

/// Name used when none is configured.
pub const DEFAULT_APP_NAME: &str = "unknown";

/// Resolve the configured name; absent or blank falls back to "unknown".
pub fn app_name(configured: Option<&str>) -> String {
    configured
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_APP_NAME)
        .to_string()
}

pub fn greeting(name: &str) -> String {
    format!("This is the {name} application")
}

/// Router answering `GET /` with the greeting for `name`.
pub fn echo_router(name: &str) -> Router {
    let message: Arc<str> = greeting(name).into();

    Router::new()
        .route(
            "/",
            get(move || {
                let message = message.clone();
                async move { message.to_string() }
            }),
        )
        .layer(TraceLayer::new_for_http())
}

/// Serve the echo service on `listener` until shutdown.
pub async fn run_echo(
    name: &str,
    listener: Listener,
    header_read_timeout: Duration,
    shutdown: broadcast::Receiver<()>,
) -> Result<(), ListenerError> {
    let addr = listener.local_addr().map_err(ListenerError::Bind)?;
    tracing::info!(app = %name, address = %addr, "Starting echo server");

    net::serve(listener, echo_router(name), header_read_timeout, shutdown).await
}
