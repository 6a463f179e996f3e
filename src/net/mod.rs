//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming TCP connection
//!     → listener.rs (accept loop, connection limits)
//!     → connection.rs (HTTP/1.1 serving, header read timeout)
//!     → Hand off to the Axum router
//! ```
//!
//! # Design Decisions
//! - Bounded accept queue prevents resource exhaustion
//! - Slow clients are cut off by a header read timeout
//! - Shutdown stops the accept loop; open connections run to completion

pub mod connection;
pub mod listener;

pub use connection::{serve_connection, ConnectionId};
pub use listener::{ConnectionPermit, Listener, ListenerError};

use std::time::Duration;

use axum::Router;
use tokio::sync::broadcast;

/// Accept connections until shutdown, serving each on its own task.
pub async fn serve(
    listener: Listener,
    app: Router,
    header_read_timeout: Duration,
    mut shutdown: broadcast::Receiver<()>,
) -> Result<(), ListenerError> {
    loop {
        tokio::select! {
            _ = shutdown.recv() => {
                tracing::info!("Accept loop stopping");
                return Ok(());
            }
            accepted = listener.accept() => match accepted {
                Ok((stream, peer_addr, permit)) => {
                    let app = app.clone();
                    tokio::spawn(async move {
                        serve_connection(stream, peer_addr, app, header_read_timeout).await;
                        drop(permit);
                    });
                }
                Err(ListenerError::Accept(e)) => {
                    // Typically EMFILE or a reset during handshake; back off briefly.
                    tracing::warn!(error = %e, "Failed to accept connection");
                    tokio::time::sleep(Duration::from_millis(50)).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
