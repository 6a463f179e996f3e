//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID, raw host extraction)
//!     → handlers.rs (/health, / → routing::HostRouter)
//!     → response.rs (JSON body or 404)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{raw_host, request_id, UuidRequestId, X_REQUEST_ID};
pub use response::HostResponse;
pub use server::{AppState, HttpServer};
