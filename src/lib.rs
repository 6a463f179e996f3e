//! Virtual-host routing gateway.
//!
//! Canonicalizes the `Host` a client addressed and reports which statically
//! configured route it maps to. The sibling `echo` module is a trivial named
//! backend used to exercise routing setups end to end.

pub mod config;
pub mod echo;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod routing;

pub use config::schema::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{canonicalize, HostRouter, RouteTable, RoutingOutcome};
