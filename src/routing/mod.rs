//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (raw Host value)
//!     → host.rs (canonicalize: trim, lowercase, strip port and brackets)
//!     → table.rs (exact lookup of the canonical key)
//!     → router.rs: Found { host, route } or NotFound
//!
//! Table Compilation (at startup):
//!     RouteConfig[]
//!     → canonicalize configured hosts
//!     → Freeze as immutable RouteTable behind Arc
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Exact-string lookup only, no wildcards or patterns
//! - Deterministic: same input always yields the same outcome
//! - Unknown host is an explicit NoMatch, never a silent default

pub mod host;
pub mod router;
pub mod table;

pub use host::canonicalize;
pub use router::{HostRouter, RoutingOutcome};
pub use table::RouteTable;
