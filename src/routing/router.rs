//! Route resolution.
//!
//! # Responsibilities
//! - Canonicalize the raw host of a request
//! - Look up the canonical key in the route table
//! - Return the matched route or an explicit no-match
//!
//! # Design Decisions
//! - Pure and synchronous: no I/O, no retries, no caching
//! - Shared via Arc; concurrent resolutions never contend

use crate::config::RouteConfig;
use crate::routing::host::canonicalize;
use crate::routing::table::RouteTable;

/// Result of resolving a raw host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingOutcome {
    /// The canonical host has a route.
    Found { host: String, route: String },
    /// Empty host, or no entry for it.
    NotFound,
}

impl RoutingOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, RoutingOutcome::Found { .. })
    }

    /// Label used for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            RoutingOutcome::Found { .. } => "found",
            RoutingOutcome::NotFound => "not_found",
        }
    }
}

/// Resolves raw `Host` values against an immutable route table.
#[derive(Debug, Clone, Default)]
pub struct HostRouter {
    table: RouteTable,
}

impl HostRouter {
    pub fn new(table: RouteTable) -> Self {
        Self { table }
    }

    /// Build the router from route configuration entries.
    pub fn from_config(routes: &[RouteConfig]) -> Self {
        Self::new(RouteTable::from_config(routes))
    }

    /// Resolve a raw host value to a routing outcome.
    pub fn resolve(&self, raw_host: &str) -> RoutingOutcome {
        let host = canonicalize(raw_host);
        if host.is_empty() {
            return RoutingOutcome::NotFound;
        }

        match self.table.lookup(&host) {
            Some(route) => RoutingOutcome::Found {
                route: route.to_string(),
                host,
            },
            None => RoutingOutcome::NotFound,
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }
}
