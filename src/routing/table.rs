//! Static route table.
//!
//! # Responsibilities
//! - Store the canonical host → route identifier mapping
//! - Answer exact-match lookups
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(1) host lookup via HashMap
//! - Configured hosts are canonicalized on insert
//! - Duplicate hosts: last entry wins, with a warning

use std::collections::HashMap;

use crate::config::RouteConfig;
use crate::routing::host::canonicalize;

/// Immutable mapping from canonical host key to route identifier.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, String>,
}

impl RouteTable {
    /// Build a table from `(host, route)` pairs.
    pub fn new<I, H, R>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (H, R)>,
        H: AsRef<str>,
        R: Into<String>,
    {
        let mut routes = HashMap::new();

        for (host, route) in pairs {
            let key = canonicalize(host.as_ref());
            if key.is_empty() {
                tracing::warn!(host = host.as_ref(), "Skipping route with empty host");
                continue;
            }

            let route = route.into();
            if let Some(previous) = routes.insert(key.clone(), route.clone()) {
                tracing::warn!(
                    host = %key,
                    previous = %previous,
                    route = %route,
                    "Duplicate host in route table, last entry wins"
                );
            }
        }

        Self { routes }
    }

    /// Build a table from route configuration entries.
    pub fn from_config(routes: &[RouteConfig]) -> Self {
        Self::new(routes.iter().map(|r| (r.host.as_str(), r.route.as_str())))
    }

    /// Look up the route for an already-canonical host key.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.routes.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterate over `(host, route)` entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.routes.iter().map(|(h, r)| (h.as_str(), r.as_str()))
    }
}
