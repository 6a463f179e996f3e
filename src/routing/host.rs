//! Host canonicalization.
//!
//! # Responsibilities
//! - Turn an untrusted `Host` value into the key used for route lookup
//! - Drop the port (routing never depends on it)
//! - Unwrap bracketed IPv6 literals, with or without a port
//!
//! # Design Decisions
//! - Total: malformed input falls back to the trimmed, lowercased string
//! - ASCII case folding only, no IDNA handling
//! - Applied until the key stops changing, so the result is a fixed point

/// Canonicalize a raw host value into a lookup key.
///
/// Returns an empty string when nothing usable is left; the empty key never
/// matches a route.
///
/// ```
/// use host_router::routing::canonicalize;
///
/// assert_eq!(canonicalize("MANGO.COM"), "mango.com");
/// assert_eq!(canonicalize("[::1]:8080"), "::1");
/// assert_eq!(canonicalize("   "), "");
/// ```
pub fn canonicalize(raw: &str) -> String {
    let mut key = canonicalize_once(raw);
    loop {
        let next = canonicalize_once(&key);
        if next == key {
            return key;
        }
        key = next;
    }
}

/// A single normalization pass. Every pass either shortens the string or
/// leaves it unchanged, so iterating it terminates.
fn canonicalize_once(raw: &str) -> String {
    let host = raw.trim().to_ascii_lowercase();
    if host.is_empty() {
        return host;
    }

    let host = match split_host_port(&host) {
        Some((name, _port)) => name,
        None => host.as_str(),
    };

    // Strips every surrounding bracket, not just one matched pair.
    host.trim_matches(|c| c == '[' || c == ']').to_string()
}

/// Split `host:port` or `[host]:port` into its parts.
///
/// Returns `None` when the value has no port or does not have a recognizable
/// host-port shape (unbracketed IPv6, stray brackets). The port itself is not
/// validated.
pub fn split_host_port(hostport: &str) -> Option<(&str, &str)> {
    let colon = hostport.rfind(':')?;

    let host = if hostport.starts_with('[') {
        let close = hostport.find(']')?;
        // "]" must be immediately followed by the port separator
        if close + 1 != colon {
            return None;
        }
        if hostport[1..].contains('[') || hostport[close + 1..].contains(']') {
            return None;
        }
        &hostport[1..close]
    } else {
        let host = &hostport[..colon];
        if host.contains(':') || hostport.contains(['[', ']']) {
            return None;
        }
        host
    };

    Some((host, &hostport[colon + 1..]))
}
