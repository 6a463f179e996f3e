//! Liveness reporting.
//!
//! `/health` only proves the process can answer HTTP; it does not look at the
//! route table or any backend.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub const STATUS_OK: &str = "ok";

/// Body of a `/health` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    /// RFC 3339 timestamp with nanosecond precision, UTC.
    pub time: String,
}

impl HealthStatus {
    /// A fresh "ok" status stamped with the current time.
    pub fn now() -> Self {
        Self {
            status: STATUS_OK.to_string(),
            time: Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_now_is_ok_with_nanosecond_timestamp() {
        let health = HealthStatus::now();
        assert_eq!(health.status, "ok");

        assert!(DateTime::parse_from_rfc3339(&health.time).is_ok());
        // "2026-10-19T12:00:00.123456789Z": nine fractional digits
        let fraction = health.time.rsplit('.').next().unwrap();
        assert_eq!(fraction.trim_end_matches('Z').len(), 9);
    }
}
