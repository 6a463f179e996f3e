//! Request inspection.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) when the client sent none
//! - Extract the raw destination host the client addressed
//!
//! # Design Decisions
//! - An absolute-form target's authority wins over the `Host` header (RFC 7230 §5.4)
//! - A host that is not visible ASCII is treated as absent, never rejected

use axum::http::{header::HOST, HeaderMap, HeaderName, HeaderValue, Request, Uri};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the request correlation ID.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Generates UUID v4 request IDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// The request ID for logging, or "unknown" when missing.
pub fn request_id(headers: &HeaderMap) -> &str {
    headers
        .get(&X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

/// The raw host the client addressed, verbatim and uncanonicalized.
pub fn raw_host<'a>(headers: &'a HeaderMap, uri: &'a Uri) -> &'a str {
    if let Some(authority) = uri.authority() {
        return authority.host();
    }

    headers
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
}
