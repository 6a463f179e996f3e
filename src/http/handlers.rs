//! Request handlers.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};

use crate::health::HealthStatus;
use crate::http::request::{raw_host, request_id};
use crate::http::response::{not_found, HostResponse};
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::routing::RoutingOutcome;

/// `GET /health`: liveness with a fresh timestamp.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::now())
}

/// `GET /`: report which route the addressed host maps to.
pub async fn route_host(State(state): State<AppState>, headers: HeaderMap, uri: Uri) -> Response {
    let raw = raw_host(&headers, &uri);
    let outcome = state.router.resolve(raw);
    metrics::record_lookup(outcome.label());

    match outcome {
        RoutingOutcome::Found { host, route } => {
            tracing::debug!(
                request_id = %request_id(&headers),
                host = %host,
                route = %route,
                "Host routed"
            );
            (StatusCode::OK, Json(HostResponse { host, route })).into_response()
        }
        RoutingOutcome::NotFound => {
            tracing::debug!(
                request_id = %request_id(&headers),
                raw_host = %raw,
                "No route for host"
            );
            not_found()
        }
    }
}
