//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID, metrics)
//! - Freeze the route table and share it with handlers
//! - Serve connections from the bounded listener

use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, routing::get, Router};
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::GatewayConfig;
use crate::http::handlers;
use crate::http::request::{UuidRequestId, X_REQUEST_ID};
use crate::net::{self, Listener, ListenerError};
use crate::observability::metrics;
use crate::routing::HostRouter;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<HostRouter>,
}

/// HTTP server for the routing gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig) -> Self {
        let host_router = Arc::new(HostRouter::from_config(&config.routes));

        tracing::info!(routes = host_router.table().len(), "Route table built");
        for (host, route) in host_router.table().iter() {
            tracing::debug!(host = %host, route = %route, "Route registered");
        }

        let state = AppState {
            router: host_router,
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route("/", get(handlers::route_host))
            .with_state(state)
            .layer(middleware::from_fn(metrics::track_requests))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
            .layer(TraceLayer::new_for_http())
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections until shutdown is signalled.
    pub async fn run(
        self,
        listener: Listener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ListenerError> {
        let addr = listener.local_addr().map_err(ListenerError::Bind)?;
        tracing::info!(address = %addr, "HTTP server starting");

        let header_read_timeout = Duration::from_secs(self.config.timeouts.header_read_secs);
        net::serve(listener, self.router, header_read_timeout, shutdown).await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use tower::ServiceExt;

    use crate::health::HealthStatus;
    use crate::http::response::HostResponse;

    fn app() -> Router {
        HttpServer::new(GatewayConfig::default()).router()
    }

    fn get_with_host(path: &str, host: &str) -> Request<Body> {
        Request::builder()
            .uri(path)
            .header(header::HOST, host)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app().oneshot(get_with_host("/health", "anything")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        assert!(response.headers().contains_key(&X_REQUEST_ID));

        let health: HealthStatus = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(health.status, "ok");
        assert!(chrono::DateTime::parse_from_rfc3339(&health.time).is_ok());
    }

    #[tokio::test]
    async fn test_routes_known_hosts() {
        let cases = [
            ("mango.com", "mango.com", "site-mango"),
            ("APPLE.COM:443", "apple.com", "site-apple"),
            (" Mango.Com:8080 ", "mango.com", "site-mango"),
        ];

        for (raw, host, route) in cases {
            let response = app().oneshot(get_with_host("/", raw)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "host {raw:?}");
            assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");

            let body: HostResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
            assert_eq!(
                body,
                HostResponse {
                    host: host.into(),
                    route: route.into()
                }
            );
        }
    }

    #[tokio::test]
    async fn test_exact_json_body() {
        let response = app().oneshot(get_with_host("/", "mango.com")).await.unwrap();
        let body = body_bytes(response).await;
        assert_eq!(body, br#"{"host":"mango.com","route":"site-mango"}"#);
    }

    #[tokio::test]
    async fn test_unknown_host_is_404() {
        for raw in ["notmango.com", "", "   ", "[]:80"] {
            let response = app().oneshot(get_with_host("/", raw)).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "host {raw:?}");
        }
    }

    #[tokio::test]
    async fn test_missing_host_uses_uri_authority() {
        let request = Request::builder()
            .uri("http://apple.com:8080/")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_absolute_uri_overrides_host_header() {
        let request = Request::builder()
            .uri("http://apple.com/")
            .header(header::HOST, "mango.com")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: HostResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(
            body,
            HostResponse {
                host: "apple.com".into(),
                route: "site-apple".into()
            }
        );
    }

    #[tokio::test]
    async fn test_other_methods_and_paths() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/")
            .header(header::HOST, "mango.com")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let response = app().oneshot(get_with_host("/elsewhere", "mango.com")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_request_id_is_propagated() {
        let request = Request::builder()
            .uri("/health")
            .header(X_REQUEST_ID, "req-42")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.headers()[&X_REQUEST_ID], "req-42");
    }

    #[tokio::test]
    async fn test_configured_routes() {
        let mut config = GatewayConfig::default();
        config.routes = vec![crate::config::RouteConfig::new("Banana.com", "site-banana")];
        let app = HttpServer::new(config).router();

        let response = app.clone().oneshot(get_with_host("/", "banana.com")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get_with_host("/", "mango.com")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
