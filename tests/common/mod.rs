//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use host_router::echo::run_echo;
use host_router::net::Listener;
use host_router::{GatewayConfig, HttpServer, Shutdown};
use tokio::net::TcpListener;

/// Bind an ephemeral loopback port.
async fn ephemeral_listener(max_connections: usize) -> (Listener, SocketAddr) {
    let tcp = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = tcp.local_addr().unwrap();
    (Listener::from_tcp(tcp, max_connections), addr)
}

/// Start a gateway with `config` on an ephemeral port.
#[allow(dead_code)]
pub async fn start_gateway(config: GatewayConfig) -> (SocketAddr, Shutdown) {
    let (listener, addr) = ephemeral_listener(config.listener.max_connections).await;
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// Start an identity echo backend named `name` on an ephemeral port.
#[allow(dead_code)]
pub async fn start_echo(name: &str) -> (SocketAddr, Shutdown) {
    let (listener, addr) = ephemeral_listener(64).await;
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let name = name.to_string();

    tokio::spawn(async move {
        let _ = run_echo(&name, listener, Duration::from_secs(5), server_shutdown).await;
    });

    (addr, shutdown)
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}
