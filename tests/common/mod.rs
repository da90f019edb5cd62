//! Shared utilities for integration and load testing.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;

use mountain_risk::config::AppConfig;
use mountain_risk::http::HttpServer;
use mountain_risk::lifecycle::Shutdown;

/// Config pointing static serving at the repository's `public/` directory.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.server.host = "127.0.0.1".into();
    config.server.port = 0;
    config.server.static_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/public").into();
    config
}

/// Boot the server on an ephemeral port. Trigger the returned handle to stop it.
pub async fn start_server(config: AppConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // The listener is already bound; give the accept loop a moment to start.
    tokio::time::sleep(Duration::from_millis(50)).await;

    (addr, shutdown)
}

pub fn base_url(addr: SocketAddr) -> String {
    format!("http://{}", addr)
}

/// Client that never routes loopback traffic through a system proxy.
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(10))
        .build()
        .unwrap()
}
