//! Mountain Risk API server.
//!
//! ```text
//!     Client ──▶ request id ──▶ trace ──▶ timeout/limits ──▶ router
//!                                                              │
//!            ┌─────────────────────────┬───────────────────────┼─────────────────────┐
//!            ▼                         ▼                       ▼                     ▼
//!   POST /api/assess-risk   POST /api/generate-report   GET /api/location-   static assets
//!     assessment::assess       reports::generate        suggestions          (ServeDir)
//!                                                        suggestions::suggest
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use mountain_risk::config::load_config;
use mountain_risk::lifecycle::{signals, Shutdown};
use mountain_risk::observability::{init_logging, metrics};
use mountain_risk::HttpServer;

#[derive(Parser)]
#[command(name = "mountain-risk")]
#[command(about = "Mock risk assessment API for mountain locations", long_about = None)]
struct Args {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = load_config(args.config.as_deref()).map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        e
    })?;

    init_logging(&config.observability);

    tracing::info!("mountain-risk v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.server.bind_address(),
        static_dir = %config.server.static_dir,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::error!(error = %e, "Failed to start metrics exporter");
                }
            }
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(config.server.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_listener(shutdown);

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
