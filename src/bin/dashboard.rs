//! Quantrix Dashboard
//!
//! Serves the static dashboard page plus the latest report JSON. Stateless:
//! it only reads what the monitor wrote, so it can run as a separate
//! process from the scanner.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use dotenvy::dotenv;
use quantrix::core::http::start_server;
use quantrix::logging;
use quantrix::store::ReportStore;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let output_dir = env::var("OUTPUT_DIR").unwrap_or_else(|_| "data".to_string());
    let static_dir = PathBuf::from(env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()));

    let env_name = quantrix::config::get_environment();
    info!("Starting Quantrix Dashboard");
    info!(environment = %env_name, "Environment");
    info!(port = port, "HTTP server: http://0.0.0.0:{}", port);

    let store = Arc::new(ReportStore::new(output_dir));

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port, store, static_dir).await {
            error!(error = %e, "HTTP server error");
        }
    });

    info!("Dashboard started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down dashboard...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
