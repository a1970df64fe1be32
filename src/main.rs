//! GrazeLog-RS - grazing survey backend
//!
//! Async REST service for team-scoped agricultural census collection

use grazelog_rs::config::Config;
use grazelog_rs::server::HttpServer;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging system
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .with_thread_ids(false)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> grazelog_rs::Result<()> {
    // Auto-loads config/grazelog.yaml when present, env vars otherwise
    let config = Config::load(None)?;
    let server = HttpServer::new(&config).await?;
    server.start().await
}
