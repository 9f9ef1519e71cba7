//! # Person Directory
//!
//! Entry point for the person/country directory service.
//!
//! This initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Storage (PostgreSQL pool or in-memory store)
//! - HTTP server

use anyhow::Result;
use tracing::info;

use person_directory::config::Settings;
use person_directory::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    person_directory::telemetry::init_tracing();

    info!("Starting Person Directory...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        backend = %settings.database.backend,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
