// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Context;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::launch_repository::LaunchRepository;
use crate::application::session_service::SessionLimits;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::csv_repository::CsvLaunchRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("launch_dashboard=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Load the launch table once; it is read-only from here on
    let repository = CsvLaunchRepository::new(&config.dataset.path);
    let table = repository
        .load_launches()
        .with_context(|| format!("Failed to load dataset {}", repository.path().display()))?;
    let bounds = table.bounds();
    tracing::info!(
        "Loaded {} launches across {} sites, payload {}..{} kg",
        table.len(),
        table.sites().len(),
        bounds.min,
        bounds.max
    );

    // Create services (application layer)
    let dashboard_service = DashboardService::new(Arc::new(table), config.controls.payload_step);

    // Create application state
    let session_limits = SessionLimits {
        idle_timeout: Duration::from_secs(config.sessions.idle_timeout_secs),
        max_sessions: config.sessions.max_sessions,
    };
    let state = Arc::new(AppState::new(dashboard_service, session_limits));

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.server.bind))?;
    tracing::info!("Starting launch dashboard on http://{}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
